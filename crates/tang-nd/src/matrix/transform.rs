//! Transformation matrix builders.
//!
//! All matrices act on column vectors (`m * v`) and follow right-handed,
//! OpenGL-style clip space conventions.

use super::Matrix;
use crate::{Number, Scalar, Vec3, Vec4, Vector};
use core::ops::Neg;

impl<S: Number + Neg<Output = S>> Matrix<3, 3, S> {
    /// Skew-symmetric matrix `K` with `K * w == v.cross(w)`.
    #[inline]
    pub fn cross_matrix(v: Vector<3, S>) -> Self {
        let [x, y, z] = v.into_array();
        let o = S::ZERO;
        Self::from_cols([
            Vec3::new(o, z, -y),
            Vec3::new(-z, o, x),
            Vec3::new(y, -x, o),
        ])
    }
}

impl<const R: usize, const C: usize, S: Number> Matrix<R, C, S> {
    /// `a * b^T`: element at row `i`, column `j` is `a[i] * b[j]`.
    #[inline]
    pub fn outer_product(a: Vector<R, S>, b: Vector<C, S>) -> Self {
        Self::from_fn(|c, r| a[r] * b[c])
    }
}

macro_rules! homogeneous {
    ($($n:literal => $h:literal),+) => {$(
        impl<S: Number> Matrix<$h, $h, S> {
            /// Homogeneous scale by `v` along each axis.
            #[inline]
            pub fn scale(v: Vector<$n, S>) -> Self {
                Self::from_diagonal(v.extend(S::ONE))
            }

            /// Homogeneous translation by `v`.
            #[inline]
            pub fn translation(v: Vector<$n, S>) -> Self {
                let mut m = Self::identity();
                m[$n] = v.extend(S::ONE);
                m
            }
        }
    )+};
}

homogeneous!(1 => 2, 2 => 3, 3 => 4);

impl<S: Scalar> Matrix<3, 3, S> {
    /// Homogeneous counter-clockwise rotation of the plane.
    #[inline]
    pub fn rotation_2d(angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        let o = S::ZERO;
        Self::from_cols([
            Vec3::new(c, s, o),
            Vec3::new(-s, c, o),
            Vec3::new(o, o, S::ONE),
        ])
    }
}

impl<S: Scalar> Matrix<4, 4, S> {
    /// Rotation by `angle` about a unit `axis` (Rodrigues' formula).
    pub fn rotation_axis(axis: Vector<3, S>, angle: S) -> Self {
        let k = Matrix::<3, 3, S>::cross_matrix(axis);
        let (s, c) = angle.sin_cos();
        let r = Matrix::<3, 3, S>::identity() + k * k * (S::ONE - c) + k * s;
        let mut m: Self = r.resize();
        m[3][3] = S::ONE;
        m
    }

    /// Rotation about X axis
    pub fn rotation_x(angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (S::ZERO, S::ONE);
        Self::from_cols([
            Vec4::new(l, o, o, o),
            Vec4::new(o, c, s, o),
            Vec4::new(o, -s, c, o),
            Vec4::new(o, o, o, l),
        ])
    }

    /// Rotation about Y axis
    pub fn rotation_y(angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (S::ZERO, S::ONE);
        Self::from_cols([
            Vec4::new(c, o, -s, o),
            Vec4::new(o, l, o, o),
            Vec4::new(s, o, c, o),
            Vec4::new(o, o, o, l),
        ])
    }

    /// Rotation about Z axis
    pub fn rotation_z(angle: S) -> Self {
        let (s, c) = angle.sin_cos();
        let (o, l) = (S::ZERO, S::ONE);
        Self::from_cols([
            Vec4::new(c, s, o, o),
            Vec4::new(-s, c, o, o),
            Vec4::new(o, o, l, o),
            Vec4::new(o, o, o, l),
        ])
    }

    /// View matrix placing the camera at `eye` looking towards `target`.
    ///
    /// `up` must not be parallel to `target - eye`.
    pub fn look_at(eye: Vector<3, S>, target: Vector<3, S>, up: Vector<3, S>) -> Self {
        let f = (target - eye).normal();
        let r = f.cross(up).normal();
        let u = r.cross(f);
        let o = S::ZERO;
        Self::from_cols([
            Vec4::new(r.x, u.x, -f.x, o),
            Vec4::new(r.y, u.y, -f.y, o),
            Vec4::new(r.z, u.z, -f.z, o),
            Vec4::new(-r.dot(eye), -u.dot(eye), f.dot(eye), S::ONE),
        ])
    }

    /// Orthographic projection of the box `[left, right] x [bottom, top] x
    /// [-near, -far]` onto the clip cube.
    pub fn ortho(left: S, right: S, bottom: S, top: S, near: S, far: S) -> Self {
        let (dx, dy, dz) = (right - left, top - bottom, far - near);
        let o = S::ZERO;
        Self::from_cols([
            Vec4::new(S::TWO / dx, o, o, o),
            Vec4::new(o, S::TWO / dy, o, o),
            Vec4::new(o, o, -S::TWO / dz, o),
            Vec4::new(
                -(right + left) / dx,
                -(top + bottom) / dy,
                -(far + near) / dz,
                S::ONE,
            ),
        ])
    }

    /// Perspective projection with vertical field of view `fovy` in radians.
    pub fn perspective(fovy: S, aspect: S, near: S, far: S) -> Self {
        let t = (fovy * S::HALF).tan();
        let dz = far - near;
        let o = S::ZERO;
        Self::from_cols([
            Vec4::new(S::ONE / (t * aspect), o, o, o),
            Vec4::new(o, S::ONE / t, o, o),
            Vec4::new(o, o, -(far + near) / dz, -S::ONE),
            Vec4::new(o, o, -S::TWO * far * near / dz, o),
        ])
    }
}
