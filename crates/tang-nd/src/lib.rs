//! tang-nd — dimension-generic linear algebra core
//!
//! Fixed-size vectors, column-major matrices and quaternions whose sizes are
//! const generics, generic over any primitive numeric element. Everything is
//! a stack-allocated `Copy` value; nothing allocates.
//!
//! # Design principles
//! - One `Vector<N, S>` and one `Matrix<R, C, S>` instead of a type per size
//! - Named components (`v.x`, `v.w`) exist only up to the vector's dimension
//! - Square-only and size-specific operations are inherent impls on the
//!   concrete sizes, so misuse fails to compile
//! - `#[repr(C)]` everywhere for GPU interop
//! - `Quat` derefs to `Vec4` (component access comes for free)

#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
extern crate alloc;

mod error;
mod matrix;
mod quat;
mod scalar;
mod vector;

pub use error::OutOfRange;
pub use matrix::Matrix;
pub use quat::Quat;
pub use scalar::{Number, Scalar};
pub use vector::{Vector, X, XY, XYZ, XYZW};

pub type Vec1<S> = Vector<1, S>;
pub type Vec2<S> = Vector<2, S>;
pub type Vec3<S> = Vector<3, S>;
pub type Vec4<S> = Vector<4, S>;

/// Square matrices.
pub type Mat2<S> = Matrix<2, 2, S>;
pub type Mat3<S> = Matrix<3, 3, S>;
pub type Mat4<S> = Matrix<4, 4, S>;

/// `MatRxC`: `R` rows by `C` columns.
pub type Mat2x3<S> = Matrix<2, 3, S>;
pub type Mat2x4<S> = Matrix<2, 4, S>;
pub type Mat3x2<S> = Matrix<3, 2, S>;
pub type Mat3x4<S> = Matrix<3, 4, S>;
pub type Mat4x2<S> = Matrix<4, 2, S>;
pub type Mat4x3<S> = Matrix<4, 3, S>;

#[inline]
pub const fn vec1<S: Number>(x: S) -> Vec1<S> {
    Vec1::new(x)
}

#[inline]
pub const fn vec2<S: Number>(x: S, y: S) -> Vec2<S> {
    Vec2::new(x, y)
}

#[inline]
pub const fn vec3<S: Number>(x: S, y: S, z: S) -> Vec3<S> {
    Vec3::new(x, y, z)
}

#[inline]
pub const fn vec4<S: Number>(x: S, y: S, z: S, w: S) -> Vec4<S> {
    Vec4::new(x, y, z, w)
}

// Bytemuck impls for concrete element types (generic structs can't derive Pod)
#[cfg(feature = "bytemuck")]
mod bytemuck_impls {
    use super::*;

    macro_rules! impl_pod {
        ($($t:ty),+) => {$(
            // SAFETY: #[repr(C)] arrays of one primitive type, no padding
            unsafe impl<const N: usize> bytemuck::Zeroable for Vector<N, $t> {}
            unsafe impl<const N: usize> bytemuck::Pod for Vector<N, $t> {}

            // SAFETY: #[repr(C)] array of columns, each padding-free
            unsafe impl<const R: usize, const C: usize> bytemuck::Zeroable for Matrix<R, C, $t> {}
            unsafe impl<const R: usize, const C: usize> bytemuck::Pod for Matrix<R, C, $t> {}

            // SAFETY: #[repr(transparent)] over Vec4
            unsafe impl bytemuck::Zeroable for Quat<$t> {}
            unsafe impl bytemuck::Pod for Quat<$t> {}
        )+};
    }

    impl_pod!(f32, f64, i32, u32);

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helpers_and_aliases() {
        assert_eq!(vec1(3).x, 3);
        assert_eq!(vec3(1, 2, 3), Vec3::from([1, 2, 3]));
        assert_eq!(vec4(1.0, 0.0, 0.0, 1.0).w, 1.0);
        assert_eq!(Mat4x3::<f32>::ROWS, 4);
        assert_eq!(Mat4x3::<f32>::COLS, 3);
        assert_eq!(core::mem::size_of::<Mat3x4<f32>>(), 48);
        assert_eq!(core::mem::size_of::<Quat<f64>>(), 32);
    }
}
