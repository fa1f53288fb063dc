use crate::{Mat3, Mat4, Number, Scalar, Vec3, Vec4};
use core::ops::{Add, Deref, DerefMut, Div, Mul, MulAssign, Neg, Sub};

/// Quaternion `x·i + y·j + z·k + w`.
///
/// Stored as a 4-vector with the imaginary part first and the real part in
/// `w`, and dereferences to it, so component access, iteration, `dot` and
/// `norm` come from [`Vector`](crate::Vector). Represents a rotation when
/// unit-length (a versor); nothing enforces that.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Quat<S> {
    inner: Vec4<S>,
}

impl<S: Number> Quat<S> {
    #[inline]
    pub const fn new(x: S, y: S, z: S, w: S) -> Self {
        Self { inner: Vec4::new(x, y, z, w) }
    }

    /// Builds from the imaginary (vector) and real (scalar) parts.
    #[inline]
    pub fn from_parts(imag: Vec3<S>, real: S) -> Self {
        Self { inner: imag.extend(real) }
    }

    #[inline]
    pub fn identity() -> Self {
        Self::new(S::ZERO, S::ZERO, S::ZERO, S::ONE)
    }

    #[inline]
    pub fn imag(&self) -> Vec3<S> {
        self.inner.truncate()
    }

    #[inline]
    pub fn real(&self) -> S {
        self.inner.w
    }
}

impl<S: Scalar> Quat<S> {
    /// Rotation by `angle` radians about a unit `axis`.
    pub fn versor(axis: Vec3<S>, angle: S) -> Self {
        let (s, c) = (angle * S::HALF).sin_cos();
        Self::from_parts(axis * s, c)
    }

    #[inline]
    pub fn conjugate(&self) -> Self {
        let [x, y, z, w] = self.inner.into_array();
        Self::new(-x, -y, -z, w)
    }

    /// Multiplicative inverse. Undefined for the zero quaternion.
    #[inline]
    pub fn inverse(&self) -> Self {
        self.conjugate() / self.inner.norm_squared()
    }

    /// Unit rotation axis and angle in `[0, 2π]`.
    ///
    /// When the imaginary part is within epsilon of zero there is no
    /// meaningful axis, and `(zero, 0)` is returned.
    pub fn axis_angle(&self) -> (Vec3<S>, S) {
        let imag = self.imag();
        let n = imag.norm();
        if n <= S::EPSILON.to_f64() {
            return (Vec3::zero(), S::ZERO);
        }
        let n = S::from_f64(n);
        (imag / n, S::TWO * n.atan2(self.real()))
    }

    /// Homogeneous rotation matrix. The identity when the rotation angle is
    /// within epsilon of zero.
    pub fn rotation(&self) -> Mat4<S> {
        let (axis, angle) = self.axis_angle();
        if angle <= S::EPSILON {
            return Mat4::identity();
        }
        Mat4::rotation_axis(axis, angle)
    }

    /// Versor of a rotation matrix (Shepperd's method).
    pub fn from_rotation(rot: &Mat3<S>) -> Self {
        let m = |r, c| rot.element(c, r);
        let quarter = S::HALF * S::HALF;
        let trace = rot.trace();

        if trace > S::ZERO {
            let s = (trace + S::ONE).sqrt() * S::TWO;
            let inv_s = s.recip();
            Self::new(
                (m(2, 1) - m(1, 2)) * inv_s,
                (m(0, 2) - m(2, 0)) * inv_s,
                (m(1, 0) - m(0, 1)) * inv_s,
                s * quarter,
            )
        } else if m(0, 0) > m(1, 1) && m(0, 0) > m(2, 2) {
            let s = (S::ONE + m(0, 0) - m(1, 1) - m(2, 2)).sqrt() * S::TWO;
            let inv_s = s.recip();
            Self::new(
                s * quarter,
                (m(0, 1) + m(1, 0)) * inv_s,
                (m(0, 2) + m(2, 0)) * inv_s,
                (m(2, 1) - m(1, 2)) * inv_s,
            )
        } else if m(1, 1) > m(2, 2) {
            let s = (S::ONE + m(1, 1) - m(0, 0) - m(2, 2)).sqrt() * S::TWO;
            let inv_s = s.recip();
            Self::new(
                (m(0, 1) + m(1, 0)) * inv_s,
                s * quarter,
                (m(1, 2) + m(2, 1)) * inv_s,
                (m(0, 2) - m(2, 0)) * inv_s,
            )
        } else {
            let s = (S::ONE + m(2, 2) - m(0, 0) - m(1, 1)).sqrt() * S::TWO;
            let inv_s = s.recip();
            Self::new(
                (m(0, 2) + m(2, 0)) * inv_s,
                (m(1, 2) + m(2, 1)) * inv_s,
                s * quarter,
                (m(1, 0) - m(0, 1)) * inv_s,
            )
        }
    }

    /// Versor of the upper-left 3x3 block of a homogeneous transform.
    #[inline]
    pub fn from_rotation_mat4(m: &Mat4<S>) -> Self {
        Self::from_rotation(&Mat3::from_fn(|c, r| m.element(c, r)))
    }

    pub fn normalize(&self) -> Self {
        *self / S::from_f64(self.inner.norm())
    }

    /// Spherical linear interpolation
    pub fn slerp(&self, other: &Self, t: S) -> Self {
        let mut dot = self.inner.dot(other.inner);
        let mut other = *other;

        // Ensure shortest path
        if dot < S::ZERO {
            other = -other;
            dot = -dot;
        }

        // Fall back to lerp for nearly-parallel quaternions
        if dot > S::ONE - S::EPSILON {
            return Self::from(self.inner.lerp(other.inner, t)).normalize();
        }

        let theta = dot.acos();
        let sin_theta = theta.sin();
        let a = ((S::ONE - t) * theta).sin() / sin_theta;
        let b = (t * theta).sin() / sin_theta;

        *self * a + other * b
    }
}

impl<S: Number> Default for Quat<S> {
    /// The zero quaternion, not the identity.
    fn default() -> Self {
        Self { inner: Vec4::zero() }
    }
}

impl<S> Deref for Quat<S> {
    type Target = Vec4<S>;

    #[inline]
    fn deref(&self) -> &Vec4<S> {
        &self.inner
    }
}

impl<S> DerefMut for Quat<S> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Vec4<S> {
        &mut self.inner
    }
}

impl<S> From<Vec4<S>> for Quat<S> {
    #[inline]
    fn from(inner: Vec4<S>) -> Self {
        Self { inner }
    }
}

impl<S> From<Quat<S>> for Vec4<S> {
    #[inline]
    fn from(q: Quat<S>) -> Self {
        q.inner
    }
}

/// Hamilton product
impl<S: Scalar> Mul for Quat<S> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let [x1, y1, z1, w1] = self.inner.into_array();
        let [x2, y2, z2, w2] = rhs.inner.into_array();
        Self::new(
            w1 * x2 + x1 * w2 + y1 * z2 - z1 * y2,
            w1 * y2 - x1 * z2 + y1 * w2 + z1 * x2,
            w1 * z2 + x1 * y2 - y1 * x2 + z1 * w2,
            w1 * w2 - x1 * x2 - y1 * y2 - z1 * z2,
        )
    }
}

impl<S: Scalar> MulAssign for Quat<S> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Rotates `v` by a versor.
impl<S: Scalar> Mul<Vec3<S>> for Quat<S> {
    type Output = Vec3<S>;

    fn mul(self, v: Vec3<S>) -> Vec3<S> {
        let imag = self.imag();
        let ort = imag.cross(v);
        v + (ort * self.real() + imag.cross(ort)) * S::TWO
    }
}

impl<S: Scalar> Add for Quat<S> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self { inner: self.inner + rhs.inner }
    }
}

impl<S: Scalar> Sub for Quat<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self { inner: self.inner - rhs.inner }
    }
}

impl<S: Scalar> Neg for Quat<S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self { inner: -self.inner }
    }
}

impl<S: Scalar> Mul<S> for Quat<S> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: S) -> Self {
        Self { inner: self.inner * rhs }
    }
}

impl<S: Scalar> Div<S> for Quat<S> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: S) -> Self {
        Self { inner: self.inner / rhs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};

    fn assert_vec3_eq(a: Vec3<f64>, b: Vec3<f64>) {
        for i in 0..3 {
            assert!((a[i] - b[i]).abs() < 1e-10, "{a} != {b}");
        }
    }

    #[test]
    fn components_through_deref() {
        let mut q = Quat::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q.w, 4.0);
        assert_eq!(q[0], 1.0);
        assert_eq!(q.get(3), Ok(&4.0));
        q.y = -2.0;
        assert_eq!(q.imag(), Vec3::new(1.0, -2.0, 3.0));
        assert_eq!(q.real(), 4.0);
        assert_eq!(Quat::from_parts(Vec3::new(1, 2, 3), 4), Quat::new(1, 2, 3, 4));
        assert_eq!(Vec4::from(Quat::new(0, 0, 0, 1)), Vec4::unit_w());
        assert_eq!(Quat::<f32>::default(), Quat::from(Vec4::zero()));
    }

    #[test]
    fn hamilton_product() {
        let i = Quat::new(1.0, 0.0, 0.0, 0.0);
        let j = Quat::new(0.0, 1.0, 0.0, 0.0);
        let k = Quat::new(0.0, 0.0, 1.0, 0.0);
        assert_eq!(i * j, k);
        assert_eq!(j * i, -k);
        assert_eq!(i * i, Quat::new(0.0, 0.0, 0.0, -1.0));
        let mut q = j;
        q *= k;
        assert_eq!(q, i);
    }

    #[test]
    fn inverse() {
        let q = Quat::new(1.0, -2.0, 0.5, 3.0);
        let p = q * q.inverse();
        assert!((p.w - 1.0).abs() < 1e-12);
        assert_vec3_eq(p.imag(), Vec3::zero());
        assert_eq!(q.conjugate(), Quat::new(-1.0, 2.0, -0.5, 3.0));
    }

    #[test]
    fn axis_angle_roundtrip() {
        let axis = Vec3::new(1.0, 2.0, -2.0).normal();
        let (a, angle) = Quat::versor(axis, 1.25).axis_angle();
        assert_vec3_eq(a, axis);
        assert!((angle - 1.25).abs() < 1e-12);
        assert_eq!(Quat::<f64>::identity().axis_angle(), (Vec3::zero(), 0.0));
    }

    #[test]
    fn vector_rotation() {
        let q = Quat::versor(Vec3::unit_z(), FRAC_PI_2);
        assert_vec3_eq(q * Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_vec3_eq(Quat::<f64>::identity() * v, v);
    }

    #[test]
    fn vector_rotation_matches_matrix() {
        let q = Quat::versor(Vec3::new(0.0, 0.6, 0.8), 2.0);
        let v = Vec3::new(-1.0, 0.5, 4.0);
        let by_matrix: Vec3<f64> = (q.rotation() * v.extend(1.0)).truncate();
        assert_vec3_eq(q * v, by_matrix);
    }

    #[test]
    fn identity_rotation_matrix() {
        assert_eq!(Quat::<f64>::identity().rotation(), Mat4::identity());
        assert_eq!(Quat::versor(Vec3::unit_x(), 0.0).rotation(), Mat4::identity());
    }

    #[test]
    fn matrix_roundtrip() {
        for (axis, angle) in [
            (Vec3::new(1.0, 1.0, 1.0).normal(), 1.2),
            (Vec3::unit_x(), PI - 0.01),
            (Vec3::unit_y(), PI - 0.01),
            (Vec3::unit_z(), PI - 0.01),
        ] {
            let q = Quat::versor(axis, angle);
            let rot = q.rotation();
            let m = Mat3::from_fn(|c, r| rot.element(c, r));
            let q2 = Quat::from_rotation(&m);
            // Quaternions are equivalent up to sign
            assert!((q.dot(*q2).abs() - 1.0).abs() < 1e-8);
            let q3 = Quat::from_rotation_mat4(&q.rotation());
            assert!((q.dot(*q3).abs() - 1.0).abs() < 1e-8);
        }
    }

    #[test]
    fn normalize() {
        let q = Quat::new(0.0, 3.0, 0.0, 4.0).normalize();
        assert_eq!(q, Quat::new(0.0, 0.6, 0.0, 0.8));
    }

    #[test]
    fn slerp_endpoints_and_midpoint() {
        let q1 = Quat::<f64>::identity();
        let q2 = Quat::versor(Vec3::unit_z(), 1.0);
        assert!((q1.slerp(&q2, 0.0).w - q1.w).abs() < 1e-10);
        assert!((q1.slerp(&q2, 1.0).w - q2.w).abs() < 1e-10);
        let (_, half) = q1.slerp(&q2, 0.5).axis_angle();
        assert!((half - 0.5).abs() < 1e-10);
    }

    #[test]
    fn elementwise_arithmetic() {
        let q = Quat::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q + q, q * 2.0);
        assert_eq!(q - q, Quat::default());
        assert_eq!(q / 2.0, Quat::new(0.5, 1.0, 1.5, 2.0));
    }
}
