use super::Vector;
use crate::scalar::sqrt_f64;
use crate::{Number, Scalar};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl<const N: usize, S: Number> Vector<N, S> {
    /// Combines matching components of `self` and `rhs`.
    #[inline]
    pub fn zip_map<U>(self, rhs: Self, mut f: impl FnMut(S, S) -> U) -> Vector<N, U> {
        Vector::from_fn(|i| f(self.components[i], rhs.components[i]))
    }

    /// Runs an in-place operator on every component.
    #[inline]
    pub fn apply(&mut self, f: impl FnMut(&mut S)) -> &mut Self {
        self.components.iter_mut().for_each(f);
        self
    }

    /// Runs an in-place binary operator on each component paired with the
    /// matching component of `rhs`.
    #[inline]
    pub fn zip_apply(&mut self, rhs: &Self, mut f: impl FnMut(&mut S, S)) -> &mut Self {
        for (lhs, rhs) in self.components.iter_mut().zip(rhs.components) {
            f(lhs, rhs);
        }
        self
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> S {
        self.components
            .iter()
            .zip(rhs.components)
            .fold(S::ZERO, |acc, (a, b)| acc + *a * b)
    }

    #[inline]
    pub fn norm_squared(self) -> S {
        self.dot(self)
    }

    /// Euclidean norm, evaluated in `f64` whatever the element type.
    #[inline]
    pub fn norm(self) -> f64 {
        sqrt_f64(self.norm_squared().to_f64())
    }

    /// Projection of `self` onto `axis`. Undefined for a zero `axis`.
    #[inline]
    pub fn projection(self, axis: Self) -> Self {
        axis * self.dot(axis) / axis.dot(axis)
    }

    /// Componentwise `1 / c`. Undefined when a component is zero.
    #[inline]
    pub fn reciprocal(self) -> Self {
        self.map(|c| S::ONE / c)
    }

    #[inline]
    pub fn lerp(self, other: Self, t: S) -> Self {
        self + (other - self) * t
    }

    #[inline]
    pub fn min_element(self) -> S {
        self.components[1..]
            .iter()
            .fold(self.components[0], |m, &c| if c < m { c } else { m })
    }

    #[inline]
    pub fn max_element(self) -> S {
        self.components[1..]
            .iter()
            .fold(self.components[0], |m, &c| if c > m { c } else { m })
    }
}

impl<const N: usize, S: Scalar> Vector<N, S> {
    /// Unit vector along `self`. Produces NaN or infinite components for the
    /// zero vector.
    #[inline]
    pub fn normal(self) -> Self {
        self / S::from_f64(self.norm())
    }

    #[inline]
    pub fn try_normal(self) -> Option<Self> {
        let n = self.norm();
        if n > S::EPSILON.to_f64() {
            Some(self / S::from_f64(n))
        } else {
            None
        }
    }
}

impl<S: Number> Vector<3, S> {
    /// Right-handed cross product.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        let [ax, ay, az] = self.components;
        let [bx, by, bz] = rhs.components;
        Self::new(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }
}

macro_rules! elementwise_ops {
    ($($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident);+ $(;)?) => {$(
        impl<const N: usize, S: Number> $OpAssign for Vector<N, S> {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                self.zip_apply(&rhs, |a, b| a.$op_assign(b));
            }
        }

        impl<const N: usize, S: Number> $Op for Vector<N, S> {
            type Output = Self;
            #[inline]
            fn $op(mut self, rhs: Self) -> Self {
                self.$op_assign(rhs);
                self
            }
        }
    )+};
}

elementwise_ops! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
}

macro_rules! broadcast_ops {
    ($($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident);+ $(;)?) => {$(
        impl<const N: usize, S: Number> $OpAssign<S> for Vector<N, S> {
            #[inline]
            fn $op_assign(&mut self, rhs: S) {
                self.apply(|c| c.$op_assign(rhs));
            }
        }

        impl<const N: usize, S: Number> $Op<S> for Vector<N, S> {
            type Output = Self;
            #[inline]
            fn $op(mut self, rhs: S) -> Self {
                self.$op_assign(rhs);
                self
            }
        }
    )+};
}

broadcast_ops! {
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
}

impl<const N: usize, S: Number + Neg<Output = S>> Neg for Vector<N, S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map(|c| -c)
    }
}

// Scalar * Vector (commutative)
macro_rules! left_scalar_mul {
    ($($t:ty),+) => {$(
        impl<const N: usize> Mul<Vector<N, $t>> for $t {
            type Output = Vector<N, $t>;
            #[inline]
            fn mul(self, rhs: Vector<N, $t>) -> Vector<N, $t> {
                rhs * self
            }
        }
    )+};
}

left_scalar_mul!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

#[cfg(test)]
mod tests {
    use crate::{Vec2, Vec3, Vec4};

    #[test]
    fn dot_product() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(5.0, 6.0, 7.0, 8.0);
        assert_eq!(a.dot(b), 70.0);
        assert_eq!(Vec2::new(2, 3).dot(Vec2::new(4, -1)), 5);
    }

    #[test]
    fn cross_product() {
        let x = Vec3::<f64>::unit_x();
        let y = Vec3::<f64>::unit_y();
        let z = x.cross(y);
        assert_eq!(z, Vec3::unit_z());
        // Anti-commutative
        assert_eq!(y.cross(x), -z);
    }

    #[test]
    fn norm_is_double_precision() {
        let v = Vec3::<f32>::new(1.0, 2.0, 2.0);
        assert_eq!(v.norm(), 3.0_f64);
        assert_eq!(Vec2::new(3, 4).norm(), 5.0);
        assert_eq!(Vec2::new(3, 4).norm_squared(), 25);
    }

    #[test]
    fn normal() {
        let n = Vec3::new(1.0, 2.0, 2.0).normal();
        assert!((n.norm() - 1.0).abs() < 1e-10);
        assert!(Vec3::<f64>::zero().normal().x.is_nan());
        assert_eq!(Vec3::<f64>::zero().try_normal(), None);
    }

    #[test]
    fn projection_onto_axis() {
        let v = Vec3::new(3.0, 4.0, 5.0);
        assert_eq!(v.projection(Vec3::new(0.0, 2.0, 0.0)), Vec3::new(0.0, 4.0, 0.0));
    }

    #[test]
    fn reciprocal() {
        assert_eq!(Vec3::new(2.0, -4.0, 0.5).reciprocal(), Vec3::new(0.5, -0.25, 2.0));
        assert!(Vec2::new(1.0_f32, 0.0).reciprocal().y.is_infinite());
    }

    #[test]
    fn elementwise_arithmetic() {
        let mut a = Vec3::new(1, 2, 3);
        let b = Vec3::new(4, 5, 6);
        assert_eq!(a + b, Vec3::new(5, 7, 9));
        assert_eq!(b - a, Vec3::new(3, 3, 3));
        assert_eq!(a * b, Vec3::new(4, 10, 18));
        assert_eq!(b / a, Vec3::new(4, 2, 2));
        a += b;
        assert_eq!(a, Vec3::new(5, 7, 9));
        a -= b;
        a *= b;
        assert_eq!(a, Vec3::new(4, 10, 18));
        a /= b;
        assert_eq!(a, Vec3::new(1, 2, 3));
    }

    #[test]
    fn scalar_broadcast() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v * 2.0, 2.0 * v);
        assert_eq!(v / 2.0, Vec3::new(0.5, 1.0, 1.5));
        let mut w = Vec2::new(6_u32, 9);
        w /= 3;
        assert_eq!(w, Vec2::new(2, 3));
        w *= 4;
        assert_eq!(w, Vec2::new(8, 12));
    }

    #[test]
    fn compound_assignment_returns_receiver() {
        let mut v = Vec2::new(1, 2);
        v.zip_apply(&Vec2::new(10, 20), |a, b| *a += b).apply(|c| *c *= 2);
        assert_eq!(v, Vec2::new(22, 44));
    }

    #[test]
    fn lerp_and_extrema() {
        let a = Vec4::new(0.0, 0.0, 0.0, 0.0);
        let b = Vec4::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(a.lerp(b, 0.5), Vec4::new(5.0, 10.0, 15.0, 20.0));
        assert_eq!(Vec3::new(3, -1, 2).min_element(), -1);
        assert_eq!(Vec3::new(3, -1, 2).max_element(), 3);
    }
}
