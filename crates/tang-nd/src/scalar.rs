use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Element type of vectors, matrices and quaternions.
///
/// Implemented for every primitive integer and float type. Operations that need
/// square roots or trigonometry additionally require [`Scalar`].
pub trait Number:
    Copy
    + fmt::Debug
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;

    /// Widening (or, for 64-bit integers, rounding) conversion used by the
    /// double-precision norm.
    fn to_f64(self) -> f64;
}

/// Floating-point element type.
pub trait Scalar: Number + Neg<Output = Self> {
    const TWO: Self;
    const HALF: Self;
    const PI: Self;
    const EPSILON: Self;

    fn sqrt(self) -> Self;
    fn abs(self) -> Self;
    fn sin(self) -> Self;
    fn cos(self) -> Self;
    fn tan(self) -> Self;
    fn acos(self) -> Self;
    fn atan2(self, other: Self) -> Self;
    fn sin_cos(self) -> (Self, Self);
    fn recip(self) -> Self;
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;

    fn from_f64(v: f64) -> Self;
}

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("tang-nd needs either the `std` or the `libm` feature for float math");

// With std, the inherent float methods; without it, libm.
#[cfg(feature = "std")]
mod float_ops {
    macro_rules! unary {
        ($($name:ident),+) => {
            ::paste::paste! {$(
                #[inline(always)]
                pub fn [<$name _f32>](x: f32) -> f32 { x.$name() }
                #[inline(always)]
                pub fn [<$name _f64>](x: f64) -> f64 { x.$name() }
            )+}
        };
    }

    unary!(sqrt, abs, sin, cos, tan, acos);

    #[inline(always)]
    pub fn atan2_f32(y: f32, x: f32) -> f32 {
        y.atan2(x)
    }
    #[inline(always)]
    pub fn atan2_f64(y: f64, x: f64) -> f64 {
        y.atan2(x)
    }
    #[inline(always)]
    pub fn sin_cos_f32(x: f32) -> (f32, f32) {
        x.sin_cos()
    }
    #[inline(always)]
    pub fn sin_cos_f64(x: f64) -> (f64, f64) {
        x.sin_cos()
    }
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
mod float_ops {
    macro_rules! unary {
        ($($name:ident => $f32:ident, $f64:ident);+ $(;)?) => {
            ::paste::paste! {$(
                #[inline(always)]
                pub fn [<$name _f32>](x: f32) -> f32 { libm::$f32(x) }
                #[inline(always)]
                pub fn [<$name _f64>](x: f64) -> f64 { libm::$f64(x) }
            )+}
        };
    }

    unary! {
        sqrt => sqrtf, sqrt;
        abs => fabsf, fabs;
        sin => sinf, sin;
        cos => cosf, cos;
        tan => tanf, tan;
        acos => acosf, acos;
    }

    #[inline(always)]
    pub fn atan2_f32(y: f32, x: f32) -> f32 {
        libm::atan2f(y, x)
    }
    #[inline(always)]
    pub fn atan2_f64(y: f64, x: f64) -> f64 {
        libm::atan2(y, x)
    }
    #[inline(always)]
    pub fn sin_cos_f32(x: f32) -> (f32, f32) {
        libm::sincosf(x)
    }
    #[inline(always)]
    pub fn sin_cos_f64(x: f64) -> (f64, f64) {
        libm::sincos(x)
    }
}

/// Square root in double precision, shared by every `norm`.
#[inline(always)]
pub(crate) fn sqrt_f64(x: f64) -> f64 {
    float_ops::sqrt_f64(x)
}

macro_rules! impl_number_int {
    ($($t:ty),+) => {$(
        impl Number for $t {
            const ZERO: Self = 0;
            const ONE: Self = 1;

            #[inline] fn to_f64(self) -> f64 { self as f64 }
        }
    )+};
}

impl_number_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_scalar_float {
    ($t:ident, $pi:expr) => {
        ::paste::paste! {
        impl Number for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;

            #[inline] fn to_f64(self) -> f64 { self as f64 }
        }

        impl Scalar for $t {
            const TWO: Self = 2.0;
            const HALF: Self = 0.5;
            const PI: Self = $pi;
            const EPSILON: Self = $t::EPSILON;

            #[inline] fn sqrt(self) -> Self { float_ops::[<sqrt_ $t>](self) }
            #[inline] fn abs(self) -> Self { float_ops::[<abs_ $t>](self) }
            #[inline] fn sin(self) -> Self { float_ops::[<sin_ $t>](self) }
            #[inline] fn cos(self) -> Self { float_ops::[<cos_ $t>](self) }
            #[inline] fn tan(self) -> Self { float_ops::[<tan_ $t>](self) }
            #[inline] fn acos(self) -> Self { float_ops::[<acos_ $t>](self) }
            #[inline] fn atan2(self, other: Self) -> Self { float_ops::[<atan2_ $t>](self, other) }
            #[inline] fn sin_cos(self) -> (Self, Self) { float_ops::[<sin_cos_ $t>](self) }
            #[inline] fn recip(self) -> Self { 1.0 / self }
            #[inline] fn min(self, other: Self) -> Self { if self < other { self } else { other } }
            #[inline] fn max(self, other: Self) -> Self { if self > other { self } else { other } }

            #[inline] fn from_f64(v: f64) -> Self { v as $t }
        }
        }
    };
}

impl_scalar_float!(f32, core::f32::consts::PI);
impl_scalar_float!(f64, core::f64::consts::PI);
