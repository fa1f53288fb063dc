use super::Matrix;
use crate::{Number, Scalar, Vector};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

impl<const R: usize, const C: usize, S: Copy> Matrix<R, C, S> {
    #[inline]
    pub fn transpose(&self) -> Matrix<C, R, S> {
        Matrix::from_fn(|c, r| self.element(r, c))
    }
}

#[cfg(all(feature = "tracing", debug_assertions))]
#[inline]
fn check_pivot<S: Number>(pivot: S, index: usize, op: &'static str) {
    if pivot == S::ZERO {
        tracing::warn!(index, "{op}: zero pivot, result will not be finite");
    }
}

#[cfg(not(all(feature = "tracing", debug_assertions)))]
#[inline(always)]
fn check_pivot<S: Number>(_pivot: S, _index: usize, _op: &'static str) {}

impl<const N: usize, S: Number> Matrix<N, N, S> {
    /// Forward elimination to upper triangular form, without pivoting.
    ///
    /// A zero on the diagonal is divided by as is; with float elements the
    /// affected rows become infinite or NaN.
    pub fn row_echelon_form(&self) -> Self {
        let mut m = *self;
        for i in 0..N {
            let pivot = m.element(i, i);
            check_pivot(pivot, i, "row_echelon_form");
            for j in i + 1..N {
                let scale = m.element(i, j) / pivot;
                for k in i..N {
                    let above = m.element(k, i);
                    *m.element_mut(k, j) -= scale * above;
                }
            }
        }
        m
    }

    pub fn determinant(&self) -> S {
        let m = |c, r| self.element(c, r);
        match N {
            1 => m(0, 0),
            2 => m(0, 0) * m(1, 1) - m(1, 0) * m(0, 1),
            3 => {
                m(0, 2) * m(1, 0) * m(2, 1) + m(0, 0) * m(1, 1) * m(2, 2) + m(0, 1) * m(1, 2) * m(2, 0)
                    - m(0, 1) * m(1, 0) * m(2, 2)
                    - m(0, 2) * m(1, 1) * m(2, 0)
                    - m(0, 0) * m(1, 2) * m(2, 1)
            }
            _ => self
                .row_echelon_form()
                .diagonal()
                .into_iter()
                .fold(S::ONE, |acc, d| acc * d),
        }
    }

    /// Sum of the main diagonal.
    #[inline]
    pub fn trace(&self) -> S {
        self.diagonal().into_iter().fold(S::ZERO, |acc, d| acc + d)
    }
}

impl<const N: usize, S: Number + Neg<Output = S>> Matrix<N, N, S> {
    /// Inverse by closed form up to 2x2, Gauss-Jordan elimination above.
    ///
    /// Singular input is not detected: a zero determinant or zero pivot
    /// yields infinite or NaN elements with floats and panics on division
    /// by zero with integers. See [`try_inverse`](Self::try_inverse).
    pub fn inverse(&self) -> Self {
        match N {
            1 => Self::from_scalar(S::ONE / self.element(0, 0)),
            2 => {
                let m = |c, r| self.element(c, r);
                let det = m(0, 0) * m(1, 1) - m(1, 0) * m(0, 1);
                let mut inv = Self::zero();
                *inv.element_mut(0, 0) = m(1, 1) / det;
                *inv.element_mut(0, 1) = -m(0, 1) / det;
                *inv.element_mut(1, 0) = -m(1, 0) / det;
                *inv.element_mut(1, 1) = m(0, 0) / det;
                inv
            }
            _ => self.gauss_jordan(),
        }
    }

    fn gauss_jordan(&self) -> Self {
        let mut m = *self;
        let mut inv = Self::identity();
        for i in 0..N {
            let pivot = m.element(i, i);
            check_pivot(pivot, i, "inverse");
            for k in 0..N {
                *m.element_mut(k, i) /= pivot;
                *inv.element_mut(k, i) /= pivot;
            }
            for j in 0..N {
                if j == i {
                    continue;
                }
                let factor = m.element(i, j);
                for k in 0..N {
                    let (mi, ii) = (m.element(k, i), inv.element(k, i));
                    *m.element_mut(k, j) -= factor * mi;
                    *inv.element_mut(k, j) -= factor * ii;
                }
            }
        }
        inv
    }
}

impl<const N: usize, S: Scalar> Matrix<N, N, S> {
    /// Inverse, or `None` when `|det| < EPSILON`.
    ///
    /// A NaN determinant, left by a zero pivot during elimination, also
    /// yields `None`.
    pub fn try_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        // Written so that NaN fails the comparison.
        if det.abs() >= S::EPSILON {
            Some(self.inverse())
        } else {
            None
        }
    }
}

macro_rules! columnwise_ops {
    ($($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident);+ $(;)?) => {$(
        impl<const R: usize, const C: usize, S: Number> $OpAssign for Matrix<R, C, S> {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                for (lhs, rhs) in self.columns.iter_mut().zip(rhs.columns) {
                    lhs.$op_assign(rhs);
                }
            }
        }

        impl<const R: usize, const C: usize, S: Number> $Op for Matrix<R, C, S> {
            type Output = Self;
            #[inline]
            fn $op(mut self, rhs: Self) -> Self {
                self.$op_assign(rhs);
                self
            }
        }
    )+};
}

columnwise_ops! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
}

macro_rules! broadcast_ops {
    ($($Op:ident::$op:ident, $OpAssign:ident::$op_assign:ident);+ $(;)?) => {$(
        impl<const R: usize, const C: usize, S: Number> $OpAssign<S> for Matrix<R, C, S> {
            #[inline]
            fn $op_assign(&mut self, rhs: S) {
                for col in &mut self.columns {
                    col.$op_assign(rhs);
                }
            }
        }

        impl<const R: usize, const C: usize, S: Number> $Op<S> for Matrix<R, C, S> {
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

impl<const R: usize, const C: usize, S: Number + Neg<Output = S>> Neg for Matrix<R, C, S> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        self.map(|e| -e)
    }
}

/// Linear combination of the columns weighted by `rhs`.
impl<const R: usize, const C: usize, S: Number> Mul<Vector<C, S>> for Matrix<R, C, S> {
    type Output = Vector<R, S>;
    #[inline]
    fn mul(self, rhs: Vector<C, S>) -> Vector<R, S> {
        self.columns
            .iter()
            .zip(rhs)
            .fold(Vector::zero(), |acc, (col, w)| acc + *col * w)
    }
}

impl<const R: usize, const K: usize, const C: usize, S: Number> Mul<Matrix<K, C, S>>
    for Matrix<R, K, S>
{
    type Output = Matrix<R, C, S>;
    #[inline]
    fn mul(self, rhs: Matrix<K, C, S>) -> Matrix<R, C, S> {
        Matrix::from_cols(rhs.columns.map(|col| self * col))
    }
}

impl<const R: usize, const C: usize, S: Number> MulAssign<Matrix<C, C, S>> for Matrix<R, C, S> {
    #[inline]
    fn mul_assign(&mut self, rhs: Matrix<C, C, S>) {
        *self = *self * rhs;
    }
}

// Scalar * Matrix (commutative)
macro_rules! left_scalar_mul {
    ($($t:ty),+) => {$(
        impl<const R: usize, const C: usize> Mul<Matrix<R, C, $t>> for $t {
            type Output = Matrix<R, C, $t>;
            #[inline]
            fn mul(self, rhs: Matrix<R, C, $t>) -> Matrix<R, C, $t> {
                rhs * self
            }
        }
    )+};
}

left_scalar_mul!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);
