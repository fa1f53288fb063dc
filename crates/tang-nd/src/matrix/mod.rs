//! Column-major matrices with any number of columns of 1 to 4 rows.

mod ops;
mod transform;

use crate::{Number, Vector};
use core::ops::{Index, IndexMut};
use core::{array, slice};
use num_traits::AsPrimitive;

/// `R` by `C` matrix, stored as `C` column vectors of `R` elements.
///
/// Elements are addressed column first: `element(c, r)` is `column(c)[r]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Matrix<const R: usize, const C: usize, S> {
    columns: [Vector<R, S>; C],
}

impl<const R: usize, const C: usize, S> Matrix<R, C, S> {
    pub const ROWS: usize = R;
    pub const COLS: usize = C;

    const COL_CHECK: () = assert!(C >= 1, "matrix needs at least one column");

    #[inline]
    pub const fn from_cols(columns: [Vector<R, S>; C]) -> Self {
        let () = Self::COL_CHECK;
        Self { columns }
    }

    /// Builds each element from its `(column, row)` position.
    #[inline]
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> S) -> Self {
        Self::from_cols(array::from_fn(|c| Vector::from_fn(|r| f(c, r))))
    }

    /// # Panics
    ///
    /// If `c >= C`.
    #[inline]
    pub fn column(&self, c: usize) -> &Vector<R, S> {
        &self.columns[c]
    }

    /// # Panics
    ///
    /// If `c >= C`.
    #[inline]
    pub fn column_mut(&mut self, c: usize) -> &mut Vector<R, S> {
        &mut self.columns[c]
    }

    /// # Panics
    ///
    /// If `c >= C` or `r >= R`.
    #[inline]
    pub fn element_mut(&mut self, c: usize, r: usize) -> &mut S {
        &mut self.columns[c][r]
    }

    /// # Safety
    ///
    /// `c` must be below `C`.
    #[inline]
    pub unsafe fn column_unchecked(&self, c: usize) -> &Vector<R, S> {
        // SAFETY: caller guarantees c < C.
        unsafe { self.columns.get_unchecked(c) }
    }

    /// # Safety
    ///
    /// `c` must be below `C`.
    #[inline]
    pub unsafe fn column_unchecked_mut(&mut self, c: usize) -> &mut Vector<R, S> {
        // SAFETY: caller guarantees c < C.
        unsafe { self.columns.get_unchecked_mut(c) }
    }

    /// # Safety
    ///
    /// `c` must be below `C` and `r` below `R`.
    #[inline]
    pub unsafe fn element_unchecked_mut(&mut self, c: usize, r: usize) -> &mut S {
        // SAFETY: caller guarantees c < C and r < R.
        unsafe {
            self.columns
                .get_unchecked_mut(c)
                .as_mut_slice()
                .get_unchecked_mut(r)
        }
    }

    #[inline]
    pub fn columns(&self) -> &[Vector<R, S>; C] {
        &self.columns
    }

    #[inline]
    pub fn into_columns(self) -> [Vector<R, S>; C] {
        self.columns
    }

    /// Iterates over the columns, left to right.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Vector<R, S>> {
        self.columns.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, Vector<R, S>> {
        self.columns.iter_mut()
    }

    /// Applies `f` to every element.
    #[inline]
    pub fn map<U>(self, mut f: impl FnMut(S) -> U) -> Matrix<R, C, U> {
        Matrix::from_cols(self.columns.map(|col| col.map(&mut f)))
    }
}

impl<const R: usize, const C: usize, S: Copy> Matrix<R, C, S> {
    /// # Panics
    ///
    /// If `c >= C` or `r >= R`.
    #[inline]
    pub fn element(&self, c: usize, r: usize) -> S {
        self.columns[c][r]
    }

    /// # Safety
    ///
    /// `c` must be below `C` and `r` below `R`.
    #[inline]
    pub unsafe fn element_unchecked(&self, c: usize, r: usize) -> S {
        // SAFETY: caller guarantees c < C and r < R.
        unsafe { *self.columns.get_unchecked(c).as_array().get_unchecked(r) }
    }

    /// Copies out row `r`. Only available while `C <= 4`.
    ///
    /// # Panics
    ///
    /// If `r >= R`.
    #[inline]
    pub fn row(&self, r: usize) -> Vector<C, S> {
        Vector::from_fn(|c| self.columns[c][r])
    }
}

impl<const R: usize, const C: usize, S: Number> Matrix<R, C, S> {
    #[inline]
    pub fn zero() -> Self {
        Self::from_cols([Vector::zero(); C])
    }

    /// `s` on the main diagonal, zero elsewhere.
    #[inline]
    pub fn from_scalar(s: S) -> Self {
        Self::from_fn(|c, r| if c == r { s } else { S::ZERO })
    }

    #[inline]
    pub fn identity() -> Self {
        Self::from_scalar(S::ONE)
    }

    /// Grows to `R2 x C2`, zero-filling new rows and columns.
    #[inline]
    pub fn resize<const R2: usize, const C2: usize>(self) -> Matrix<R2, C2, S> {
        const {
            assert!(R <= R2 && C <= C2, "resize cannot drop rows or columns");
        }
        Matrix::from_fn(|c, r| {
            if c < C && r < R {
                self.columns[c][r]
            } else {
                S::ZERO
            }
        })
    }

    /// Casts every element to `U` with `as` semantics.
    #[inline]
    pub fn cast<U>(self) -> Matrix<R, C, U>
    where
        S: AsPrimitive<U>,
        U: Number,
    {
        self.map(|e| e.as_())
    }

    /// [`resize`](Self::resize) and [`cast`](Self::cast) in one step.
    #[inline]
    pub fn convert<const R2: usize, const C2: usize, U>(self) -> Matrix<R2, C2, U>
    where
        S: AsPrimitive<U>,
        U: Number,
    {
        self.cast::<U>().resize()
    }
}

impl<const N: usize, S: Number> Matrix<N, N, S> {
    #[inline]
    pub fn from_diagonal(d: Vector<N, S>) -> Self {
        Self::from_fn(|c, r| if c == r { d[c] } else { S::ZERO })
    }

    #[inline]
    pub fn diagonal(&self) -> Vector<N, S> {
        Vector::from_fn(|i| self.columns[i][i])
    }
}

impl<const R: usize, const C: usize, S: Number> Default for Matrix<R, C, S> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const R: usize, const C: usize, S> From<[Vector<R, S>; C]> for Matrix<R, C, S> {
    #[inline]
    fn from(columns: [Vector<R, S>; C]) -> Self {
        Self::from_cols(columns)
    }
}

impl<const R: usize, const C: usize, S> Index<usize> for Matrix<R, C, S> {
    type Output = Vector<R, S>;

    #[inline]
    fn index(&self, c: usize) -> &Vector<R, S> {
        &self.columns[c]
    }
}

impl<const R: usize, const C: usize, S> IndexMut<usize> for Matrix<R, C, S> {
    #[inline]
    fn index_mut(&mut self, c: usize) -> &mut Vector<R, S> {
        &mut self.columns[c]
    }
}

impl<const R: usize, const C: usize, S> IntoIterator for Matrix<R, C, S> {
    type Item = Vector<R, S>;
    type IntoIter = array::IntoIter<Vector<R, S>, C>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter()
    }
}

impl<'a, const R: usize, const C: usize, S> IntoIterator for &'a Matrix<R, C, S> {
    type Item = &'a Vector<R, S>;
    type IntoIter = slice::Iter<'a, Vector<R, S>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

impl<'a, const R: usize, const C: usize, S> IntoIterator for &'a mut Matrix<R, C, S> {
    type Item = &'a mut Vector<R, S>;
    type IntoIter = slice::IterMut<'a, Vector<R, S>>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter_mut()
    }
}
