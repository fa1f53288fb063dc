//! Fixed-size vectors of one to four components.

mod components;
mod ops;

pub use components::{X, XY, XYZ, XYZW};

use crate::{Number, OutOfRange};
use core::ops::{Index, IndexMut};
use core::{array, slice};
use num_traits::AsPrimitive;

/// Vector of `N` components of type `S`, `1 <= N <= 4`.
///
/// Components are reachable three ways: by name (`v.x`, `v.y`, `v.z`, `v.w`,
/// only those the dimension has), by checked index ([`get`](Self::get)), and by
/// iteration in index order. A dimension outside `1..=4` fails to compile as
/// soon as a vector of that dimension is constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Vector<const N: usize, S> {
    components: [S; N],
}

impl<const N: usize, S> Vector<N, S> {
    /// Number of components.
    pub const DIM: usize = N;

    const DIM_CHECK: () = assert!(N >= 1 && N <= 4, "vector dimension must be in 1..=4");

    #[inline]
    pub const fn from_array(components: [S; N]) -> Self {
        let () = Self::DIM_CHECK;
        Self { components }
    }

    /// Builds each component from its index.
    #[inline]
    pub fn from_fn(f: impl FnMut(usize) -> S) -> Self {
        Self::from_array(array::from_fn(f))
    }

    /// Checked component access.
    #[inline]
    pub fn get(&self, index: usize) -> Result<&S, OutOfRange> {
        self.components.get(index).ok_or(OutOfRange { index, len: N })
    }

    /// Checked mutable component access.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut S, OutOfRange> {
        self.components.get_mut(index).ok_or(OutOfRange { index, len: N })
    }

    #[inline]
    pub const fn as_array(&self) -> &[S; N] {
        &self.components
    }

    #[inline]
    pub fn as_slice(&self) -> &[S] {
        &self.components
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [S] {
        &mut self.components
    }

    #[inline]
    pub fn into_array(self) -> [S; N] {
        self.components
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, S> {
        self.components.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, S> {
        self.components.iter_mut()
    }

    /// Applies `f` to every component.
    #[inline]
    pub fn map<U>(self, f: impl FnMut(S) -> U) -> Vector<N, U> {
        Vector::from_array(self.components.map(f))
    }
}

impl<const N: usize, S: Number> Vector<N, S> {
    #[inline]
    pub fn zero() -> Self {
        Self::from_array([S::ZERO; N])
    }

    /// Broadcasts `v` to every component.
    #[inline]
    pub fn splat(v: S) -> Self {
        Self::from_array([v; N])
    }

    /// Takes the leading `M <= N` components from `prefix`; the rest are zero.
    #[inline]
    pub fn from_prefix<const M: usize>(prefix: [S; M]) -> Self {
        const { assert!(M <= N, "more components than the vector dimension") }
        let mut components = [S::ZERO; N];
        components[..M].copy_from_slice(&prefix);
        Self::from_array(components)
    }

    /// True when at least one component is nonzero.
    #[inline]
    pub fn any(&self) -> bool {
        self.components.iter().any(|c| *c != S::ZERO)
    }

    /// Grows to `M >= N` components, zero-filling the new ones.
    #[inline]
    pub fn resize<const M: usize>(self) -> Vector<M, S> {
        const { assert!(N <= M, "resize cannot drop components, use truncate") }
        Vector::from_fn(|i| if i < N { self.components[i] } else { S::ZERO })
    }

    /// Keeps the leading `M <= N` components.
    #[inline]
    pub fn truncate<const M: usize>(self) -> Vector<M, S> {
        const { assert!(M <= N, "truncate cannot add components, use resize") }
        Vector::from_fn(|i| self.components[i])
    }

    /// Casts every component to `U` with `as` semantics.
    #[inline]
    pub fn cast<U>(self) -> Vector<N, U>
    where
        S: AsPrimitive<U>,
        U: Number,
    {
        self.map(|c| c.as_())
    }

    /// [`resize`](Self::resize) and [`cast`](Self::cast) in one step.
    #[inline]
    pub fn convert<const M: usize, U>(self) -> Vector<M, U>
    where
        S: AsPrimitive<U>,
        U: Number,
    {
        const { assert!(N <= M, "convert cannot drop components") }
        Vector::from_fn(|i| if i < N { self.components[i].as_() } else { U::ZERO })
    }
}

macro_rules! per_dimension {
    (@axes $i:expr, $axis:ident $(, $rest:ident)*) => {
        #[inline]
        pub fn $axis() -> Self {
            let mut v = Self::zero();
            v.components[$i] = S::ONE;
            v
        }
        per_dimension!(@axes $i + 1 $(, $rest)*);
    };
    (@axes $i:expr) => {};
    ($($n:literal: ($($field:ident),+) $(=> extend $grown:literal)?, axes [$($axis:ident),+]);+ $(;)?) => {$(
        impl<S: Number> Vector<$n, S> {
            #[inline]
            pub const fn new($($field: S),+) -> Self {
                Self::from_array([$($field),+])
            }

            $(
            /// Appends one component, e.g. `w = 1` for a homogeneous point.
            #[inline]
            pub fn extend(self, last: S) -> Vector<$grown, S> {
                let mut grown = self.resize::<$grown>();
                grown.components[$n] = last;
                grown
            }
            )?

            per_dimension!(@axes 0, $($axis),+);
        }
    )+};
}

per_dimension! {
    1: (x) => extend 2, axes [unit_x];
    2: (x, y) => extend 3, axes [unit_x, unit_y];
    3: (x, y, z) => extend 4, axes [unit_x, unit_y, unit_z];
    4: (x, y, z, w), axes [unit_x, unit_y, unit_z, unit_w];
}

impl<const N: usize, S: Number> Default for Vector<N, S> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<const N: usize, S> From<[S; N]> for Vector<N, S> {
    #[inline]
    fn from(components: [S; N]) -> Self {
        Self::from_array(components)
    }
}

impl<const N: usize, S> From<Vector<N, S>> for [S; N] {
    #[inline]
    fn from(v: Vector<N, S>) -> Self {
        v.components
    }
}

impl<const N: usize, S> Index<usize> for Vector<N, S> {
    type Output = S;

    #[inline]
    fn index(&self, index: usize) -> &S {
        match self.get(index) {
            Ok(c) => c,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<const N: usize, S> IndexMut<usize> for Vector<N, S> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut S {
        match self.get_mut(index) {
            Ok(c) => c,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<const N: usize, S> IntoIterator for Vector<N, S> {
    type Item = S;
    type IntoIter = array::IntoIter<S, N>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.components.into_iter()
    }
}

impl<'a, const N: usize, S> IntoIterator for &'a Vector<N, S> {
    type Item = &'a S;
    type IntoIter = slice::Iter<'a, S>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.components.iter()
    }
}

impl<'a, const N: usize, S> IntoIterator for &'a mut Vector<N, S> {
    type Item = &'a mut S;
    type IntoIter = slice::IterMut<'a, S>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.components.iter_mut()
    }
}

impl<const N: usize, S: core::fmt::Display> core::fmt::Display for Vector<N, S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{c}")?;
        }
        write!(f, ")")
    }
}
