//! Named component views.
//!
//! A `Vector<N, S>` dereferences to the view with exactly `N` named fields, so
//! `v.z` exists on 3- and 4-vectors and is a compile error on 2-vectors.

use super::Vector;
use core::ops::{Deref, DerefMut};

macro_rules! component_view {
    ($($(#[$doc:meta])* $view:ident, $n:literal, { $($field:ident),+ });+ $(;)?) => {$(
        $(#[$doc])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        #[repr(C)]
        pub struct $view<S> {
            $(pub $field: S),+
        }

        impl<S> Deref for Vector<$n, S> {
            type Target = $view<S>;

            #[inline]
            fn deref(&self) -> &$view<S> {
                // SAFETY: `$view<S>` is `#[repr(C)]` with `$n` fields all of type `S`, so it
                // has the size, alignment and field offsets of `[S; $n]`.
                unsafe { &*(self.as_array() as *const [S; $n] as *const $view<S>) }
            }
        }

        impl<S> DerefMut for Vector<$n, S> {
            #[inline]
            fn deref_mut(&mut self) -> &mut $view<S> {
                // SAFETY: see `Deref`.
                unsafe { &mut *(self.components.as_mut_ptr() as *mut $view<S>) }
            }
        }
    )+};
}

component_view! {
    /// Named view of a 1-vector.
    X, 1, { x };
    /// Named view of a 2-vector.
    XY, 2, { x, y };
    /// Named view of a 3-vector.
    XYZ, 3, { x, y, z };
    /// Named view of a 4-vector; also the `x, y, z, w` of a quaternion.
    XYZW, 4, { x, y, z, w };
}
