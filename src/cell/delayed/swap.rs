//! Swapping holders.
//!
//! Two holding holders exchange their elements in place. When exactly one is
//! holding, its value is relocated into the other and the flags flip; this is
//! a bitwise move and cannot fail.

use core::mem;

use super::DelayedInit;

/// An element-provided in-place exchange.
///
/// Implement this when `T` has a swap that does more than exchange bytes (or
/// when you want to observe it). [`DelayedInit::swap_elements`] uses it for
/// the holding/holding case; [`DelayedInit::swap`] always falls back to
/// [`core::mem::swap`].
///
/// If `swap_with` panics, both holders are still holding; their contents are
/// whatever the implementation left behind.
pub trait ElementSwap {
    /// Exchanges the contents of `self` and `other`.
    fn swap_with(&mut self, other: &mut Self);
}

impl<T> DelayedInit<T> {
    /// Swaps two holders using `core::mem::swap` for held elements.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        self.swap_by(other, mem::swap);
    }

    /// Swaps two holders using the element's own [`ElementSwap`] when both are holding.
    #[inline]
    pub fn swap_elements(&mut self, other: &mut Self)
    where
        T: ElementSwap,
    {
        self.swap_by(other, T::swap_with);
    }

    fn swap_by<F>(&mut self, other: &mut Self, in_place: F)
    where
        F: FnOnce(&mut T, &mut T),
    {
        match (self.slot.is_init(), other.slot.is_init()) {
            (true, true) => {
                if let (Some(a), Some(b)) = (self.slot.get_mut(), other.slot.get_mut()) {
                    in_place(a, b);
                }
            }
            (true, false) => relocate(self, other),
            (false, true) => relocate(other, self),
            (false, false) => {}
        }
    }
}

/// Moves `from`'s value into the empty `to`.
fn relocate<T>(from: &mut DelayedInit<T>, to: &mut DelayedInit<T>) {
    if let Some(value) = from.slot.take() {
        trace_transition!(T, "relocated by swap");
        to.slot.construct(value);
    }
}

/// Swaps two holders; equivalent to [`DelayedInit::swap`].
#[inline]
pub fn swap<T>(a: &mut DelayedInit<T>, b: &mut DelayedInit<T>) {
    a.swap(b);
}
