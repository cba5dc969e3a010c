use core::mem::MaybeUninit;

use crate::cell::raw::access::maybe_uninit as mu;

/// Storage for at most one `T` plus its initialization flag.
///
/// Layout note: `value` is placed before `is_init` to keep the flag in tail padding.
///
/// `Slot` never drops its contents on its own; the owning `DelayedInit`
/// calls [`Slot::destroy`] from its `Drop`.
pub(super) struct Slot<T> {
    value: MaybeUninit<T>,
    is_init: bool,
}

impl<T> Slot<T> {
    #[inline(always)]
    pub(super) const fn empty() -> Self {
        Self {
            value: MaybeUninit::uninit(),
            is_init: false,
        }
    }

    #[inline(always)]
    pub(super) const fn holding(value: T) -> Self {
        Self {
            value: MaybeUninit::new(value),
            is_init: true,
        }
    }

    #[inline(always)]
    pub(super) fn is_init(&self) -> bool {
        self.is_init
    }

    #[inline]
    pub(super) fn get(&self) -> Option<&T> {
        if self.is_init {
            // SAFETY: `is_init` is true.
            Some(unsafe { mu::assume_init_ref(&self.value) })
        } else {
            None
        }
    }

    #[inline]
    pub(super) fn get_mut(&mut self) -> Option<&mut T> {
        if self.is_init {
            // SAFETY: `is_init` is true.
            Some(unsafe { mu::assume_init_mut(&mut self.value) })
        } else {
            None
        }
    }

    /// # Safety
    /// The slot must be initialized.
    #[inline(always)]
    pub(super) unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(self.is_init);
        // SAFETY: caller asserts initialization.
        unsafe { mu::assume_init_mut(&mut self.value) }
    }

    /// Places an already-built value into an empty slot.
    ///
    /// The value is complete before the slot is touched, so a panic while
    /// producing it can never leave the flag set over garbage.
    #[inline]
    pub(super) fn construct(&mut self, value: T) -> &mut T {
        debug_assert!(!self.is_init, "construct over a live value would leak it");
        let value = self.value.write(value);
        self.is_init = true;
        value
    }

    /// Moves the value out, leaving the slot empty.
    #[inline]
    pub(super) fn take(&mut self) -> Option<T> {
        if !self.is_init {
            return None;
        }
        self.is_init = false;
        // SAFETY: was initialized; the flag is already cleared so the value
        // has exactly one owner after the read.
        Some(unsafe { mu::read(&self.value) })
    }

    /// Drops the value if present, leaving the slot empty.
    ///
    /// The flag is cleared before the drop runs, so a panicking destructor
    /// cannot cause a second drop later.
    #[inline]
    pub(super) fn destroy(&mut self) {
        if self.is_init {
            self.is_init = false;
            // SAFETY: was initialized and is now logically dead.
            unsafe { mu::drop_in_place(&mut self.value) };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Slot;
    use std::rc::Rc;

    #[test]
    fn test_construct_then_destroy_drops_once() {
        let tracker = Rc::new(());
        let mut slot = Slot::empty();
        slot.construct(Rc::clone(&tracker));
        assert_eq!(Rc::strong_count(&tracker), 2);

        slot.destroy();
        assert!(!slot.is_init());
        assert_eq!(Rc::strong_count(&tracker), 1);

        // Destroying an empty slot is a no-op.
        slot.destroy();
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn test_take_transfers_ownership() {
        let tracker = Rc::new(());
        let mut slot = Slot::holding(Rc::clone(&tracker));
        let taken = slot.take();
        assert!(!slot.is_init());
        assert!(slot.get().is_none());
        assert_eq!(Rc::strong_count(&tracker), 2);

        drop(taken);
        assert_eq!(Rc::strong_count(&tracker), 1);
        assert!(slot.take().is_none());
    }

    #[test]
    fn test_get_mut_writes_through() {
        let mut slot = Slot::holding(1);
        if let Some(v) = slot.get_mut() {
            *v += 41;
        }
        assert_eq!(slot.get(), Some(&42));
        slot.destroy();
    }
}
