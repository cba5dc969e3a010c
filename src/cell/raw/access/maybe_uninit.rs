//! Unsafe, centralized operations on `MaybeUninit<T>` slots.
//!
//! The holder stores its element as a `MaybeUninit<T>` next to an `is_init`
//! flag. These helpers are the single place to audit:
//! - reads that move a value out (`ptr::read`)
//! - drops (`drop_in_place`)
//! - conversion to references (`assume_init_ref` / `assume_init_mut`)
//!
//! ## Core invariant
//! For every caller in this crate, a slot is initialized *exactly when* the
//! flag stored beside it is `true`. Writes go through the safe
//! `MaybeUninit::write` and are followed by setting the flag; reads and drops
//! clear the flag first.

use core::{mem::MaybeUninit, ptr};

/// Interprets an initialized slot as `&T`.
///
/// # Safety
/// - `slot` must be initialized.
#[inline(always)]
pub(crate) unsafe fn assume_init_ref<T>(slot: &MaybeUninit<T>) -> &T {
    // SAFETY: caller asserts `slot` is initialized.
    unsafe { slot.assume_init_ref() }
}

/// Interprets an initialized slot as `&mut T`.
///
/// # Safety
/// - `slot` must be initialized.
#[inline(always)]
pub(crate) unsafe fn assume_init_mut<T>(slot: &mut MaybeUninit<T>) -> &mut T {
    // SAFETY: caller asserts `slot` is initialized; `&mut` gives exclusivity.
    unsafe { slot.assume_init_mut() }
}

/// Bitwise-moves an initialized value out of a slot.
///
/// # Safety
/// - `slot` must be initialized.
/// - The slot must be treated as uninitialized afterwards, or the value is
///   dropped twice.
#[inline(always)]
pub(crate) unsafe fn read<T>(slot: &MaybeUninit<T>) -> T {
    // SAFETY: caller asserts initialization + `ptr::read` contract.
    unsafe { ptr::read(slot.as_ptr()) }
}

/// Drops an initialized value in place.
///
/// # Safety
/// - `slot` must be initialized.
/// - Must not be called more than once for the same logical value.
#[inline(always)]
pub(crate) unsafe fn drop_in_place<T>(slot: &mut MaybeUninit<T>) {
    // SAFETY: caller asserts initialization and drop uniqueness.
    unsafe { ptr::drop_in_place(slot.as_mut_ptr()) }
}
