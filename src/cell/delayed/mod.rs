//! `DelayedInit`: a value holder whose element is constructed after the holder.
//!
//! The holder is either *empty* or *holding* exactly one `T`. It moves between
//! the two states only through the operations below; there is never a
//! partially constructed observable state.
//!
//! ```text
//!  Empty ──init / set / assign(holding)──▶ Holding
//!  Holding ──clear / take / assign(empty)──▶ Empty
//!  Holding ──set / assign(holding)──▶ Holding   (value replaced)
//! ```
//!
//! Value semantics are split across sibling modules:
//! - `assign`: `Clone`, value assignment and holder-to-holder assignment
//! - `swap`: swapping, including the element-provided fast path
//! - `view`: read-only/mutable views and conversions between element types
//! - `cmp`: equality, hashing and `Debug`

mod assign;
mod cmp;
mod inner;
mod swap;
mod view;

use core::ops::{Deref, DerefMut};

use crate::DelayedInitError;
use inner::Slot;

pub use swap::{swap, ElementSwap};

/// A holder for a `T` whose construction is deferred.
///
/// Declare a field as `DelayedInit<T>` instead of `T` when its value can only
/// be computed after the surrounding structure exists.
///
/// ```rust
/// use delayed_init::DelayedInit;
///
/// struct Report {
///     lines: Vec<String>,
///     summary: DelayedInit<String>,
/// }
///
/// impl Report {
///     fn new(lines: Vec<String>) -> Self {
///         let mut report = Report { lines, summary: DelayedInit::new() };
///         let summary = format!("{} lines", report.lines.len());
///         report.summary.init(summary).unwrap();
///         report
///     }
/// }
///
/// let report = Report::new(vec!["a".into(), "b".into()]);
/// assert_eq!(*report.summary, "2 lines");
/// ```
pub struct DelayedInit<T> {
    slot: Slot<T>,
}

impl<T> DelayedInit<T> {
    /// Creates an empty holder. No `T` is constructed.
    #[inline]
    pub const fn new() -> Self {
        Self { slot: Slot::empty() }
    }

    /// Creates a holder containing `value`.
    ///
    /// Pass `value.clone()` to copy from a value that must stay alive, or
    /// `value.into()` to convert from a related type.
    #[inline]
    pub const fn from_value(value: T) -> Self {
        Self {
            slot: Slot::holding(value),
        }
    }

    /// Returns `true` if a value is currently held.
    #[inline(always)]
    pub fn is_initialized(&self) -> bool {
        self.slot.is_init()
    }

    /// Returns the held value, or `None` if empty.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        self.slot.get()
    }

    /// Returns the held value mutably, or `None` if empty.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.slot.get_mut()
    }

    /// Returns the held value.
    ///
    /// # Errors
    /// [`DelayedInitError::UninitializedAccess`] if the holder is empty.
    #[inline]
    pub fn try_get(&self) -> Result<&T, DelayedInitError> {
        self.slot.get().ok_or_else(|| {
            trace_violation!(T, DelayedInitError::UninitializedAccess);
            DelayedInitError::UninitializedAccess
        })
    }

    /// Returns the held value mutably.
    ///
    /// # Errors
    /// [`DelayedInitError::UninitializedAccess`] if the holder is empty.
    #[inline]
    pub fn try_get_mut(&mut self) -> Result<&mut T, DelayedInitError> {
        self.slot.get_mut().ok_or_else(|| {
            trace_violation!(T, DelayedInitError::UninitializedAccess);
            DelayedInitError::UninitializedAccess
        })
    }

    /// Initializes an empty holder with `value` converted into `T`.
    ///
    /// # Errors
    /// [`DelayedInitError::DoubleInitialization`] if a value is already held.
    /// The held value is left untouched and `value` is not converted.
    #[inline]
    pub fn init<U: Into<T>>(&mut self, value: U) -> Result<&mut T, DelayedInitError> {
        self.init_with(|| value.into())
    }

    /// Initializes an empty holder with the result of `f`.
    ///
    /// `f` only runs if the holder is empty.
    ///
    /// # Errors
    /// [`DelayedInitError::DoubleInitialization`] if a value is already held.
    pub fn init_with<F>(&mut self, f: F) -> Result<&mut T, DelayedInitError>
    where
        F: FnOnce() -> T,
    {
        self.try_init_with(|| Ok(f()))
    }

    /// Initializes an empty holder with the result of a fallible constructor.
    ///
    /// If `f` fails the holder stays empty and the error is returned as is.
    ///
    /// # Errors
    /// `DelayedInitError::DoubleInitialization` (converted into `E`) if a value
    /// is already held, otherwise whatever `f` returns.
    pub fn try_init_with<F, E>(&mut self, f: F) -> Result<&mut T, E>
    where
        F: FnOnce() -> Result<T, E>,
        E: From<DelayedInitError>,
    {
        if self.slot.is_init() {
            trace_violation!(T, DelayedInitError::DoubleInitialization);
            return Err(DelayedInitError::DoubleInitialization.into());
        }
        let value = f()?;
        trace_transition!(T, "initialized");
        Ok(self.slot.construct(value))
    }

    /// Returns the held value, initializing it with `f` first if empty.
    pub fn get_or_init<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if self.slot.is_init() {
            // SAFETY: checked above.
            unsafe { self.slot.get_unchecked_mut() }
        } else {
            let value = f();
            trace_transition!(T, "initialized");
            self.slot.construct(value)
        }
    }

    /// Takes the value out, leaving the holder empty.
    #[inline]
    pub fn take(&mut self) -> Option<T> {
        let value = self.slot.take();
        if value.is_some() {
            trace_transition!(T, "taken");
        }
        value
    }

    /// Destroys the held value, if any, leaving the holder empty.
    #[inline]
    pub fn clear(&mut self) {
        if self.slot.is_init() {
            trace_transition!(T, "cleared");
            self.slot.destroy();
        }
    }

    /// Stores `value` and returns the previously held value, if any.
    ///
    /// Unlike [`set`](Self::set), the old value is handed back instead of dropped.
    pub fn replace(&mut self, value: T) -> Option<T> {
        let old = self.slot.take();
        self.slot.construct(value);
        old
    }

    /// Consumes the holder, returning the held value if any.
    #[inline]
    pub fn into_inner(mut self) -> Option<T> {
        self.slot.take()
    }
}

impl<T> Default for DelayedInit<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DelayedInit<T> {
    fn drop(&mut self) {
        if self.slot.is_init() {
            trace_transition!(T, "destroyed");
            self.slot.destroy();
        }
    }
}

impl<T> Deref for DelayedInit<T> {
    type Target = T;

    /// # Panics
    /// If the holder is empty. Use [`DelayedInit::try_get`] to get an error instead.
    #[track_caller]
    fn deref(&self) -> &T {
        match self.try_get() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> DerefMut for DelayedInit<T> {
    /// # Panics
    /// If the holder is empty. Use [`DelayedInit::try_get_mut`] to get an error instead.
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        match self.try_get_mut() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}
