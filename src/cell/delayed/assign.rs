//! Copy and assignment for `DelayedInit`.
//!
//! Holder-to-holder assignment follows one matrix, keyed by the states at call
//! time; only the element operation differs between borrowed sources
//! (`clone` / `clone_from`) and moved sources (move / move-assign):
//!
//! | self    | source  | effect                              |
//! |---------|---------|-------------------------------------|
//! | empty   | empty   | nothing                             |
//! | empty   | holding | construct from the source's value   |
//! | holding | empty   | destroy the held value              |
//! | holding | holding | assign from the source's value      |

use super::DelayedInit;

impl<T> DelayedInit<T> {
    /// Assigns a value converted into `T`.
    ///
    /// A holding holder move-assigns into its element (dropping the old
    /// value); an empty one constructs. Either way it is holding afterwards.
    pub fn set<U: Into<T>>(&mut self, value: U) -> &mut T {
        let value = value.into();
        if self.slot.is_init() {
            // SAFETY: checked above.
            let held = unsafe { self.slot.get_unchecked_mut() };
            *held = value;
            held
        } else {
            trace_transition!(T, "initialized");
            self.slot.construct(value)
        }
    }

    /// Assigns from a borrowed value.
    ///
    /// Performs exactly one of `T::clone_from` (holding) or `T::clone` (empty).
    pub fn set_cloned(&mut self, value: &T) -> &mut T
    where
        T: Clone,
    {
        if self.slot.is_init() {
            // SAFETY: checked above.
            let held = unsafe { self.slot.get_unchecked_mut() };
            held.clone_from(value);
            held
        } else {
            let value = value.clone();
            trace_transition!(T, "initialized");
            self.slot.construct(value)
        }
    }

    /// Assigns from a holder that is given up, possibly of another element type.
    ///
    /// Afterwards `self` is holding exactly when `source` was.
    pub fn assign<U: Into<T>>(&mut self, source: DelayedInit<U>) {
        match source.into_inner() {
            Some(value) => {
                self.set(value);
            }
            None => self.clear(),
        }
    }
}

impl<T: Clone> Clone for DelayedInit<T> {
    fn clone(&self) -> Self {
        match self.slot.get() {
            Some(value) => Self::from_value(value.clone()),
            None => Self::new(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        match source.slot.get() {
            Some(value) => {
                self.set_cloned(value);
            }
            None => self.clear(),
        }
    }
}
