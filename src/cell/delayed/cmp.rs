use core::fmt;
use core::hash::{Hash, Hasher};

use super::DelayedInit;

/// Two holders are equal when both are empty, or both are holding equal values.
/// Element equality is only consulted in the second case.
impl<T, U> PartialEq<DelayedInit<U>> for DelayedInit<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &DelayedInit<U>) -> bool {
        match (self.slot.get(), other.slot.get()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => true,
            _ => false,
        }
    }
}

impl<T: Eq> Eq for DelayedInit<T> {}

impl<T: Hash> Hash for DelayedInit<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slot.get().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for DelayedInit<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot.get() {
            Some(value) => f.debug_tuple("DelayedInit").field(value).finish(),
            None => f.write_str("DelayedInit(<uninitialised>)"),
        }
    }
}
