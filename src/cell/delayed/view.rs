//! Views and conversions between holders of related element types.
//!
//! A read-only holder is a `DelayedInit<&T>` obtained from [`DelayedInit::as_ref`];
//! there is no separate const-qualified holder type.

use super::DelayedInit;

impl<T> DelayedInit<T> {
    /// Returns a read-only view: holding a `&T` exactly when `self` is holding.
    #[inline]
    pub fn as_ref(&self) -> DelayedInit<&T> {
        match self.slot.get() {
            Some(value) => DelayedInit::from_value(value),
            None => DelayedInit::new(),
        }
    }

    /// Returns a mutable view: holding a `&mut T` exactly when `self` is holding.
    #[inline]
    pub fn as_mut(&mut self) -> DelayedInit<&mut T> {
        match self.slot.get_mut() {
            Some(value) => DelayedInit::from_value(value),
            None => DelayedInit::new(),
        }
    }

    /// Creates a holder from one that is given up, converting its element.
    ///
    /// The result is holding exactly when `source` was.
    pub fn convert_from<U: Into<T>>(source: DelayedInit<U>) -> Self {
        match source.into_inner() {
            Some(value) => Self::from_value(value.into()),
            None => Self::new(),
        }
    }
}

impl<T: Clone> DelayedInit<&T> {
    /// Copies a read-only view into an owning holder.
    pub fn cloned(&self) -> DelayedInit<T> {
        match self.slot.get() {
            Some(value) => DelayedInit::from_value(T::clone(value)),
            None => DelayedInit::new(),
        }
    }
}

impl<T: Copy> DelayedInit<&T> {
    /// Copies a read-only view of a `Copy` element into an owning holder.
    pub fn copied(&self) -> DelayedInit<T> {
        match self.slot.get() {
            Some(value) => DelayedInit::from_value(**value),
            None => DelayedInit::new(),
        }
    }
}

impl<T> From<T> for DelayedInit<T> {
    fn from(value: T) -> Self {
        Self::from_value(value)
    }
}

impl<T> From<Option<T>> for DelayedInit<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from_value(value),
            None => Self::new(),
        }
    }
}

impl<T> From<DelayedInit<T>> for Option<T> {
    fn from(holder: DelayedInit<T>) -> Self {
        holder.into_inner()
    }
}
