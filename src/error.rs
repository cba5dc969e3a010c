/// Caller-contract violations reported by [`DelayedInit`](crate::DelayedInit).
///
/// Neither variant changes the holder: a failed access leaves it empty and a
/// failed initialization leaves the existing value untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelayedInitError {
    /// The holder was dereferenced while empty.
    UninitializedAccess,
    /// The holder was explicitly initialized while already holding a value.
    DoubleInitialization,
}

impl core::fmt::Display for DelayedInitError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Self::UninitializedAccess => "attempt to use uninitialised object",
            Self::DoubleInitialization => "second attempt to initialise object",
        })
    }
}

impl std::error::Error for DelayedInitError {}
