//! Event macros that forward to `tracing` when the `tracing` feature is on.
//!
//! Both macros take the element type first so events carry an `element`
//! field. With the feature off they expand to an empty block.

/// State transition of a holder (`trace` level).
macro_rules! trace_transition {
    ($elem:ty, $what:literal) => {{
        #[cfg(feature = "tracing")]
        ::tracing::trace!(
            target: "delayed_init",
            element = ::core::any::type_name::<$elem>(),
            $what
        );
    }};
}

/// Caller-contract violation (`debug` level).
macro_rules! trace_violation {
    ($elem:ty, $err:expr) => {{
        #[cfg(feature = "tracing")]
        ::tracing::debug!(
            target: "delayed_init",
            element = ::core::any::type_name::<$elem>(),
            error = %$err,
            "contract violation"
        );
    }};
}
