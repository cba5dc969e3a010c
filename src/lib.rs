//! # `delayed_init` - Deferred Construction With Value Semantics
//!
//! [`DelayedInit<T>`] is a holder that starts either empty or holding a `T`,
//! and can be initialized later. It behaves like an ordinary value in both
//! states: it can be cloned, moved, assigned, compared and swapped, and it
//! drops its element exactly once.
//!
//! The typical use is a struct field that can only be computed after the rest
//! of the struct exists:
//!
//! ```rust
//! use delayed_init::{DelayedInit, DelayedInitError};
//!
//! struct Circle {
//!     radius: f64,
//!     area: DelayedInit<f64>,
//! }
//!
//! let mut circle = Circle { radius: 2.0, area: DelayedInit::new() };
//! assert_eq!(circle.area.try_get(), Err(DelayedInitError::UninitializedAccess));
//!
//! let area = std::f64::consts::PI * circle.radius * circle.radius;
//! circle.area.init(area).unwrap();
//! assert!(circle.area.is_initialized());
//! assert_eq!(circle.area.init(0.0_f64), Err(DelayedInitError::DoubleInitialization));
//! ```
//!
//! ## Guarantees
//!
//! - **Exactly one live element while holding**: the initialization flag and
//!   the slot never disagree, including when an element operation panics.
//! - **No hidden element calls**: every operation performs only the element
//!   operations its documentation names (a `clone`, a `clone_from`, a drop, ...).
//! - **No allocation**: the element lives inline next to its flag.
//!
//! ## Feature Flags
//!
//! - `tracing` - emits `trace!` events on state transitions and `debug!` events
//!   on contract violations, under the `delayed_init` target.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::should_implement_trait)]

#[macro_use]
mod trace;

pub mod cell;
mod error;

pub use cell::{swap, DelayedInit, ElementSwap};
pub use error::DelayedInitError;

// Compile-time assertions for memory layout
const _: () = {
    use core::mem;

    // The holder is the element plus one flag, like `Option` without a niche.
    assert!(mem::size_of::<DelayedInit<u64>>() == mem::size_of::<Option<u64>>());
    assert!(mem::align_of::<DelayedInit<u64>>() == mem::align_of::<u64>());

    // Zero-sized elements cost only the flag.
    assert!(mem::size_of::<DelayedInit<()>>() == 1);
};
