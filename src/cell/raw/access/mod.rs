//! Centralized unsafe accessors for the raw layer.
//!
//! ## Design rule
//! - `cell::delayed::*` should not perform ad-hoc `ptr::*` / `MaybeUninit`
//!   unsafe operations.
//! - Instead, it calls the small, audited surface here.
//!
//! This module does **not** make operations safe by itself. It provides
//! building blocks whose safety conditions are documented in one place.

pub(crate) mod maybe_uninit;
