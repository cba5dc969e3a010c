//! Deferred-initialization cells.
//!
//! The module tree is stratified:
//! - `raw::*` are the minimal unsafe building blocks.
//! - `delayed::*` is the safe holder built on top of them.

pub mod delayed;
pub(crate) mod raw;

pub use delayed::{swap, DelayedInit, ElementSwap};
