//! Raw building blocks.
//!
//! This layer exposes no public surface and concentrates the crate's unsafe
//! code in a small number of modules.

pub(crate) mod access;
