//! Utilities for benchmarking.

pub mod benchmark;

#[doc(hidden)]
pub use pastey;
