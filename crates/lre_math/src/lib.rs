//! Four-component vector and 4x4 matrix primitives for real-time graphics.
//!
//! [`Vector4`] and [`Matrix4`] are plain value types. Their lane-wise
//! arithmetic runs on a [`backend::LaneBackend`] picked when the crate is
//! built, and none of their operations can fail: degenerate inputs are
//! handled by the substitution rules in [`num`].

#[macro_use]
mod macros;

pub mod backend;
#[cfg(feature = "benchmark")]
pub mod benchmark;
#[cfg(feature = "arbitrary")]
pub mod fuzzing;
pub mod matrix;
pub mod num;
pub mod vector;

pub use matrix::Matrix4;
pub use vector::Vector4;
