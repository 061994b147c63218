//! Demonstration grids for the `gridops` binary.
//!
//! Each demonstration is a small pure function returning the derived array,
//! so the binary only formats and prints and the smoke tests can pin exact
//! values.
pub mod demos;
