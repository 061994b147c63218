#![doc = include_str!("../README.md")]

pub mod conv;
pub mod error;
pub mod window;

pub use conv::{convolve2d, convolve2d_par};
pub use error::GridError;
pub use window::SlidingWindows;
