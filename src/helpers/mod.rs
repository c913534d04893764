//! Helper Utilities
//!
//! Common utilities used across the crate.

mod debounce;
mod fs;
mod string;

pub use debounce::*;
pub use fs::*;
pub use string::*;
