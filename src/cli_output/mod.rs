//! Line-based output for the non-interactive commands.

mod boxes;

pub use boxes::*;
