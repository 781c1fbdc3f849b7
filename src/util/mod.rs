//! Various utility functions.

pub mod dynamic;
pub mod prism;
