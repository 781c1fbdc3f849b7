//! Last-in-first-out container.

mod error;
mod structure;

pub use error::StackError;
pub use structure::Stack;
