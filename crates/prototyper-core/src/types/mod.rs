//! Type system utilities and aliases.
//!
//! ## Modules
//!
//! - [`aliases`]: Type aliases for single-threaded shared ownership.

pub mod aliases;

pub use aliases::*;
