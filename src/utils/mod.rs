//! Generic utility primitives with zero domain knowledge.
//!
//! - `io` - File I/O with consistent error handling
//! - `suggest` - Closest-name suggestions for mistyped identifiers
//! - `validation` - Argument and input validation helpers

pub mod io;
pub mod suggest;
pub mod validation;
