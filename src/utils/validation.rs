//! Input validation primitives.
//!
//! These replace verbose `ok_or_else(|| Error::…)` chains at call sites.

use crate::error::{Error, Result};

/// Require an optional value to be present, reporting `field` with `message`
/// as an invalid argument otherwise.
pub fn require<T>(opt: Option<T>, field: &str, message: &str) -> Result<T> {
    opt.ok_or_else(|| Error::validation_invalid_argument(field, message, None, None))
}

/// Require a positional argument, reporting it as missing otherwise.
pub fn require_arg<T>(opt: Option<T>, arg: &str) -> Result<T> {
    opt.ok_or_else(|| Error::validation_missing_argument(vec![arg.to_string()]))
}

/// Require a string to be non-empty after trimming.
pub fn require_non_empty<'a>(value: &'a str, field: &str, message: &str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(Error::validation_invalid_argument(field, message, None, None))
    } else {
        Ok(trimmed)
    }
}
