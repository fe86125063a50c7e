//! Command-line flag value types.
//!
//! Each type parses one textual argument at a time through [`FlagValue::set`]
//! and renders its current value through `Display`. Accumulating types keep
//! every value they have been given; the others keep the latest.

mod assign;
mod choice;
mod cidr;
mod either;

pub use assign::{Assignment, Assignments, KeyValue};
pub use choice::{Choice, ChoiceList, ChoiceSet, ChoiceSetCsv, Choices, ChoicesCsv};
pub use cidr::{Cidr, CidrValue, Cidrs, CidrsCsv};
pub use either::Either;

use std::fmt;

use crate::error::{Error, Result};
use crate::strings::quote_text;

pub const DEFAULT_SEPARATOR: &str = ",";

pub trait FlagValue: fmt::Display {
    fn set(&mut self, text: &str) -> Result<()>;

    /// Short description for help output.
    fn help(&self) -> String;

    fn has_changed(&self) -> bool {
        !self.to_string().is_empty()
    }
}

pub(crate) fn invalid(text: &str, problem: impl Into<String>, tried: Option<Vec<String>>) -> Error {
    Error::validation_invalid_argument("flag", problem, Some(text.to_string()), tried)
}

/// `separator` when set, else a comma.
pub(crate) fn separator_or_default(separator: &str) -> &str {
    if separator.is_empty() {
        DEFAULT_SEPARATOR
    } else {
        separator
    }
}

pub(crate) fn list_help(separator: &str, what: &str) -> String {
    format!("{}-separated list of {}", quote_text(separator_or_default(separator)), what)
}

/// Split a list argument, trimming each part.
pub(crate) fn split_list<'a>(text: &'a str, separator: &str) -> Vec<&'a str> {
    text.split(separator_or_default(separator))
        .map(str::trim)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_defaults_to_comma() {
        assert_eq!(separator_or_default(""), ",");
        assert_eq!(separator_or_default(";"), ";");
        assert_eq!(split_list("a, b ,c", ""), vec!["a", "b", "c"]);
        assert_eq!(split_list("a;b", ";"), vec!["a", "b"]);
    }

    #[test]
    fn list_help_quotes_separator() {
        assert_eq!(list_help("", "values"), "\",\"-separated list of values");
    }
}
