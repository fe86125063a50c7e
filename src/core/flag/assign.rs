use std::fmt;

use super::{invalid, FlagValue};
use crate::error::Result;

pub const DEFAULT_ASSIGN_SEPARATOR: &str = "=";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

fn assign_separator(separator: &str) -> &str {
    if separator.is_empty() {
        DEFAULT_ASSIGN_SEPARATOR
    } else {
        separator
    }
}

/// Split `text` on the first separator.
fn parse_pair(text: &str, separator: &str) -> Result<KeyValue> {
    let separator = assign_separator(separator);
    let (key, value) = text.split_once(separator).ok_or_else(|| {
        invalid(
            text,
            format!("\"{}\" must have the form KEY{}VALUE", text, separator),
            None,
        )
    })?;
    Ok(KeyValue {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn pair_help(separator: &str) -> String {
    format!("a key/value pair KEY{}VALUE", assign_separator(separator))
}

/// A single `KEY=VALUE` argument.
#[derive(Debug, Clone, Default)]
pub struct Assignment {
    pub separator: String,
    pub value: Option<KeyValue>,
    pub text: String,
}

impl Assignment {
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            ..Self::default()
        }
    }
}

impl FlagValue for Assignment {
    fn set(&mut self, text: &str) -> Result<()> {
        self.value = Some(parse_pair(text, &self.separator)?);
        self.text = text.to_string();
        Ok(())
    }

    fn help(&self) -> String {
        pair_help(&self.separator)
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Repeatable [`Assignment`].
#[derive(Debug, Clone, Default)]
pub struct Assignments {
    pub separator: String,
    pub values: Vec<KeyValue>,
    pub texts: Vec<String>,
}

impl Assignments {
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            ..Self::default()
        }
    }
}

impl FlagValue for Assignments {
    fn set(&mut self, text: &str) -> Result<()> {
        self.values.push(parse_pair(text, &self.separator)?);
        self.texts.push(text.to_string());
        Ok(())
    }

    fn help(&self) -> String {
        pair_help(&self.separator)
    }
}

impl fmt::Display for Assignments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.texts.join(", "))
    }
}
