use std::collections::BTreeSet;
use std::fmt;

use super::{invalid, list_help, split_list, FlagValue};
use crate::error::{Error, Result};

/// A fixed set of accepted values. Matching ignores case unless
/// `case_sensitive` is set; a match resolves to the choice as declared.
#[derive(Debug, Clone, Default)]
pub struct ChoiceList {
    pub choices: Vec<String>,
    pub case_sensitive: bool,
}

impl ChoiceList {
    fn new<S: AsRef<str>>(choices: &[S]) -> Self {
        Self {
            choices: choices.iter().map(|c| c.as_ref().to_string()).collect(),
            case_sensitive: false,
        }
    }

    fn resolve(&self, text: &str) -> Option<&str> {
        self.choices
            .iter()
            .find(|c| {
                if self.case_sensitive {
                    c.as_str() == text
                } else {
                    c.to_lowercase() == text.to_lowercase()
                }
            })
            .map(String::as_str)
    }

    fn resolve_or_reject(&self, part: &str, whole: &str) -> Result<String> {
        self.resolve(part)
            .map(str::to_string)
            .ok_or_else(|| self.reject(whole))
    }

    fn reject(&self, text: &str) -> Error {
        invalid(
            text,
            format!("\"{}\" must be one of {}", text, self.listing()),
            Some(self.choices.clone()),
        )
    }

    fn listing(&self) -> String {
        format!("[{}]", self.choices.join(" "))
    }

    fn describe(&self, prefix: &str) -> String {
        let suffix = if self.case_sensitive {
            " (case-sensitive)"
        } else {
            ""
        };
        format!("{} {}{}", prefix, self.listing(), suffix)
    }
}

/// One value from a fixed set, with an optional default.
#[derive(Debug, Clone, Default)]
pub struct Choice {
    pub options: ChoiceList,
    pub default: String,
    pub value: String,
    pub text: String,
}

impl Choice {
    pub fn new<S: AsRef<str>>(choices: &[S]) -> Self {
        Self {
            options: ChoiceList::new(choices),
            ..Self::default()
        }
    }

    pub fn case_sensitive(mut self) -> Self {
        self.options.case_sensitive = true;
        self
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self.value = self.default.clone();
        self
    }
}

impl FlagValue for Choice {
    fn set(&mut self, text: &str) -> Result<()> {
        self.text = text.to_string();
        self.value = self.options.resolve_or_reject(text, text)?;
        Ok(())
    }

    fn help(&self) -> String {
        self.options.describe("one of")
    }

    fn has_changed(&self) -> bool {
        self.value != self.default
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

/// Repeatable [`Choice`].
#[derive(Debug, Clone, Default)]
pub struct Choices {
    pub options: ChoiceList,
    pub values: Vec<String>,
    pub texts: Vec<String>,
}

impl Choices {
    pub fn new<S: AsRef<str>>(choices: &[S]) -> Self {
        Self {
            options: ChoiceList::new(choices),
            ..Self::default()
        }
    }
}

impl FlagValue for Choices {
    fn set(&mut self, text: &str) -> Result<()> {
        self.values.push(self.options.resolve_or_reject(text, text)?);
        self.texts.push(text.to_string());
        Ok(())
    }

    fn help(&self) -> String {
        self.options.describe("one of")
    }
}

impl fmt::Display for Choices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.values.join(","))
    }
}

/// Separated list of choices. Without `accumulate`, each `set` replaces the
/// previous list.
#[derive(Debug, Clone, Default)]
pub struct ChoicesCsv {
    pub options: ChoiceList,
    pub separator: String,
    pub accumulate: bool,
    pub values: Vec<String>,
    pub texts: Vec<String>,
}

impl ChoicesCsv {
    pub fn new<S: AsRef<str>>(choices: &[S]) -> Self {
        Self {
            options: ChoiceList::new(choices),
            ..Self::default()
        }
    }

    pub fn accumulate(mut self) -> Self {
        self.accumulate = true;
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}

impl FlagValue for ChoicesCsv {
    fn set(&mut self, text: &str) -> Result<()> {
        let parts = split_list(text, &self.separator);
        let resolved = parts
            .iter()
            .map(|part| self.options.resolve_or_reject(part, text))
            .collect::<Result<Vec<_>>>()?;

        if !self.accumulate {
            self.values.clear();
            self.texts.clear();
        }
        self.values.extend(resolved);
        self.texts.extend(parts.into_iter().map(str::to_string));
        Ok(())
    }

    fn help(&self) -> String {
        self.options
            .describe(&list_help(&self.separator, "values from"))
    }
}

impl fmt::Display for ChoicesCsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.values.join(","))
    }
}

/// Repeatable choice keeping distinct values, rendered sorted.
#[derive(Debug, Clone, Default)]
pub struct ChoiceSet {
    pub options: ChoiceList,
    pub values: BTreeSet<String>,
    pub texts: Vec<String>,
}

impl ChoiceSet {
    pub fn new<S: AsRef<str>>(choices: &[S]) -> Self {
        Self {
            options: ChoiceList::new(choices),
            ..Self::default()
        }
    }
}

impl FlagValue for ChoiceSet {
    fn set(&mut self, text: &str) -> Result<()> {
        let value = self.options.resolve_or_reject(text, text)?;
        self.texts.push(value.clone());
        self.values.insert(value);
        Ok(())
    }

    fn help(&self) -> String {
        self.options.describe("one of")
    }
}

impl fmt::Display for ChoiceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<&str> = self.values.iter().map(String::as_str).collect();
        f.write_str(&values.join(","))
    }
}

/// Separated list of choices keeping distinct values.
#[derive(Debug, Clone, Default)]
pub struct ChoiceSetCsv {
    pub options: ChoiceList,
    pub separator: String,
    pub accumulate: bool,
    pub values: BTreeSet<String>,
    pub texts: Vec<String>,
}

impl ChoiceSetCsv {
    pub fn new<S: AsRef<str>>(choices: &[S]) -> Self {
        Self {
            options: ChoiceList::new(choices),
            ..Self::default()
        }
    }

    pub fn accumulate(mut self) -> Self {
        self.accumulate = true;
        self
    }
}

impl FlagValue for ChoiceSetCsv {
    fn set(&mut self, text: &str) -> Result<()> {
        let parts = split_list(text, &self.separator);
        let resolved = parts
            .iter()
            .map(|part| self.options.resolve_or_reject(part, text))
            .collect::<Result<Vec<_>>>()?;

        if !self.accumulate {
            self.values.clear();
        }
        self.values.extend(resolved);
        self.texts.extend(parts.into_iter().map(str::to_string));
        Ok(())
    }

    fn help(&self) -> String {
        self.options
            .describe(&list_help(&self.separator, "values from"))
    }
}

impl fmt::Display for ChoiceSetCsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values: Vec<&str> = self.values.iter().map(String::as_str).collect();
        f.write_str(&values.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem(err: &Error) -> &str {
        err.details["problem"].as_str().unwrap_or_default()
    }

    #[test]
    fn choice_is_case_insensitive_by_default() {
        let mut flag = Choice::new(&["json", "yaml"]);
        flag.set("JSON").unwrap();
        assert_eq!(flag.value, "json");
        assert_eq!(flag.text, "JSON");
        assert_eq!(flag.to_string(), "json");
    }

    #[test]
    fn case_sensitive_choice_rejects_other_case() {
        let mut flag = Choice::new(&["json", "yaml"]).case_sensitive();
        let err = flag.set("JSON").unwrap_err();
        assert_eq!(problem(&err), "\"JSON\" must be one of [json yaml]");
        assert_eq!(flag.help(), "one of [json yaml] (case-sensitive)");
    }

    #[test]
    fn choice_tracks_default() {
        let mut flag = Choice::new(&["a", "b"]).with_default("a");
        assert!(!flag.has_changed());
        flag.set("b").unwrap();
        assert!(flag.has_changed());
        flag.set("A").unwrap();
        assert!(!flag.has_changed());
    }

    #[test]
    fn choices_accumulate() {
        let mut flag = Choices::new(&["a", "b", "c"]);
        flag.set("a").unwrap();
        flag.set("C").unwrap();
        assert_eq!(flag.to_string(), "a,c");
        assert!(flag.set("z").is_err());
        assert_eq!(flag.values.len(), 2);
    }

    #[test]
    fn csv_choices_report_whole_argument() {
        let mut flag = ChoicesCsv::new(&["a", "b"]);
        flag.set("a, b").unwrap();
        assert_eq!(flag.to_string(), "a,b");
        let err = flag.set("a,z").unwrap_err();
        assert_eq!(problem(&err), "\"a,z\" must be one of [a b]");
        assert_eq!(flag.to_string(), "a,b");
    }

    #[test]
    fn csv_choices_replace_unless_accumulating() {
        let mut flag = ChoicesCsv::new(&["a", "b"]).separator("|");
        flag.set("a|b").unwrap();
        flag.set("b").unwrap();
        assert_eq!(flag.to_string(), "b");
        assert_eq!(flag.help(), "\"|\"-separated list of values from [a b]");

        let mut flag = ChoicesCsv::new(&["a", "b"]).accumulate();
        flag.set("a").unwrap();
        flag.set("b").unwrap();
        assert_eq!(flag.to_string(), "a,b");
    }

    #[test]
    fn choice_sets_are_distinct_and_sorted() {
        let mut flag = ChoiceSet::new(&["x", "y", "z"]);
        for text in ["z", "x", "Z"] {
            flag.set(text).unwrap();
        }
        assert_eq!(flag.to_string(), "x,z");
        assert_eq!(flag.texts.len(), 3);

        let mut flag = ChoiceSetCsv::new(&["x", "y", "z"]).accumulate();
        flag.set("y,x,y").unwrap();
        flag.set("z").unwrap();
        assert_eq!(flag.to_string(), "x,y,z");
    }
}
