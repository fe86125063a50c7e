//! Regular expression helpers. Patterns compile per call; an invalid pattern
//! is a `validation.invalid_argument` error.

use regex::Regex;

use crate::error::{Error, Result};

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| {
        Error::validation_invalid_argument("regex", e.to_string(), Some(pattern.to_string()), None)
    })
}

/// `n < 0` means no limit.
fn limit(n: i64) -> usize {
    usize::try_from(n).unwrap_or(usize::MAX)
}

pub fn regex_match(pattern: &str, s: &str) -> Result<bool> {
    Ok(compile(pattern)?.is_match(s))
}

/// Leftmost match, or `""`.
pub fn regex_find(pattern: &str, s: &str) -> Result<String> {
    Ok(compile(pattern)?
        .find(s)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default())
}

pub fn regex_find_all(pattern: &str, s: &str, n: i64) -> Result<Vec<String>> {
    Ok(compile(pattern)?
        .find_iter(s)
        .take(limit(n))
        .map(|m| m.as_str().to_string())
        .collect())
}

/// Replace every match, expanding `$1` and `${name}` in `replacement`.
pub fn regex_replace_all(pattern: &str, s: &str, replacement: &str) -> Result<String> {
    Ok(compile(pattern)?.replace_all(s, replacement).into_owned())
}

pub fn regex_replace_all_literal(pattern: &str, s: &str, replacement: &str) -> Result<String> {
    Ok(compile(pattern)?
        .replace_all(s, regex::NoExpand(replacement))
        .into_owned())
}

/// Split around matches into at most `n` pieces. `n == 0` yields nothing.
pub fn regex_split(pattern: &str, s: &str, n: i64) -> Result<Vec<String>> {
    let re = compile(pattern)?;
    let pieces: Vec<String> = match n {
        0 => Vec::new(),
        n if n < 0 => re.split(s).map(str::to_string).collect(),
        n => re.splitn(s, limit(n)).map(str::to_string).collect(),
    };
    Ok(pieces)
}
