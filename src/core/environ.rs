//! Process environment lookups.

use regex::{Captures, Regex};

use crate::error::{Error, Result};

/// Value of `name`, or `""` when unset or not valid UTF-8.
pub fn env(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}

/// Replace `$VAR` and `${VAR}` with environment values. Unset variables
/// expand to nothing; a `$` not followed by a name is kept.
pub fn expandenv(text: &str) -> Result<String> {
    expand_with(text, env)
}

/// Expand variables using `lookup` in place of the environment.
pub fn expand_with<F>(text: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> String,
{
    let re = Regex::new(r"\$(?:\{([^}]*)\}|([A-Za-z0-9_]+))")
        .map_err(|e| Error::internal_unexpected(e.to_string()))?;
    let expanded = re.replace_all(text, |caps: &Captures<'_>| {
        caps.get(1)
            .or_else(|| caps.get(2))
            .map(|name| lookup(name.as_str()))
            .unwrap_or_default()
    });
    Ok(expanded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> String {
        match name {
            "HOME" => "/home/me".to_string(),
            "USER" => "me".to_string(),
            _ => String::new(),
        }
    }

    #[test]
    fn expands_both_forms() {
        assert_eq!(expand_with("$HOME/x", lookup).unwrap(), "/home/me/x");
        assert_eq!(expand_with("${USER}-1", lookup).unwrap(), "me-1");
        assert_eq!(expand_with("[$MISSING]", lookup).unwrap(), "[]");
    }

    #[test]
    fn lone_dollar_is_kept() {
        assert_eq!(expand_with("cost: $ 5", lookup).unwrap(), "cost: $ 5");
    }

    #[test]
    fn env_reads_process_environment() {
        assert_eq!(env("FUNCMAP_SURELY_UNSET_VARIABLE"), "");
        if let Ok(path) = std::env::var("PATH") {
            assert_eq!(env("PATH"), path);
        }
    }
}
