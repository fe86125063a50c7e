//! Semantic version parsing and constraint checks.
//!
//! Input is accepted loosely: a leading `v` is ignored and missing minor or
//! patch components count as zero, so `v1.2` parses as `1.2.0`.

use semver::{Version, VersionReq};

use crate::error::{Error, Result};
use crate::value::{Record, Value};

pub const VERSION_TYPE: &str = "*semver.Version";

fn parse(text: &str) -> Result<Version> {
    let trimmed = text.trim();
    let bare = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(&normalize(bare)).map_err(|e| {
        Error::validation_invalid_argument("version", e.to_string(), Some(text.to_string()), None)
    })
}

/// Pad `1` or `1.2` (with any suffix) out to three numeric components.
fn normalize(bare: &str) -> String {
    let split_at = bare.find(['-', '+']).unwrap_or(bare.len());
    let (core, suffix) = bare.split_at(split_at);
    let missing = 2usize.saturating_sub(core.matches('.').count());
    format!("{}{}{}", core, ".0".repeat(missing), suffix)
}

/// Parse `text` into a record with `major`, `minor`, `patch`, `prerelease`,
/// `metadata`, and the `original` text.
pub fn semver(text: &str) -> Result<Value> {
    let version = parse(text)?;
    Ok(Value::Record(
        Record::new(VERSION_TYPE)
            .with_field("major", version.major)
            .with_field("minor", version.minor)
            .with_field("patch", version.patch)
            .with_field("prerelease", version.pre.as_str())
            .with_field("metadata", version.build.as_str())
            .with_field("original", text),
    ))
}

/// Whether `version` satisfies `constraint` (`^1.2`, `>=1.0, <2`, `~1.4`, `*`).
pub fn semver_compare(constraint: &str, version: &str) -> Result<bool> {
    let req = VersionReq::parse(constraint.trim()).map_err(|e| {
        Error::validation_invalid_argument(
            "constraint",
            e.to_string(),
            Some(constraint.to_string()),
            None,
        )
    })?;
    Ok(req.matches(&parse(version)?))
}
