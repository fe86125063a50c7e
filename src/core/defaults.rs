use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use chrono_tz::Tz;

use crate::date::{HTML_DATE_FORMAT, LOCAL_ZONE};
use crate::error::{Error, Result};
use crate::utils::io;
use crate::paths;

/// Root configuration structure for funcmap.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FuncmapConfig {
    #[serde(default)]
    pub registry: RegistryConfig,

    #[serde(default)]
    pub dates: DateConfig,
}

/// Which helpers a registry exposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RegistryConfig {
    /// Leave out helpers that read the clock, RNG, or environment.
    #[serde(default)]
    pub hermetic_only: bool,

    /// Helper names to leave out.
    #[serde(default)]
    pub disabled: Vec<String>,
}

impl RegistryConfig {
    pub fn hermetic() -> Self {
        Self {
            hermetic_only: true,
            ..Self::default()
        }
    }
}

/// Zone and format used by the date helpers that do not take them explicitly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateConfig {
    #[serde(default = "default_zone")]
    pub zone: String,

    #[serde(default = "default_html_format")]
    pub html_format: String,
}

impl Default for DateConfig {
    fn default() -> Self {
        Self {
            zone: default_zone(),
            html_format: default_html_format(),
        }
    }
}

fn default_zone() -> String {
    LOCAL_ZONE.to_string()
}

fn default_html_format() -> String {
    HTML_DATE_FORMAT.to_string()
}

impl FuncmapConfig {
    /// Reject values the helpers cannot use.
    pub fn validate(&self) -> Result<()> {
        let zone = &self.dates.zone;
        if zone != LOCAL_ZONE && zone.parse::<Tz>().is_err() {
            return Err(Error::config_invalid_value(
                "dates.zone",
                Some(zone.clone()),
                "not an IANA time zone name or \"Local\"",
            ));
        }
        if self.dates.html_format.trim().is_empty() {
            return Err(Error::config_invalid_value(
                "dates.html_format",
                Some(self.dates.html_format.clone()),
                "format must not be empty",
            ));
        }
        Ok(())
    }
}

// =============================================================================
// Loading functions
// =============================================================================

/// Load funcmap.json, falling back to built-in defaults when it is missing
/// or invalid.
pub fn load_config() -> FuncmapConfig {
    match paths::funcmap_json() {
        Ok(path) => load_config_or_default(&path),
        Err(_) => FuncmapConfig::default(),
    }
}

/// Load the config at `path`, falling back to defaults on any error.
pub fn load_config_or_default(path: &Path) -> FuncmapConfig {
    if !path.exists() {
        return FuncmapConfig::default();
    }
    load_config_from_file(path).unwrap_or_else(|e| {
        log_status!("config", "Ignoring {}: {}", path.display(), e.message);
        FuncmapConfig::default()
    })
}

/// Read and validate the config at `path`.
pub fn load_config_from_file(path: &Path) -> Result<FuncmapConfig> {
    let content = io::read_file(path, &format!("read {}", path.display()))?;

    let config: FuncmapConfig = serde_json::from_str(&content)
        .map_err(|e| Error::config_invalid_json(path.display().to_string(), e))?;

    config.validate()?;
    Ok(config)
}

/// Save config to funcmap.json (creates if missing).
pub fn save_config(config: &FuncmapConfig) -> Result<()> {
    save_config_to(&paths::funcmap_json()?, config)
}

pub fn save_config_to(path: &Path, config: &FuncmapConfig) -> Result<()> {
    config.validate()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            Error::internal_io(e.to_string(), Some(format!("create {}", parent.display())))
        })?;
    }

    let content = serde_json::to_string_pretty(config)
        .map_err(|e| {
            Error::internal_json(e.to_string(), Some("serialize funcmap.json".to_string()))
        })?;

    io::write_file_atomic(path, &content, &format!("write {}", path.display()))
}

/// Check if funcmap.json exists
pub fn config_exists() -> bool {
    paths::funcmap_json()
        .map(|p| p.exists())
        .unwrap_or(false)
}

/// Delete funcmap.json (reset to defaults)
pub fn reset_config() -> Result<bool> {
    reset_config_at(&paths::funcmap_json()?)
}

pub fn reset_config_at(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    fs::remove_file(path).map_err(|e| {
        Error::internal_io(e.to_string(), Some(format!("delete {}", path.display())))
    })?;
    Ok(true)
}

/// Get the path to funcmap.json (for display purposes)
pub fn config_path() -> Result<String> {
    Ok(paths::funcmap_json()?.display().to_string())
}

/// Get built-in defaults (ignoring any file config)
pub fn builtin_defaults() -> FuncmapConfig {
    FuncmapConfig::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use tempfile::TempDir;

    #[test]
    fn partial_file_fills_defaults() {
        let config: FuncmapConfig =
            serde_json::from_str(r#"{"registry": {"hermetic_only": true}}"#).unwrap();
        assert!(config.registry.hermetic_only);
        assert!(config.registry.disabled.is_empty());
        assert_eq!(config.dates, DateConfig::default());
    }

    #[test]
    fn save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join(paths::CONFIG_FILE);

        let mut config = FuncmapConfig::default();
        config.registry.disabled.push("env".to_string());
        config.dates.zone = "Europe/Paris".to_string();
        save_config_to(&path, &config).unwrap();

        assert_eq!(load_config_from_file(&path).unwrap(), config);
    }

    #[test]
    fn invalid_json_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(paths::CONFIG_FILE);
        fs::write(&path, "{ not json").unwrap();

        let err = load_config_from_file(&path).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalidJson);
        assert_eq!(load_config_or_default(&path), FuncmapConfig::default());
    }

    #[test]
    fn unknown_zone_is_rejected() {
        let mut config = FuncmapConfig::default();
        config.dates.zone = "Mars/Olympus".to_string();
        let err = config.validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalidValue);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(paths::CONFIG_FILE);
        assert_eq!(load_config_or_default(&path), builtin_defaults());
        assert!(!reset_config_at(&path).unwrap());
    }

    #[test]
    fn reset_removes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(paths::CONFIG_FILE);
        save_config_to(&path, &FuncmapConfig::default()).unwrap();
        assert!(reset_config_at(&path).unwrap());
        assert!(!path.exists());
    }
}
