use clap::{Args, Subcommand};
use serde::Serialize;
use serde_json::Value;

use funcmap::defaults::{self, FuncmapConfig};
use funcmap::validation::require;

use super::CmdResult;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Display configuration (file merged over defaults)
    Show {
        /// Show only built-in defaults (ignore funcmap.json)
        #[arg(long)]
        builtin: bool,
    },
    /// Set a configuration value at a JSON pointer path
    Set {
        /// JSON pointer path (e.g., /dates/zone)
        pointer: String,
        /// Value to set (JSON, or plain text for strings)
        value: String,
    },
    /// Restore the built-in default at a JSON pointer path
    Unset {
        /// JSON pointer path (e.g., /registry/disabled)
        pointer: String,
    },
    /// Reset configuration to built-in defaults (deletes funcmap.json)
    Reset,
    /// Show the path to funcmap.json
    Path,
}

#[derive(Debug, Default, Serialize)]
pub struct ConfigOutput {
    command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<FuncmapConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    defaults: Option<FuncmapConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exists: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pointer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deleted: Option<bool>,
}

pub fn run(args: ConfigArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<ConfigOutput> {
    match args.command {
        ConfigCommand::Show { builtin } => show(builtin),
        ConfigCommand::Set { pointer, value } => set(&pointer, &value),
        ConfigCommand::Unset { pointer } => unset(&pointer),
        ConfigCommand::Reset => reset(),
        ConfigCommand::Path => path(),
    }
}

fn show(builtin: bool) -> CmdResult<ConfigOutput> {
    let output = if builtin {
        ConfigOutput {
            command: "config.show".to_string(),
            defaults: Some(defaults::builtin_defaults()),
            ..Default::default()
        }
    } else {
        ConfigOutput {
            command: "config.show".to_string(),
            config: Some(defaults::load_config()),
            ..Default::default()
        }
    };
    Ok((output, 0))
}

fn set(pointer: &str, value_str: &str) -> CmdResult<ConfigOutput> {
    let value = serde_json::from_str(value_str)
        .unwrap_or_else(|_| Value::String(value_str.to_string()));
    let config = update_at(pointer, value.clone())?;

    Ok((
        ConfigOutput {
            command: "config.set".to_string(),
            config: Some(config),
            pointer: Some(pointer.to_string()),
            value: Some(value),
            ..Default::default()
        },
        0,
    ))
}

fn unset(pointer: &str) -> CmdResult<ConfigOutput> {
    let builtin = to_json(&defaults::builtin_defaults())?;
    let value = lookup(&builtin, pointer)?.clone();
    let config = update_at(pointer, value.clone())?;

    Ok((
        ConfigOutput {
            command: "config.unset".to_string(),
            config: Some(config),
            pointer: Some(pointer.to_string()),
            value: Some(value),
            ..Default::default()
        },
        0,
    ))
}

fn reset() -> CmdResult<ConfigOutput> {
    let deleted = defaults::reset_config()?;

    Ok((
        ConfigOutput {
            command: "config.reset".to_string(),
            defaults: Some(defaults::builtin_defaults()),
            path: Some(defaults::config_path()?),
            deleted: Some(deleted),
            ..Default::default()
        },
        0,
    ))
}

fn path() -> CmdResult<ConfigOutput> {
    Ok((
        ConfigOutput {
            command: "config.path".to_string(),
            path: Some(defaults::config_path()?),
            exists: Some(defaults::config_exists()),
            ..Default::default()
        },
        0,
    ))
}

/// Replace the value at `pointer` in the stored config and save it.
fn update_at(pointer: &str, value: Value) -> funcmap::Result<FuncmapConfig> {
    let mut config_json = to_json(&defaults::load_config())?;
    let slot = lookup_mut(&mut config_json, pointer)?;
    *slot = value;

    let config: FuncmapConfig = serde_json::from_value(config_json).map_err(|e| {
        funcmap::Error::validation_invalid_json(e, Some("deserialize config".to_string()))
    })?;
    defaults::save_config(&config)?;
    Ok(config)
}

fn to_json(config: &FuncmapConfig) -> funcmap::Result<Value> {
    serde_json::to_value(config).map_err(|e| {
        funcmap::Error::internal_unexpected(format!("Failed to serialize config: {}", e))
    })
}

fn check_pointer(pointer: &str) -> funcmap::Result<()> {
    if !pointer.starts_with('/') || pointer == "/" {
        return Err(funcmap::Error::validation_invalid_argument(
            "pointer",
            format!("JSON pointer must start with '/' and name a key: {}", pointer),
            None,
            None,
        ));
    }
    Ok(())
}

fn with_keys_hint(err: funcmap::Error) -> funcmap::Error {
    err.with_hint("Run 'funcmap config show --builtin' to see available keys")
}

fn lookup<'a>(root: &'a Value, pointer: &str) -> funcmap::Result<&'a Value> {
    check_pointer(pointer)?;
    let problem = format!("No configuration key at {}", pointer);
    require(root.pointer(pointer), "pointer", &problem).map_err(with_keys_hint)
}

fn lookup_mut<'a>(root: &'a mut Value, pointer: &str) -> funcmap::Result<&'a mut Value> {
    check_pointer(pointer)?;
    let problem = format!("No configuration key at {}", pointer);
    require(root.pointer_mut(pointer), "pointer", &problem).map_err(with_keys_hint)
}

#[cfg(test)]
mod tests {
    use super::*;
    use funcmap::ErrorCode;

    #[test]
    fn pointers_resolve_known_keys_only() {
        let json = to_json(&defaults::builtin_defaults()).unwrap();
        assert_eq!(lookup(&json, "/dates/zone").unwrap(), "Local");
        assert_eq!(
            lookup(&json, "/dates/nope").unwrap_err().code,
            ErrorCode::ValidationInvalidArgument
        );
        assert!(lookup(&json, "dates/zone").is_err());
        assert!(lookup(&json, "/").is_err());
    }
}
