use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

pub const CONFIG_FILE: &str = "funcmap.json";

/// Base funcmap config directory (~/.config/funcmap/, %APPDATA%\funcmap on Windows)
pub fn funcmap() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected("APPDATA environment variable not set on Windows")
        })?;
        Ok(PathBuf::from(appdata).join("funcmap"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected("HOME environment variable not set on Unix-like system")
        })?;
        Ok(PathBuf::from(home).join(".config").join("funcmap"))
    }
}

/// Global funcmap.json config file path
pub fn funcmap_json() -> Result<PathBuf> {
    Ok(funcmap()?.join(CONFIG_FILE))
}
