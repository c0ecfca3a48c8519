//! Configuration for nncalc
//!
//! Settings come from an INI file, then command line arguments override
//! them. The file is optional; a missing file means defaults.
//!
//! ```ini
//! [registers]
//! top = 0
//! bottom = 0
//!
//! [display]
//! group_digits = false
//! ```

use crate::calc::natural::BigNatural;
use crate::cmd_args::CommandLineArgs;
use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "~/.nncalc/config";

/// Environment variable overriding the configuration file path
pub const CONFIG_PATH_ENV_VAR: &str = "NNCALC_CONFIG_PATH";

/// Environment variable holding the log filter
pub const LOG_LEVEL_ENV_VAR: &str = "NNCALC_LOG_LEVEL";

const REGISTERS_SECTION: &str = "registers";
const DISPLAY_SECTION: &str = "display";

/// Get the configuration file path, checking the environment variable first,
/// then falling back to the default
pub fn get_config_path() -> String {
    std::env::var_os(CONFIG_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string())
}

/// Errors while loading the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: ini::Error,
    },

    #[error("invalid value '{value}' for [{section}] {key}")]
    InvalidValue {
        section: &'static str,
        key: &'static str,
        value: String,
    },
}

/// Effective start-up settings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub top: BigNatural,
    pub bottom: BigNatural,
    pub group_digits: bool,
}

impl Settings {
    /// Load settings from `path`, expanding `~`. A missing file yields defaults.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let expanded = PathBuf::from(shellexpand::tilde(path).into_owned());
        if !expanded.exists() {
            tracing::debug!(
                "Configuration '{}' not found, using defaults",
                expanded.display()
            );
            return Ok(Self::default());
        }

        tracing::debug!("Loading configuration from '{}'", expanded.display());
        let ini = Ini::load_from_file(&expanded).map_err(|source| ConfigError::Read {
            path: expanded.clone(),
            source,
        })?;
        Self::from_ini(&ini)
    }

    /// Resolve the configuration path (arguments, environment, default),
    /// load it and apply argument overrides
    pub fn resolve(args: &CommandLineArgs) -> Result<Self, ConfigError> {
        let path = match args.config() {
            Some(path) => path.to_string_lossy().into_owned(),
            None => get_config_path(),
        };
        let mut settings = Self::load(&path)?;
        settings.apply_args(args);
        Ok(settings)
    }

    fn from_ini(ini: &Ini) -> Result<Self, ConfigError> {
        let mut settings = Self::default();

        if let Some(value) = ini.get_from(Some(REGISTERS_SECTION), "top") {
            settings.top = parse_register(value, "top")?;
        }
        if let Some(value) = ini.get_from(Some(REGISTERS_SECTION), "bottom") {
            settings.bottom = parse_register(value, "bottom")?;
        }
        if let Some(value) = ini.get_from(Some(DISPLAY_SECTION), "group_digits") {
            settings.group_digits =
                parse_bool(value).ok_or_else(|| ConfigError::InvalidValue {
                    section: DISPLAY_SECTION,
                    key: "group_digits",
                    value: value.to_string(),
                })?;
        }

        Ok(settings)
    }

    /// Command line values win over file values
    pub fn apply_args(&mut self, args: &CommandLineArgs) {
        if let Some(top) = args.top() {
            self.top = top.clone();
        }
        if let Some(bottom) = args.bottom() {
            self.bottom = bottom.clone();
        }
        if args.group_digits() {
            self.group_digits = true;
        }
    }

    /// Load from a specific file, bypassing path resolution
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        Self::load(&path.to_string_lossy())
    }
}

fn parse_register(value: &str, key: &'static str) -> Result<BigNatural, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        section: REGISTERS_SECTION,
        key,
        value: value.to_string(),
    })
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
