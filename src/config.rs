use std::fs;
use std::path::PathBuf;

use clap::Args;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::ConfigError;

/// Root of the live listing service
pub const DEFAULT_BASE_URL: &str = "https://qa-internship.avito.com";

/// Seller that owns every item the scenarios create
pub const DEFAULT_SELLER_ID: i64 = 515515;

/// Name of the config file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration for a listing-probe run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Root URL of the service under test
    pub base_url: String,
    /// Seller id used to create and list items
    pub seller_id: i64,
}

/// Update structure for Config with all fields optional
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ConfigUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seller_id: Option<i64>,
}

/// Command line arguments shared by every listing-probe command
#[derive(Args, Debug, Default)]
pub struct CliArgs {
    /// Root URL of the listing service
    #[clap(long, env = "LISTING_PROBE_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Seller id used to create and list items
    #[clap(long, env = "LISTING_PROBE_SELLER_ID", global = true, allow_hyphen_values = true)]
    pub seller_id: Option<i64>,

    /// Path to a TOML config file
    #[clap(long, env = "LISTING_PROBE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Debug logging
    #[clap(long, env = "LISTING_PROBE_DEBUG", default_value_t = false, global = true)]
    pub debug: bool,
}

impl Config {
    /// Applies a config update to the current configuration
    pub fn apply_update(self, update: ConfigUpdate) -> Self {
        Self {
            base_url: update.base_url.unwrap_or(self.base_url),
            seller_id: update.seller_id.unwrap_or(self.seller_id),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        base_config()
    }
}

/// Returns the base (default) configuration
pub fn base_config() -> Config {
    Config {
        base_url: DEFAULT_BASE_URL.to_string(),
        seller_id: DEFAULT_SELLER_ID,
    }
}

/// Loads configuration from a TOML file
///
/// A missing file is not an error: it yields an empty update.
pub fn config_from_file(config_path: Option<PathBuf>) -> Result<ConfigUpdate, ConfigError> {
    let Some(config_path) = config_path else {
        return Ok(ConfigUpdate::default());
    };

    if !config_path.exists() {
        info!("Config file not found at {:?}, using defaults", config_path);
        return Ok(ConfigUpdate::default());
    }

    let path = config_path.display().to_string();
    let content = fs::read_to_string(&config_path).map_err(|source| ConfigError::Read {
        path: path.clone(),
        source,
    })?;

    let update = toml::from_str::<ConfigUpdate>(&content)
        .map_err(|source| ConfigError::Parse { path, source })?;
    info!("Loaded configuration from {:?}", config_path);
    Ok(update)
}

/// Loads configuration from command line arguments
pub fn config_from_args(args: &CliArgs) -> ConfigUpdate {
    ConfigUpdate {
        base_url: args.base_url.clone(),
        seller_id: args.seller_id,
    }
}

/// Gets the platform config directory, if one can be determined
pub fn get_config_dir_path() -> Option<PathBuf> {
    match ProjectDirs::from("com", "listing-probe", "listing-probe") {
        Some(proj_dirs) => Some(proj_dirs.config_dir().to_path_buf()),
        None => {
            warn!("Could not determine config directory, skipping config file");
            None
        }
    }
}

/// Picks the config file: an explicit path wins over the platform default
pub fn resolve_config_file(args: &CliArgs) -> Option<PathBuf> {
    args.config
        .clone()
        .or_else(|| get_config_dir_path().map(|dir| dir.join(CONFIG_FILE_NAME)))
}

/// Gets the complete configuration by combining defaults with
/// values from the config file and from command line arguments or
/// environment variables, in order of increasing precedence
///
/// An unreadable or malformed config file is logged and skipped.
pub fn get_config(args: &CliArgs) -> Config {
    let file_update = match config_from_file(resolve_config_file(args)) {
        Ok(update) => update,
        Err(e) => {
            warn!("{}", e);
            ConfigUpdate::default()
        }
    };

    let config = base_config()
        .apply_update(file_update)
        .apply_update(config_from_args(args));

    info!(
        "Final configuration: base_url={}, seller_id={}",
        config.base_url, config.seller_id
    );

    config
}
