//! Local instance configuration loading
//!
//! Loads an `InstanceConfig` from a TOML file, with the file location
//! discoverable through the `KUMARA_CONFIG` environment variable. Fields
//! are validated at load time; the resolver itself never validates.

use std::fs;
use std::path::{Path, PathBuf};

use kumara_api::{InstanceConfig, validate_app_name, validate_hostname, validate_url_path};
use tracing::debug;

use crate::error::{ClientError, Result};

/// Environment variable pointing at the instance config file
pub const CONFIG_PATH_ENV: &str = "KUMARA_CONFIG";

/// Config file path from the environment, or the default location
pub fn config_file_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }

    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".kumara").join("instance.toml");
    }

    PathBuf::from(".kumara").join("instance.toml")
}

/// Load and validate an instance configuration from a TOML file
pub fn load_instance_config(path: &Path) -> Result<InstanceConfig> {
    let content = fs::read_to_string(path)?;
    let config: InstanceConfig = toml::from_str(&content)
        .map_err(|e| ClientError::Config(format!("{}: {}", path.display(), e)))?;

    validate_instance_config(&config)?;

    debug!(path = %path.display(), hostname = %config.hostname, "loaded instance config");

    Ok(config)
}

/// Validate the fields of an instance configuration
pub fn validate_instance_config(config: &InstanceConfig) -> Result<()> {
    validate_hostname(&config.hostname)?;
    validate_app_name(&config.app_name)?;
    validate_url_path(&config.health_check_url_path)?;
    validate_url_path(&config.status_page_url_path)?;
    validate_url_path(&config.home_page_url_path)?;
    Ok(())
}
