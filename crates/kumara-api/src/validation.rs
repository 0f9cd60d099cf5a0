//! Input validation utilities for Kumara models
//!
//! Used when instance configuration is loaded from external sources.
//! The metadata resolver itself never validates; these checks run at
//! config-load time only.

use validator::ValidationError;

/// Maximum length for hostname field
pub const MAX_HOSTNAME_LENGTH: usize = 253;

/// Maximum length for app_name field
pub const MAX_APP_NAME_LENGTH: usize = 255;

/// Maximum length for URL path fields
pub const MAX_URL_PATH_LENGTH: usize = 1024;

/// Validate hostname format
///
/// Hostname must:
/// - Not be empty
/// - Not exceed MAX_HOSTNAME_LENGTH characters
/// - Contain only alphanumeric characters, dots, and hyphens
pub fn validate_hostname(hostname: &str) -> Result<(), ValidationError> {
    if hostname.is_empty() {
        return Err(ValidationError::new("hostname_empty"));
    }
    if hostname.len() > MAX_HOSTNAME_LENGTH {
        return Err(ValidationError::new("hostname_too_long"));
    }
    if !hostname
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return Err(ValidationError::new("hostname_invalid_chars"));
    }
    Ok(())
}

/// Validate app_name format
pub fn validate_app_name(app_name: &str) -> Result<(), ValidationError> {
    if app_name.is_empty() {
        return Err(ValidationError::new("app_name_empty"));
    }
    if app_name.len() > MAX_APP_NAME_LENGTH {
        return Err(ValidationError::new("app_name_too_long"));
    }
    if !app_name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_')
    {
        return Err(ValidationError::new("app_name_invalid_chars"));
    }
    Ok(())
}

/// Validate a relative URL path (can be empty for no path)
pub fn validate_url_path(path: &str) -> Result<(), ValidationError> {
    if path.len() > MAX_URL_PATH_LENGTH {
        return Err(ValidationError::new("url_path_too_long"));
    }
    if path.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(ValidationError::new("url_path_invalid_chars"));
    }
    Ok(())
}
