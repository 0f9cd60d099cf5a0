// Registry client models: instance configuration, resolved management
// metadata, and the advertised instance record embedded in registration
// payloads.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Default relative path for the health-check endpoint
pub const DEFAULT_HEALTH_CHECK_URL_PATH: &str = "/actuator/health";

/// Default relative path for the status-page endpoint
pub const DEFAULT_STATUS_PAGE_URL_PATH: &str = "/actuator/info";

/// Default relative path for the home page
pub const DEFAULT_HOME_PAGE_URL_PATH: &str = "/";

/// Metadata map key carrying the advertised management port
pub const MANAGEMENT_PORT_KEY: &str = "management.port";

// Instance configuration supplied by the hosting application.
//
// Relative `*_url_path` fields are combined with host and port at
// registration time; the optional absolute `*_url` fields, when set,
// override any derived value.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct InstanceConfig {
    pub hostname: String,
    pub ip_address: String,
    pub app_name: String,
    pub instance_id: Option<String>,
    pub non_secure_port: u16,
    pub secure_port: u16,
    pub non_secure_port_enabled: bool,
    pub secure_port_enabled: bool,
    pub prefer_ip_address: bool,
    pub health_check_url_path: String,
    pub status_page_url_path: String,
    pub home_page_url_path: String,
    pub health_check_url: Option<String>,
    pub secure_health_check_url: Option<String>,
    pub status_page_url: Option<String>,
    pub home_page_url: Option<String>,
    pub metadata_map: HashMap<String, String>,
}

impl Default for InstanceConfig {
    fn default() -> Self {
        Self {
            hostname: String::new(),
            ip_address: String::new(),
            app_name: "unknown".to_string(),
            instance_id: None,
            non_secure_port: 80,
            secure_port: 443,
            non_secure_port_enabled: true,
            secure_port_enabled: false,
            prefer_ip_address: false,
            health_check_url_path: DEFAULT_HEALTH_CHECK_URL_PATH.to_string(),
            status_page_url_path: DEFAULT_STATUS_PAGE_URL_PATH.to_string(),
            home_page_url_path: DEFAULT_HOME_PAGE_URL_PATH.to_string(),
            health_check_url: None,
            secure_health_check_url: None,
            status_page_url: None,
            home_page_url: None,
            metadata_map: HashMap::new(),
        }
    }
}

impl InstanceConfig {
    pub fn new(hostname: impl Into<String>, app_name: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            app_name: app_name.into(),
            ..Default::default()
        }
    }

    /// Port the instance actually serves application traffic on
    pub fn advertised_port(&self) -> u16 {
        if self.secure_port_enabled && !self.non_secure_port_enabled {
            self.secure_port
        } else {
            self.non_secure_port
        }
    }

    /// Host name to advertise, honoring `prefer_ip_address`
    pub fn advertised_host(&self) -> &str {
        if self.prefer_ip_address && !self.ip_address.is_empty() {
            &self.ip_address
        } else {
            &self.hostname
        }
    }
}

/// Resolved management endpoint URLs for a single instance.
///
/// Either fully populated or not produced at all; the resolver returns
/// `None` instead of a partially filled value when the effective port is
/// not yet known.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ManagementMetadata {
    pub health_check_url: String,
    pub secure_health_check_url: String,
    pub status_page_url: String,
    pub management_port: u16,
}

impl ManagementMetadata {
    pub fn new(
        health_check_url: String,
        secure_health_check_url: String,
        status_page_url: String,
        management_port: u16,
    ) -> Self {
        Self {
            health_check_url,
            secure_health_check_url,
            status_page_url,
            management_port,
        }
    }
}

// Advertised instance record as embedded in a registration payload.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ServiceInstance {
    pub instance_id: String,
    pub app_name: String,
    pub host_name: String,
    pub ip_addr: String,
    pub port: u16,
    pub secure_port: u16,
    pub secure_port_enabled: bool,
    pub home_page_url: String,
    pub status_page_url: String,
    pub health_check_url: String,
    pub secure_health_check_url: String,
    pub metadata: HashMap<String, String>,
}

impl ServiceInstance {
    /// Generate instance key for map storage
    pub fn key(&self) -> String {
        format!("{}#{}#{}", self.app_name, self.host_name, self.port)
    }
}
