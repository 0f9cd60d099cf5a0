//! Registration-time instance derivation
//!
//! Pure steps that run before a registration payload is assembled: merging
//! resolved management metadata into the instance configuration, and
//! deriving the advertised instance record from it. No registry I/O here.

use kumara_api::{InstanceConfig, MANAGEMENT_PORT_KEY, ManagementMetadata, ServiceInstance};
use tracing::debug;

/// Merge resolved management metadata into the instance configuration.
///
/// Explicitly configured URLs always win over derived ones, and an existing
/// `management.port` metadata entry is never overwritten.
pub fn apply_management_metadata(config: &mut InstanceConfig, metadata: &ManagementMetadata) {
    if is_blank(&config.status_page_url) {
        config.status_page_url = Some(metadata.status_page_url.clone());
    }
    if is_blank(&config.health_check_url) {
        config.health_check_url = Some(metadata.health_check_url.clone());
    }
    if config.secure_port_enabled
        && !metadata.secure_health_check_url.is_empty()
        && is_blank(&config.secure_health_check_url)
    {
        config.secure_health_check_url = Some(metadata.secure_health_check_url.clone());
    }

    config
        .metadata_map
        .entry(MANAGEMENT_PORT_KEY.to_string())
        .or_insert_with(|| metadata.management_port.to_string());

    debug!(
        management_port = metadata.management_port,
        health_check_url = %metadata.health_check_url,
        "applied management metadata to instance config"
    );
}

/// Derive the advertised instance record from the configuration.
pub fn derive_instance(config: &InstanceConfig) -> ServiceInstance {
    let host = config.advertised_host().to_string();
    let instance_id = config.instance_id.clone().unwrap_or_else(|| {
        format!(
            "{}:{}:{}",
            config.hostname,
            config.app_name,
            config.advertised_port()
        )
    });

    let home_page_url = explicit_or_derived(
        &config.home_page_url,
        "http",
        &host,
        config.non_secure_port,
        &config.home_page_url_path,
    );
    let status_page_url = explicit_or_derived(
        &config.status_page_url,
        "http",
        &host,
        config.non_secure_port,
        &config.status_page_url_path,
    );
    let health_check_url = explicit_or_derived(
        &config.health_check_url,
        "http",
        &host,
        config.non_secure_port,
        &config.health_check_url_path,
    );
    let secure_health_check_url = if config.secure_port_enabled {
        explicit_or_derived(
            &config.secure_health_check_url,
            "https",
            &host,
            config.secure_port,
            &config.health_check_url_path,
        )
    } else {
        String::new()
    };

    let instance = ServiceInstance {
        instance_id,
        app_name: config.app_name.clone(),
        host_name: host,
        ip_addr: config.ip_address.clone(),
        port: config.non_secure_port,
        secure_port: config.secure_port,
        secure_port_enabled: config.secure_port_enabled,
        home_page_url,
        status_page_url,
        health_check_url,
        secure_health_check_url,
        metadata: config.metadata_map.clone(),
    };

    debug!(instance_id = %instance.instance_id, app_name = %instance.app_name, "derived instance record");

    instance
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(|v| v.trim().is_empty())
}

fn explicit_or_derived(
    explicit: &Option<String>,
    scheme: &str,
    host: &str,
    port: u16,
    path: &str,
) -> String {
    match explicit.as_deref() {
        Some(url) if !url.trim().is_empty() => url.to_string(),
        _ => format!("{}://{}:{}/{}", scheme, host, port, path.trim_start_matches('/')),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> ManagementMetadata {
        ManagementMetadata::new(
            "http://host:8888/health".to_string(),
            String::new(),
            "http://host:8888/info".to_string(),
            8888,
        )
    }

    #[test]
    fn test_apply_sets_urls_and_port_entry() {
        let mut config = InstanceConfig::new("host", "app");
        apply_management_metadata(&mut config, &metadata());

        assert_eq!(
            config.health_check_url.as_deref(),
            Some("http://host:8888/health")
        );
        assert_eq!(
            config.status_page_url.as_deref(),
            Some("http://host:8888/info")
        );
        assert!(config.secure_health_check_url.is_none());
        assert_eq!(
            config.metadata_map.get(MANAGEMENT_PORT_KEY).map(String::as_str),
            Some("8888")
        );
    }

    #[test]
    fn test_apply_respects_explicit_overrides() {
        let mut config = InstanceConfig::new("host", "app");
        config.health_check_url = Some("http://elsewhere/health".to_string());
        config
            .metadata_map
            .insert(MANAGEMENT_PORT_KEY.to_string(), "9999".to_string());
        apply_management_metadata(&mut config, &metadata());

        assert_eq!(
            config.health_check_url.as_deref(),
            Some("http://elsewhere/health")
        );
        assert_eq!(
            config.metadata_map.get(MANAGEMENT_PORT_KEY).map(String::as_str),
            Some("9999")
        );
    }

    #[test]
    fn test_apply_blank_override_is_replaced() {
        let mut config = InstanceConfig::new("host", "app");
        config.status_page_url = Some("  ".to_string());
        apply_management_metadata(&mut config, &metadata());
        assert_eq!(
            config.status_page_url.as_deref(),
            Some("http://host:8888/info")
        );
    }

    #[test]
    fn test_apply_secure_url_only_when_enabled() {
        let mut secure = metadata();
        secure.secure_health_check_url = "https://host:8888/health".to_string();

        let mut config = InstanceConfig::new("host", "app");
        apply_management_metadata(&mut config, &secure);
        assert!(config.secure_health_check_url.is_none());

        let mut config = InstanceConfig::new("host", "app");
        config.secure_port_enabled = true;
        apply_management_metadata(&mut config, &secure);
        assert_eq!(
            config.secure_health_check_url.as_deref(),
            Some("https://host:8888/health")
        );
    }

    #[test]
    fn test_derive_instance_defaults() {
        let mut config = InstanceConfig::new("host", "app");
        config.non_secure_port = 8080;
        let instance = derive_instance(&config);

        assert_eq!(instance.instance_id, "host:app:8080");
        assert_eq!(instance.host_name, "host");
        assert_eq!(instance.port, 8080);
        assert_eq!(instance.home_page_url, "http://host:8080/");
        assert_eq!(instance.status_page_url, "http://host:8080/actuator/info");
        assert_eq!(instance.health_check_url, "http://host:8080/actuator/health");
        assert_eq!(instance.secure_health_check_url, "");
    }

    #[test]
    fn test_derive_instance_prefers_ip_and_overrides() {
        let mut config = InstanceConfig::new("host", "app");
        config.ip_address = "10.0.0.7".to_string();
        config.prefer_ip_address = true;
        config.instance_id = Some("custom-id".to_string());
        config.status_page_url = Some("http://proxy/status".to_string());
        let instance = derive_instance(&config);

        assert_eq!(instance.instance_id, "custom-id");
        assert_eq!(instance.host_name, "10.0.0.7");
        assert_eq!(instance.status_page_url, "http://proxy/status");
        assert_eq!(
            instance.health_check_url,
            "http://10.0.0.7:80/actuator/health"
        );
    }

    #[test]
    fn test_derive_instance_secure_urls() {
        let mut config = InstanceConfig::new("host", "app");
        config.secure_port_enabled = true;
        config.secure_port = 8443;
        let instance = derive_instance(&config);

        assert_eq!(
            instance.secure_health_check_url,
            "https://host:8443/actuator/health"
        );
    }

    #[test]
    fn test_resolver_output_flows_into_instance() {
        use crate::metadata::{DefaultManagementMetadataProvider, ManagementMetadataProvider};

        let mut config = InstanceConfig::new("host", "app");
        config.health_check_url_path = "health".to_string();
        config.status_page_url_path = "info".to_string();

        let resolved = DefaultManagementMetadataProvider::new()
            .get(&config, 7777, "/Server", Some("/Management"), Some(8888))
            .unwrap();
        apply_management_metadata(&mut config, &resolved);
        let instance = derive_instance(&config);

        assert_eq!(instance.health_check_url, "http://host:8888/Management/health");
        assert_eq!(instance.status_page_url, "http://host:8888/Management/info");
        assert_eq!(instance.metadata.get(MANAGEMENT_PORT_KEY).map(String::as_str), Some("8888"));
    }
}
