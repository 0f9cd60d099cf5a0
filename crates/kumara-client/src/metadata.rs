//! Management metadata resolution
//!
//! Derives the health-check and status-page URLs an instance advertises to
//! the registry from its configuration, the server port and context path,
//! and an optional separately-configured management port and context path.
//!
//! Resolution is pure and synchronous. When the effective port cannot be
//! determined yet (port 0 means the OS assigns one at bind time), no
//! metadata is produced and the caller skips publishing it this cycle.

use kumara_api::{InstanceConfig, ManagementMetadata};
use tracing::debug;

/// Seam for management metadata resolution.
///
/// The default implementation covers the standard derivation rules; hosts
/// with bespoke URL schemes can supply their own.
pub trait ManagementMetadataProvider {
    fn get(
        &self,
        config: &InstanceConfig,
        server_port: u16,
        server_context_path: &str,
        management_context_path: Option<&str>,
        management_port: Option<u16>,
    ) -> Option<ManagementMetadata>;
}

/// Standard management metadata resolution.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultManagementMetadataProvider;

impl DefaultManagementMetadataProvider {
    pub fn new() -> Self {
        Self
    }
}

impl ManagementMetadataProvider for DefaultManagementMetadataProvider {
    fn get(
        &self,
        config: &InstanceConfig,
        server_port: u16,
        server_context_path: &str,
        management_context_path: Option<&str>,
        management_port: Option<u16>,
    ) -> Option<ManagementMetadata> {
        // A blank management context path carries no information
        let management_context_path =
            management_context_path.filter(|path| !path.trim().is_empty());

        // Port 0 is assigned by the OS at bind time; nothing to advertise yet
        if management_port == Some(0) || (management_port.is_none() && server_port == 0) {
            debug!(
                server_port,
                ?management_port,
                "management port unresolved, skipping metadata"
            );
            return None;
        }

        let has_management_port = matches!(management_port, Some(port) if port != 0);
        let effective_port = if has_management_port {
            management_port.unwrap_or(server_port)
        } else {
            server_port
        };

        // A distinct management port gets its own context root; on the
        // shared server port the management context nests under the
        // server's.
        let path_prefix = match management_context_path {
            Some(management) if has_management_port => normalize_prefix(management),
            Some(management) => {
                format!(
                    "{}{}",
                    normalize_prefix(server_context_path),
                    normalize_prefix(management)
                )
            }
            None => normalize_prefix(server_context_path),
        };

        let health_check_url = build_url(
            "http",
            &config.hostname,
            effective_port,
            &path_prefix,
            &config.health_check_url_path,
        );
        let status_page_url = build_url(
            "http",
            &config.hostname,
            effective_port,
            &path_prefix,
            &config.status_page_url_path,
        );
        let secure_health_check_url = if config.secure_port_enabled {
            build_url(
                "https",
                &config.hostname,
                effective_port,
                &path_prefix,
                &config.health_check_url_path,
            )
        } else {
            String::new()
        };

        debug!(effective_port, %health_check_url, "resolved management metadata");

        Some(ManagementMetadata::new(
            health_check_url,
            secure_health_check_url,
            status_page_url,
            effective_port,
        ))
    }
}

/// Normalize a context path into a URL prefix segment.
///
/// "" and "/" contribute nothing; anything else gets exactly one leading
/// "/" and no trailing "/".
fn normalize_prefix(context_path: &str) -> String {
    let trimmed = context_path.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

fn build_url(scheme: &str, hostname: &str, port: u16, path_prefix: &str, terminal: &str) -> String {
    format!(
        "{}://{}:{}{}/{}",
        scheme,
        hostname,
        port,
        path_prefix,
        terminal.trim_start_matches('/')
    )
}
