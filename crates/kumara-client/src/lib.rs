//! Kumara Client - client-side registration metadata
//!
//! This crate provides:
//! - Management metadata resolution (health-check and status-page URLs)
//! - Registration-time instance derivation from configuration
//! - Local TOML config loading with validation

pub mod error;
pub mod instance;
pub mod local_config;
pub mod metadata;

pub use error::ClientError;
pub use instance::{apply_management_metadata, derive_instance};
pub use local_config::{config_file_path, load_instance_config, validate_instance_config};
pub use metadata::{DefaultManagementMetadataProvider, ManagementMetadataProvider};
