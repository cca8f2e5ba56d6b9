//! Configuration types for the matching service.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every section is
//! optional and falls back to its default.

use std::path::PathBuf;

use serde::Deserialize;

use crate::matching::ScoreWeights;

/// Default address the HTTP server binds to.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default port the HTTP server listens on.
pub const DEFAULT_PORT: u16 = 5000;

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    /// The interface to bind to.
    pub host: String,
    /// The TCP port to listen on.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Returns the `host:port` bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Record data settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DataConfig {
    /// Optional JSON file of students and tutors loaded at start-up.
    pub seed_file: Option<PathBuf>,
}

/// The complete service configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Composite score weights.
    pub weights: ScoreWeights,
    /// Record data settings.
    pub data: DataConfig,
}
