//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::matching::ScoreWeights;

use super::types::{DataConfig, ServerConfig, ServiceConfig};

/// Loads and provides access to the service configuration.
///
/// # File Format
///
/// ```text
/// server:
///   host: 0.0.0.0
///   port: 5000
/// weights:
///   subject: 0.3
///   level: 0.3
///   availability: 0.4
/// data:
///   seed_file: data/seed.json
/// ```
///
/// # Example
///
/// ```no_run
/// use tutor_match::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/tutor-match.yaml").unwrap();
/// println!("Listening on {}", loader.server().bind_address());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` if the file cannot be read, or
    /// `ConfigParseError` if it is not valid YAML, has unknown keys or
    /// carries invalid weights.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content, &path_str)
    }

    /// Loads configuration from the file if it exists, defaults otherwise.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            info!(path = %path.display(), "No configuration file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parses configuration from YAML text; `origin` names the source in errors.
    pub fn from_yaml(content: &str, origin: &str) -> EngineResult<Self> {
        let config: ServiceConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: origin.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self { config })
    }

    /// Returns a copy of the loader listening on `port` instead.
    pub fn with_port(mut self, port: u16) -> Self {
        self.config.server.port = port;
        self
    }

    /// Returns the HTTP server settings.
    pub fn server(&self) -> &ServerConfig {
        &self.config.server
    }

    /// Returns the composite score weights.
    pub fn weights(&self) -> &ScoreWeights {
        &self.config.weights
    }

    /// Returns the record data settings.
    pub fn data(&self) -> &DataConfig {
        &self.config.data
    }
}
