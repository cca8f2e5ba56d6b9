//! Configuration loading and management for the Tutor Match Engine.
//!
//! This module provides functionality to load the service configuration
//! (server address, score weights, seed data) from a YAML file.
//!
//! # Example
//!
//! ```no_run
//! use tutor_match::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/tutor-match.yaml").unwrap();
//! println!("Subject weight: {}", config.weights().subject());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_HOST, DEFAULT_PORT, DataConfig, ServerConfig, ServiceConfig};
