//! Yukang configuration system.
//!
//! Provides TOML-based configuration with validation. All config sections
//! use sensible defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use yukang_config::{check_config, config_to_json, load_config};
//!
//! let mut config = load_config(None).expect("failed to load config");
//! if let Err(e) = check_config(&mut config) {
//!     eprintln!("config validation warning: {e}");
//! }
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    AdviceConfig, FallbackMode, LogLevel, LoggingConfig, YukangConfig, CONFIG_SCHEMA_VERSION,
};

use std::path::Path;

use yukang_common::ConfigError;

/// Load config from an explicit path, or from the platform default path.
///
/// An explicit path must exist. The default path is created with a
/// commented template on first run.
pub fn load_config(path: Option<&Path>) -> Result<YukangConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}

/// Validate a loaded config and repair values the client cannot run with.
///
/// Invalid values are not fatal; the returned error lists every problem
/// found so the caller can warn about them.
pub fn check_config(config: &mut YukangConfig) -> Result<(), ConfigError> {
    validation::check(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &YukangConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
