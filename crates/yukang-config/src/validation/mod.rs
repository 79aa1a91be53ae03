//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod advice;
mod helpers;


use crate::schema::YukangConfig;
use yukang_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &YukangConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    advice::validate_advice(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

/// Validate, then reset any value the client cannot run with.
///
/// The validation result is returned unchanged so the caller can report it;
/// invalid values other than the repaired ones are kept as parsed.
pub fn check(config: &mut YukangConfig) -> Result<(), ConfigError> {
    let result = validate(config);
    if result.is_err() {
        advice::repair_advice(config);
    }
    result
}
