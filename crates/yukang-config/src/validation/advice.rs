//! Validation for the `[advice]` section.

use tracing::warn;

use crate::schema::{YukangConfig, DEFAULT_CONNECT_TIMEOUT_SECS};

use super::helpers::{validate_non_empty, validate_range};

pub(crate) fn validate_advice(errors: &mut Vec<String>, config: &YukangConfig) {
    let advice = &config.advice;

    if !(advice.endpoint.starts_with("https://") || advice.endpoint.starts_with("http://")) {
        errors.push(format!(
            "advice.endpoint = {:?} must be an http(s) URL",
            advice.endpoint
        ));
    }
    validate_non_empty(errors, "advice.model", &advice.model);
    validate_non_empty(errors, "advice.result_format", &advice.result_format);
    validate_non_empty(errors, "advice.api_key_env", &advice.api_key_env);
    validate_non_empty(errors, "advice.persona", &advice.persona);

    // 0 means "no timeout"
    if advice.timeout_secs != 0 {
        validate_range(errors, "advice.timeout_secs", advice.timeout_secs, 1, 600);
    }
    validate_range(
        errors,
        "advice.connect_timeout_secs",
        advice.connect_timeout_secs,
        1,
        60,
    );
}

/// Reset values the HTTP client cannot run with. A zero connect timeout
/// fails every request before it is sent.
pub(crate) fn repair_advice(config: &mut YukangConfig) {
    let advice = &mut config.advice;
    if !(1..=60).contains(&advice.connect_timeout_secs) {
        warn!(
            "advice.connect_timeout_secs = {} ignored, using {}",
            advice.connect_timeout_secs, DEFAULT_CONNECT_TIMEOUT_SECS
        );
        advice.connect_timeout_secs = DEFAULT_CONNECT_TIMEOUT_SECS;
    }
}
