//! Wiring from configuration to a ready `AdviceFetcher`.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};
use yukang_ai::{AdviceFetcher, DashScopeClient, DashScopeConfig, FallbackPolicy};
use yukang_common::{ConfigError, YukangError};
use yukang_config::{AdviceConfig, FallbackMode, YukangConfig};

/// Fall back to defaults when the config could not be loaded, then
/// validate. Returns the config to run with and every problem found.
pub fn settle_config(
    loaded: Result<YukangConfig, ConfigError>,
) -> (YukangConfig, Vec<ConfigError>) {
    let mut issues = Vec::new();
    let mut config = loaded.unwrap_or_else(|e| {
        issues.push(e);
        YukangConfig::default()
    });
    if let Err(e) = yukang_config::check_config(&mut config) {
        issues.push(e);
    }
    (config, issues)
}

/// Build the DashScope client config. The key comes from the environment
/// variable named in `advice.api_key_env`.
pub fn client_config(advice: &AdviceConfig) -> DashScopeConfig {
    let timeout = (advice.timeout_secs > 0).then(|| Duration::from_secs(advice.timeout_secs.into()));

    DashScopeConfig::from_env(&advice.api_key_env)
        .with_endpoint(&advice.endpoint)
        .with_model(&advice.model)
        .with_result_format(&advice.result_format)
        .with_timeout(timeout)
        .with_connect_timeout(Duration::from_secs(advice.connect_timeout_secs.into()))
}

pub fn fallback_policy(mode: FallbackMode) -> FallbackPolicy {
    match mode {
        FallbackMode::Diagnostic => FallbackPolicy::Diagnostic,
        FallbackMode::Canned => FallbackPolicy::Canned,
    }
}

pub fn build_fetcher(advice: &AdviceConfig) -> Result<AdviceFetcher, YukangError> {
    let config = client_config(advice);
    if config.has_credential() {
        info!(model = %config.model, "advice service configured");
    } else {
        warn!(
            "{} is not set; questions will be answered with setup guidance",
            config.api_key_env
        );
    }

    let client = DashScopeClient::new(config).map_err(|e| YukangError::Ai(e.to_string()))?;

    Ok(AdviceFetcher::new(Arc::new(client), &advice.persona)
        .with_fallback(fallback_policy(advice.fallback)))
}
