//! Configuration schema types for Yukang.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod advice;
mod logging;

pub use advice::*;
pub use logging::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Yukang.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct YukangConfig {
    pub advice: AdviceConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_advice_points_at_dashscope() {
        let config = YukangConfig::default();
        assert_eq!(config.advice.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.advice.model, "qwen-turbo");
        assert_eq!(config.advice.result_format, "message");
        assert_eq!(config.advice.api_key_env, "DASHSCOPE_API_KEY");
        assert_eq!(config.advice.timeout_secs, 30);
        assert_eq!(config.advice.fallback, FallbackMode::Diagnostic);
    }

    #[test]
    fn default_persona_is_fish_disease_expert() {
        let config = YukangConfig::default();
        assert!(config.advice.persona.contains("鱼类疾病专家"));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: YukangConfig = toml::from_str(
            r#"
[advice]
model = "qwen-plus"
fallback = "canned"
"#,
        )
        .unwrap();
        assert_eq!(config.advice.model, "qwen-plus");
        assert_eq!(config.advice.fallback, FallbackMode::Canned);
        assert_eq!(config.advice.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.logging.level, LogLevel::Info);
    }

    #[test]
    fn log_level_parses_uppercase() {
        let config: YukangConfig = toml::from_str("[logging]\nlevel = \"DEBUG\"\n").unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.level.directive(), "yukang=debug");
    }

    #[test]
    fn unknown_fallback_mode_is_rejected() {
        let result: Result<YukangConfig, _> = toml::from_str("[advice]\nfallback = \"silent\"\n");
        assert!(result.is_err());
    }
}
