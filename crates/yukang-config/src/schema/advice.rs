//! Remote advice service configuration types.

use serde::{Deserialize, Serialize};

pub use yukang_common::defaults::{
    DEFAULT_API_KEY_ENV, DEFAULT_CONNECT_TIMEOUT_SECS, DEFAULT_ENDPOINT, DEFAULT_MODEL,
    DEFAULT_RESULT_FORMAT, DEFAULT_TIMEOUT_SECS,
};

/// Expert persona sent as the system message of every request.
pub const DEFAULT_PERSONA: &str =
    "你是一个鱼类疾病专家，专门回答关于鱼类健康、疾病治疗和预防的问题。请提供专业、准确的建议。";

/// What the assistant says when the remote call fails.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FallbackMode {
    /// Explain what went wrong.
    #[default]
    Diagnostic,
    /// Answer with the preset's canned text, or generic advice.
    Canned,
}

/// Advice service configuration.
///
/// The credential itself is never stored here; only the name of the
/// environment variable that holds it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdviceConfig {
    pub endpoint: String,
    pub model: String,
    pub result_format: String,
    /// Request timeout in seconds; 0 disables it (valid range: 0 or 1-600).
    pub timeout_secs: u32,
    /// Connect timeout in seconds (valid range: 1-60).
    pub connect_timeout_secs: u32,
    pub api_key_env: String,
    pub persona: String,
    pub fallback: FallbackMode,
}

impl Default for AdviceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            model: DEFAULT_MODEL.into(),
            result_format: DEFAULT_RESULT_FORMAT.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            connect_timeout_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            api_key_env: DEFAULT_API_KEY_ENV.into(),
            persona: DEFAULT_PERSONA.into(),
            fallback: FallbackMode::Diagnostic,
        }
    }
}
