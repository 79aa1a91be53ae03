//! Advice engine for Yukang.
//!
//! Provides the DashScope chat-completion client and the conversational
//! session built on top of it:
//! - One stateless `[system, user]` request per question
//! - Deterministic local fallback text on every failure
//! - The four preset questions and their canned answers
//! - Token usage tracking

pub mod advice;
pub mod dashscope;
pub mod presets;
pub mod session;
pub mod token_tracker;

#[cfg(test)]
pub(crate) mod testing;

use async_trait::async_trait;

pub use advice::{diagnostic, AdviceFetcher, Answer, AnswerSource, FallbackPolicy};
pub use dashscope::{DashScopeClient, DashScopeConfig};
pub use presets::{PresetQuestion, GENERIC_ADVICE, PRESETS};
pub use session::{Session, SessionState};
pub use token_tracker::TokenTracker;

/// A chat-completion backend. Each call is independent; the backend sees
/// only the messages passed in.
#[async_trait]
pub trait AiClient: Send + Sync {
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError>;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

#[derive(Debug, Clone)]
pub struct AiResponse {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API key not configured (set {0})")]
    MissingCredential(String),
    #[error("Timeout")]
    Timeout,
    #[error("Rate limited")]
    RateLimited,
    #[error("HTTP {status}: {detail}")]
    ApiError { status: u16, detail: String },
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Incomplete response: {0}")]
    IncompleteResponse(String),
}
