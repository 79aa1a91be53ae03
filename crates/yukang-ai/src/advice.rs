//! Question-to-answer fetch with local fallback.
//!
//! Every fetch sends exactly `[system: persona, user: question]`; the
//! session's history is never forwarded. Failures are turned into answer
//! text here so callers always get something to show.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::{presets, AiClient, AiError, Message, TokenUsage};

/// What the assistant says when the remote call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// A human-readable explanation of the failure.
    #[default]
    Diagnostic,
    /// The preset's canned answer, or generic advice for other questions.
    Canned,
}

/// Where an answer came from.
#[derive(Debug)]
pub enum AnswerSource {
    Live(TokenUsage),
    Fallback(AiError),
}

#[derive(Debug)]
pub struct Answer {
    pub content: String,
    pub source: AnswerSource,
}

impl Answer {
    pub fn is_fallback(&self) -> bool {
        matches!(self.source, AnswerSource::Fallback(_))
    }
}

/// Turns questions into answers through an [`AiClient`].
pub struct AdviceFetcher {
    client: Arc<dyn AiClient>,
    persona: String,
    fallback: FallbackPolicy,
}

impl AdviceFetcher {
    pub fn new(client: Arc<dyn AiClient>, persona: impl Into<String>) -> Self {
        Self {
            client,
            persona: persona.into(),
            fallback: FallbackPolicy::default(),
        }
    }

    pub fn with_fallback(mut self, fallback: FallbackPolicy) -> Self {
        self.fallback = fallback;
        self
    }

    pub(crate) fn build_prompt(&self, question: &str) -> [Message; 2] {
        [Message::system(&self.persona), Message::user(question)]
    }

    /// Ask the remote service once. Never fails.
    pub async fn fetch(&self, question: &str) -> Answer {
        let prompt = self.build_prompt(question);

        match self.client.send_message(&prompt).await {
            Ok(response) => {
                debug!(
                    input_tokens = response.usage.input_tokens,
                    output_tokens = response.usage.output_tokens,
                    "advice received"
                );
                Answer {
                    content: response.content,
                    source: AnswerSource::Live(response.usage),
                }
            }
            Err(err) => {
                warn!(error = %err, policy = ?self.fallback, "advice fetch failed, using fallback");
                let content = match self.fallback {
                    FallbackPolicy::Diagnostic => diagnostic(&err),
                    FallbackPolicy::Canned => presets::canned_answer(question).to_string(),
                };
                Answer {
                    content,
                    source: AnswerSource::Fallback(err),
                }
            }
        }
    }
}

/// User-facing explanation of a failed fetch.
pub fn diagnostic(err: &AiError) -> String {
    match err {
        AiError::MissingCredential(var) => format!(
            "未配置通义千问 API Key。请设置环境变量 {var}，或在当前目录的 .env 文件中配置。"
        ),
        AiError::Timeout => "请求超时，请稍后重试或检查网络连接。".to_string(),
        AiError::RateLimited => "HTTP 错误：429 请求过于频繁，请稍后重试。".to_string(),
        AiError::ApiError { status, detail } => format!("HTTP 错误：{status} {detail}"),
        AiError::IncompleteResponse(_) => {
            "获取回答时出错：接口返回内容不完整，请检查 API Key 或参数。".to_string()
        }
        AiError::NetworkError(detail) | AiError::ParseError(detail) => {
            format!("调用API时出错: {detail}")
        }
    }
}
