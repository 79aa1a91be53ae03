//! Token usage and answer-source tracking for a session.

use crate::TokenUsage;

/// Tracks cumulative token usage and how many answers were live versus
/// fallback.
#[derive(Debug, Clone)]
pub struct TokenTracker {
    /// Total usage across all live answers.
    total: TokenUsage,
    live_answers: u64,
    fallback_answers: u64,
}

impl TokenTracker {
    pub fn new() -> Self {
        Self {
            total: TokenUsage::default(),
            live_answers: 0,
            fallback_answers: 0,
        }
    }

    /// Record token usage from a successful API call.
    pub fn record_live(&mut self, usage: &TokenUsage) {
        self.total.input_tokens = self.total.input_tokens.saturating_add(usage.input_tokens);
        self.total.output_tokens = self.total.output_tokens.saturating_add(usage.output_tokens);
        self.live_answers += 1;
    }

    /// Record an answer produced locally after a failed call.
    pub fn record_fallback(&mut self) {
        self.fallback_answers += 1;
    }

    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    /// Get total tokens (input + output).
    pub fn total_tokens(&self) -> u64 {
        self.total.total_tokens()
    }

    pub fn live_answers(&self) -> u64 {
        self.live_answers
    }

    pub fn fallback_answers(&self) -> u64 {
        self.fallback_answers
    }

    /// Number of questions asked, whatever the outcome.
    pub fn call_count(&self) -> u64 {
        self.live_answers + self.fallback_answers
    }
}

impl Default for TokenTracker {
    fn default() -> Self {
        Self::new()
    }
}
