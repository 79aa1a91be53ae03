//! The ask flow: record the question, fetch, record the answer.

use tracing::debug;

use crate::advice::{AdviceFetcher, AnswerSource};
use crate::Message;

use super::manager::Session;

impl Session {
    /// Ask a question and record the exchange.
    ///
    /// `question` must be non-empty; front ends filter blank input before
    /// calling this. Always appends exactly one user message followed by
    /// one assistant message, and returns the assistant message.
    pub async fn ask(&mut self, fetcher: &AdviceFetcher, question: impl Into<String>) -> Message {
        let question = question.into();
        debug!(session = %self.id.short(), turn = self.messages.len() / 2 + 1, "question asked");

        self.messages.push(Message::user(question.as_str()));

        let answer = fetcher.fetch(&question).await;
        match &answer.source {
            AnswerSource::Live(usage) => self.tracker.record_live(usage),
            AnswerSource::Fallback(_) => self.tracker.record_fallback(),
        }

        let reply = Message::assistant(answer.content);
        self.messages.push(reply.clone());
        reply
    }
}
