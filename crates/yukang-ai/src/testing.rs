//! In-process `AiClient` double for unit tests.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{AiClient, AiError, AiResponse, Message, TokenUsage};

pub(crate) const SCRIPTED_USAGE: TokenUsage = TokenUsage {
    input_tokens: 10,
    output_tokens: 5,
};

enum Script {
    Queue(Mutex<VecDeque<Result<String, AiError>>>),
    AlwaysFail(Box<dyn Fn() -> AiError + Send + Sync>),
}

/// Replays canned results and records every prompt it receives.
pub(crate) struct ScriptedClient {
    script: Script,
    calls: AtomicUsize,
    prompts: Mutex<Vec<Vec<Message>>>,
}

impl ScriptedClient {
    pub(crate) fn scripted(replies: Vec<Result<String, AiError>>) -> Self {
        Self {
            script: Script::Queue(Mutex::new(replies.into())),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn answering<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::scripted(answers.into_iter().map(|a| Ok(a.into())).collect())
    }

    pub(crate) fn failing(make_error: impl Fn() -> AiError + Send + Sync + 'static) -> Self {
        Self {
            script: Script::AlwaysFail(Box::new(make_error)),
            calls: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_prompt(&self) -> Option<Vec<Message>> {
        self.prompts.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl AiClient for ScriptedClient {
    async fn send_message(&self, messages: &[Message]) -> Result<AiResponse, AiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(messages.to_vec());

        let reply = match &self.script {
            Script::Queue(queue) => queue
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(AiError::IncompleteResponse("script exhausted".into()))),
            Script::AlwaysFail(make_error) => Err(make_error()),
        };

        reply.map(|content| AiResponse {
            content,
            usage: SCRIPTED_USAGE,
        })
    }
}
