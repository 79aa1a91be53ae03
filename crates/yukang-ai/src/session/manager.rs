//! Session struct and transcript management.

use tracing::debug;
use yukang_common::SessionId;

use crate::token_tracker::TokenTracker;
use crate::Message;

use super::types::SessionState;

/// A single user's conversation: an append-only transcript of
/// user/assistant pairs plus usage counters.
pub struct Session {
    pub(super) id: SessionId,
    /// Conversation transcript, in the order messages were exchanged.
    pub(super) messages: Vec<Message>,
    /// Token usage tracker. Survives `reset`.
    pub(super) tracker: TokenTracker,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            messages: Vec::new(),
            tracker: TokenTracker::new(),
        }
    }

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// The full transcript, oldest first.
    pub fn transcript(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn state(&self) -> SessionState {
        if self.messages.is_empty() {
            SessionState::Empty
        } else {
            SessionState::Active
        }
    }

    pub fn tracker(&self) -> &TokenTracker {
        &self.tracker
    }

    /// Discard the transcript. Usage counters are kept.
    pub fn reset(&mut self) {
        debug!(session = %self.id.short(), discarded = self.messages.len(), "session reset");
        self.messages.clear();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
