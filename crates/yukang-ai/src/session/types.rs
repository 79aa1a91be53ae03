//! Session state derived from the transcript.

/// The two durable states a session can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No messages; the initial state and the state after a reset.
    Empty,
    /// At least one exchange recorded.
    Active,
}
