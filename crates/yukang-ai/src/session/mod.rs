//! Conversational advice session.
//!
//! A `Session` owns the transcript for one user and mediates every
//! question/answer exchange. It is an explicit value owned by whoever
//! serves that user; nothing here is process-global.

mod chat;
mod manager;
mod types;


pub use manager::Session;
pub use types::SessionState;
