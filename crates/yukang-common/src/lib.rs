pub mod defaults;
pub mod errors;
pub mod id;

pub use errors::{ConfigError, YukangError};
pub use id::{new_id, SessionId};
