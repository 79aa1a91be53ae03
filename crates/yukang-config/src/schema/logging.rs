//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

impl LogLevel {
    /// Filter directive scoped to this workspace's crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "yukang=trace",
            LogLevel::Debug => "yukang=debug",
            LogLevel::Info => "yukang=info",
            LogLevel::Warning => "yukang=warn",
            LogLevel::Error => "yukang=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
