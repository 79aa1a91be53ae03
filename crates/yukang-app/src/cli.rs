use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use yukang_config::FallbackMode;

/// Yukang — a fish-disease and aquaculture advice assistant.
#[derive(Parser, Debug)]
#[command(name = "yukang", version, about)]
pub struct Args {
    /// Ask a single question, print the answer, and exit.
    #[arg(short = 'a', long)]
    pub ask: Option<String>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level override (e.g. debug, yukang_ai=trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// What to answer when the advice service fails.
    #[arg(long, value_enum)]
    pub fallback: Option<FallbackArg>,

    /// Print the effective config as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FallbackArg {
    Diagnostic,
    Canned,
}

impl From<FallbackArg> for FallbackMode {
    fn from(arg: FallbackArg) -> Self {
        match arg {
            FallbackArg::Diagnostic => FallbackMode::Diagnostic,
            FallbackArg::Canned => FallbackMode::Canned,
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}
