mod cli;
mod repl;
mod setup;

use std::process::ExitCode;

use tokio::io::BufReader;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::{reload, EnvFilter};
use yukang_ai::Session;
use yukang_common::ConfigError;

const DEFAULT_LOG_DIRECTIVE: &str = "yukang=info";

fn env_filter(directive: &str) -> EnvFilter {
    let directive = directive
        .parse::<Directive>()
        .or_else(|_| DEFAULT_LOG_DIRECTIVE.parse::<Directive>())
        .unwrap_or_else(|_| LevelFilter::INFO.into());
    EnvFilter::from_default_env().add_directive(directive)
}

/// Install the global subscriber. The returned handle swaps the filter
/// once the config's log level is known.
fn init_logging(directive: &str) -> reload::Handle<EnvFilter, impl tracing::Subscriber> {
    // stderr keeps the conversation on stdout readable
    let builder = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(env_filter(directive))
        .with_filter_reloading();
    let handle = builder.reload_handle();
    builder.init();
    handle
}

#[tokio::main]
async fn main() -> ExitCode {
    // .env first so the API key variable is visible to everything below
    let dotenv_path = dotenv::dotenv().ok();

    let args = cli::parse();

    let log_filter = init_logging(args.log_level.as_deref().unwrap_or(DEFAULT_LOG_DIRECTIVE));

    tracing::info!("Yukang v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Some(path) = dotenv_path {
        tracing::debug!("Loaded environment from {}", path.display());
    }

    let (mut config, issues) =
        setup::settle_config(yukang_config::load_config(args.config.as_deref()));

    if args.log_level.is_none() {
        if let Err(e) = log_filter.reload(env_filter(config.logging.level.directive())) {
            tracing::warn!("Failed to apply configured log level: {e}");
        }
    }
    for issue in &issues {
        match issue {
            ConfigError::ValidationError(_) => tracing::warn!("Config validation warning: {issue}"),
            _ => tracing::warn!("Config load failed, using defaults: {issue}"),
        }
    }

    if let Some(fallback) = args.fallback {
        config.advice.fallback = fallback.into();
    }
    tracing::info!(
        "Config loaded (model: {}, fallback: {:?})",
        config.advice.model,
        config.advice.fallback
    );

    if args.print_config {
        println!("{}", yukang_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    let fetcher = match setup::build_fetcher(&config.advice) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            tracing::error!("Failed to set up advice service: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut session = Session::new();

    if let Some(question) = args.ask {
        if question.trim().is_empty() {
            tracing::error!("--ask requires a non-empty question");
            return ExitCode::FAILURE;
        }
        let reply = session.ask(&fetcher, question).await;
        println!("{}", reply.content);
        return if session.tracker().fallback_answers() > 0 {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        };
    }

    let stdin = BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    if let Err(e) = repl::run(&mut session, &fetcher, stdin, &mut stdout).await {
        tracing::error!("Interactive session failed: {e}");
        return ExitCode::FAILURE;
    }

    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
