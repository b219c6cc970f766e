mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use veil_config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    let config = Config::load()?;

    match cli.command {
        cli::Commands::Redact {
            text,
            patterns_only,
            report,
        } => commands::redact::handle(text, patterns_only, report, &config),
        cli::Commands::Status => commands::status::handle(&config),
        cli::Commands::Lookup { identifier, redact } => {
            commands::lookup::handle(&identifier, redact, &config)
        }
        cli::Commands::Trace {
            message,
            lookup,
            redaction,
            thread_id,
            send,
        } => commands::trace::handle(message, lookup, redaction, thread_id, send, &config).await,
    }
}
