mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::error::{CliError, exit_code};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let code = match run(cli).await {
        Ok(()) => exit_code::SUCCESS,
        Err(err) => report(err),
    };
    std::process::exit(code);
}

async fn run(cli: Cli) -> Result<(), CliError> {
    if let Some(Command::Completions(args)) = &cli.command {
        let mut cmd = Cli::command();
        clap_complete::generate(args.shell, &mut cmd, "unires", &mut std::io::stdout());
        return Ok(());
    }

    let cfg = config::load(&cli.global)?;
    init_tracing(&cfg.log_level)?;
    tracing::debug!(base_url = %cfg.base_url, site = %cfg.site, "effective configuration loaded");

    match cli.command.unwrap_or(Command::Reservations) {
        Command::Reservations => commands::reservations::handle(&cfg, &cli.global).await,
        Command::Config(args) => commands::config_cmd::handle(args, &cfg, &cli.global),
        Command::Completions(_) => Ok(()),
    }
}

/// Connection and plaintext-HTTP failures are expected operational
/// outcomes and go to the log; everything else gets a full diagnostic.
fn report(err: CliError) -> i32 {
    let code = err.exit_code();
    match err {
        CliError::ConnectionFailed { ref source, .. } | CliError::PlaintextHttp { ref source, .. } => {
            tracing::error!("{err}");
            if let Some(hint) = err.tls_hint() {
                tracing::warn!("{hint}");
            }
            tracing::debug!(cause = %source, "request failed");
        }
        other => eprintln!("{:?}", miette::Report::new(other)),
    }
    code
}

/// Logs go to stderr so stdout carries only the reservation list.
/// `RUST_LOG`, when set, takes precedence over the configured level.
fn init_tracing(level: &str) -> Result<(), CliError> {
    let directive = level_directive(level).ok_or_else(|| CliError::Validation {
        field: "log_level".into(),
        reason: format!("unknown log level '{level}'"),
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

/// Accepts tracing level names as well as `WARNING` / `CRITICAL` / `FATAL`,
/// case-insensitively.
fn level_directive(level: &str) -> Option<&'static str> {
    Some(match level.trim().to_ascii_lowercase().as_str() {
        "trace" => "trace",
        "debug" => "debug",
        "info" => "info",
        "warn" | "warning" => "warn",
        "error" | "critical" | "fatal" => "error",
        "off" => "off",
        _ => return None,
    })
}
