//! Clap derive structures for the `unires` CLI.
//!
//! Also compiled by `build.rs` for man page generation, so this module
//! must not depend on anything beyond clap and clap_complete.

use std::path::PathBuf;

use clap::builder::FalseyValueParser;
use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// unires -- UniFi client reservations for local DNS
#[derive(Debug, Parser)]
#[command(
    name = "unires",
    version,
    about = "Export UniFi client reservations as `<ip> <name>` lines",
    long_about = "Logs in to a UniFi Network controller, lists configured clients and\n\
        (unless --fixed-only) active clients, and prints one `<ip> <name>` line\n\
        per named device, sorted by name. Suitable as a hosts file for dnsmasq\n\
        or a similar local resolver.\n\n\
        Every option can also be set through its environment variable or the\n\
        config file. Flags win over the environment, which wins over the file.",
    propagate_version = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    /// Defaults to `reservations` when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Controller base URL [default: https://unifi:8443]
    #[arg(long, short = 'b', env = "UNIFI_BASEURL", global = true)]
    pub base_url: Option<String>,

    /// Controller username
    #[arg(long, short = 'u', env = "UNIFI_USERNAME", global = true)]
    pub username: Option<String>,

    /// Controller password (falls back to the system keyring)
    #[arg(long, env = "UNIFI_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Site name [default: default]
    #[arg(long, short = 's', env = "UNIFI_SITE", global = true)]
    pub site: Option<String>,

    /// Controller flavour, which decides the URL layout [default: classic]
    #[arg(long, env = "UNIFI_PLATFORM", value_enum, global = true)]
    pub platform: Option<Platform>,

    /// Only export configured reservations; ignore active clients.
    /// `--fixed-only=false` turns a config file setting back off
    #[arg(
        long,
        env = "FIXED_ONLY",
        value_name = "BOOL",
        value_parser = FalseyValueParser::new(),
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        global = true
    )]
    pub fixed_only: Option<bool>,

    /// Accept self-signed TLS certificates
    #[arg(
        long,
        short = 'k',
        env = "UNIFI_INSECURE",
        value_name = "BOOL",
        value_parser = FalseyValueParser::new(),
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        global = true
    )]
    pub insecure: Option<bool>,

    /// PEM CA certificate to trust for the controller
    #[arg(long, env = "UNIFI_CA_CERT", value_name = "PATH", global = true)]
    pub ca_cert: Option<PathBuf>,

    /// Request timeout in seconds [default: 30]
    #[arg(long, env = "UNIFI_TIMEOUT", value_name = "SECONDS", global = true)]
    pub timeout: Option<u64>,

    /// Log level: trace, debug, info, warn(ing), error, critical, off [default: info]
    #[arg(long, env = "LOG_LEVEL", value_name = "LEVEL", global = true)]
    pub log_level: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "UNIRES_OUTPUT",
        default_value = "plain",
        global = true
    )]
    pub output: OutputFormat,

    /// Config file path
    #[arg(long, env = "UNIRES_CONFIG", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

// ── Value Enums ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Platform {
    /// Standalone Network Application (`/api/...`)
    Classic,
    /// UniFi OS console, UDM/UCG (`/proxy/network/api/...`)
    UnifiOs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `<ip> <name>` per line, hosts-file style (default)
    Plain,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Pretty table
    Table,
}

// ── Commands ─────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the reconciled reservations (default)
    #[command(alias = "list")]
    Reservations,

    /// Inspect configuration and manage stored credentials
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file location
    Path,

    /// Display the effective configuration (password masked)
    Show,

    /// Store the controller password in the system keyring
    SetPassword,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
