//! Configuration for unires.
//!
//! A flat TOML file, credential resolution (plaintext + keyring), and
//! translation to `unires_core::ControllerConfig`. The CLI layers its
//! flag and environment overrides on top before calling
//! [`controller_config`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use unires_core::config::{DEFAULT_BASE_URL, DEFAULT_SITE};
use unires_core::{ControllerConfig, ControllerPlatform, Credentials, TlsVerification};

/// Keyring service name under which passwords are stored, keyed by username.
pub const KEYRING_SERVICE: &str = "unires";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("no {field} configured")]
    MissingCredential { field: &'static str },

    #[error("keyring error: {0}")]
    Keyring(String),

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config struct ──────────────────────────────────────────────

/// Everything unires can be configured with, as stored in the file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Controller base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Username for the session login.
    #[serde(default)]
    pub username: Option<String>,

    /// Password (plaintext -- prefer the keyring or `UNIFI_PASSWORD`).
    #[serde(default)]
    pub password: Option<String>,

    /// Site name.
    #[serde(default = "default_site")]
    pub site: String,

    /// `classic` (standalone, port 8443) or `unifi-os` (UDM/UCG).
    #[serde(default)]
    pub platform: ControllerPlatform,

    /// Only export configured reservations, never active clients.
    #[serde(default)]
    pub fixed_only: bool,

    /// Accept self-signed controller certificates.
    #[serde(default)]
    pub insecure: bool,

    /// Path to a custom CA certificate (PEM).
    #[serde(default)]
    pub ca_cert: Option<PathBuf>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Log level: tracing names or `DEBUG`/`INFO`/`WARNING`/`ERROR`/`CRITICAL`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            username: None,
            password: None,
            site: default_site(),
            platform: ControllerPlatform::default(),
            fixed_only: false,
            insecure: false,
            ca_cert: None,
            timeout: default_timeout(),
            log_level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.into()
}
fn default_site() -> String {
    DEFAULT_SITE.into()
}
fn default_timeout() -> u64 {
    30
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Whether active clients are merged over configured reservations.
    pub fn include_active(&self) -> bool {
        !self.fixed_only
    }

    /// A copy safe to print: the password, if any, is masked.
    pub fn redacted(&self) -> Self {
        Self {
            password: self.password.as_ref().map(|_| "****".into()),
            ..self.clone()
        }
    }

    /// Render as pretty TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "unires", "unires").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("unires");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the config from `path` over built-in defaults.
///
/// A missing file yields the defaults; a malformed one is an error.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let config: Config = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .extract()?;
    Ok(config)
}

// ── Credential resolution ───────────────────────────────────────────

/// Resolve the login password: config value first, then the system keyring.
pub fn resolve_password(config: &Config, username: &str) -> Result<SecretString, ConfigError> {
    if let Some(ref pw) = config.password {
        return Ok(SecretString::from(pw.clone()));
    }

    if let Ok(entry) = keyring::Entry::new(KEYRING_SERVICE, username) {
        if let Ok(pw) = entry.get_password() {
            return Ok(SecretString::from(pw));
        }
    }

    Err(ConfigError::MissingCredential { field: "password" })
}

/// Store `password` for `username` in the system keyring.
pub fn store_password(username: &str, password: &str) -> Result<(), ConfigError> {
    keyring::Entry::new(KEYRING_SERVICE, username)
        .and_then(|entry| entry.set_password(password))
        .map_err(|e| ConfigError::Keyring(e.to_string()))
}

/// TLS strategy: `insecure` wins, then a custom CA, else the system store.
pub fn tls_verification(config: &Config) -> TlsVerification {
    if config.insecure {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = config.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    }
}

/// Build a `ControllerConfig` from a fully merged `Config`.
pub fn controller_config(config: &Config) -> Result<ControllerConfig, ConfigError> {
    let url: url::Url = config
        .base_url
        .parse()
        .map_err(|e| ConfigError::Validation {
            field: "base_url".into(),
            reason: format!("invalid URL '{}': {e}", config.base_url),
        })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::Validation {
            field: "base_url".into(),
            reason: format!("expected an http:// or https:// URL, got '{}'", config.base_url),
        });
    }

    let username = config
        .username
        .clone()
        .filter(|u| !u.is_empty())
        .ok_or(ConfigError::MissingCredential { field: "username" })?;
    let password = resolve_password(config, &username)?;

    Ok(ControllerConfig {
        url,
        credentials: Credentials { username, password },
        site: config.site.clone(),
        platform: config.platform,
        tls: tls_verification(config),
        timeout: Duration::from_secs(config.timeout),
    })
}
