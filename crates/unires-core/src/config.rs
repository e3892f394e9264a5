// ── Runtime connection configuration ──
//
// These types describe *how* to reach one controller and one site.
// They carry credential data and connection tuning, but never touch disk
// or the environment. The CLI resolves them and hands them in.

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use url::Url;

use unires_api::{ControllerPlatform, TlsMode};

/// Default controller address: a standalone Network Application.
pub const DEFAULT_BASE_URL: &str = "https://unifi:8443";

/// Default site identifier.
pub const DEFAULT_SITE: &str = "default";

/// Username/password for the single session login.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

/// TLS verification strategy.
///
/// Strict by default. `DangerAcceptInvalid` is the explicit opt-in that
/// lets the exporter talk to controllers with self-signed certificates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed certs).
    DangerAcceptInvalid,
}

impl From<&TlsVerification> for TlsMode {
    fn from(tls: &TlsVerification) -> Self {
        match tls {
            TlsVerification::SystemDefaults => Self::System,
            TlsVerification::CustomCa(path) => Self::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => Self::DangerAcceptInvalid,
        }
    }
}

/// Configuration for connecting to a single controller.
///
/// Built by the CLI, passed to [`Fetcher`](crate::Fetcher) -- core never
/// reads config files.
#[derive(Debug, Clone)]
pub struct ControllerConfig {
    /// Controller URL (e.g., `https://unifi:8443`).
    pub url: Url,
    /// Session login credentials.
    pub credentials: Credentials,
    /// Site to read clients from (defaults to "default").
    pub site: String,
    /// Controller flavour, decides login path and URL prefix.
    pub platform: ControllerPlatform,
    /// TLS verification strategy.
    pub tls: TlsVerification,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ControllerConfig {
    /// Config with default site, platform, TLS and timeout.
    pub fn new(url: Url, credentials: Credentials) -> Self {
        Self {
            url,
            credentials,
            site: DEFAULT_SITE.into(),
            platform: ControllerPlatform::default(),
            tls: TlsVerification::default(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Whether the controller is addressed over plaintext HTTP.
    pub fn is_plaintext(&self) -> bool {
        self.url.scheme() == "http"
    }
}
