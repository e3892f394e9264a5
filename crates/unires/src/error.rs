//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with help
//! text and a process exit code.

use miette::Diagnostic;
use thiserror::Error;
use url::Url;

use unires_config::ConfigError;
use unires_core::CoreError;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    /// Controller unreachable, HTTP status failure, or bad API answer.
    pub const GENERAL: i32 = 1;
    /// Bad flags, environment or config file.
    pub const USAGE: i32 = 2;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to UniFi controller at {url}")]
    #[diagnostic(
        code(unires::connection_failed),
        help("Check UNIFI_BASEURL and that the controller is reachable from this host.")
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: CoreError,
    },

    #[error(
        "Got HTTP error connecting to {url}. You should probably connect using HTTPS instead of HTTP"
    )]
    #[diagnostic(code(unires::plaintext_http))]
    PlaintextHttp {
        url: String,
        #[source]
        source: CoreError,
    },

    // ── Controller answers ───────────────────────────────────────────
    #[error("Authentication failed (HTTP {status}): {message}")]
    #[diagnostic(
        code(unires::auth_failed),
        help(
            "Verify UNIFI_USERNAME / UNIFI_PASSWORD.\n\
             UniFi OS consoles (UDM, UCG) need --platform unifi-os."
        )
    )]
    AuthFailed { status: u16, message: String },

    #[error("Controller returned HTTP {status} for {url}")]
    #[diagnostic(
        code(unires::http_status),
        help("Check UNIFI_SITE and UNIFI_PLATFORM against the controller.")
    )]
    HttpStatus { status: u16, url: String },

    #[error("API error: {message}")]
    #[diagnostic(code(unires::api_error))]
    ApiError { message: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(unires::validation))]
    Validation { field: String, reason: String },

    #[error("No {field} configured")]
    #[diagnostic(
        code(unires::no_credentials),
        help(
            "Set UNIFI_USERNAME and UNIFI_PASSWORD, pass --username/--password,\n\
             or store the password with: unires config set-password"
        )
    )]
    NoCredentials { field: String },

    #[error("Keyring error: {reason}")]
    #[diagnostic(code(unires::keyring))]
    Keyring { reason: String },

    #[error("{message}")]
    #[diagnostic(code(unires::config), help("Check the config file at: unires config path"))]
    Config { message: String },

    // ── IO / Serialization ────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to render JSON: {0}")]
    #[diagnostic(code(unires::json))]
    Json(#[from] serde_json::Error),

    #[error("Failed to render YAML: {0}")]
    #[diagnostic(code(unires::yaml))]
    Yaml(#[from] serde_yaml::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation { .. }
            | Self::NoCredentials { .. }
            | Self::Keyring { .. }
            | Self::Config { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }

    /// Follow-up line logged after a connection failure. Over `https://`
    /// an untrusted certificate surfaces as a connect error too.
    pub fn tls_hint(&self) -> Option<&'static str> {
        match self {
            Self::ConnectionFailed { url, .. } if url.starts_with("https://") => Some(
                "If the controller uses a self-signed certificate, pass --insecure (-k) \
                 or trust its CA with --ca-cert",
            ),
            _ => None,
        }
    }

    /// Classify a fetch failure against the controller at `base_url`.
    ///
    /// An HTTP status failure over plain `http://` becomes `PlaintextHttp`,
    /// since controllers typically answer plaintext requests with an error.
    pub fn from_fetch(err: CoreError, base_url: &Url) -> Self {
        let url = base_url.as_str().trim_end_matches('/').to_owned();

        if err.is_connection_failure() {
            return Self::ConnectionFailed { url, source: err };
        }
        if err.is_http_status() && base_url.scheme() == "http" {
            return Self::PlaintextHttp { url, source: err };
        }
        err.into()
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { ref url, .. } | CoreError::Timeout { ref url } => {
                Self::ConnectionFailed {
                    url: url.clone(),
                    source: err,
                }
            }
            CoreError::AuthenticationFailed { status, message } => {
                Self::AuthFailed { status, message }
            }
            CoreError::HttpStatus { status, url } => Self::HttpStatus { status, url },
            CoreError::Config { message } => Self::Config { message },
            CoreError::Api { message } | CoreError::Internal(message) => {
                Self::ApiError { message }
            }
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            ConfigError::MissingCredential { field } => Self::NoCredentials {
                field: field.into(),
            },
            ConfigError::Keyring(reason) => Self::Keyring { reason },
            other => Self::Config {
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        s.parse().unwrap_or_else(|e| panic!("bad test url {s}: {e}"))
    }

    #[test]
    fn connection_failure_names_the_base_url() {
        let err = CliError::from_fetch(
            CoreError::ConnectionFailed {
                url: "https://unifi:8443/api/login".into(),
                reason: "connection refused".into(),
            },
            &url("https://unifi:8443"),
        );

        assert_eq!(
            err.to_string(),
            "Could not connect to UniFi controller at https://unifi:8443"
        );
        assert_eq!(err.exit_code(), exit_code::GENERAL);
    }

    #[test]
    fn https_connection_failure_suggests_tls_options() {
        let source = || CoreError::ConnectionFailed {
            url: "https://unifi:8443/api/login".into(),
            reason: "invalid peer certificate: UnknownIssuer".into(),
        };

        let tls = CliError::from_fetch(source(), &url("https://unifi:8443"));
        let hint = tls.tls_hint().unwrap_or_default();
        assert!(hint.contains("--insecure") && hint.contains("--ca-cert"), "got: {hint}");

        let plain = CliError::from_fetch(source(), &url("http://unifi:8080"));
        assert_eq!(plain.tls_hint(), None);
    }

    #[test]
    fn timeout_is_a_connection_failure() {
        let err = CliError::from_fetch(
            CoreError::Timeout {
                url: "https://unifi:8443/api/login".into(),
            },
            &url("https://unifi:8443"),
        );
        assert!(matches!(err, CliError::ConnectionFailed { .. }));
    }

    #[test]
    fn http_status_over_plaintext_gets_https_hint() {
        let err = CliError::from_fetch(
            CoreError::HttpStatus {
                status: 400,
                url: "http://unifi:8443/api/s/default/list/user".into(),
            },
            &url("http://unifi:8443"),
        );

        assert!(matches!(err, CliError::PlaintextHttp { .. }));
        assert!(err.to_string().contains("HTTPS instead of HTTP"));
        assert_eq!(err.exit_code(), exit_code::GENERAL);
    }

    #[test]
    fn login_rejection_over_plaintext_gets_https_hint() {
        let err = CliError::from_fetch(
            CoreError::AuthenticationFailed {
                status: 400,
                message: "login failed".into(),
            },
            &url("http://unifi:8443"),
        );
        assert!(matches!(err, CliError::PlaintextHttp { .. }));
    }

    #[test]
    fn http_status_over_tls_propagates() {
        let err = CliError::from_fetch(
            CoreError::HttpStatus {
                status: 503,
                url: "https://unifi:8443/api/s/default/stat/sta".into(),
            },
            &url("https://unifi:8443"),
        );

        assert!(matches!(err, CliError::HttpStatus { status: 503, .. }));
        assert_eq!(err.exit_code(), exit_code::GENERAL);
    }

    #[test]
    fn api_failure_is_general() {
        let err = CliError::from_fetch(
            CoreError::Api {
                message: "api.err.NoSiteContext".into(),
            },
            &url("http://unifi:8443"),
        );
        assert!(matches!(err, CliError::ApiError { .. }));
        assert_eq!(err.exit_code(), exit_code::GENERAL);
    }

    #[test]
    fn config_errors_are_usage_errors() {
        let missing: CliError = ConfigError::MissingCredential { field: "username" }.into();
        assert!(matches!(missing, CliError::NoCredentials { ref field } if field == "username"));
        assert_eq!(missing.exit_code(), exit_code::USAGE);

        let invalid: CliError = ConfigError::Validation {
            field: "base_url".into(),
            reason: "nope".into(),
        }
        .into();
        assert_eq!(invalid.exit_code(), exit_code::USAGE);

        let tls: CliError = CoreError::Config {
            message: "TLS setup failed".into(),
        }
        .into();
        assert_eq!(tls.exit_code(), exit_code::USAGE);
    }
}
