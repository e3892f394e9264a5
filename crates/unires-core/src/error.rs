// ── Core error types ──
//
// Errors from the fetch pipeline, phrased in terms the CLI can classify:
// unreachable controller, HTTP status failure, or a malformed answer.
// The `From<unires_api::Error>` impl translates transport-layer errors.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Connection errors ────────────────────────────────────────────
    #[error("Cannot connect to controller at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Request to {url} timed out")]
    Timeout { url: String },

    // ── HTTP status errors ───────────────────────────────────────────
    #[error("Authentication failed (HTTP {status}): {message}")]
    AuthenticationFailed { status: u16, message: String },

    #[error("Controller returned HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },

    // ── API errors ───────────────────────────────────────────────────
    #[error("API error: {message}")]
    Api { message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// The controller could not be reached (refused, unresolvable, TLS
    /// handshake, or no answer within the timeout).
    pub fn is_connection_failure(&self) -> bool {
        matches!(self, Self::ConnectionFailed { .. } | Self::Timeout { .. })
    }

    /// The controller answered, but with a non-success HTTP status.
    pub fn is_http_status(&self) -> bool {
        matches!(
            self,
            Self::AuthenticationFailed { .. } | Self::HttpStatus { .. }
        )
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<unires_api::Error> for CoreError {
    fn from(err: unires_api::Error) -> Self {
        match err {
            unires_api::Error::Authentication { status, message } => {
                CoreError::AuthenticationFailed { status, message }
            }
            unires_api::Error::Status { status, url } => CoreError::HttpStatus { status, url },
            unires_api::Error::Transport(ref e) => {
                let url = e
                    .url()
                    .map_or_else(|| "<unknown>".into(), ToString::to_string);
                if e.is_timeout() {
                    CoreError::Timeout { url }
                } else if e.is_connect() {
                    CoreError::ConnectionFailed {
                        url,
                        reason: e.to_string(),
                    }
                } else if let Some(status) = e.status() {
                    CoreError::HttpStatus {
                        status: status.as_u16(),
                        url,
                    }
                } else {
                    CoreError::Api {
                        message: e.to_string(),
                    }
                }
            }
            unires_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            unires_api::Error::Tls(msg) => CoreError::Config {
                message: format!("TLS setup failed: {msg}"),
            },
            unires_api::Error::LegacyApi { message } => CoreError::Api { message },
            unires_api::Error::Deserialization { message, body: _ } => {
                CoreError::Internal(format!("Deserialization error: {message}"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_errors_classify_as_http() {
        let err = CoreError::from(unires_api::Error::Status {
            status: 502,
            url: "https://unifi:8443/api/s/default/stat/sta".into(),
        });
        assert!(err.is_http_status());
        assert!(!err.is_connection_failure());
    }

    #[test]
    fn failed_login_classifies_as_http() {
        let err = CoreError::from(unires_api::Error::Authentication {
            status: 400,
            message: "login failed".into(),
        });
        assert!(matches!(err, CoreError::AuthenticationFailed { status: 400, .. }));
        assert!(err.is_http_status());
    }

    #[test]
    fn envelope_errors_are_neither() {
        let err = CoreError::from(unires_api::Error::LegacyApi {
            message: "api.err.NoSiteContext".into(),
        });
        assert!(!err.is_http_status());
        assert!(!err.is_connection_failure());
    }

    #[test]
    fn tls_setup_is_config() {
        let err = CoreError::from(unires_api::Error::Tls("invalid CA cert".into()));
        assert!(matches!(err, CoreError::Config { .. }));
    }
}
