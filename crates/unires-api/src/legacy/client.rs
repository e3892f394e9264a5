// Legacy API HTTP client
//
// A cookie-carrying `reqwest::Client` bound to one controller, one site and
// one platform layout. Endpoint methods live in `auth` and `clients`; this
// file owns URL construction and the response envelope.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::auth::ControllerPlatform;
use crate::error::Error;
use crate::legacy::models::LegacyResponse;
use crate::transport::TransportConfig;

/// Longest body excerpt carried in error messages.
const BODY_PREVIEW_CHARS: usize = 200;

/// UniFi OS reports some failures as `{"error":{"code":N,"message":"..."}}`
/// with HTTP 200 instead of using the `meta` envelope.
#[derive(Deserialize)]
struct ConsoleErrorBody {
    error: Option<ConsoleError>,
}

#[derive(Deserialize)]
struct ConsoleError {
    code: u16,
    message: Option<String>,
}

/// Session client for the controller's `/api/s/{site}/...` endpoints.
pub struct LegacyClient {
    pub(crate) http: reqwest::Client,
    base_url: Url,
    site: String,
    platform: ControllerPlatform,
}

impl LegacyClient {
    /// Build a client whose HTTP stack keeps session cookies.
    ///
    /// `base_url` is the controller root, e.g. `https://unifi:8443` or
    /// `https://192.168.1.1` for a UniFi OS console.
    pub fn new(
        base_url: Url,
        site: String,
        platform: ControllerPlatform,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let http = match transport.cookie_jar {
            Some(_) => transport.build_client()?,
            None => transport.clone().with_cookie_jar().build_client()?,
        };
        Ok(Self::with_client(http, base_url, site, platform))
    }

    /// Wrap an existing `reqwest::Client`. Without a cookie store the
    /// session from `login` does not carry over to the listings.
    pub fn with_client(
        http: reqwest::Client,
        base_url: Url,
        site: String,
        platform: ControllerPlatform,
    ) -> Self {
        Self {
            http,
            base_url,
            site,
            platform,
        }
    }

    pub fn site(&self) -> &str {
        &self.site
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn platform(&self) -> ControllerPlatform {
        self.platform
    }

    // ── URLs ─────────────────────────────────────────────────────────

    /// `{base}{prefix}/api/s/{site}/{path}`, where the prefix depends on
    /// the platform.
    pub(crate) fn site_url(&self, path: &str) -> Result<Url, Error> {
        let root = self.base_url.as_str().trim_end_matches('/');
        let prefix = self.platform.legacy_prefix();
        Ok(Url::parse(&format!("{root}{prefix}/api/s/{}/{path}", self.site))?)
    }

    /// `{base}{login_path}`. Any path on the base URL is kept, same as
    /// for site URLs.
    pub(crate) fn login_url(&self) -> Result<Url, Error> {
        let root = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{root}{}", self.platform.login_path()))?)
    }

    // ── Requests ─────────────────────────────────────────────────────

    /// GET a site endpoint and return the envelope's `data` array.
    pub(crate) async fn get_data<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, Error> {
        let url = self.site_url(path)?;
        debug!(%url, "GET");

        let resp = self.http.get(url).send().await?;
        let status = resp.status();
        let url = resp.url().to_string();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(Error::Authentication {
                status: status.as_u16(),
                message: "session expired or invalid credentials".into(),
            });
        }
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = resp.text().await?;
        trace!(bytes = body.len(), %url, "response body received");
        unwrap_envelope(&body)
    }
}

/// Decode a 2xx body: console error wrapper, then the `{meta, data}`
/// envelope, which must carry `rc == "ok"`.
fn unwrap_envelope<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, Error> {
    if let Ok(ConsoleErrorBody { error: Some(err) }) = serde_json::from_str::<ConsoleErrorBody>(body) {
        let message = err.message.unwrap_or_default();
        return Err(match err.code {
            401 => Error::Authentication {
                status: err.code,
                message,
            },
            code => Error::LegacyApi {
                message: format!("UniFi OS error {code}: {message}"),
            },
        });
    }

    let envelope: LegacyResponse<T> =
        serde_json::from_str(body).map_err(|e| Error::Deserialization {
            message: format!("{e} (body preview: {:?})", body_preview(body)),
            body: body.to_owned(),
        })?;

    if envelope.meta.rc == "ok" {
        Ok(envelope.data)
    } else {
        let message = envelope
            .meta
            .msg
            .unwrap_or_else(|| format!("rc={}", envelope.meta.rc));
        Err(Error::LegacyApi { message })
    }
}

/// At most `BODY_PREVIEW_CHARS` characters of `body`.
pub(crate) fn body_preview(body: &str) -> String {
    body.chars().take(BODY_PREVIEW_CHARS).collect()
}
