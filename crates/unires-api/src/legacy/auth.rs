// Session login
//
// The controller answers a successful login with a session cookie, which
// the client's jar replays on the listing requests that follow.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tracing::debug;

use crate::error::Error;
use crate::legacy::client::{LegacyClient, body_preview};

#[derive(Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

impl LegacyClient {
    /// `POST` the credentials to the platform's login endpoint.
    ///
    /// Any non-2xx answer is `Error::Authentication` carrying the status and
    /// the start of the response body.
    pub async fn login(&self, username: &str, password: &SecretString) -> Result<(), Error> {
        let url = self.login_url()?;
        debug!(%url, username, "logging in");

        let resp = self
            .http
            .post(url)
            .json(&LoginRequest {
                username,
                password: password.expose_secret(),
            })
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            debug!("session established");
            return Ok(());
        }

        let body = resp.text().await.unwrap_or_default();
        Err(Error::Authentication {
            status: status.as_u16(),
            message: format!("login failed: {}", body_preview(&body)),
        })
    }
}
