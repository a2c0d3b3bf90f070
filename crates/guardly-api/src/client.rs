// Control API HTTP client
//
// Wraps `reqwest::Client` with `/control/` URL construction, auth header
// injection, and status/body mapping. Endpoint groups (stats, clients,
// filtering, tls, session) are inherent methods in sibling modules so this
// file stays focused on transport mechanics.

use std::sync::Arc;

use reqwest::cookie::{CookieStore, Jar};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::debug;
use url::Url;

use crate::auth::{AuthStrategy, Credentials};
use crate::error::Error;
use crate::transport::TransportConfig;

/// Raw HTTP client for a server's `/control/*` API.
///
/// Every method returns the decoded JSON payload or an [`Error`];
/// status codes never reach the caller.
pub struct HomeClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
    /// Cookie jar reference, kept to inspect the session cookie.
    cookie_jar: Option<Arc<Jar>>,
}

impl HomeClient {
    /// Create a new client from a `TransportConfig`.
    ///
    /// Session credentials need a cookie jar; one is added if the config
    /// doesn't carry it. `base_url` is the server root, e.g.
    /// `http://192.168.1.2:3000`; a path prefix (reverse proxy) is kept.
    pub fn new(
        base_url: Url,
        credentials: Credentials,
        transport: &TransportConfig,
    ) -> Result<Self, Error> {
        let config = if credentials.strategy() == AuthStrategy::Session
            && transport.cookie_jar.is_none()
        {
            transport.clone().with_cookie_jar()
        } else {
            transport.clone()
        };
        let cookie_jar = config.cookie_jar.clone();
        let http = config.build_client()?;
        Ok(Self {
            http,
            base_url,
            credentials,
            cookie_jar,
        })
    }

    /// Create a client with a pre-built `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url, credentials: Credentials) -> Self {
        Self {
            http,
            base_url,
            credentials,
            cookie_jar: None,
        }
    }

    /// The server base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The configured credentials.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// The underlying HTTP client.
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Whether the cookie jar currently holds cookies for the server.
    pub fn has_session_cookie(&self) -> bool {
        self.cookie_jar
            .as_ref()
            .and_then(|jar| jar.cookies(&self.base_url))
            .is_some()
    }

    // ── URL builders ─────────────────────────────────────────────────

    /// Build `{base}/control/{path}`, preserving any base path prefix.
    pub(crate) fn control_url(&self, path: &str) -> Result<Url, Error> {
        let base = self.base_url.as_str().trim_end_matches('/');
        let full = format!("{base}/control/{}", path.trim_start_matches('/'));
        Ok(Url::parse(&full)?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    fn authorize(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.credentials {
            Credentials::Basic { username, password } => {
                builder.basic_auth(username, Some(password.expose_secret()))
            }
            Credentials::Session { .. } | Credentials::Anonymous => builder,
        }
    }

    /// Send a GET request and decode the JSON body.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: Url) -> Result<T, Error> {
        debug!("GET {}", url);

        let resp = self
            .authorize(self.http.get(url))
            .send()
            .await
            .map_err(Error::Transport)?;

        Self::parse_json(resp).await
    }

    /// Map 401/403 and other non-2xx statuses into errors.
    pub(crate) async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, Error> {
        let status = resp.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(Error::Authentication {
                message: format!("session expired or invalid credentials (HTTP {status})"),
            });
        }

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                message: preview(body.trim()).to_owned(),
            });
        }

        Ok(resp)
    }

    async fn parse_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, Error> {
        let resp = Self::check_status(resp).await?;
        let body = resp.text().await.map_err(Error::Transport)?;

        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: format!("{e} (body preview: {:?})", preview(&body)),
            body: body.clone(),
        })
    }
}

/// First 200 bytes of a body, cut on a char boundary.
fn preview(body: &str) -> &str {
    let mut end = body.len().min(200);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
