// Session endpoints
//
// Cookie-based login/logout. A successful login sets the session cookie
// in the client's jar; later requests carry it automatically.

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::client::HomeClient;
use crate::error::Error;
use crate::models::LoginRequest;

impl HomeClient {
    /// Authenticate with a username and password.
    ///
    /// `POST /control/login` with `{"name": ..., "password": ...}`
    pub async fn login(&self, username: &str, password: &SecretString) -> Result<(), Error> {
        let url = self.control_url("login")?;
        debug!(username, "logging in at {}", url);

        let body = LoginRequest {
            name: username,
            password: password.expose_secret(),
        };

        let resp = self
            .http()
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(Error::Authentication {
                message: format!("login failed (HTTP {status}): {}", body.trim()),
            });
        }

        debug!("login successful");
        Ok(())
    }

    /// End the current session.
    ///
    /// `GET /control/logout` -- the server answers with a redirect to the
    /// login page, which is treated as success.
    pub async fn logout(&self) -> Result<(), Error> {
        let url = self.control_url("logout")?;
        debug!("logging out at {}", url);

        let resp = self
            .http()
            .get(url)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        if !(status.is_success() || status.is_redirection()) {
            return Err(Error::Api {
                status: status.as_u16(),
                message: "logout failed".into(),
            });
        }

        debug!("logout complete");
        Ok(())
    }

    /// Probe whether the current credentials are accepted.
    ///
    /// `GET /control/status` -- any 2xx means authenticated.
    pub async fn check_auth(&self) -> Result<bool, Error> {
        let url = self.control_url("status")?;
        match self.get::<serde_json::Value>(url).await {
            Ok(_) => Ok(true),
            Err(Error::Authentication { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
