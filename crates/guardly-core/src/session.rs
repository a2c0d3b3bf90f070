// ── Authenticated server session ──
//
// Owns the `HomeClient` and the observable logged-in flag. The
// dashboard is opened from here so it sees the session's login state.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use guardly_api::{Credentials, HomeClient};

use crate::config::{AuthCredentials, ServerConfig};
use crate::dashboard::Dashboard;
use crate::error::CoreError;
use crate::stream::FieldStream;

/// An authenticated connection to one server.
///
/// Cheaply cloneable; clones share the client and the logged-in flag.
#[derive(Clone)]
pub struct Session {
    client: Arc<HomeClient>,
    logged_in: Arc<watch::Sender<bool>>,
}

impl Session {
    /// Build a client from `config` and authenticate.
    ///
    /// Session credentials log in through the login endpoint. Basic and
    /// anonymous credentials are probed once against the status endpoint
    /// and rejected if the server refuses them.
    pub async fn connect(config: &ServerConfig) -> Result<Self, CoreError> {
        let credentials = Credentials::from(&config.auth);
        let client = HomeClient::new(config.url.clone(), credentials, &config.transport())?;

        match &config.auth {
            AuthCredentials::Session { username, password } => {
                client.login(username, password).await?;
                debug!("session authentication successful");
            }
            AuthCredentials::Basic { .. } | AuthCredentials::None => {
                if !client.check_auth().await? {
                    return Err(CoreError::AuthenticationFailed {
                        message: "server rejected the configured credentials".into(),
                    });
                }
                debug!("credentials accepted");
            }
        }

        info!(url = %config.url, "connected");
        Ok(Self::from_client(Arc::new(client), true))
    }

    /// Wrap an existing client with a known login state.
    pub fn from_client(client: Arc<HomeClient>, logged_in: bool) -> Self {
        let (tx, _) = watch::channel(logged_in);
        Self {
            client,
            logged_in: Arc::new(tx),
        }
    }

    pub fn client(&self) -> &Arc<HomeClient> {
        &self.client
    }

    pub fn is_logged_in(&self) -> bool {
        *self.logged_in.borrow()
    }

    pub fn subscribe_logged_in(&self) -> FieldStream<bool> {
        FieldStream::new(self.logged_in.subscribe())
    }

    /// A dashboard over this session's client with nothing fetched yet.
    pub fn dashboard(&self) -> Dashboard<Arc<HomeClient>> {
        Dashboard::new(Arc::clone(&self.client))
    }

    /// Open a dashboard over this session's client.
    ///
    /// Initialization starts in the background only if the session is
    /// logged in right now.
    pub fn open_dashboard(&self) -> Dashboard<Arc<HomeClient>> {
        Dashboard::open(Arc::clone(&self.client), self.is_logged_in())
    }

    /// End the session. The flag drops to `false` even if the server
    /// call fails.
    pub async fn logout(&self) {
        if matches!(self.client.credentials(), Credentials::Session { .. }) {
            if let Err(e) = self.client.logout().await {
                warn!(error = %e, "logout failed (non-fatal)");
            }
        }
        self.logged_in.send_replace(false);
        debug!("logged out");
    }
}
