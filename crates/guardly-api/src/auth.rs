use secrecy::SecretString;

/// Which authentication strategy a [`HomeClient`](crate::HomeClient) uses.
///
/// Marker enum (no data) -- the actual secrets live in [`Credentials`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStrategy {
    /// Cookie session obtained from `POST /control/login`.
    Session,
    /// HTTP basic auth on every request.
    Basic,
    /// No authentication (server runs without users configured).
    Anonymous,
}

/// Credentials for authenticating with the server.
#[derive(Debug, Clone)]
pub enum Credentials {
    /// Log in once and carry the session cookie.
    Session {
        username: String,
        password: SecretString,
    },
    /// Send an `Authorization: Basic` header with every request.
    Basic {
        username: String,
        password: SecretString,
    },
    /// The server is open; send nothing.
    Anonymous,
}

impl Credentials {
    pub fn strategy(&self) -> AuthStrategy {
        match self {
            Self::Session { .. } => AuthStrategy::Session,
            Self::Basic { .. } => AuthStrategy::Basic,
            Self::Anonymous => AuthStrategy::Anonymous,
        }
    }
}

