// TLS endpoints

use tracing::debug;

use crate::client::HomeClient;
use crate::error::Error;
use crate::models::TlsStatusResponse;

impl HomeClient {
    /// Get TLS configuration and certificate validation status.
    ///
    /// `GET /control/tls/status`
    pub async fn tls_status(&self) -> Result<TlsStatusResponse, Error> {
        let url = self.control_url("tls/status")?;
        debug!("fetching TLS status");
        self.get(url).await
    }
}
