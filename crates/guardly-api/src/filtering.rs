// Filtering endpoints

use tracing::debug;

use crate::client::HomeClient;
use crate::error::Error;
use crate::models::FilterStatusResponse;

impl HomeClient {
    /// Get filtering status: master switch, update interval, filter
    /// lists, and custom user rules.
    ///
    /// `GET /control/filtering/status`
    pub async fn filtering_status(&self) -> Result<FilterStatusResponse, Error> {
        let url = self.control_url("filtering/status")?;
        debug!("fetching filtering status");
        self.get(url).await
    }
}
