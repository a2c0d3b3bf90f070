// Statistics endpoints

use tracing::debug;

use crate::client::HomeClient;
use crate::error::Error;
use crate::models::{StatsConfigResponse, StatsResponse};

impl HomeClient {
    /// Get the current traffic statistics snapshot.
    ///
    /// `GET /control/stats`
    pub async fn stats(&self) -> Result<StatsResponse, Error> {
        let url = self.control_url("stats")?;
        debug!("fetching stats");
        self.get(url).await
    }

    /// Get the statistics retention configuration.
    ///
    /// `GET /control/stats_info`
    pub async fn stats_info(&self) -> Result<StatsConfigResponse, Error> {
        let url = self.control_url("stats_info")?;
        debug!("fetching stats config");
        self.get(url).await
    }
}
