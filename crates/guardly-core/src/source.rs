// ── Remote service seam ──
//
// The five remote operations the dashboard depends on. `HomeClient`
// is the production implementation; tests script their own.

use std::future::Future;
use std::sync::Arc;

use guardly_api::models::{
    ClientsFindEntry, FilterStatusResponse, StatsConfigResponse, StatsResponse,
    TlsStatusResponse,
};
use guardly_api::{Error, HomeClient};

/// Remote services backing a [`Dashboard`](crate::Dashboard).
///
/// Each call returns the raw wire payload or an error; conversion into
/// domain entities happens in the orchestrator.
pub trait DashboardSource: Send + Sync + 'static {
    fn stats(&self) -> impl Future<Output = Result<StatsResponse, Error>> + Send;

    fn stats_config(&self) -> impl Future<Output = Result<StatsConfigResponse, Error>> + Send;

    fn tls_status(&self) -> impl Future<Output = Result<TlsStatusResponse, Error>> + Send;

    fn filtering_status(&self)
    -> impl Future<Output = Result<FilterStatusResponse, Error>> + Send;

    fn find_client(
        &self,
        identifier: &str,
    ) -> impl Future<Output = Result<Vec<ClientsFindEntry>, Error>> + Send;
}

impl DashboardSource for HomeClient {
    async fn stats(&self) -> Result<StatsResponse, Error> {
        HomeClient::stats(self).await
    }

    async fn stats_config(&self) -> Result<StatsConfigResponse, Error> {
        HomeClient::stats_info(self).await
    }

    async fn tls_status(&self) -> Result<TlsStatusResponse, Error> {
        HomeClient::tls_status(self).await
    }

    async fn filtering_status(&self) -> Result<FilterStatusResponse, Error> {
        HomeClient::filtering_status(self).await
    }

    async fn find_client(&self, identifier: &str) -> Result<Vec<ClientsFindEntry>, Error> {
        HomeClient::clients_find(self, identifier).await
    }
}

impl<S: DashboardSource> DashboardSource for Arc<S> {
    fn stats(&self) -> impl Future<Output = Result<StatsResponse, Error>> + Send {
        S::stats(self)
    }

    fn stats_config(&self) -> impl Future<Output = Result<StatsConfigResponse, Error>> + Send {
        S::stats_config(self)
    }

    fn tls_status(&self) -> impl Future<Output = Result<TlsStatusResponse, Error>> + Send {
        S::tls_status(self)
    }

    fn filtering_status(
        &self,
    ) -> impl Future<Output = Result<FilterStatusResponse, Error>> + Send {
        S::filtering_status(self)
    }

    fn find_client(
        &self,
        identifier: &str,
    ) -> impl Future<Output = Result<Vec<ClientsFindEntry>, Error>> + Send {
        S::find_client(self, identifier)
    }
}
