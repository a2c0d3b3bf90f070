// Client lookup endpoints

use tracing::debug;

use crate::client::HomeClient;
use crate::error::Error;
use crate::models::ClientsFindEntry;

impl HomeClient {
    /// Look up a single client by IP, CIDR, MAC, or ClientID.
    ///
    /// `GET /control/clients/find?ip0={identifier}`
    ///
    /// Returns one `{identifier: detail}` object per matching client; an
    /// unknown identifier yields an empty array, not an error.
    pub async fn clients_find(&self, identifier: &str) -> Result<Vec<ClientsFindEntry>, Error> {
        let mut url = self.control_url("clients/find")?;
        url.query_pairs_mut().append_pair("ip0", identifier);
        debug!(identifier, "finding client");
        self.get(url).await
    }
}
