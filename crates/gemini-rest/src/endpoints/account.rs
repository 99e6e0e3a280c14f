//! Account and balance endpoints

use crate::client::GeminiClient;
use crate::error::RestResult;
use serde_json::{Map, Value};
use tracing::instrument;

/// Account and balance endpoints
pub struct AccountEndpoints<'a> {
    client: &'a GeminiClient,
}

impl<'a> AccountEndpoints<'a> {
    pub fn new(client: &'a GeminiClient) -> Self {
        Self { client }
    }

    /// Get available balances
    #[instrument(skip(self))]
    pub async fn balances(&self) -> RestResult<Value> {
        self.client.signed_post("/v1/balances", Map::new(), true).await
    }

    /// Get balances expressed in a notional currency
    ///
    /// # Arguments
    /// * `currency` - Notional currency (e.g. "usd"); lower-cased into the path
    #[instrument(skip(self))]
    pub async fn notional_balances(&self, currency: &str) -> RestResult<Value> {
        let path = format!("/v1/notionalbalances/{}", currency.to_lowercase());

        self.client.signed_post(&path, Map::new(), true).await
    }

    /// List accounts in the master group
    ///
    /// The `account` field is never appended to this call, even when a
    /// sub-account is configured: the listing addresses the master
    /// group itself.
    #[instrument(skip(self))]
    pub async fn account_list(&self) -> RestResult<Value> {
        self.client
            .signed_post("/v1/account/list", Map::new(), false)
            .await
    }
}
