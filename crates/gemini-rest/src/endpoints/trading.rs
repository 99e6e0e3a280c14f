//! Trading endpoints for order management
//!
//! Each operation maps its typed parameters onto a payload and an
//! endpoint path, then hands both to the client's signing pipeline.
//! Responses come back as parsed JSON, unmodified: Gemini reports
//! order rejections (insufficient funds, invalid order) inside the
//! response document rather than through HTTP failures.

use crate::client::GeminiClient;
use crate::error::{RestError, RestResult};
use crate::types::{CancelScope, OrderRequest};
use serde_json::{Map, Value};
use tracing::{debug, instrument};

/// Trading endpoints for order management
pub struct TradingEndpoints<'a> {
    client: &'a GeminiClient,
}

impl<'a> TradingEndpoints<'a> {
    pub fn new(client: &'a GeminiClient) -> Self {
        Self { client }
    }

    /// Place a new order
    ///
    /// # Arguments
    /// * `order` - Order request with all parameters
    ///
    /// Side and type are the only fields resolved locally; amounts,
    /// prices and symbols are validated by the exchange.
    #[instrument(skip(self, order), fields(symbol = %order.symbol, side = %order.side, order_type = %order.order_type))]
    pub async fn place_order(&self, order: &OrderRequest) -> RestResult<Value> {
        let mut payload = Map::new();
        payload.insert("symbol".to_string(), Value::String(order.symbol.clone()));
        payload.insert("amount".to_string(), Value::String(order.amount.to_string()));
        payload.insert("price".to_string(), Value::String(order.price.to_string()));
        payload.insert("side".to_string(), Value::String(order.side.to_string()));
        payload.insert("type".to_string(), Value::String(order.order_type.to_string()));

        if !order.options.is_empty() {
            let options: Vec<Value> = order
                .options
                .iter()
                .map(|o| Value::String(o.as_str().to_string()))
                .collect();
            payload.insert("options".to_string(), Value::Array(options));
        }
        if let Some(stop_price) = &order.stop_price {
            payload.insert("stop_price".to_string(), Value::String(stop_price.to_string()));
        }
        if let Some(client_order_id) = &order.client_order_id {
            payload.insert(
                "client_order_id".to_string(),
                Value::String(client_order_id.clone()),
            );
        }

        debug!(
            "Placing {} {} order for {} {} @ {}",
            order.side, order.order_type, order.amount, order.symbol, order.price
        );

        self.client.signed_post("/v1/order/new", payload, true).await
    }

    /// Cancel a single order by id
    #[instrument(skip(self))]
    pub async fn cancel_order(&self, order_id: &str) -> RestResult<Value> {
        let mut payload = Map::new();
        payload.insert("order_id".to_string(), Value::String(order_id.to_string()));

        debug!("Cancelling order {}", order_id);
        self.client
            .signed_post(CancelScope::None.path(), payload, true)
            .await
    }

    /// Cancel all open orders on the account
    #[instrument(skip(self))]
    pub async fn cancel_all_orders(&self) -> RestResult<Value> {
        debug!("Cancelling all open orders");
        self.client
            .signed_post(CancelScope::All.path(), Map::new(), true)
            .await
    }

    /// Cancel all orders placed during this session
    #[instrument(skip(self))]
    pub async fn cancel_session_orders(&self) -> RestResult<Value> {
        debug!("Cancelling session orders");
        self.client
            .signed_post(CancelScope::Session.path(), Map::new(), true)
            .await
    }

    /// Get the status of an order
    ///
    /// Gemini accepts either its own order id or the caller-supplied
    /// client order id in the same `order_id` field; `order_id` wins
    /// when both are given. Supplying neither is a usage error, raised
    /// before any network activity.
    #[instrument(skip(self))]
    pub async fn order_status(
        &self,
        order_id: Option<&str>,
        client_order_id: Option<&str>,
    ) -> RestResult<Value> {
        let id = order_id.or(client_order_id).ok_or_else(|| {
            RestError::InvalidParameter(
                "must supply either order_id or client_order_id".to_string(),
            )
        })?;

        let mut payload = Map::new();
        payload.insert("order_id".to_string(), Value::String(id.to_string()));

        self.client.signed_post("/v1/order/status", payload, true).await
    }

    /// List all active orders
    #[instrument(skip(self))]
    pub async fn active_orders(&self) -> RestResult<Value> {
        self.client.signed_post("/v1/orders", Map::new(), true).await
    }

    /// List past trades for a symbol
    ///
    /// # Arguments
    /// * `symbol` - Trading symbol (e.g. "btcusd")
    #[instrument(skip(self))]
    pub async fn past_trades(&self, symbol: &str) -> RestResult<Value> {
        let mut payload = Map::new();
        payload.insert("symbol".to_string(), Value::String(symbol.to_string()));

        self.client.signed_post("/v1/mytrades", payload, true).await
    }
}
