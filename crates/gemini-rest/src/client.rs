//! Main REST client implementation

use crate::endpoints::{AccountEndpoints, TradingEndpoints};
use crate::error::RestResult;
use crate::transport::{HttpTransport, SignedRequest, Transport};
use crate::types::OrderRequest;
use gemini_auth::{ClockNonce, Credentials, NonceProvider};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::{debug, info};

/// Default request timeout
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Which Gemini deployment the client talks to
///
/// A closed enum rather than a free-form URL: the exchange runs exactly
/// one production and one sandbox deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Live exchange
    #[default]
    Production,
    /// Test deployment with play money
    Sandbox,
}

impl Environment {
    /// Base URL for this deployment
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Production => "https://api.gemini.com",
            Self::Sandbox => "https://api.sandbox.gemini.com",
        }
    }
}

/// Gemini private REST API client
///
/// Every operation is a synchronous request/response round trip built
/// from local values only: a fresh payload is constructed, stamped with
/// a nonce, signed and dispatched per call. No state is carried between
/// calls, so `&self` methods are safe for concurrent use.
///
/// # Example
///
/// ```no_run
/// use gemini_rest::{Credentials, GeminiClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let creds = Credentials::from_env()?;
///     let client = GeminiClient::sandbox(creds);
///
///     let balances = client.get_balances().await?;
///     println!("{}", balances);
///
///     Ok(())
/// }
/// ```
pub struct GeminiClient {
    transport: Arc<dyn Transport>,
    nonce: Arc<dyn NonceProvider>,
    credentials: Credentials,
    environment: Environment,
    account: Option<String>,
}

impl GeminiClient {
    /// Create a client against the production deployment
    pub fn new(credentials: Credentials) -> Self {
        Self::with_config(ClientConfig::new(credentials))
    }

    /// Create a client against the sandbox deployment
    pub fn sandbox(credentials: Credentials) -> Self {
        Self::with_config(ClientConfig::new(credentials).with_sandbox())
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let user_agent = config
            .user_agent
            .clone()
            .unwrap_or_else(|| "gemini-rest/0.1.0".to_string());
        let transport = Arc::new(HttpTransport::new(config.timeout_secs, &user_agent));

        Self::with_transport(config, transport, Arc::new(ClockNonce::new()))
    }

    /// Create a client with injected transport and nonce provider
    ///
    /// This is the seam tests use: a capturing transport plus a pinned
    /// nonce provider make every request fully deterministic.
    pub fn with_transport(
        config: ClientConfig,
        transport: Arc<dyn Transport>,
        nonce: Arc<dyn NonceProvider>,
    ) -> Self {
        info!(environment = ?config.environment, "Created Gemini REST client");

        Self {
            transport,
            nonce,
            credentials: config.credentials,
            environment: config.environment,
            account: config.account,
        }
    }

    /// The deployment this client talks to
    pub fn environment(&self) -> Environment {
        self.environment
    }

    /// The configured sub-account, if any
    pub fn account(&self) -> Option<&str> {
        self.account.as_deref()
    }

    // ========================================================================
    // Request pipeline
    // ========================================================================

    /// Build a fully authenticated request descriptor for one call
    ///
    /// Stamps the payload with `request` (duplicating the endpoint path)
    /// and a fresh `nonce`, appends the sub-account when one is
    /// configured (unless the endpoint opts out), signs, and assembles
    /// the auth headers. All request data rides in headers; the body
    /// stays empty.
    pub(crate) fn build_request(
        &self,
        path: &str,
        mut payload: Map<String, Value>,
        with_account: bool,
    ) -> SignedRequest {
        payload.insert("request".to_string(), Value::String(path.to_string()));
        payload.insert("nonce".to_string(), Value::String(self.nonce.next_nonce()));

        if with_account {
            if let Some(account) = &self.account {
                payload.insert("account".to_string(), Value::String(account.clone()));
            }
        }

        let envelope = self.credentials.sign(&Value::Object(payload));

        SignedRequest {
            url: format!("{}{}", self.environment.base_url(), path),
            headers: vec![
                ("Content-Type", "text/plain".to_string()),
                ("Content-Length", "0".to_string()),
                ("X-GEMINI-APIKEY", self.credentials.api_key().to_string()),
                ("X-GEMINI-PAYLOAD", envelope.payload),
                ("X-GEMINI-SIGNATURE", envelope.signature),
                ("Cache-Control", "no-cache".to_string()),
            ],
        }
    }

    /// Sign and dispatch one request, returning the parsed response
    pub(crate) async fn signed_post(
        &self,
        path: &str,
        payload: Map<String, Value>,
        with_account: bool,
    ) -> RestResult<Value> {
        let request = self.build_request(path, payload, with_account);

        debug!("Making authenticated request to {}", path);

        self.transport.send(&request).await
    }

    // ========================================================================
    // Trading Endpoints
    // ========================================================================

    /// Get trading endpoints
    pub fn trading(&self) -> TradingEndpoints<'_> {
        TradingEndpoints::new(self)
    }

    /// Place a new order
    pub async fn place_order(&self, order: &OrderRequest) -> RestResult<Value> {
        self.trading().place_order(order).await
    }

    /// Cancel an order by id
    pub async fn cancel_order(&self, order_id: &str) -> RestResult<Value> {
        self.trading().cancel_order(order_id).await
    }

    /// Cancel all open orders on the account
    pub async fn cancel_all_orders(&self) -> RestResult<Value> {
        self.trading().cancel_all_orders().await
    }

    /// Cancel all orders placed during this session
    pub async fn cancel_session_orders(&self) -> RestResult<Value> {
        self.trading().cancel_session_orders().await
    }

    /// Get the status of an order
    pub async fn order_status(
        &self,
        order_id: Option<&str>,
        client_order_id: Option<&str>,
    ) -> RestResult<Value> {
        self.trading().order_status(order_id, client_order_id).await
    }

    /// List all active orders
    pub async fn active_orders(&self) -> RestResult<Value> {
        self.trading().active_orders().await
    }

    /// List past trades for a symbol
    pub async fn past_trades(&self, symbol: &str) -> RestResult<Value> {
        self.trading().past_trades(symbol).await
    }

    // ========================================================================
    // Account Endpoints
    // ========================================================================

    /// Get account endpoints
    pub fn account_endpoints(&self) -> AccountEndpoints<'_> {
        AccountEndpoints::new(self)
    }

    /// Get available balances
    pub async fn get_balances(&self) -> RestResult<Value> {
        self.account_endpoints().balances().await
    }

    /// Get balances expressed in a notional currency
    pub async fn get_notional_balances(&self, currency: &str) -> RestResult<Value> {
        self.account_endpoints().notional_balances(currency).await
    }

    /// List accounts in the master group
    pub async fn list_accounts(&self) -> RestResult<Value> {
        self.account_endpoints().account_list().await
    }
}

impl Clone for GeminiClient {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            nonce: Arc::clone(&self.nonce),
            credentials: self.credentials.clone(),
            environment: self.environment,
            account: self.account.clone(),
        }
    }
}

impl std::fmt::Debug for GeminiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiClient")
            .field("environment", &self.environment)
            .field("account", &self.account)
            .finish()
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API credentials
    pub credentials: Credentials,
    /// Deployment to talk to
    pub environment: Environment,
    /// Sub-account identifier (appended to payloads as `account`)
    pub account: Option<String>,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Custom user agent
    pub user_agent: Option<String>,
}

impl ClientConfig {
    /// Create a new configuration with the given credentials
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            environment: Environment::Production,
            account: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }

    /// Target the sandbox deployment
    pub fn with_sandbox(mut self) -> Self {
        self.environment = Environment::Sandbox;
        self
    }

    /// Target a specific deployment
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Set the sub-account identifier
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set user agent
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }
}
