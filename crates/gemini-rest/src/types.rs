//! Types for Gemini REST API requests
//!
//! Closed enums cover the values the client resolves locally (side,
//! order type, execution options, cancel scope). Beyond those shapes no
//! client-side validation is performed; the exchange validates order
//! semantics and reports rejections in its JSON error envelope.

use crate::error::RestError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// Trading Types
// ============================================================================

/// Order side (buy or sell)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderSide {
    /// Buy order
    Buy,
    /// Sell order
    Sell,
}

impl std::fmt::Display for OrderSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// Order type
///
/// Gemini only offers limit variants on the REST order endpoint;
/// "market" orders are expressed as aggressively priced limit orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderType {
    /// Standard limit order (the default)
    #[default]
    #[serde(rename = "exchange limit")]
    ExchangeLimit,
    /// Stop-limit order (requires a stop price)
    #[serde(rename = "exchange stop limit")]
    ExchangeStopLimit,
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ExchangeLimit => write!(f, "exchange limit"),
            Self::ExchangeStopLimit => write!(f, "exchange stop limit"),
        }
    }
}

/// Order execution options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderOption {
    /// Post-only: cancelled if any part would fill immediately
    MakerOrCancel,
    /// Any part not filled immediately is cancelled
    ImmediateOrCancel,
    /// Cancelled unless fully filled immediately
    FillOrKill,
    /// Only filled during an auction
    AuctionOnly,
    /// Indication of interest (block trading)
    IndicationOfInterest,
}

impl OrderOption {
    /// Get the API string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MakerOrCancel => "maker-or-cancel",
            Self::ImmediateOrCancel => "immediate-or-cancel",
            Self::FillOrKill => "fill-or-kill",
            Self::AuctionOnly => "auction-only",
            Self::IndicationOfInterest => "indication-of-interest",
        }
    }
}

/// Request to place an order
#[derive(Debug, Clone)]
pub struct OrderRequest {
    /// Trading symbol (e.g. "btcusd")
    pub symbol: String,
    /// Order side
    pub side: OrderSide,
    /// Order type
    pub order_type: OrderType,
    /// Order quantity
    pub amount: Decimal,
    /// Limit price
    pub price: Decimal,
    /// Stop price (for stop-limit orders)
    pub stop_price: Option<Decimal>,
    /// Execution options
    pub options: Vec<OrderOption>,
    /// Caller-supplied order id, echoed back in status queries
    pub client_order_id: Option<String>,
}

impl OrderRequest {
    /// Create a limit order
    pub fn limit(symbol: impl Into<String>, side: OrderSide, amount: Decimal, price: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type: OrderType::ExchangeLimit,
            amount,
            price,
            stop_price: None,
            options: Vec::new(),
            client_order_id: None,
        }
    }

    /// Create a stop-limit order
    pub fn stop_limit(
        symbol: impl Into<String>,
        side: OrderSide,
        amount: Decimal,
        price: Decimal,
        stop_price: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            order_type: OrderType::ExchangeStopLimit,
            amount,
            price,
            stop_price: Some(stop_price),
            options: Vec::new(),
            client_order_id: None,
        }
    }

    /// Add an execution option
    pub fn with_option(mut self, option: OrderOption) -> Self {
        self.options.push(option);
        self
    }

    /// Set as maker-or-cancel (post only)
    pub fn maker_or_cancel(self) -> Self {
        self.with_option(OrderOption::MakerOrCancel)
    }

    /// Set a client order id
    pub fn with_client_order_id(mut self, id: impl Into<String>) -> Self {
        self.client_order_id = Some(id.into());
        self
    }
}

// ============================================================================
// Cancellation
// ============================================================================

/// Which orders a cancel request addresses
///
/// Resolved at the call boundary; each scope maps to its own endpoint
/// path. `None` is the single-order form and requires an order id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelScope {
    /// Cancel one order by id
    None,
    /// Cancel all open orders on the account
    All,
    /// Cancel all orders placed during this session
    Session,
}

impl CancelScope {
    /// Endpoint path for this scope
    pub fn path(&self) -> &'static str {
        match self {
            Self::None => "/v1/order/cancel",
            Self::All => "/v1/order/cancel/all",
            Self::Session => "/v1/order/cancel/session",
        }
    }
}

impl From<bool> for CancelScope {
    /// `true` cancels everything, `false` is the single-order form
    fn from(all: bool) -> Self {
        if all {
            Self::All
        } else {
            Self::None
        }
    }
}

impl std::str::FromStr for CancelScope {
    type Err = RestError;

    /// Only "session" (case-insensitive) is a valid scope string
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("session") {
            Ok(Self::Session)
        } else {
            Err(RestError::InvalidParameter(format!(
                "invalid cancel scope {:?}, must be a bool or \"session\"",
                s
            )))
        }
    }
}
