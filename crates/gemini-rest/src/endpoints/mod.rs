//! API endpoint implementations

pub mod account;
pub mod trading;

pub use account::AccountEndpoints;
pub use trading::TradingEndpoints;
