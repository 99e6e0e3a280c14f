//! Example: trading against the Gemini sandbox
//!
//! This example demonstrates how to:
//! - Check account balances
//! - Place and cancel a limit order
//! - Query order status
//!
//! Run with: cargo run --example sandbox_trading
//!
//! NOTE: Set GEMINI_API_KEY and GEMINI_API_SECRET environment variables
//! (sandbox keys from https://exchange.sandbox.gemini.com).

use gemini_rest::types::{OrderRequest, OrderSide};
use gemini_rest::{Credentials, GeminiClient};
use rust_decimal_macros::dec;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    println!("=== Gemini Sandbox Trading Example ===\n");

    let creds = Credentials::from_env()?;
    let client = GeminiClient::sandbox(creds);

    // ========================================================================
    // Balances
    // ========================================================================

    println!("--- Balances ---\n");

    let balances = client.get_balances().await?;
    println!("{}\n", serde_json::to_string_pretty(&balances)?);

    // ========================================================================
    // Place a far-from-market limit order, check it, cancel it
    // ========================================================================

    println!("--- Order lifecycle ---\n");

    let order = OrderRequest::limit("btcusd", OrderSide::Buy, dec!(0.001), dec!(1000))
        .maker_or_cancel()
        .with_client_order_id("sandbox-demo-1");

    println!("Placing order...");
    let placed = client.place_order(&order).await?;
    println!("{}\n", serde_json::to_string_pretty(&placed)?);

    if let Some(order_id) = placed.get("order_id").and_then(|v| v.as_str()) {
        println!("Checking status of {}...", order_id);
        let status = client.order_status(Some(order_id), None).await?;
        println!("{}\n", serde_json::to_string_pretty(&status)?);

        println!("Cancelling {}...", order_id);
        let cancelled = client.cancel_order(order_id).await?;
        println!("{}\n", serde_json::to_string_pretty(&cancelled)?);
    } else {
        // An error envelope (e.g. insufficient funds) is ordinary data
        println!("Order was not placed: {}", placed);
    }

    println!("Done.");
    Ok(())
}
