//! Error types for market_price

use thiserror::Error;

/// Unified error type for a price lookup
#[derive(Debug, Error)]
pub enum MarketError {
    /// HTTP request failed (connection refused, DNS, TLS, timeout)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    /// Response body is not valid JSON
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
    /// Decoded document has no `payload` field; carries the whole document
    #[error("Unexpected response: no payload field")]
    UnexpectedResponse(serde_json::Value),
    /// `payload.orders` is missing or not an order list
    #[error("Malformed order list: {0}")]
    MalformedOrders(serde_json::Error),
    /// Reading the item name from stdin failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for market_price operations
pub type Result<T> = std::result::Result<T, MarketError>;
