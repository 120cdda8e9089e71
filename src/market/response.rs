//! Validation of the decoded order-listing response

use serde::Serialize;
use serde_json::Value;

use crate::error::{MarketError, Result};
use crate::market::Order;

/// Decode the raw body as JSON
pub fn decode_body(body: &[u8]) -> Result<Value> {
    Ok(serde_json::from_slice(body)?)
}

/// Pull `payload.orders` out of a decoded response.
///
/// A document without `payload` is handed back inside
/// [`MarketError::UnexpectedResponse`] so it can be shown to the user.
pub fn extract_orders(mut document: Value) -> Result<Vec<Order>> {
    if document.get("payload").is_none() {
        return Err(MarketError::UnexpectedResponse(document));
    }

    let orders = document
        .pointer_mut("/payload/orders")
        .map(Value::take)
        .unwrap_or(Value::Null);
    serde_json::from_value(orders).map_err(MarketError::MalformedOrders)
}

/// Pretty-print a document with four-space indentation, keys in received order
pub fn pretty_dump(document: &Value) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    document.serialize(&mut serializer)?;

    Ok(String::from_utf8_lossy(&buf).into_owned())
}
