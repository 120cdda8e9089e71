//! Entry routine composing the lookup stages

use std::io::{self, BufRead, Write};

use log::{debug, info, warn};

use crate::error::{MarketError, Result};
use crate::market::{response, MarketClient};
use crate::quote::Quote;
use crate::slug::normalize_item_name;

/// Prompt shown when no item name is passed on the command line
pub const PROMPT: &str = "What Item are Searching?: ";

pub const DECODE_ERROR_MESSAGE: &str = "Error: Could not decode JSON from the API response.";
pub const UNEXPECTED_RESPONSE_MESSAGE: &str =
    "Error: Item not found or API returned an unexpected response.";
pub const MALFORMED_ORDERS_MESSAGE: &str = "Error: API response did not contain a valid order list.";

/// How a lookup ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Orders were reduced and both result lines printed
    Quoted(Quote),
    /// Body was not JSON
    Undecodable,
    /// JSON without a `payload` field
    UnexpectedResponse,
    /// `payload` present but `orders` unusable
    MalformedOrders,
}

/// Resolve the raw item name from argument words or, failing that, one line of `input`
pub fn read_item_name<R: BufRead, W: Write>(
    item_words: &[String],
    input: &mut R,
    output: &mut W,
) -> Result<String> {
    if !item_words.is_empty() {
        return Ok(item_words.join(" "));
    }

    write!(output, "{}", PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

/// Run one price lookup, writing user-facing text to `output`.
///
/// Validation failures are reported to `output` and returned as an
/// [`Outcome`]; transport and I/O failures are returned as errors.
pub fn run<R: BufRead, W: Write>(
    client: &MarketClient,
    item_words: &[String],
    input: &mut R,
    output: &mut W,
) -> Result<Outcome> {
    let raw = read_item_name(item_words, input, output)?;
    let slug = normalize_item_name(&raw);
    if slug.is_empty() {
        warn!("Empty item name, querying the API anyway");
    }
    info!("Looking up item '{}'", slug);

    let body = client.fetch_orders_body(&slug)?;

    let document = match response::decode_body(&body) {
        Ok(document) => document,
        Err(MarketError::Decode(e)) => {
            debug!("Response body failed to decode: {}", e);
            writeln!(output, "{}", DECODE_ERROR_MESSAGE)?;
            return Ok(Outcome::Undecodable);
        }
        Err(e) => return Err(e),
    };

    let orders = match response::extract_orders(document) {
        Ok(orders) => orders,
        Err(MarketError::UnexpectedResponse(document)) => {
            let dump = response::pretty_dump(&document).map_err(io::Error::from)?;
            writeln!(output, "{}", UNEXPECTED_RESPONSE_MESSAGE)?;
            writeln!(output, "{}", dump)?;
            return Ok(Outcome::UnexpectedResponse);
        }
        Err(MarketError::MalformedOrders(e)) => {
            debug!("Order list failed to decode: {}", e);
            writeln!(output, "{}", MALFORMED_ORDERS_MESSAGE)?;
            return Ok(Outcome::MalformedOrders);
        }
        Err(e) => return Err(e),
    };
    debug!("Received {} orders", orders.len());

    let quote = Quote::from_orders(&orders);
    for line in quote.lines() {
        writeln!(output, "{}", line)?;
    }

    Ok(Outcome::Quoted(quote))
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
