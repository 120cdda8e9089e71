//! warframe.market API client: request building, fetching and response validation

mod client;
mod models;
pub mod response;

pub use client::{ClientConfig, MarketClient, DEFAULT_API_URL, USER_AGENT};
pub use models::{Order, OrderType};

#[cfg(test)]
mod tests;
