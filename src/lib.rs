//! Market Price - warframe.market price check
//!
//! Looks up one item on the warframe.market API and reports the highest
//! visible buy order and the lowest visible sell order.

pub mod app;
pub mod error;
pub mod market;
pub mod quote;
pub mod slug;

pub use app::{run, Outcome};
pub use error::{MarketError, Result};
pub use market::{ClientConfig, MarketClient, Order, OrderType};
pub use quote::Quote;
pub use slug::normalize_item_name;
