//! Best-price reduction over an order list

use crate::market::{Order, OrderType};

/// Best visible prices on each side of the market
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Quote {
    pub lowest_sell: Option<i64>,
    pub highest_buy: Option<i64>,
}

impl Quote {
    /// Reduce an order list to the lowest visible sell and highest visible buy.
    ///
    /// Hidden orders and orders of any other side are skipped. An empty list
    /// yields `Quote::default()`.
    pub fn from_orders(orders: &[Order]) -> Self {
        let visible_prices = |side: OrderType| {
            orders
                .iter()
                .filter(move |o| o.visible && o.order_type == side)
                .map(|o| o.platinum)
        };

        Self {
            lowest_sell: visible_prices(OrderType::Sell).min(),
            highest_buy: visible_prices(OrderType::Buy).max(),
        }
    }

    /// Result lines, highest buy first
    pub fn lines(&self) -> [String; 2] {
        let highest_buy = match self.highest_buy {
            Some(price) => format!("The highest_buy is: {}", price),
            None => "No highest_buy".to_string(),
        };
        let lowest_sell = match self.lowest_sell {
            Some(price) => format!("The lowest_sell is: {}", price),
            None => "No lowest_sell".to_string(),
        };
        [highest_buy, lowest_sell]
    }
}

#[cfg(test)]
#[path = "quote_tests.rs"]
mod tests;
