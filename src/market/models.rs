use serde::Deserialize;

/// Side of a listed order
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    Sell,
    Buy,
    /// Any side string other than exactly "sell" or "buy"
    #[serde(other)]
    Other,
}

/// A single order from `payload.orders`
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Order {
    /// Price in platinum
    pub platinum: i64,
    pub order_type: OrderType,
    /// Whether the order is currently listed
    pub visible: bool,
}

#[cfg(test)]
impl Order {
    pub fn new(platinum: i64, order_type: OrderType, visible: bool) -> Self {
        Self {
            platinum,
            order_type,
            visible,
        }
    }

    /// Visible sell order
    pub fn sell(platinum: i64) -> Self {
        Self::new(platinum, OrderType::Sell, true)
    }

    /// Visible buy order
    pub fn buy(platinum: i64) -> Self {
        Self::new(platinum, OrderType::Buy, true)
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}
