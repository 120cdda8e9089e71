use std::time::Duration;

use log::{debug, warn};

use crate::error::Result;

/// Default warframe.market v1 API root
pub const DEFAULT_API_URL: &str = "https://api.warframe.market/v1";

/// Static identifying header value sent with every request
pub const USER_AGENT: &str = "simple-script";

/// Settings for [`MarketClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub user_agent: String,
    /// `None` waits indefinitely
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Blocking client for the order-listing endpoint
pub struct MarketClient {
    pub(crate) client: reqwest::blocking::Client,
    pub(crate) base_url: String,
    pub(crate) user_agent: String,
}

impl MarketClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        // reqwest's blocking client defaults to a 30s timeout; None must mean none
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            user_agent: config.user_agent,
        })
    }

    /// Order-listing URL for `slug`, substituted verbatim
    pub fn order_url(&self, slug: &str) -> String {
        format!("{}/items/{}/orders", self.base_url, slug)
    }

    /// Issue one GET for the item's orders and return the raw body.
    ///
    /// Non-success statuses are not errors here: the API answers unknown
    /// items with a JSON body lacking `payload`, and the validator reports it.
    pub fn fetch_orders_body(&self, slug: &str) -> Result<Vec<u8>> {
        let url = self.order_url(slug);
        debug!("Fetching orders: {}", url);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, &self.user_agent)
            .send()?;

        let status = response.status();
        if status.is_success() {
            debug!("Order listing responded with {}", status);
        } else {
            warn!("Order listing for '{}' responded with {}", slug, status);
        }

        Ok(response.bytes()?.to_vec())
    }
}
