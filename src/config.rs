use std::env;

/// Default backend endpoint; the local order book server.
pub const DEFAULT_ORDERBOOK_URL: &str = "http://127.0.0.1:5000/orderbooks";

#[derive(Clone, Debug)]
pub struct Config {
    pub orderbook_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            orderbook_url: env::var("TOBVIEW_ORDERBOOK_URL")
                .unwrap_or_else(|_| DEFAULT_ORDERBOOK_URL.to_string()),
        }
    }
}
