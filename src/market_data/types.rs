// Wire types for the /orderbooks endpoint. The backend serves an array of
// pages; each page carries the top-of-book rows under a "data" key.

/// Column order the rendering side uses for the table.
pub const COLUMN_HEADERS: [&str; 5] = ["Ticker", "BidQty", "BidPrice", "AskQty", "AskPrice"];

/// One top-of-book row: best bid/ask price and quantity for a ticker.
/// Everything arrives as text on the wire and stays text; nothing here
/// parses or validates the values.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OrderBookRecord {
    pub ticker: String,
    pub bid_qty: String,
    pub bid_price: String,
    pub ask_qty: String,
    pub ask_price: String,
}

impl OrderBookRecord {
    /// Field values in `COLUMN_HEADERS` order.
    pub fn cells(&self) -> [&str; 5] {
        [
            self.ticker.as_str(),
            self.bid_qty.as_str(),
            self.bid_price.as_str(),
            self.ask_qty.as_str(),
            self.ask_price.as_str(),
        ]
    }
}

/// One element of the top-level response array.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct OrderBookPage {
    pub data: Vec<OrderBookRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn deserializes_sample_payload() {
        let body = r#"[{"data":[{"Ticker":"AAPL","BidQty":"100","BidPrice":"150.00","AskQty":"50","AskPrice":"150.05"}]}]"#;
        let pages: Vec<OrderBookPage> = serde_json::from_str(body).unwrap();

        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].data.len(), 1);
        let record = &pages[0].data[0];
        assert_eq!(record.ticker, "AAPL");
        assert_eq!(record.bid_qty, "100");
        assert_eq!(record.bid_price, "150.00");
        assert_eq!(record.ask_qty, "50");
        assert_eq!(record.ask_price, "150.05");
    }

    #[test]
    fn deserializes_empty_data_array() {
        let pages: Vec<OrderBookPage> = serde_json::from_str(r#"[{"data":[]}]"#).unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].data.is_empty());
    }

    #[test]
    fn rejects_record_with_missing_field() {
        // All five fields are required; a bare ticker is not a row.
        let body = r#"[{"data":[{"Ticker":"AAPL"}]}]"#;
        assert!(serde_json::from_str::<Vec<OrderBookPage>>(body).is_err());
    }

    proptest! {
        // Any five texts in, the same five texts out, unmodified.
        #[test]
        fn record_stores_fields_verbatim(
            ticker in ".*",
            bid_qty in ".*",
            bid_price in ".*",
            ask_qty in ".*",
            ask_price in ".*",
        ) {
            let record = OrderBookRecord {
                ticker: ticker.clone(),
                bid_qty: bid_qty.clone(),
                bid_price: bid_price.clone(),
                ask_qty: ask_qty.clone(),
                ask_price: ask_price.clone(),
            };
            prop_assert_eq!(
                record.cells(),
                [
                    ticker.as_str(),
                    bid_qty.as_str(),
                    bid_price.as_str(),
                    ask_qty.as_str(),
                    ask_price.as_str(),
                ]
            );
        }
    }
}
