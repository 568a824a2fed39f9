use std::fmt::Write as _;

use tracing::error;

use crate::market_data::rest::OrderBookSource;
use crate::market_data::types::{OrderBookRecord, COLUMN_HEADERS};

/// Owns the visible table state and synchronizes it with the backend once
/// at startup. Rows start empty and are replaced wholesale by the first
/// page of a successful response; a failed fetch leaves them untouched.
pub struct OrderBookView<S> {
    source: S,
    rows: Vec<OrderBookRecord>,
}

impl<S: OrderBookSource> OrderBookView<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            rows: Vec::new(),
        }
    }

    /// Startup hook: one fetch, then either a wholesale row replacement or
    /// a diagnostic log with the previous rows kept as-is.
    pub async fn init(&mut self) {
        match self.source.fetch_order_book().await {
            Ok(pages) => match pages.into_iter().next() {
                Some(page) => self.rows = page.data,
                None => error!("No Data Found: response contained no order book page"),
            },
            Err(err) => error!("No Data Found: {err}"),
        }
    }

    pub fn rows(&self) -> &[OrderBookRecord] {
        &self.rows
    }

    /// Fixed-width text table: header row plus one line per record.
    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = COLUMN_HEADERS.iter().map(|h| h.len()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row.cells()) {
                *width = (*width).max(cell.len());
            }
        }

        let mut out = String::new();
        for (width, header) in widths.iter().zip(COLUMN_HEADERS) {
            let _ = write!(out, "{header:<w$}  ", w = *width);
        }
        push_trimmed_newline(&mut out);

        for row in &self.rows {
            for (width, cell) in widths.iter().zip(row.cells()) {
                let _ = write!(out, "{cell:<w$}  ", w = *width);
            }
            push_trimmed_newline(&mut out);
        }
        out
    }
}

fn push_trimmed_newline(out: &mut String) {
    let end = out.trim_end_matches(' ').len();
    out.truncate(end);
    out.push('\n');
}
