// Market data module entrypoint
pub mod types; // wire-format records + column headers
pub mod rest;  // one-shot REST fetch of the order book
