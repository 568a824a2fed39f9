use tracing_subscriber::EnvFilter;

/// Compact fmt subscriber; `RUST_LOG` wins over the given default.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .init();
}
