use tobview_rs::config::Config;
use tobview_rs::market_data::rest::RestClient;
use tobview_rs::telemetry;
use tobview_rs::view::OrderBookView;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok(); // load .env
    telemetry::init_tracing("tobview_rs=info");

    let config = Config::from_env();
    info!("Using order book endpoint {}", config.orderbook_url);

    let client = RestClient::new(config.orderbook_url.clone());
    let mut view = OrderBookView::new(client);

    view.init().await;
    info!("Loaded {} order book rows", view.rows().len());

    print!("{}", view.render());
    Ok(())
}
