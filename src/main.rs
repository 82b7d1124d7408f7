use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use cart_sync::api::create_api_router;
use cart_sync::entities::order::OrderBook;
use cart_sync::Settings;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let settings = Settings::from_env().expect("Invalid configuration");

    let book = Arc::new(OrderBook::default());
    let app = create_api_router(book);

    let listener = tokio::net::TcpListener::bind(settings.bind_addr).await.unwrap();
    info!(addr = %settings.bind_addr, "Order endpoint listening");
    axum::serve(listener, app).await.unwrap();
}
