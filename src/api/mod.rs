pub mod order;

use axum::{middleware::from_fn, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::entities::order::OrderBook;
use crate::middleware::logging::logging_middleware;
use order::order_router;

pub fn create_api_router(book: Arc<OrderBook>) -> Router {
    Router::new()
        .merge(order_router(book))
        .layer(from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
}
