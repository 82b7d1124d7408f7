use axum::{
    extract::{Extension, Form},
    http::StatusCode,
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use validator::Validate;

use crate::entities::order::{OrderBook, ReceivedOrder};
use crate::middleware::logging::{to_response, ApiError};
use crate::order::OrderForm;

//ROUTERS
pub fn order_router(book: Arc<OrderBook>) -> Router {
    Router::new()
        .route("/post", post(receive_order))
        .route("/orders", get(list_orders))
        .layer(Extension(book))
}

//Routes
async fn receive_order(
    Extension(book): Extension<Arc<OrderBook>>,
    Form(payload): Form<OrderForm>,
) -> Response {
    if let Some(err) = payload.validate().err() {
        return to_response(
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({
                    "error": "Every delivery field is required and email must be valid."
                })),
            ),
            Err(ApiError::ValidationFail(err.to_string())),
        );
    }

    let order = ReceivedOrder::new(payload);
    book.push(order.clone()).await;
    to_response((StatusCode::OK, Json(order)), Ok(()))
}

async fn list_orders(Extension(book): Extension<Arc<OrderBook>>) -> Response {
    to_response(Json(book.all().await), Ok(()))
}
