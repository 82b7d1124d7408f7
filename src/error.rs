use thiserror::Error;

use crate::order::OrderClientError;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("No cart entry for product {0}")]
    UnknownProduct(String),
    #[error("Cart detail view is not open")]
    DetailViewClosed,
    #[error("Order submission is already in flight")]
    SubmissionInFlight,
    #[error("Invalid order form: {0}")]
    InvalidOrderForm(String),
    #[error("Order submission failed: {0}")]
    OrderSubmissionFailed(#[from] OrderClientError),
    #[error("Rendered element is missing: {0}")]
    MissingElement(&'static str),
}
