mod form;

pub use form::OrderForm;

use reqwest::{Client, StatusCode, Url};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum OrderClientError {
    #[error("Failed to reach order endpoint: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Order endpoint answered with status {0}")]
    Status(StatusCode),
}

/// Posts order forms, form-encoded, to one fixed endpoint.
///
/// The response body is not interpreted: any 2xx counts as a completed order.
#[derive(Clone, Debug)]
pub struct OrderClient {
    http: Client,
    endpoint: Url,
}

impl OrderClient {
    pub fn new(endpoint: Url) -> Self {
        OrderClient {
            http: Client::new(),
            endpoint,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub async fn submit(&self, form: &OrderForm) -> Result<(), OrderClientError> {
        debug!(endpoint = %self.endpoint, "Posting order");
        let response = self
            .http
            .post(self.endpoint.clone())
            .form(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(endpoint = %self.endpoint, status = %status, "Order endpoint rejected order");
            return Err(OrderClientError::Status(status));
        }
        Ok(())
    }
}
