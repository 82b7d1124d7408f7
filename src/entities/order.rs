use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::order::OrderForm;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReceivedOrder {
    pub id: Uuid,
    pub received_at: DateTime<Utc>,
    pub form: OrderForm,
}

impl ReceivedOrder {
    pub fn new(form: OrderForm) -> Self {
        ReceivedOrder {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            form,
        }
    }
}

/// In-memory list of orders the endpoint accepted, oldest first.
#[derive(Debug, Default)]
pub struct OrderBook {
    orders: Mutex<Vec<ReceivedOrder>>,
}

impl OrderBook {
    pub async fn push(&self, order: ReceivedOrder) {
        self.orders.lock().await.push(order);
    }

    pub async fn all(&self) -> Vec<ReceivedOrder> {
        self.orders.lock().await.clone()
    }
}
