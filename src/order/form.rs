use serde::{Deserialize, Serialize};
use validator::Validate;

/// Delivery details posted with an order. Field names are the wire names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Validate)]
pub struct OrderForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub tel: String,
    #[validate(length(min = 1))]
    pub address: String,
}

impl Default for OrderForm {
    fn default() -> Self {
        OrderForm {
            name: "Santa Claus".to_owned(),
            email: "john@gmail.com".to_owned(),
            tel: "+1234567".to_owned(),
            address: "North, Lapland, Snow Home".to_owned(),
        }
    }
}
