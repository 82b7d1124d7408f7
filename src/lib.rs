//! Shopping-cart state with incremental view sync for a storefront page, plus a
//! small service that accepts the resulting orders.

pub mod api;
pub mod config;
pub mod dom;
pub mod entities;
pub mod error;
pub mod middleware;
pub mod order;
pub mod widget;

pub use config::Settings;
pub use entities::cart::{Cart, CartEntry, EntryChange};
pub use entities::product::Product;
pub use error::CartError;
pub use widget::{CartWidget, UiEvent};
