#![allow(dead_code)]

use std::{net::SocketAddr, sync::Arc};

use cart_sync::api::create_api_router;
use cart_sync::dom::Element;
use cart_sync::entities::order::OrderBook;
use cart_sync::widget::{icon::CartIcon, modal::ModalWindow};
use cart_sync::{CartWidget, Product, Settings};
use reqwest::Url;

pub type TestWidget = CartWidget<CartIcon, ModalWindow>;

pub fn product(id: &str, price: f64) -> Product {
    Product::new(id, format!("Product {id}"), price, format!("{id}.png"))
}

pub fn settings_for(endpoint: &str) -> Settings {
    Settings {
        order_endpoint: Url::parse(endpoint).expect("Test endpoint should be a url"),
        ..Settings::default()
    }
}

/// Widget wired to the stock icon and modal, mounted on a fresh page element.
pub fn widget(settings: &Settings) -> (TestWidget, Element) {
    let page = Element::new("body");
    let modal = ModalWindow::new(&page, &settings.assets_base);
    (CartWidget::new(CartIcon::new(), modal, settings), page)
}

pub fn offline_widget() -> (TestWidget, Element) {
    widget(&settings_for("http://127.0.0.1:9/post"))
}

/// Starts the order endpoint on an ephemeral port and returns its address.
pub async fn spawn_order_endpoint() -> SocketAddr {
    let app = create_api_router(Arc::new(OrderBook::default()));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener
        .local_addr()
        .expect("Failed to read test listener address");
    tokio::spawn(async move {
        axum::serve(listener, app)
            .await
            .expect("Order endpoint stopped");
    });
    addr
}

/// Innermost element of the counter button of `product_id`, `kind` is "minus" or "plus".
pub fn counter_icon(widget: &TestWidget, product_id: &str, kind: &str) -> Element {
    widget
        .modal()
        .body()
        .query_selector(&format!(r#"[data-product-id="{product_id}"]"#))
        .and_then(|row| row.query_selector(&format!(".cart-counter__button_{kind}")))
        .and_then(|button| button.query_selector("img"))
        .expect("Counter button should be rendered")
}

pub fn rendered_total(widget: &TestWidget) -> String {
    widget
        .modal()
        .body()
        .query_selector(".cart-buttons__info-price")
        .expect("Total should be rendered")
        .text_content()
}
