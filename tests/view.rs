mod common;

use cart_sync::dom::Element;
use cart_sync::widget::modal::PAGE_OPEN_CLASS;
use cart_sync::widget::templates::format_price;
use cart_sync::widget::DETAIL_TITLE;
use cart_sync::{CartError, UiEvent};
use common::{counter_icon, offline_widget, product, rendered_total};

#[test]
fn test_icon_follows_every_change_while_closed() {
    let (mut widget, _page) = offline_widget();

    widget.add_product(Some(product("1", 10.0)));
    widget.add_product(Some(product("2", 2.5)));

    assert!(!widget.view().is_open());
    assert!(widget.icon().is_visible());
    assert_eq!(widget.icon().count_text().as_deref(), Some("2"));
    assert_eq!(widget.icon().price_text().as_deref(), Some("€12.50"));

    widget.update_product_count("1", -1).unwrap();
    widget.update_product_count("2", -1).unwrap();

    assert!(!widget.icon().is_visible());
    assert!(widget.icon().count_text().is_none());
}

#[test]
fn test_open_renders_every_entry_once() {
    let (mut widget, page) = offline_widget();
    widget.add_product(Some(product("1", 10.0)));
    widget.add_product(Some(product("1", 10.0)));
    widget.add_product(Some(product("2", 4.0)));

    widget.dispatch(UiEvent::IconClick).unwrap();

    assert!(widget.view().is_open());
    assert!(widget.modal().is_open());
    assert!(page.has_class(PAGE_OPEN_CLASS));
    assert_eq!(widget.modal().title(), DETAIL_TITLE);

    let body = widget.modal().body();
    assert_eq!(body.query_selector_all(".cart-product").len(), 2);
    assert_eq!(body.query_selector_all(".cart-form").len(), 1);
    assert_eq!(rendered_total(&widget), "€24.00");

    let row = body
        .query_selector(r#"[data-product-id="1"]"#)
        .expect("Row for product 1 should be rendered");
    assert_eq!(
        row.query_selector(".cart-counter__count").map(|e| e.text_content()),
        Some("2".to_owned())
    );
    assert_eq!(
        row.query_selector(".cart-product__price").map(|e| e.text_content()),
        Some("€20.00".to_owned())
    );
}

#[test]
fn test_counter_click_patches_only_its_row() {
    let (mut widget, _page) = offline_widget();
    widget.add_product(Some(product("1", 10.0)));
    widget.add_product(Some(product("2", 4.0)));
    widget.open_detail_view();

    let untouched = widget
        .modal()
        .body()
        .query_selector(r#"[data-product-id="2"]"#)
        .expect("Row for product 2 should be rendered");
    let untouched_html = untouched.outer_html();

    let plus = counter_icon(&widget, "1", "plus");
    widget.dispatch(UiEvent::Click(plus.clone())).unwrap();
    widget.dispatch(UiEvent::Click(plus)).unwrap();

    let body = widget.modal().body();
    let row = body
        .query_selector(r#"[data-product-id="1"]"#)
        .expect("Row for product 1 should still be rendered");
    assert_eq!(
        row.query_selector(".cart-counter__count").map(|e| e.text_content()),
        Some("3".to_owned())
    );
    assert_eq!(
        row.query_selector(".cart-product__price").map(|e| e.text_content()),
        Some("€30.00".to_owned())
    );
    assert_eq!(rendered_total(&widget), format_price(widget.total_price()));

    let still_there = body
        .query_selector(r#"[data-product-id="2"]"#)
        .expect("Row for product 2 should still be rendered");
    assert!(still_there.ptr_eq(&untouched));
    assert_eq!(still_there.outer_html(), untouched_html);
}

#[test]
fn test_removing_one_of_two_entries_leaves_one_row() {
    let (mut widget, _page) = offline_widget();
    widget.add_product(Some(product("1", 10.0)));
    widget.add_product(Some(product("2", 4.0)));
    widget.open_detail_view();

    let minus = counter_icon(&widget, "2", "minus");
    widget.dispatch(UiEvent::Click(minus)).unwrap();

    let rows = widget.modal().body().query_selector_all(".cart-product");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].data("product-id").as_deref(), Some("1"));
    assert_eq!(rendered_total(&widget), format_price(widget.total_price()));
    assert_eq!(rendered_total(&widget), "€10.00");
    assert!(widget.view().is_open());
}

#[test]
fn test_last_removal_closes_detail_view() {
    let (mut widget, page) = offline_widget();
    widget.add_product(Some(product("1", 10.0)));
    widget.open_detail_view();

    let minus = counter_icon(&widget, "1", "minus");
    widget.dispatch(UiEvent::Click(minus.clone())).unwrap();

    assert!(widget.is_empty());
    assert!(!widget.view().is_open());
    assert!(!widget.modal().is_open());
    assert!(!page.has_class(PAGE_OPEN_CLASS));
    assert!(!widget.icon().is_visible());

    // Listener is gone with the view: a stale click does nothing.
    widget.dispatch(UiEvent::Click(minus)).unwrap();
    assert!(widget.is_empty());
}

#[test]
fn test_product_added_while_open_gets_a_row_above_the_form() {
    let (mut widget, _page) = offline_widget();
    widget.add_product(Some(product("1", 10.0)));
    widget.open_detail_view();

    widget.add_product(Some(product("2", 1.5)));

    let body = widget.modal().body();
    let rows = body.query_selector_all(".cart-product");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].data("product-id").as_deref(), Some("2"));
    assert_eq!(rendered_total(&widget), "€11.50");

    let container = body.children().remove(0);
    assert!(container
        .children()
        .last()
        .is_some_and(|last| last.has_class("cart-form")));
}

#[test]
fn test_close_control_closes_and_reopen_renders_fresh() {
    let (mut widget, _page) = offline_widget();
    widget.add_product(Some(product("1", 10.0)));
    widget.open_detail_view();
    let first_row = counter_icon(&widget, "1", "plus");

    let close = widget
        .modal()
        .elem()
        .query_selector(".modal__close")
        .and_then(|button| button.query_selector("img"))
        .expect("Close control should be rendered");
    widget.dispatch(UiEvent::Click(close)).unwrap();
    assert!(!widget.view().is_open());

    widget.add_product(Some(product("1", 10.0)));
    widget.dispatch(UiEvent::IconClick).unwrap();

    let reopened = counter_icon(&widget, "1", "plus");
    assert!(!reopened.ptr_eq(&first_row));
    assert_eq!(rendered_total(&widget), "€20.00");
}

#[test]
fn test_clicks_outside_the_view_are_ignored() {
    let (mut widget, page) = offline_widget();
    widget.add_product(Some(product("1", 10.0)));
    widget.open_detail_view();

    let stray = Element::new("button").class("cart-counter__button_minus");
    page.append(&stray);
    widget.dispatch(UiEvent::Click(stray)).unwrap();

    assert_eq!(widget.total_count(), 1);
}

#[test]
fn test_counter_outside_a_row_is_reported() {
    let (mut widget, _page) = offline_widget();
    widget.add_product(Some(product("1", 10.0)));
    widget.open_detail_view();

    let orphan = Element::new("button").class("cart-counter__button_plus");
    widget
        .modal()
        .body()
        .query_selector(".cart-form")
        .expect("Form should be rendered")
        .append(&orphan);

    let result = widget.dispatch(UiEvent::Click(orphan));
    assert!(matches!(result, Err(CartError::MissingElement(_))));
    assert_eq!(widget.total_count(), 1);
}

#[test]
fn test_product_names_are_escaped() {
    let (mut widget, _page) = offline_widget();
    let mut risky = product("x", 1.0);
    risky.name = "<img src=x onerror=alert(1)>".to_owned();
    widget.add_product(Some(risky));
    widget.open_detail_view();

    let html = widget.modal().elem().outer_html();
    assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
    assert!(!html.contains("<img src=x"));
}
