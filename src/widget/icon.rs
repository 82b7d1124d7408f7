use crate::dom::Element;
use crate::entities::cart::Cart;
use crate::widget::templates::format_price;

pub const VISIBLE_CLASS: &str = "cart-icon_visible";

/// Compact cart indicator living outside the detail view.
pub trait IconBadge {
    /// Called after every cart change and after the cart is cleared by an order.
    fn update(&mut self, cart: &Cart);
}

/// Badge showing total count and price, hidden while the cart is empty.
#[derive(Debug)]
pub struct CartIcon {
    elem: Element,
}

impl Default for CartIcon {
    fn default() -> Self {
        Self::new()
    }
}

impl CartIcon {
    pub fn new() -> Self {
        CartIcon {
            elem: Element::new("div").class("cart-icon"),
        }
    }

    pub fn elem(&self) -> &Element {
        &self.elem
    }

    pub fn is_visible(&self) -> bool {
        self.elem.has_class(VISIBLE_CLASS)
    }

    pub fn count_text(&self) -> Option<String> {
        self.elem
            .query_selector(".cart-icon__count")
            .map(|count| count.text_content())
    }

    pub fn price_text(&self) -> Option<String> {
        self.elem
            .query_selector(".cart-icon__price")
            .map(|price| price.text_content())
    }
}

impl IconBadge for CartIcon {
    fn update(&mut self, cart: &Cart) {
        self.elem.clear();
        if cart.is_empty() {
            self.elem.remove_class(VISIBLE_CLASS);
            return;
        }

        self.elem.add_class(VISIBLE_CLASS);
        self.elem.append(
            &Element::new("div")
                .class("cart-icon__inner")
                .child(
                    Element::new("span")
                        .class("cart-icon__count")
                        .text(cart.total_count().to_string()),
                )
                .child(
                    Element::new("span")
                        .class("cart-icon__price")
                        .text(format_price(cart.total_price())),
                ),
        );
    }
}
