use crate::dom::Element;
use crate::entities::cart::CartEntry;
use crate::error::CartError;
use crate::order::OrderForm;

pub const LOADING_CLASS: &str = "is-loading";
pub const ERROR_VISIBLE_CLASS: &str = "cart-form__error_visible";

pub fn format_price(price: f64) -> String {
    format!("€{price:.2}")
}

/// One rendered cart line and the nodes that change when its count does.
#[derive(Clone, Debug)]
pub struct ProductRow {
    pub root: Element,
    pub count: Element,
    pub price: Element,
}

impl ProductRow {
    pub fn render(entry: &CartEntry, assets_base: &str) -> Self {
        let count = Element::new("span")
            .class("cart-counter__count")
            .text(entry.count.to_string());
        let price = Element::new("div")
            .class("cart-product__price")
            .text(format_price(entry.price()));

        let root = Element::new("div")
            .class("cart-product")
            .attr("data-product-id", entry.product.id.as_str())
            .child(
                Element::new("div").class("cart-product__img").child(
                    Element::new("img")
                        .attr(
                            "src",
                            format!("{assets_base}/products/{}", entry.product.image),
                        )
                        .attr("alt", "product"),
                ),
            )
            .child(
                Element::new("div")
                    .class("cart-product__info")
                    .child(
                        Element::new("div")
                            .class("cart-product__title")
                            .text(entry.product.name.as_str()),
                    )
                    .child(
                        Element::new("div")
                            .class("cart-product__price-wrap")
                            .child(
                                Element::new("div")
                                    .class("cart-counter")
                                    .child(counter_button("minus", assets_base))
                                    .child(count.clone())
                                    .child(counter_button("plus", assets_base)),
                            )
                            .child(price.clone()),
                    ),
            );

        ProductRow { root, count, price }
    }

    pub fn update(&self, entry: &CartEntry) {
        self.count.set_text(entry.count.to_string());
        self.price.set_text(format_price(entry.price()));
    }
}

fn counter_button(kind: &str, assets_base: &str) -> Element {
    Element::new("button")
        .attr("type", "button")
        .class(&format!(
            "cart-counter__button cart-counter__button_{kind}"
        ))
        .child(
            Element::new("img")
                .attr("src", format!("{assets_base}/icons/square-{kind}-icon.svg"))
                .attr("alt", kind),
        )
}

#[derive(Clone, Debug)]
pub struct FormInputs {
    pub name: Element,
    pub email: Element,
    pub tel: Element,
    pub address: Element,
}

/// Rendered order form with handles to everything the cart touches after render.
#[derive(Clone, Debug)]
pub struct OrderFormView {
    pub form: Element,
    pub inputs: FormInputs,
    pub total_price: Element,
    pub submit: Element,
    pub error: Element,
}

impl OrderFormView {
    pub fn render(defaults: &OrderForm, total_price: f64) -> Self {
        let inputs = FormInputs {
            name: input("name", "text", "Name", &defaults.name),
            email: input("email", "email", "Email", &defaults.email),
            tel: input("tel", "tel", "Phone", &defaults.tel),
            address: input("address", "text", "Address", &defaults.address),
        };
        let total = Element::new("span")
            .class("cart-buttons__info-price")
            .text(format_price(total_price));
        let submit = Element::new("button")
            .attr("type", "submit")
            .class("cart-buttons__button btn-group__button button")
            .text("order");
        let error = Element::new("div").class("cart-form__error");

        let form = Element::new("form")
            .class("cart-form")
            .child(Element::new("h5").class("cart-form__title").text("Delivery"))
            .child(
                Element::new("div")
                    .class("cart-form__group cart-form__group_row")
                    .child(inputs.name.clone())
                    .child(inputs.email.clone())
                    .child(inputs.tel.clone()),
            )
            .child(
                Element::new("div")
                    .class("cart-form__group")
                    .child(inputs.address.clone()),
            )
            .child(error.clone())
            .child(
                Element::new("div").class("cart-buttons").child(
                    Element::new("div")
                        .class("cart-buttons__buttons btn-group")
                        .child(
                            Element::new("div")
                                .class("cart-buttons__info")
                                .child(
                                    Element::new("span")
                                        .class("cart-buttons__info-text")
                                        .text("total"),
                                )
                                .child(total.clone()),
                        )
                        .child(submit.clone()),
                ),
            );

        OrderFormView {
            form,
            inputs,
            total_price: total,
            submit,
            error,
        }
    }

    /// Reads the current input values, the way a form submission would serialise them.
    pub fn read(&self) -> Result<OrderForm, CartError> {
        let value = |input: &Element, field: &'static str| {
            input
                .get_attribute("value")
                .ok_or(CartError::MissingElement(field))
        };
        Ok(OrderForm {
            name: value(&self.inputs.name, "name input")?,
            email: value(&self.inputs.email, "email input")?,
            tel: value(&self.inputs.tel, "tel input")?,
            address: value(&self.inputs.address, "address input")?,
        })
    }

    pub fn set_total(&self, total_price: f64) {
        self.total_price.set_text(format_price(total_price));
    }

    pub fn show_error(&self, message: &str) {
        self.error.set_text(message);
        self.error.add_class(ERROR_VISIBLE_CLASS);
    }

    pub fn hide_error(&self) {
        self.error.clear();
        self.error.remove_class(ERROR_VISIBLE_CLASS);
    }
}

fn input(name: &str, kind: &str, placeholder: &str, value: &str) -> Element {
    Element::new("input")
        .attr("name", name)
        .attr("type", kind)
        .class("cart-form__input")
        .attr("placeholder", placeholder)
        .attr("required", "")
        .attr("value", value)
}

pub fn render_success_body(assets_base: &str) -> Element {
    Element::new("div").class("modal__body-inner").child(
        Element::new("p")
            .text("Order successful! Your order is being cooked :) ")
            .child(Element::new("br"))
            .text("We’ll notify you about delivery time shortly.")
            .child(Element::new("br"))
            .child(Element::new("img").attr("src", format!("{assets_base}/delivery.gif"))),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::product::Product;

    #[test]
    fn row_shows_line_price_and_escapes_the_name() {
        let entry = CartEntry {
            product: Product::new("fish", "Fish & <Chips>", 5.5, "fish.png"),
            count: 2,
        };
        let row = ProductRow::render(&entry, "/assets/images");

        assert_eq!(row.count.text_content(), "2");
        assert_eq!(row.price.text_content(), "€11.00");
        let html = row.root.outer_html();
        assert!(html.contains("Fish &amp; &lt;Chips&gt;"));
        assert!(html.contains(r#"data-product-id="fish""#));
        assert!(html.contains(r#"src="/assets/images/products/fish.png""#));
    }

    #[test]
    fn form_reads_back_its_inputs() {
        let view = OrderFormView::render(&OrderForm::default(), 12.0);
        view.inputs.tel.set_attribute("value", "+3725550000");

        let form = view.read().unwrap();
        assert_eq!(form.tel, "+3725550000");
        assert_eq!(form.name, "Santa Claus");
        assert_eq!(view.total_price.text_content(), "€12.00");
    }
}
