use crate::dom::Element;
use crate::entities::cart::{Cart, CartEntry};
use crate::order::OrderForm;
use crate::widget::templates::{OrderFormView, ProductRow};

/// Whether the itemised cart is on screen, and what it is showing.
#[derive(Debug, Default)]
pub enum DetailView {
    #[default]
    Closed,
    Open(OpenBody),
}

#[derive(Debug)]
pub enum OpenBody {
    /// Rows plus the order form, patched in place on every cart change.
    Order(OrderBody),
    /// Shown after the order went through; nothing in it tracks the cart.
    Confirmation,
}

impl DetailView {
    pub fn is_open(&self) -> bool {
        matches!(self, DetailView::Open(_))
    }

    pub fn order_body(&self) -> Option<&OrderBody> {
        match self {
            DetailView::Open(OpenBody::Order(body)) => Some(body),
            _ => None,
        }
    }

    pub fn order_body_mut(&mut self) -> Option<&mut OrderBody> {
        match self {
            DetailView::Open(OpenBody::Order(body)) => Some(body),
            _ => None,
        }
    }
}

/// Detail view body for a cart with items. Every node the cart patches later is
/// captured here at render time; nothing is looked up again afterwards.
#[derive(Debug)]
pub struct OrderBody {
    pub container: Element,
    rows: Vec<(String, ProductRow)>,
    pub form: OrderFormView,
}

impl OrderBody {
    pub fn render(cart: &Cart, defaults: &OrderForm, assets_base: &str) -> Self {
        let container = Element::new("div");
        let mut rows = Vec::with_capacity(cart.entries().len());
        for entry in cart.entries() {
            let row = ProductRow::render(entry, assets_base);
            container.append(&row.root);
            rows.push((entry.product.id.clone(), row));
        }

        let form = OrderFormView::render(defaults, cart.total_price());
        container.append(&form.form);

        OrderBody {
            container,
            rows,
            form,
        }
    }

    pub fn row(&self, product_id: &str) -> Option<&ProductRow> {
        self.rows
            .iter()
            .find(|(id, _)| id == product_id)
            .map(|(_, row)| row)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Renders a row for an entry that joined the cart while the view was open.
    /// It goes last among the rows, right above the form.
    pub fn insert_row(&mut self, entry: &CartEntry, assets_base: &str) {
        let row = ProductRow::render(entry, assets_base);
        self.container.insert_before(&row.root, &self.form.form);
        self.rows.push((entry.product.id.clone(), row));
    }

    /// Detaches the row for `product_id`, returning it if it was rendered.
    pub fn remove_row(&mut self, product_id: &str) -> Option<ProductRow> {
        let index = self.rows.iter().position(|(id, _)| id == product_id)?;
        let (_, row) = self.rows.remove(index);
        row.root.remove();
        Some(row)
    }
}
