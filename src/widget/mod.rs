//! Cart widget: the cart store plus everything that keeps the page in step with it.
//!
//! Every mutation ends in [`CartWidget::on_product_update`], which always refreshes
//! the icon badge and, while the detail view is open, patches only the row that
//! changed and the shared total. The list is rendered in full once per opening.

pub mod icon;
pub mod modal;
pub mod templates;
pub mod view;

use tracing::{debug, error, info, warn};
use validator::Validate;

use crate::config::Settings;
use crate::dom::Element;
use crate::entities::cart::{Cart, EntryChange};
use crate::entities::product::Product;
use crate::error::CartError;
use crate::order::{OrderClient, OrderClientError, OrderForm};

use icon::IconBadge;
use modal::Modal;
use templates::{render_success_body, LOADING_CLASS};
use view::{DetailView, OpenBody, OrderBody};

pub const DETAIL_TITLE: &str = "Your order";
pub const SUCCESS_TITLE: &str = "Success!";

/// UI input the widget reacts to.
#[derive(Clone, Debug)]
pub enum UiEvent {
    /// The icon badge was clicked.
    IconClick,
    /// Something was clicked; carries the innermost clicked element.
    Click(Element),
}

pub struct CartWidget<I: IconBadge, M: Modal> {
    cart: Cart,
    icon: I,
    modal: M,
    view: DetailView,
    client: OrderClient,
    assets_base: String,
    form_defaults: OrderForm,
}

impl<I: IconBadge, M: Modal> CartWidget<I, M> {
    pub fn new(icon: I, modal: M, settings: &Settings) -> Self {
        CartWidget {
            cart: Cart::new(),
            icon,
            modal,
            view: DetailView::Closed,
            client: OrderClient::new(settings.order_endpoint.clone()),
            assets_base: settings.assets_base.clone(),
            form_defaults: OrderForm::default(),
        }
    }

    pub fn with_form_defaults(mut self, defaults: OrderForm) -> Self {
        self.form_defaults = defaults;
        self
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn icon(&self) -> &I {
        &self.icon
    }

    pub fn modal(&self) -> &M {
        &self.modal
    }

    pub fn view(&self) -> &DetailView {
        &self.view
    }

    pub fn client(&self) -> &OrderClient {
        &self.client
    }

    //Cart zone
    /// Adds one unit of `product`. `None` is ignored without any notification.
    pub fn add_product(&mut self, product: Option<Product>) {
        let Some(change) = self.cart.add_product(product) else {
            return;
        };
        if let Err(err) = self.on_product_update(&change) {
            error!(product_id = %change.product_id(), error = %err, "Failed to sync cart view");
        }
    }

    pub fn update_product_count(&mut self, product_id: &str, amount: i32) -> Result<(), CartError> {
        let change = self.cart.update_product_count(product_id, amount)?;
        self.on_product_update(&change)
    }

    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    pub fn total_count(&self) -> u32 {
        self.cart.total_count()
    }

    pub fn total_price(&self) -> f64 {
        self.cart.total_price()
    }

    //View sync zone
    fn on_product_update(&mut self, change: &EntryChange) -> Result<(), CartError> {
        let result = self.sync_detail_view(change);
        self.icon.update(&self.cart);
        result
    }

    fn sync_detail_view(&mut self, change: &EntryChange) -> Result<(), CartError> {
        if !self.view.is_open() {
            return Ok(());
        }
        if self.cart.is_empty() {
            debug!("Cart emptied while detail view open");
            self.close_detail_view();
            return Ok(());
        }

        let Some(body) = self.view.order_body_mut() else {
            return Ok(());
        };

        match change {
            EntryChange::Removed(entry) => {
                debug!(product_id = %entry.product.id, "Removing cart row");
                body.remove_row(&entry.product.id)
                    .ok_or(CartError::MissingElement("cart-product row"))?;
            }
            EntryChange::Updated(entry) => match body.row(&entry.product.id) {
                Some(row) => {
                    debug!(product_id = %entry.product.id, count = entry.count, "Patching cart row");
                    row.update(entry);
                }
                None => {
                    debug!(product_id = %entry.product.id, "Inserting cart row");
                    body.insert_row(entry, &self.assets_base);
                }
            },
        }
        body.form.set_total(self.cart.total_price());
        Ok(())
    }

    //Detail view zone
    /// CLOSED → OPEN. Renders a fresh body every time; an already open view is left alone.
    pub fn open_detail_view(&mut self) {
        if self.view.is_open() {
            debug!("Detail view already open");
            return;
        }

        let body = OrderBody::render(&self.cart, &self.form_defaults, &self.assets_base);
        self.modal.set_title(DETAIL_TITLE);
        self.modal.set_body(body.container.clone());
        self.modal.open();
        self.view = DetailView::Open(OpenBody::Order(body));
        info!(entries = self.cart.entries().len(), "Opened cart detail view");
    }

    /// OPEN → CLOSED. Click handling for the view stops with it.
    pub fn close_detail_view(&mut self) {
        if !self.view.is_open() {
            return;
        }
        self.modal.close();
        self.view = DetailView::Closed;
        info!("Closed cart detail view");
    }

    /// Routes a UI event. Clicks only count while the detail view is open and only
    /// when they land inside it.
    pub fn dispatch(&mut self, event: UiEvent) -> Result<(), CartError> {
        match event {
            UiEvent::IconClick => {
                self.open_detail_view();
                Ok(())
            }
            UiEvent::Click(target) => self.on_click(&target),
        }
    }

    fn on_click(&mut self, target: &Element) -> Result<(), CartError> {
        if !self.view.is_open() {
            debug!("Ignoring click, detail view closed");
            return Ok(());
        }
        if self.modal.is_close_target(target) {
            self.close_detail_view();
            return Ok(());
        }

        let Some(body) = self.view.order_body() else {
            return Ok(());
        };
        if !body.container.contains(target) {
            return Ok(());
        }

        let amount = if target.closest(".cart-counter__button_minus").is_some() {
            -1
        } else if target.closest(".cart-counter__button_plus").is_some() {
            1
        } else {
            return Ok(());
        };

        let product_id = target
            .closest(".cart-product")
            .and_then(|row| row.data("product-id"))
            .ok_or(CartError::MissingElement("cart-product row"))?;

        self.update_product_count(&product_id, amount)
    }

    //Order zone
    /// Submits the order form and waits for the endpoint.
    ///
    /// On success the cart is cleared in one go and the view switches to the
    /// confirmation. On failure the form stays as it was, with the error shown and the
    /// submit control usable again.
    pub async fn submit_order(&mut self) -> Result<(), CartError> {
        let form = self.begin_submission()?;
        match self.client.submit(&form).await {
            Ok(()) => {
                self.complete_submission();
                Ok(())
            }
            Err(err) => {
                self.fail_submission(&err);
                Err(CartError::OrderSubmissionFailed(err))
            }
        }
    }

    /// Validates and serialises the form, then puts the submit control into its
    /// loading state. Returns the form to post.
    pub fn begin_submission(&mut self) -> Result<OrderForm, CartError> {
        let body = self
            .view
            .order_body()
            .ok_or(CartError::DetailViewClosed)?;
        if body.form.submit.has_class(LOADING_CLASS) {
            return Err(CartError::SubmissionInFlight);
        }

        let form = body.form.read()?;
        if let Err(err) = form.validate() {
            body.form.show_error("Please fill in every delivery field.");
            return Err(CartError::InvalidOrderForm(err.to_string()));
        }

        body.form.hide_error();
        body.form.submit.add_class(LOADING_CLASS);
        debug!("Order submission started");
        Ok(form)
    }

    pub fn complete_submission(&mut self) {
        self.modal.set_title(SUCCESS_TITLE);
        self.cart.clear();
        self.modal.set_body(render_success_body(&self.assets_base));
        if self.view.is_open() {
            self.view = DetailView::Open(OpenBody::Confirmation);
        }
        self.icon.update(&self.cart);
        info!("Order submitted, cart cleared");
    }

    pub fn fail_submission(&mut self, err: &OrderClientError) {
        warn!(error = %err, "Order submission failed");
        if let Some(body) = self.view.order_body() {
            body.form.submit.remove_class(LOADING_CLASS);
            body.form
                .show_error("We could not place your order. Please try again.");
        }
    }
}
