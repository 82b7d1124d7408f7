use serde::Serialize;
use tracing::debug;

use crate::entities::product::Product;
use crate::error::CartError;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CartEntry {
    pub product: Product,
    pub count: u32,
}

impl CartEntry {
    /// Price of the whole line, `count × price`.
    pub fn price(&self) -> f64 {
        self.product.price * self.count as f64
    }
}

/// What a mutation did to a single entry. Handed to the view sync after every change.
#[derive(Clone, Debug, PartialEq)]
pub enum EntryChange {
    Updated(CartEntry),
    /// The entry left the cart. Its count is reported as 0.
    Removed(CartEntry),
}

impl EntryChange {
    pub fn entry(&self) -> &CartEntry {
        match self {
            EntryChange::Updated(entry) | EntryChange::Removed(entry) => entry,
        }
    }

    pub fn product_id(&self) -> &str {
        &self.entry().product.id
    }
}

/// Ordered, product-unique list of cart entries.
///
/// Entries never sit at a count of zero: the update that brings a count to zero
/// (or below) splices the entry out.
#[derive(Clone, Debug, Default, Serialize)]
pub struct Cart {
    entries: Vec<CartEntry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn entry(&self, product_id: &str) -> Option<&CartEntry> {
        self.entries.iter().find(|entry| entry.product.id == product_id)
    }

    /// Adds one unit of `product`. `None` is ignored and produces no change.
    pub fn add_product(&mut self, product: Option<Product>) -> Option<EntryChange> {
        let product = product?;

        let index = match self.position(&product.id) {
            Some(index) => {
                let entry = &mut self.entries[index];
                entry.count = entry.count.saturating_add(1);
                index
            }
            None => {
                self.entries.push(CartEntry { product, count: 1 });
                self.entries.len() - 1
            }
        };

        let entry = self.entries[index].clone();
        debug!(product_id = %entry.product.id, count = entry.count, "Added product to cart");
        Some(EntryChange::Updated(entry))
    }

    /// Applies a signed delta to an existing entry.
    ///
    /// Asking for a product that is not in the cart is a caller bug and comes back as
    /// [`CartError::UnknownProduct`]; the cart is left untouched in that case.
    pub fn update_product_count(
        &mut self,
        product_id: &str,
        amount: i32,
    ) -> Result<EntryChange, CartError> {
        let index = self
            .position(product_id)
            .ok_or_else(|| CartError::UnknownProduct(product_id.to_owned()))?;

        let count = i64::from(self.entries[index].count) + i64::from(amount);
        if count <= 0 {
            let mut removed = self.entries.remove(index);
            removed.count = 0;
            debug!(product_id = %product_id, "Removed product from cart");
            return Ok(EntryChange::Removed(removed));
        }

        let entry = &mut self.entries[index];
        entry.count = u32::try_from(count).unwrap_or(u32::MAX);
        debug!(product_id = %product_id, count = entry.count, "Updated product count");
        Ok(EntryChange::Updated(entry.clone()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_count(&self) -> u32 {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    pub fn total_price(&self) -> f64 {
        self.entries.iter().map(CartEntry::price).sum()
    }

    /// Drops every entry at once. No per-entry changes are produced.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn position(&self, product_id: &str) -> Option<usize> {
        self.entries
            .iter()
            .position(|entry| entry.product.id == product_id)
    }
}
