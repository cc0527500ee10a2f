// app/src/services/cart.rs

use crate::errors::Result;
use crate::models::{CartItem, Product};
use crate::services::cart_store::CartStore;
use std::sync::Arc;
use tracing::{info, instrument};

/// Adds `product` to the collection: an existing entry for the same
/// `product_id` has its desired count incremented by 1, otherwise a fresh
/// entry with count 1 is appended. Order of existing entries is preserved.
pub fn upsert(items: &mut Vec<CartItem>, product: &Product) {
  match items.iter_mut().find(|item| item.product_id == product.product_id) {
    Some(existing) => existing.quantity += 1,
    None => items.push(CartItem::first_of(product)),
  }
}

/// Cart state management over an injected [`CartStore`]. Every mutation is
/// a full read-modify-write of the collection snapshot.
pub struct CartService {
  store: Arc<dyn CartStore>,
}

impl CartService {
  pub fn new(store: Arc<dyn CartStore>) -> Self {
    Self { store }
  }

  #[instrument(name = "cart::add", skip_all, fields(product_id = product.product_id))]
  pub fn add(&self, product: &Product) -> Result<Vec<CartItem>> {
    let mut items = self.store.get()?;
    upsert(&mut items, product);
    self.store.put(&items)?;
    info!(entries = items.len(), "cart updated");
    Ok(items)
  }

  pub fn items(&self) -> Result<Vec<CartItem>> {
    self.store.get()
  }
}
