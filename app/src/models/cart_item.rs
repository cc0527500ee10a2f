// app/src/models/cart_item.rs

use crate::models::product::Product;
use serde::{Deserialize, Serialize};

/// A cart entry: a copy of the product's fields with `quantity`
/// reinterpreted as the desired purchase count.
///
/// Identity key is `product_id` — a cart holds at most one entry per
/// product, and repeat adds increment `quantity` instead of appending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
  pub product_id: i64,
  pub farmer_id: i64,
  pub product_name: String,
  #[serde(default)]
  pub description: Option<String>,
  pub price: f64,
  pub quantity: i64,
  #[serde(default)]
  pub image: Option<String>,
}

impl CartItem {
  /// The entry created by the first add of `product`: all fields copied,
  /// desired count 1.
  pub fn first_of(product: &Product) -> Self {
    Self {
      product_id: product.product_id,
      farmer_id: product.farmer_id,
      product_name: product.product_name.clone(),
      description: product.description.clone(),
      price: product.price,
      quantity: 1,
      image: product.image.clone(),
    }
  }
}
