// app/src/models/product.rs

use serde::{Deserialize, Serialize};

/// A product row as the backend serves it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
  pub product_id: i64,
  pub farmer_id: i64,
  pub product_name: String,
  #[serde(default)]
  pub description: Option<String>, // nullable column upstream
  pub price: f64,
  /// Available stock, not to be confused with a cart item's desired count.
  pub quantity: i64,
  #[serde(default)]
  pub image: Option<String>, // stored filename, nullable upstream
}
