// app/src/models/order.rs

use serde::{Deserialize, Serialize};

/// One line of an order: a product and the desired count, taken from the
/// cart at submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
  pub product_id: i64,
  pub quantity: i64,
}

/// Request body for placing an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
  pub buyer_id: i64,
  pub orders: Vec<OrderLine>,
}

/// A buyer's order as returned by the order-history endpoint (joined with
/// product name and price upstream).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyerOrder {
  pub order_id: i64,
  pub quantity: i64,
  pub status: String,
  pub product_name: String,
  pub price: f64,
}
