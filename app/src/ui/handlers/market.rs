// app/src/ui/handlers/market.rs

use crate::errors::Result;
use crate::models::Product;
use crate::state::AppState;
use crate::ui::markup;
use tracing::{info, instrument};

/// The buyer marketplace: the product list as fetched, plus search and
/// rendering over it.
///
/// The view keeps the originally fetched list; every search filters that
/// list, never a previous search's result.
pub struct MarketView {
  products: Vec<Product>,
}

impl MarketView {
  pub fn products(&self) -> &[Product] {
    &self.products
  }

  pub fn render_all(&self) -> String {
    markup::render_market_items(&self.products)
  }

  /// The products whose name contains `query`, case-insensitively,
  /// recomputed from the full fetched list.
  pub fn search(&self, query: &str) -> Vec<Product> {
    markup::filter_by_name(&self.products, query)
  }

  pub fn render_search(&self, query: &str) -> String {
    markup::render_market_items(&self.search(query))
  }
}

/// Fetches the full product list once and wraps it for rendering and
/// search.
#[instrument(name = "handler::load_marketplace", skip_all)]
pub async fn load_marketplace(state: &AppState) -> Result<MarketView> {
  let products = state.api.list_products().await?;
  info!(count = products.len(), "marketplace loaded");
  Ok(MarketView { products })
}
