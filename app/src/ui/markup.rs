// app/src/ui/markup.rs

//! Pure data → markup functions. Nothing here touches state, the network,
//! or a document; every function is directly unit-testable.

use crate::models::{BuyerOrder, Product};
use crate::ui::outcome::Navigation;

/// Empty-state item for a farmer with no products.
pub const NO_PRODUCTS_YET: &str = "<li>No products yet</li>";

fn description_of(product: &Product) -> &str {
  product.description.as_deref().unwrap_or("")
}

/// One marketplace entry, with the add-to-cart control bound to the
/// product's literal JSON.
fn market_item(product: &Product) -> String {
  let json = serde_json::to_string(product).unwrap_or_default();
  format!(
    "<li>\n  <strong>{name}</strong><br>\n  {description}<br>\n  Price: ${price}<br>\n  Qty: {quantity}<br>\n  <button onclick='addToCart({json})'>Add to Cart</button>\n</li>",
    name = product.product_name,
    description = description_of(product),
    price = product.price,
    quantity = product.quantity,
    json = json,
  )
}

pub fn render_market_items(products: &[Product]) -> String {
  products.iter().map(market_item).collect::<Vec<_>>().join("\n")
}

/// One farmer-dashboard entry with its edit and delete controls.
fn farmer_item(product: &Product) -> String {
  let edit_href = Navigation::EditProduct(product.product_id)
    .href()
    .unwrap_or_default();
  format!(
    "<li>\n  <strong>{name}</strong><br>\n  {description}<br>\n  Price: ${price} | Qty: {quantity}<br>\n  <button onclick=\"location.href='{edit_href}'\">Edit</button>\n  <button onclick=\"deleteProduct({id})\">Delete</button>\n</li>",
    name = product.product_name,
    description = description_of(product),
    price = product.price,
    quantity = product.quantity,
    edit_href = edit_href,
    id = product.product_id,
  )
}

/// Farmer listing; an empty slice renders the literal empty-state item and
/// no controls.
pub fn render_farmer_items(products: &[Product]) -> String {
  if products.is_empty() {
    return NO_PRODUCTS_YET.to_string();
  }
  products.iter().map(farmer_item).collect::<Vec<_>>().join("\n")
}

/// Buyer order history listing.
pub fn render_order_items(orders: &[BuyerOrder]) -> String {
  if orders.is_empty() {
    return "<li>No orders yet</li>".to_string();
  }
  orders
    .iter()
    .map(|order| {
      format!(
        "<li>\n  <strong>{name}</strong><br>\n  Qty: {quantity} | Price: ${price} | Status: {status}\n</li>",
        name = order.product_name,
        quantity = order.quantity,
        price = order.price,
        status = order.status,
      )
    })
    .collect::<Vec<_>>()
    .join("\n")
}

/// Case-insensitive substring filter on `product_name`. Callers must pass
/// the originally fetched list so consecutive searches never compound.
pub fn filter_by_name(products: &[Product], query: &str) -> Vec<Product> {
  let needle = query.to_lowercase();
  products
    .iter()
    .filter(|p| p.product_name.to_lowercase().contains(&needle))
    .cloned()
    .collect()
}

// --- Image preview (local-only side effect of the add-product form) ---

/// The file picked in the add-product form, as the browser reports it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSelection {
  pub name: String,
  pub mime_type: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePreview {
  Shown,
  Hidden,
}

/// Image MIME types get an inline preview; anything else (or no selection)
/// hides it. Selection never influences what is uploaded.
pub fn preview_for(selection: Option<&FileSelection>) -> ImagePreview {
  match selection {
    Some(file) if file.mime_type.starts_with("image/") => ImagePreview::Shown,
    _ => ImagePreview::Hidden,
  }
}
