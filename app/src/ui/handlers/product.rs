// app/src/ui/handlers/product.rs

use crate::errors::Result;
use crate::flows::contexts::{AddProductCtx, DeleteProductCtx, UpdateProductCtx};
use crate::models::{Product, Toast};
use crate::state::AppState;
use crate::ui::handlers::{failure, no_op};
use crate::ui::markup;
use crate::ui::outcome::{Navigation, SubmitOutcome};
use furrow::{FlowOutcome, Shared};
use tracing::{info, instrument, warn};

// --- Form field structs ---

/// Raw values of the add-product form inputs. The selected image file is
/// deliberately absent: submission only ever sends the placeholder
/// filename (see the add-product flow).
#[derive(Debug, Clone)]
pub struct NewProductForm {
  pub farmer_id: String,
  pub product_name: String,
  pub description: String,
  pub price: String,
  pub quantity: String,
}

#[derive(Debug, Clone)]
pub struct EditProductForm {
  pub product_id: i64,
  pub product_name: String,
  pub description: String,
  pub price: String,
  pub quantity: String,
  pub image: String,
}

// --- Submit handlers ---

#[instrument(name = "handler::add_product", skip_all, fields(product_name = %form.product_name))]
pub async fn submit_new_product(state: &AppState, form: NewProductForm) -> SubmitOutcome {
  let ctx = Shared::new(AddProductCtx {
    state: state.clone(),
    farmer_id: form.farmer_id,
    product_name: form.product_name,
    description: form.description,
    price: form.price,
    quantity: form.quantity,
    payload: None,
  });

  match state.flows.run(ctx).await {
    Ok(FlowOutcome::Completed) => {
      info!("product added");
      SubmitOutcome::toast_and_navigate(Toast::success("Product added successfully!"), Navigation::Farmer)
    }
    Ok(FlowOutcome::Halted) => no_op(),
    Err(err) => failure(err, "Failed to add product"),
  }
}

#[instrument(name = "handler::update_product", skip_all, fields(product_id = form.product_id))]
pub async fn submit_product_update(state: &AppState, form: EditProductForm) -> SubmitOutcome {
  let ctx = Shared::new(UpdateProductCtx {
    state: state.clone(),
    product_id: form.product_id,
    product_name: form.product_name,
    description: form.description,
    price: form.price,
    quantity: form.quantity,
    image: form.image,
    payload: None,
  });

  match state.flows.run(ctx).await {
    Ok(FlowOutcome::Completed) => {
      info!("product updated");
      SubmitOutcome::toast_and_navigate(Toast::success("Product updated successfully!"), Navigation::Farmer)
    }
    Ok(FlowOutcome::Halted) => no_op(),
    Err(err) => failure(err, "Failed to update product"),
  }
}

/// Deletes after confirmation; cancelling produces an empty outcome with
/// zero requests made. On success the server's message is shown through
/// the blocking alert and the page reloads.
#[instrument(name = "handler::delete_product", skip(state))]
pub async fn delete_product(state: &AppState, product_id: i64) -> SubmitOutcome {
  let ctx = Shared::new(DeleteProductCtx {
    state: state.clone(),
    product_id,
    server_message: None,
  });

  match state.flows.run(ctx.clone()).await {
    Ok(FlowOutcome::Completed) => {
      let message = ctx.read().server_message.clone().unwrap_or_default();
      state.prompt.alert(&message);
      SubmitOutcome {
        navigation: Some(Navigation::Reload),
        ..Default::default()
      }
    }
    Ok(FlowOutcome::Halted) => no_op(), // user declined the confirmation
    Err(err) => failure(err, "Failed to delete product"),
  }
}

// --- Farmer dashboard listing ---

/// The farmer's own products with their edit/delete controls.
pub struct FarmerView {
  products: Vec<Product>,
}

impl FarmerView {
  pub fn products(&self) -> &[Product] {
    &self.products
  }

  pub fn render(&self) -> String {
    markup::render_farmer_items(&self.products)
  }
}

/// Loads the products of `farmer_id`, falling back to the configured
/// default id when none is given.
#[instrument(name = "handler::load_farmer_products", skip(state))]
pub async fn load_farmer_products(state: &AppState, farmer_id: Option<i64>) -> Result<FarmerView> {
  let farmer_id = farmer_id.unwrap_or(state.config.default_farmer_id);
  let products = state.api.farmer_products(farmer_id).await?;
  if products.is_empty() {
    warn!(farmer_id, "farmer has no products yet");
  }
  Ok(FarmerView { products })
}

/// Fetches one product to prefill the edit form.
#[instrument(name = "handler::load_edit_product", skip(state))]
pub async fn load_edit_product(state: &AppState, product_id: i64) -> Result<Product> {
  state.api.product(product_id).await
}
