// app/src/flows/add_product_flow.rs

use crate::errors::AppError;
use crate::flows::contexts::AddProductCtx;
use crate::services::market_api::NewProductPayload;
use furrow::{Flow, FlowControl, Furrow, Shared};
use std::sync::Arc;
use tracing::{debug, info};

/// Registers the add-product flow: form fields are typed into the payload,
/// then posted. The payload's `image` is always the configured placeholder
/// filename — the selected file itself is never uploaded.
pub fn register_add_product_flow(furrow: &Arc<Furrow<AppError>>) {
  let mut flow = Flow::<AddProductCtx, AppError>::new(&[("build_payload", false, None), ("submit_product", false, None)]);

  flow.on("build_payload", |ctx: Shared<AddProductCtx>| {
    Box::pin(async move {
      let mut guard = ctx.write();

      let farmer_id = guard
        .farmer_id
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::Validation("Farmer id must be a number.".to_string()))?;
      let price = guard
        .price
        .trim()
        .parse::<f64>()
        .map_err(|_| AppError::Validation("Price must be a number.".to_string()))?;
      let quantity = guard
        .quantity
        .trim()
        .parse::<i64>()
        .map_err(|_| AppError::Validation("Quantity must be a whole number.".to_string()))?;

      guard.payload = Some(NewProductPayload {
        farmer_id,
        product_name: guard.product_name.clone(),
        description: guard.description.clone(),
        price,
        quantity,
        image: guard.state.config.placeholder_image.clone(),
      });
      debug!("add-product payload built");
      Ok::<_, AppError>(FlowControl::Advance)
    })
  });

  flow.on("submit_product", |ctx: Shared<AddProductCtx>| {
    Box::pin(async move {
      let (payload, api) = {
        let guard = ctx.read();
        let payload = guard
          .payload
          .clone()
          .ok_or_else(|| AppError::Internal("add-product payload missing before submission".to_string()))?;
        (payload, guard.state.api.clone())
      };

      api.create_product(&payload).await?;
      info!(product_name = %payload.product_name, "product created");
      Ok::<_, AppError>(FlowControl::Advance)
    })
  });

  furrow.register(flow);
  tracing::info!("Add-product flow registered.");
}
