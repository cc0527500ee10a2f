// app/src/flows/update_product_flow.rs

use crate::errors::AppError;
use crate::flows::contexts::UpdateProductCtx;
use crate::services::market_api::UpdateProductPayload;
use furrow::{Flow, FlowControl, Furrow, Shared};
use std::sync::Arc;
use tracing::info;

/// Registers the edit-product flow: typed payload, then a PUT to the
/// product's endpoint.
pub fn register_update_product_flow(furrow: &Arc<Furrow<AppError>>) {
  let mut flow =
    Flow::<UpdateProductCtx, AppError>::new(&[("build_payload", false, None), ("submit_update", false, None)]);

  flow.on("build_payload", |ctx: Shared<UpdateProductCtx>| {
    Box::pin(async move {
      let mut guard = ctx.write();

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

      guard.payload = Some(UpdateProductPayload {
        product_name: guard.product_name.clone(),
        description: guard.description.clone(),
        price,
        quantity,
        image: guard.image.clone(),
      });
      Ok::<_, AppError>(FlowControl::Advance)
    })
  });

  flow.on("submit_update", |ctx: Shared<UpdateProductCtx>| {
    Box::pin(async move {
      let (product_id, payload, api) = {
        let guard = ctx.read();
        let payload = guard
          .payload
          .clone()
          .ok_or_else(|| AppError::Internal("update payload missing before submission".to_string()))?;
        (guard.product_id, payload, guard.state.api.clone())
      };

      api.update_product(product_id, &payload).await?;
      info!(product_id, "product updated");
      Ok::<_, AppError>(FlowControl::Advance)
    })
  });

  furrow.register(flow);
  tracing::info!("Update-product flow registered.");
}
