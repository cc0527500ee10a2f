// app/src/flows/delete_product_flow.rs

use crate::errors::AppError;
use crate::flows::contexts::DeleteProductCtx;
use furrow::{Flow, FlowControl, Furrow, Shared};
use std::sync::Arc;
use tracing::info;

/// Registers the delete-product flow. Refusing the confirmation halts the
/// run before any request is made.
pub fn register_delete_product_flow(furrow: &Arc<Furrow<AppError>>) {
  let mut flow = Flow::<DeleteProductCtx, AppError>::new(&[("confirm_delete", false, None), ("submit_delete", false, None)]);

  flow.on("confirm_delete", |ctx: Shared<DeleteProductCtx>| {
    Box::pin(async move {
      let (prompt, product_id) = {
        let guard = ctx.read();
        (guard.state.prompt.clone(), guard.product_id)
      };

      if !prompt.confirm("Are you sure you want to delete this product?") {
        info!(product_id, "deletion cancelled");
        return Ok::<_, AppError>(FlowControl::Halt);
      }
      Ok(FlowControl::Advance)
    })
  });

  flow.on("submit_delete", |ctx: Shared<DeleteProductCtx>| {
    Box::pin(async move {
      let (product_id, api) = {
        let guard = ctx.read();
        (guard.product_id, guard.state.api.clone())
      };

      let reply = api.delete_product(product_id).await?;
      info!(product_id, "product deleted");
      {
        ctx.write().server_message = Some(reply.message);
      }
      Ok::<_, AppError>(FlowControl::Advance)
    })
  });

  furrow.register(flow);
  tracing::info!("Delete-product flow registered.");
}
