// app/src/flows/order_flow.rs

use crate::errors::AppError;
use crate::flows::contexts::PlaceOrderCtx;
use crate::models::{OrderLine, OrderRequest};
use furrow::{Flow, FlowControl, Furrow, Shared};
use std::sync::Arc;
use tracing::info;

/// Registers the place-order flow: the cart snapshot becomes one order
/// line per entry. The cart itself is left untouched afterwards; only
/// external storage clearing empties it.
pub fn register_place_order_flow(furrow: &Arc<Furrow<AppError>>) {
  let mut flow =
    Flow::<PlaceOrderCtx, AppError>::new(&[("collect_cart_lines", false, None), ("submit_order", false, None)]);

  flow.on("collect_cart_lines", |ctx: Shared<PlaceOrderCtx>| {
    Box::pin(async move {
      let cart = { ctx.read().state.cart.clone() };
      let items = cart.items()?;
      if items.is_empty() {
        return Err(AppError::Validation("Your cart is empty.".to_string()));
      }

      let lines: Vec<OrderLine> = items
        .iter()
        .map(|item| OrderLine {
          product_id: item.product_id,
          quantity: item.quantity,
        })
        .collect();
      {
        ctx.write().lines = lines;
      }
      Ok::<_, AppError>(FlowControl::Advance)
    })
  });

  flow.on("submit_order", |ctx: Shared<PlaceOrderCtx>| {
    Box::pin(async move {
      let (payload, api) = {
        let guard = ctx.read();
        (
          OrderRequest {
            buyer_id: guard.buyer_id,
            orders: guard.lines.clone(),
          },
          guard.state.api.clone(),
        )
      };

      let reply = api.place_order(&payload).await?;
      info!(lines = payload.orders.len(), "order placed");
      {
        ctx.write().server_message = Some(reply.message);
      }
      Ok::<_, AppError>(FlowControl::Advance)
    })
  });

  furrow.register(flow);
  tracing::info!("Place-order flow registered.");
}
