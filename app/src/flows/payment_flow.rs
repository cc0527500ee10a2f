// app/src/flows/payment_flow.rs

use crate::errors::AppError;
use crate::flows::contexts::PaymentCtx;
use crate::services::market_api::PaymentPayload;
use crate::ui::outcome::Receipt;
use furrow::{Flow, FlowControl, Furrow, Shared};
use std::sync::Arc;
use tracing::{info, warn};

/// Registers the payment flow. A missing method selection fails before any
/// network traffic; the demo product and buyer ids come from configuration
/// (the original client hardcodes both — not inferred here).
pub fn register_payment_flow(furrow: &Arc<Furrow<AppError>>) {
  let mut flow = Flow::<PaymentCtx, AppError>::new(&[
    ("require_payment_method", false, None),
    ("submit_payment", false, None),
    ("prepare_receipt", false, None),
  ]);

  flow.on("require_payment_method", |ctx: Shared<PaymentCtx>| {
    Box::pin(async move {
      let selected = { ctx.read().selected_method.clone() };
      if selected.is_none() {
        warn!("payment submitted without a method selected");
        return Err(AppError::Validation("Select a payment method.".to_string()));
      }
      Ok::<_, AppError>(FlowControl::Advance)
    })
  });

  flow.on("submit_payment", |ctx: Shared<PaymentCtx>| {
    Box::pin(async move {
      let (payload, api) = {
        let guard = ctx.read();
        let method = guard
          .selected_method
          .clone()
          .ok_or_else(|| AppError::Internal("payment method missing after the selection check".to_string()))?;
        (
          PaymentPayload {
            payment_method: method,
            product_id: guard.state.config.demo_product_id,
            buyer_id: guard.state.config.demo_buyer_id,
          },
          guard.state.api.clone(),
        )
      };

      let reply = api.submit_payment(&payload).await?;
      info!(transaction_id = %reply.transaction_id, "payment accepted");
      {
        ctx.write().transaction_id = Some(reply.transaction_id);
      }
      Ok::<_, AppError>(FlowControl::Advance)
    })
  });

  flow.on("prepare_receipt", |ctx: Shared<PaymentCtx>| {
    Box::pin(async move {
      let mut guard = ctx.write();
      let transaction_id = guard
        .transaction_id
        .clone()
        .ok_or_else(|| AppError::Internal("transaction id missing after payment submission".to_string()))?;
      guard.receipt = Some(Receipt {
        transaction_id,
        date: chrono::Local::now().format("%m/%d/%Y").to_string(),
      });
      Ok::<_, AppError>(FlowControl::Advance)
    })
  });

  furrow.register(flow);
  tracing::info!("Payment flow registered.");
}
