// app/src/ui/handlers/payment.rs

use crate::flows::contexts::PaymentCtx;
use crate::models::Toast;
use crate::state::AppState;
use crate::ui::handlers::{failure, no_op};
use crate::ui::outcome::SubmitOutcome;
use furrow::{FlowOutcome, Shared};
use tracing::{info, instrument, warn};

/// The payment form: just the checked method radio, if any.
#[derive(Debug, Clone, Default)]
pub struct PaymentForm {
  pub selected_method: Option<String>,
}

/// Runs the payment flow. Success reveals the receipt panel (transaction
/// id + current date) alongside the success toast; an unselected method
/// never reaches the network and toasts the selection error instead.
#[instrument(name = "handler::payment", skip_all, fields(method = ?form.selected_method))]
pub async fn submit_payment(state: &AppState, form: PaymentForm) -> SubmitOutcome {
  let ctx = Shared::new(PaymentCtx {
    state: state.clone(),
    selected_method: form.selected_method,
    transaction_id: None,
    receipt: None,
  });

  match state.flows.run(ctx.clone()).await {
    Ok(FlowOutcome::Completed) => {
      let receipt = ctx.read().receipt.clone();
      if receipt.is_none() {
        warn!("payment flow completed without a receipt");
      }
      info!("payment succeeded");
      SubmitOutcome {
        toasts: vec![Toast::success("Payment successful!")],
        navigation: None,
        receipt,
      }
    }
    Ok(FlowOutcome::Halted) => no_op(),
    Err(err) => failure(err, "Payment failed"),
  }
}
