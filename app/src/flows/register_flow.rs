// app/src/flows/register_flow.rs

use crate::errors::AppError;
use crate::flows::contexts::RegisterCtx;
use crate::services::market_api::RegisterPayload;
use furrow::{Flow, FlowControl, Furrow, Shared};
use std::sync::Arc;
use tracing::{debug, info};

/// Registers the account-registration flow.
pub fn register_registration_flow(furrow: &Arc<Furrow<AppError>>) {
  let mut flow = Flow::<RegisterCtx, AppError>::new(&[("submit_registration", false, None)]);

  flow.on("submit_registration", |ctx: Shared<RegisterCtx>| {
    Box::pin(async move {
      let (payload, api) = {
        let guard = ctx.read();
        (
          RegisterPayload {
            name: guard.name.clone(),
            email: guard.email.clone(),
            password: guard.password.clone(),
            user_type: guard.user_type.clone(),
          },
          guard.state.api.clone(),
        )
      };

      debug!(email = %payload.email, user_type = %payload.user_type, "submitting registration");
      let reply = api.register(&payload).await?;

      {
        ctx.write().server_message = Some(reply.message);
      }
      info!("registration accepted");
      Ok::<_, AppError>(FlowControl::Advance)
    })
  });

  furrow.register(flow);
  tracing::info!("Registration flow registered.");
}
