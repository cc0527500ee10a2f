// app/src/flows/login_flow.rs

use crate::errors::AppError;
use crate::flows::contexts::LoginCtx;
use crate::models::UserType;
use crate::services::market_api::LoginPayload;
use crate::ui::outcome::Navigation;
use furrow::{Flow, FlowControl, Furrow, Shared};
use std::sync::Arc;
use tracing::{debug, info};

/// Registers the login flow: one credentials POST, then a dashboard route
/// picked from the reported user type.
pub fn register_login_flow(furrow: &Arc<Furrow<AppError>>) {
  let mut flow = Flow::<LoginCtx, AppError>::new(&[
    ("submit_credentials", false, None),
    ("resolve_destination", false, None),
  ]);

  flow.on("submit_credentials", |ctx: Shared<LoginCtx>| {
    Box::pin(async move {
      let (payload, api) = {
        let guard = ctx.read();
        (
          LoginPayload {
            email: guard.email.clone(),
            password: guard.password.clone(),
          },
          guard.state.api.clone(),
        )
      }; // guard dropped before the await below

      debug!(email = %payload.email, "submitting credentials");
      let reply = api.login(&payload).await?;

      {
        ctx.write().user_type = Some(UserType::from_login(&reply.user_type));
      }
      info!(user_type = %reply.user_type, "login accepted");
      Ok::<_, AppError>(FlowControl::Advance)
    })
  });

  flow.on("resolve_destination", |ctx: Shared<LoginCtx>| {
    Box::pin(async move {
      let mut guard = ctx.write();
      // Anything but an explicit farmer lands on the buyer dashboard.
      guard.destination = Some(match guard.user_type {
        Some(UserType::Farmer) => Navigation::Farmer,
        _ => Navigation::Buyer,
      });
      Ok::<_, AppError>(FlowControl::Advance)
    })
  });

  furrow.register(flow);
  tracing::info!("Login flow registered.");
}
