// app/src/ui/handlers/auth.rs

use crate::flows::contexts::{LoginCtx, RegisterCtx};
use crate::models::Toast;
use crate::state::AppState;
use crate::ui::handlers::failure;
use crate::ui::outcome::{Navigation, SubmitOutcome};
use furrow::{FlowOutcome, Shared};
use tracing::{info, instrument, warn};

// --- Form field structs ---

#[derive(Debug, Clone)]
pub struct LoginForm {
  pub email: String,
  pub password: String,
}

#[derive(Debug, Clone)]
pub struct RegistrationForm {
  pub name: String,
  pub email: String,
  pub password: String,
  /// Raw value of the role selector, forwarded as-is.
  pub user_type: String,
}

// --- Handlers ---

#[instrument(name = "handler::login", skip_all, fields(email = %form.email))]
pub async fn submit_login(state: &AppState, form: LoginForm) -> SubmitOutcome {
  let ctx = Shared::new(LoginCtx {
    state: state.clone(),
    email: form.email,
    password: form.password,
    user_type: None,
    destination: None,
  });

  match state.flows.run(ctx.clone()).await {
    Ok(FlowOutcome::Completed) => {
      let destination = ctx.read().destination.clone();
      let Some(destination) = destination else {
        warn!("login flow completed without resolving a destination");
        return failure(
          crate::errors::AppError::Internal("login completed without a destination".to_string()),
          "Login failed",
        );
      };
      info!(?destination, "login succeeded");
      SubmitOutcome::toast_and_navigate(Toast::success("Login successful!"), destination)
    }
    Ok(FlowOutcome::Halted) => no_halt_expected("login"),
    Err(err) => failure(err, "Login failed"),
  }
}

#[instrument(name = "handler::registration", skip_all, fields(email = %form.email))]
pub async fn submit_registration(state: &AppState, form: RegistrationForm) -> SubmitOutcome {
  let ctx = Shared::new(RegisterCtx {
    state: state.clone(),
    name: form.name,
    email: form.email,
    password: form.password,
    user_type: form.user_type,
    server_message: None,
  });

  match state.flows.run(ctx).await {
    Ok(FlowOutcome::Completed) => {
      info!("registration succeeded");
      SubmitOutcome::toast_and_navigate(Toast::success("Registered successfully!"), Navigation::Login)
    }
    Ok(FlowOutcome::Halted) => no_halt_expected("registration"),
    Err(err) => failure(err, "Registration failed"),
  }
}

// None of the auth flows halt; reaching this is a wiring bug worth a log
// line, while the user just sees nothing happen.
fn no_halt_expected(which: &str) -> SubmitOutcome {
  warn!(flow = which, "flow halted unexpectedly");
  SubmitOutcome::default()
}
