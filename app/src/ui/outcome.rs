// app/src/ui/outcome.rs

use crate::errors::AppError;
use crate::models::Toast;
use tracing::warn;

/// Where the page goes after a successful action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
  Login,
  Farmer,
  Buyer,
  EditProduct(i64),
  /// Full page reload, re-fetching whatever list the page shows.
  Reload,
}

impl Navigation {
  /// The location this navigation targets, or `None` for a reload of the
  /// current location.
  pub fn href(&self) -> Option<String> {
    match self {
      Navigation::Login => Some("/login".to_string()),
      Navigation::Farmer => Some("/farmer".to_string()),
      Navigation::Buyer => Some("/buyer".to_string()),
      Navigation::EditProduct(id) => Some(format!("/edit_product?id={}", id)),
      Navigation::Reload => None,
    }
  }
}

/// The revealed payment confirmation panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
  pub transaction_id: String,
  pub date: String,
}

/// Everything a submit handler reports back: toasts to show, where to
/// navigate, and the receipt panel to reveal. No handler ever fails — a
/// failed submission is an outcome with an error toast and nothing else.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmitOutcome {
  pub toasts: Vec<Toast>,
  pub navigation: Option<Navigation>,
  pub receipt: Option<Receipt>,
}

impl SubmitOutcome {
  pub fn toast(toast: Toast) -> Self {
    Self {
      toasts: vec![toast],
      ..Default::default()
    }
  }

  pub fn toast_and_navigate(toast: Toast, navigation: Navigation) -> Self {
    Self {
      toasts: vec![toast],
      navigation: Some(navigation),
      ..Default::default()
    }
  }
}

/// Maps a failed submission onto its error toast. Server-reported messages
/// surface verbatim; absent one, `generic` applies; transport and parse
/// failures collapse into the single connectivity message.
pub fn failure(err: AppError, generic: &str) -> SubmitOutcome {
  warn!(error = %err, "submission failed");
  let toast = match err {
    AppError::Validation(message) => Toast::error(message),
    AppError::Api { message: Some(message) } => Toast::error(message),
    AppError::Api { message: None } => Toast::error(generic),
    AppError::Transport(_) => Toast::error("Error connecting to server."),
    AppError::Storage(_) => Toast::error("Could not access the saved cart."),
    AppError::Config(_) | AppError::Flow { .. } | AppError::Internal(_) => Toast::error(generic),
  };
  SubmitOutcome::toast(toast)
}
