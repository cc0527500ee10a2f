// app/src/state.rs

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::services::{CartService, MarketplaceApi, UserPrompt};
use furrow::Furrow;
use std::sync::Arc;

/// Shared handles every handler and flow context carries.
#[derive(Clone)]
pub struct AppState {
  pub api: Arc<dyn MarketplaceApi>,
  pub cart: Arc<CartService>,
  pub prompt: Arc<dyn UserPrompt>,
  pub flows: Arc<Furrow<AppError>>,
  pub config: Arc<AppConfig>,
}
