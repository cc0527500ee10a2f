// app/src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
  /// Base URL of the marketplace backend, e.g. `http://127.0.0.1:5000`.
  pub api_base_url: String,
  /// File backing the single `cart` storage slot.
  pub cart_path: PathBuf,
  /// Farmer id used when the caller does not supply one (the original
  /// dashboard defaults to 1).
  pub default_farmer_id: i64,

  // The payment form in the original client hardcodes both ids; they stay
  // configurable placeholders here, never inferred from session state.
  pub demo_product_id: i64,
  pub demo_buyer_id: i64,

  /// Filename sent in place of the actually selected image file.
  pub placeholder_image: String,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var: &str| {
      env::var(var).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var, e)))
    };
    let get_id = |var: &str, default: i64| -> Result<i64> {
      get_env(var)
        .unwrap_or_else(|_| default.to_string())
        .parse::<i64>()
        .map_err(|e| AppError::Config(format!("Invalid {}: {}", var, e)))
    };

    let api_base_url = get_env("API_BASE_URL").unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());
    let cart_path = PathBuf::from(get_env("CART_PATH").unwrap_or_else(|_| "cart.json".to_string()));
    let default_farmer_id = get_id("DEFAULT_FARMER_ID", 1)?;
    let demo_product_id = get_id("DEMO_PRODUCT_ID", 1)?;
    let demo_buyer_id = get_id("DEMO_BUYER_ID", 1)?;
    let placeholder_image = get_env("PLACEHOLDER_IMAGE").unwrap_or_else(|_| "placeholder.jpg".to_string());

    tracing::info!("Application configuration loaded.");

    Ok(Self {
      api_base_url,
      cart_path,
      default_farmer_id,
      demo_product_id,
      demo_buyer_id,
      placeholder_image,
    })
  }
}
