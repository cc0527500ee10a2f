// app/src/errors.rs

use furrow::FurrowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Validation Error: {0}")]
  Validation(String),

  /// The backend answered with a non-success status. `message` carries the
  /// response's `error` field when it could be decoded.
  #[error("API Error: {}", .message.as_deref().unwrap_or("no server message"))]
  Api { message: Option<String> },

  /// Connectivity failures and malformed response bodies. Reported to the
  /// user with one generic connectivity toast; the distinction is kept here
  /// only for logs.
  #[error("Transport Error: {0}")]
  Transport(String),

  #[error("Cart Storage Error: {0}")]
  Storage(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Flow Error: {source}")]
  Flow {
    #[from]
    source: FurrowError,
  },

  #[error("Internal Error: {0}")]
  Internal(String),
}

// Lets handlers use `?` on anyhow-returning helpers.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    AppError::Internal(err.to_string())
  }
}

/// Result alias used across the application.
pub type Result<T, E = AppError> = std::result::Result<T, E>;
