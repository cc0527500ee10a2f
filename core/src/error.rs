// core/src/error.rs

use anyhow::Error as AnyhowError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FurrowError {
  /// A non-optional stage reached execution with no handler in any phase.
  #[error("no handler registered for required stage '{stage}'")]
  HandlerMissing { stage: String },

  /// `Furrow::run` was called for a context type no flow was registered for.
  #[error("no flow registered for context type {context_type}")]
  NotRegistered { context_type: String },

  /// The registry's type-erased dispatch received a context object that is
  /// not the `Shared<T>` the flow was registered with.
  #[error("context type mismatch during dispatch (expected {expected})")]
  ContextMismatch { expected: String },

  /// Failure inside a user-provided handler, carried as its anyhow source.
  #[error("handler failed: {source}")]
  Handler {
    #[source]
    source: AnyhowError,
  },

  #[error("internal furrow error: {0}")]
  Internal(String),
}

impl From<AnyhowError> for FurrowError {
  fn from(err: AnyhowError) -> Self {
    FurrowError::Handler { source: err }
  }
}

pub type FurrowResult<T, E = FurrowError> = std::result::Result<T, E>;
