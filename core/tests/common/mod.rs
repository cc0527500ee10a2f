// tests/common/mod.rs
#![allow(dead_code)] // Shared helpers; not every test file uses every one.

use furrow::{FlowControl, FurrowError, Shared};
use std::sync::{
  atomic::{AtomicUsize, Ordering},
  Arc,
};
use tracing::Level;

// --- Common context struct ---
#[derive(Clone, Debug, Default)]
pub struct TestCtx {
  pub counter: i32,
  pub trace: String,
  pub stages_run: Vec<String>,
  pub halt_at: Option<String>,
}

// --- Common error type for tests ---
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum TestError {
  #[error("furrow framework error: {0}")]
  Furrow(String), // stringified for Eq comparisons

  #[error("test handler failed: {0}")]
  Handler(String),
}

impl From<FurrowError> for TestError {
  fn from(fe: FurrowError) -> Self {
    TestError::Furrow(format!("{fe:?}"))
  }
}

// --- Handler creators ---
pub fn tracing_handler(stage: &'static str, tag: &'static str) -> furrow::Handler<TestCtx, TestError> {
  Box::new(move |ctx: Shared<TestCtx>| {
    let stage_owned = stage.to_string();
    Box::pin(async move {
      let mut guard = ctx.write();
      guard.counter += 1;
      guard.trace.push_str(tag);
      guard.stages_run.push(stage_owned.clone());
      tracing::debug!(target: "test_handlers", stage = %stage_owned, counter = guard.counter, "executed");
      if guard.halt_at.as_deref() == Some(stage_owned.as_str()) {
        return Ok(FlowControl::Halt);
      }
      Ok(FlowControl::Advance)
    })
  })
}

pub fn failing_handler(stage: &'static str, error_message: &'static str) -> furrow::Handler<TestCtx, TestError> {
  Box::new(move |ctx: Shared<TestCtx>| {
    let stage_owned = stage.to_string();
    let message_owned = error_message.to_string();
    Box::pin(async move {
      ctx.write().stages_run.push(stage_owned.clone());
      tracing::warn!(target: "test_handlers", stage = %stage_owned, "failing with: '{}'", message_owned);
      Err(TestError::Handler(message_owned))
    })
  })
}

// --- Execution counter (for tests asserting exact invocation counts) ---
pub static HANDLER_EXEC_COUNTER: once_cell::sync::Lazy<Arc<AtomicUsize>> =
  once_cell::sync::Lazy::new(|| Arc::new(AtomicUsize::new(0)));

pub fn reset_counters() {
  HANDLER_EXEC_COUNTER.store(0, Ordering::SeqCst);
}

// --- Tracing setup (idempotent) ---
static TRACING_INIT: once_cell::sync::Lazy<()> = once_cell::sync::Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok();
});

pub fn setup_tracing() {
  once_cell::sync::Lazy::force(&TRACING_INIT);
}
