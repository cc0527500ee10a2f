// core/src/flow/define.rs

//! `Flow` definition and handler registration.

use crate::control::FlowControl;
use crate::error::FurrowError;
use crate::shared::Shared;
use crate::stage::{SkipWhen, StageDef};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

/// A stage handler: an async function over the run's shared context.
///
/// Handlers must drop any `Shared` lock guard before awaiting, and report
/// [`FlowControl::Advance`] to proceed or [`FlowControl::Halt`] to end the
/// run early.
pub type Handler<TData, Err> = Box<
  dyn Fn(Shared<TData>) -> Pin<Box<dyn Future<Output = Result<FlowControl, Err>> + Send>>
    + Send
    + Sync,
>;

/// An ordered, named-stage process over a context of type `TData`.
///
/// `Err` is the error type the flow's handlers return; it must be
/// convertible from [`FurrowError`] so engine-level failures (e.g. a
/// required stage without handlers) surface through the same channel.
pub struct Flow<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<FurrowError> + Send + Sync + 'static,
{
  pub(crate) stages: Vec<StageDef<TData>>,

  pub(crate) before: HashMap<String, Vec<Handler<TData, Err>>>,
  pub(crate) on: HashMap<String, Vec<Handler<TData, Err>>>,
  pub(crate) after: HashMap<String, Vec<Handler<TData, Err>>>,
}

impl<TData, Err> Flow<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<FurrowError> + Send + Sync + 'static,
{
  /// Creates a flow from `(name, optional, skip_when)` stage definitions,
  /// executed in the given order.
  pub fn new(stage_defs: &[(&str, bool, Option<SkipWhen<TData>>)]) -> Self {
    let stages = stage_defs
      .iter()
      .map(|(name, optional, skip_when)| StageDef {
        name: (*name).to_string(),
        optional: *optional,
        skip_when: skip_when.clone(),
      })
      .collect();

    Self {
      stages,
      before: HashMap::new(),
      on: HashMap::new(),
      after: HashMap::new(),
    }
  }

  // Registering a handler against an unknown stage is a wiring bug, not a
  // runtime condition.
  pub(crate) fn ensure_stage(&self, stage: &str) {
    if !self.stages.iter().any(|s| s.name == stage) {
      panic!("furrow setup error: stage '{stage}' is not part of this flow");
    }
  }

  /// Registers a `before` handler for a stage.
  pub fn before<F, UErr>(&mut self, stage: &str, handler: impl Fn(Shared<TData>) -> F + Send + Sync + 'static)
  where
    F: Future<Output = Result<FlowControl, UErr>> + Send + 'static,
    UErr: Into<Err> + Send + Sync + 'static,
  {
    self.ensure_stage(stage);
    self.before.entry(stage.to_string()).or_default().push(Self::wrap(handler));
  }

  /// Registers an `on` handler for a stage. The handler's own error type
  /// only needs to convert into the flow's `Err`.
  pub fn on<F, UErr>(&mut self, stage: &str, handler: impl Fn(Shared<TData>) -> F + Send + Sync + 'static)
  where
    F: Future<Output = Result<FlowControl, UErr>> + Send + 'static,
    UErr: Into<Err> + Send + Sync + 'static,
  {
    self.ensure_stage(stage);
    self.on.entry(stage.to_string()).or_default().push(Self::wrap(handler));
  }

  /// Registers an `after` handler for a stage.
  pub fn after<F, UErr>(&mut self, stage: &str, handler: impl Fn(Shared<TData>) -> F + Send + Sync + 'static)
  where
    F: Future<Output = Result<FlowControl, UErr>> + Send + 'static,
    UErr: Into<Err> + Send + Sync + 'static,
  {
    self.ensure_stage(stage);
    self.after.entry(stage.to_string()).or_default().push(Self::wrap(handler));
  }

  fn wrap<F, UErr>(handler: impl Fn(Shared<TData>) -> F + Send + Sync + 'static) -> Handler<TData, Err>
  where
    F: Future<Output = Result<FlowControl, UErr>> + Send + 'static,
    UErr: Into<Err> + Send + Sync + 'static,
  {
    Box::new(move |shared| {
      let fut = handler(shared);
      Box::pin(async move { fut.await.map_err(Into::into) })
    })
  }
}
