// core/src/stage.rs

use crate::shared::Shared;
use std::sync::Arc;

/// Predicate evaluated against the run's context before a stage executes;
/// a `true` result skips the stage.
pub type SkipWhen<T> = Arc<dyn Fn(Shared<T>) -> bool + Send + Sync + 'static>;

/// Definition of one stage: its name, whether it may legally have no
/// handlers, and an optional skip condition.
#[derive(Clone)]
pub struct StageDef<T: 'static + Send + Sync> {
  pub name: String,
  pub optional: bool,
  pub skip_when: Option<SkipWhen<T>>,
}

// SkipWhen is an Arc<dyn Fn>, so Debug is hand-written.
impl<T: 'static + Send + Sync> std::fmt::Debug for StageDef<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("StageDef")
      .field("name", &self.name)
      .field("optional", &self.optional)
      .field("has_skip_when", &self.skip_when.is_some())
      .finish()
  }
}
