// core/src/registry.rs

//! `Furrow<AppErr>`: a registry keyed by context type.
//!
//! Flows are registered once at startup; afterwards a caller only needs a
//! `Shared<TData>` to run the flow for `TData`. The registry type-erases
//! each flow behind an async runner trait and downcasts the context back
//! at dispatch time.

use crate::control::FlowOutcome;
use crate::error::FurrowError;
use crate::flow::Flow;
use crate::shared::Shared;

use async_trait::async_trait;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex};
use tracing::{event, Level};

/// Type-erased execution of a registered flow.
///
/// `AppErr` is the error type `Furrow::run` returns to the application.
#[async_trait]
trait AnyFlowRunner<AppErr>: Send + Sync
where
  AppErr: std::error::Error + Send + Sync + 'static,
{
  /// `ctx_obj` must contain the `Shared<TData>` this runner was built for.
  async fn run_erased(&self, ctx_obj: Box<dyn Any + Send>) -> Result<FlowOutcome, AppErr>;
}

struct FlowRunner<TData, HandlerErr, AppErr>
where
  TData: 'static + Send + Sync,
  HandlerErr: std::error::Error + From<FurrowError> + Send + Sync + 'static,
  AppErr: std::error::Error + From<HandlerErr> + From<FurrowError> + Send + Sync + 'static,
{
  flow: Arc<Flow<TData, HandlerErr>>,
  _phantom: PhantomData<fn() -> AppErr>,
}

#[async_trait]
impl<TData, HandlerErr, AppErr> AnyFlowRunner<AppErr> for FlowRunner<TData, HandlerErr, AppErr>
where
  TData: 'static + Send + Sync,
  HandlerErr: std::error::Error + From<FurrowError> + Send + Sync + 'static,
  AppErr: std::error::Error + From<HandlerErr> + From<FurrowError> + Send + Sync + 'static,
{
  async fn run_erased(&self, ctx_obj: Box<dyn Any + Send>) -> Result<FlowOutcome, AppErr> {
    let shared = match ctx_obj.downcast::<Shared<TData>>() {
      Ok(boxed) => *boxed,
      Err(_) => {
        let expected = std::any::type_name::<Shared<TData>>();
        event!(Level::ERROR, expected, "context object type mismatch at dispatch");
        return Err(AppErr::from(FurrowError::ContextMismatch {
          expected: expected.to_string(),
        }));
      }
    };

    self.flow.run(shared).await.map_err(AppErr::from)
  }
}

/// The flow registry. One flow per context type.
pub struct Furrow<AppErr = FurrowError>
where
  AppErr: std::error::Error + From<FurrowError> + Send + Sync + 'static,
{
  registry: Mutex<HashMap<TypeId, Arc<dyn AnyFlowRunner<AppErr>>>>,
}

impl<AppErr> Furrow<AppErr>
where
  AppErr: std::error::Error + From<FurrowError> + Send + Sync + 'static,
{
  pub fn new() -> Self {
    Self {
      registry: Mutex::new(HashMap::new()),
    }
  }

  /// Registers `flow` for its context type. A later registration for the
  /// same context type replaces the earlier one.
  pub fn register<TData, HandlerErr>(&self, flow: Flow<TData, HandlerErr>)
  where
    TData: 'static + Send + Sync,
    HandlerErr: std::error::Error + From<FurrowError> + Send + Sync + 'static,
    AppErr: From<HandlerErr>,
  {
    event!(
      Level::DEBUG,
      context_type = %std::any::type_name::<TData>(),
      "registering flow"
    );
    let runner = FlowRunner::<TData, HandlerErr, AppErr> {
      flow: Arc::new(flow),
      _phantom: PhantomData,
    };
    self
      .registry
      .lock()
      .unwrap()
      .insert(TypeId::of::<TData>(), Arc::new(runner));
  }

  /// Runs the flow registered for `TData` against `shared`.
  pub async fn run<TData>(&self, shared: Shared<TData>) -> Result<FlowOutcome, AppErr>
  where
    TData: 'static + Send + Sync,
  {
    let runner: Arc<dyn AnyFlowRunner<AppErr>> = {
      let registry = self.registry.lock().unwrap();
      registry.get(&TypeId::of::<TData>()).cloned().ok_or_else(|| {
        let context_type = std::any::type_name::<TData>();
        event!(Level::ERROR, context_type, "no flow registered");
        AppErr::from(FurrowError::NotRegistered {
          context_type: context_type.to_string(),
        })
      })?
    };

    let ctx_obj: Box<dyn Any + Send> = Box::new(shared);
    runner.run_erased(ctx_obj).await
  }
}

impl<AppErr> Default for Furrow<AppErr>
where
  AppErr: std::error::Error + From<FurrowError> + Send + Sync + 'static,
{
  fn default() -> Self {
    Self::new()
  }
}
