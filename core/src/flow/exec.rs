// core/src/flow/exec.rs

//! `Flow::run`: drives the stages of a flow over a shared context.

use crate::control::{FlowControl, FlowOutcome};
use crate::error::FurrowError;
use crate::flow::define::{Flow, Handler};
use crate::shared::Shared;
use tracing::{event, instrument, span, Instrument, Level};

impl<TData, Err> Flow<TData, Err>
where
  TData: 'static + Send + Sync,
  Err: std::error::Error + From<FurrowError> + Send + Sync + 'static,
{
  /// Executes the flow against `shared`.
  ///
  /// Stages run in declaration order; within a stage the `before`, `on`
  /// and `after` phases run in that order. The first handler returning
  /// [`FlowControl::Halt`] ends the run with [`FlowOutcome::Halted`]; the
  /// first handler error aborts the run and is returned as-is. A
  /// non-optional stage with no handler in any phase is a wiring error and
  /// yields [`FurrowError::HandlerMissing`] converted into `Err`.
  #[instrument(
    name = "Flow::run",
    skip_all,
    fields(
      context_type = %std::any::type_name::<TData>(),
      num_stages = self.stages.len(),
    ),
    err(Display)
  )]
  pub async fn run(&self, shared: Shared<TData>) -> Result<FlowOutcome, Err> {
    event!(Level::DEBUG, "flow run starting");

    for (idx, stage) in self.stages.iter().enumerate() {
      let name = stage.name.as_str();
      // Entered span guards must not live across handler awaits, so the
      // stage span is entered only around synchronous sections and
      // attached to handler futures via `Instrument`.
      let stage_span = span!(Level::INFO, "flow_stage", stage = name, index = idx, optional = stage.optional);

      if let Some(skip_when) = &stage.skip_when {
        if skip_when(shared.clone()) {
          stage_span.in_scope(|| event!(Level::INFO, "stage skipped by skip_when condition"));
          continue;
        }
      }

      let phases: [(&str, Option<&Vec<Handler<TData, Err>>>); 3] = [
        ("before", self.before.get(name)),
        ("on", self.on.get(name)),
        ("after", self.after.get(name)),
      ];

      if phases.iter().all(|(_, h)| h.map_or(true, |v| v.is_empty())) {
        if stage.optional {
          stage_span.in_scope(|| event!(Level::DEBUG, "optional stage has no handlers, skipping"));
          continue;
        }
        stage_span.in_scope(|| event!(Level::ERROR, "required stage has no handlers"));
        return Err(Err::from(FurrowError::HandlerMissing {
          stage: stage.name.clone(),
        }));
      }

      for (phase, handlers) in phases {
        let Some(handlers) = handlers else { continue };
        for (handler_idx, handler) in handlers.iter().enumerate() {
          let handler_span = span!(
            parent: &stage_span,
            Level::DEBUG,
            "flow_handler",
            phase,
            handler_index = handler_idx
          );
          match handler(shared.clone()).instrument(handler_span).await {
            Ok(FlowControl::Advance) => {}
            Ok(FlowControl::Halt) => {
              stage_span.in_scope(|| event!(Level::INFO, phase, "flow halted by handler"));
              return Ok(FlowOutcome::Halted);
            }
            Err(e) => {
              stage_span.in_scope(|| event!(Level::ERROR, phase, error = %e, "handler failed"));
              return Err(e);
            }
          }
        }
      }
      stage_span.in_scope(|| event!(Level::DEBUG, "stage finished"));
    }

    event!(Level::DEBUG, "flow run completed");
    Ok(FlowOutcome::Completed)
  }
}
