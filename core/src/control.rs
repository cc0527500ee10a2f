// core/src/control.rs

//! Signals controlling a flow run and the outcome of a completed run.

/// Returned by a handler to steer the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowControl {
  /// Proceed with the remaining handlers and stages.
  Advance,
  /// Stop the run immediately. No further handler of any stage executes.
  Halt,
}

/// How a flow run ended when no handler returned an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
  /// Every non-skipped stage ran to completion.
  Completed,
  /// A handler returned [`FlowControl::Halt`].
  Halted,
}
