// core/src/lib.rs

//! Furrow: a small asynchronous step-flow engine.
//!
//! A [`Flow`] is an ordered list of named stages. Each stage can carry
//! `before`, `on` and `after` handlers; handlers receive a cloneable,
//! lockable [`Shared`] context and decide whether the run advances or
//! halts. A [`Furrow`] registry keyed by context type dispatches runs
//! without the caller naming the flow.
//!
//! Typical wiring:
//! 1. Define a context struct for the process.
//! 2. Build a `Flow<Ctx, Err>` from its stage list and register handlers
//!    with [`Flow::on`] (and `before`/`after` where needed).
//! 3. Register the flow with a `Furrow<AppErr>` instance.
//! 4. Per run, create `Shared::new(ctx)` and call `furrow.run(shared)`.

pub mod control;
pub mod error;
pub mod flow;
pub mod registry;
pub mod shared;
pub mod stage;

pub use crate::control::{FlowControl, FlowOutcome};
pub use crate::error::{FurrowError, FurrowResult};
pub use crate::flow::{Flow, Handler};
pub use crate::registry::Furrow;
pub use crate::shared::Shared;
pub use crate::stage::{SkipWhen, StageDef};
