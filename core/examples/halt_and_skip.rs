// core/examples/halt_and_skip.rs
//
// Shows the two ways a stage can be bypassed: a skip_when predicate on the
// stage definition, and a handler halting the whole run.

use furrow::{Flow, FlowControl, FlowOutcome, FurrowError, Shared, SkipWhen};
use std::sync::Arc;
use tracing::info;

#[derive(Clone, Debug, Default)]
struct CheckoutCtx {
  dry_run: bool,
  charged: bool,
  shipped: bool,
}

#[tokio::main]
async fn main() -> Result<(), FurrowError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  let skip_charge: SkipWhen<CheckoutCtx> = Arc::new(|ctx: Shared<CheckoutCtx>| ctx.read().dry_run);

  let mut flow = Flow::<CheckoutCtx, FurrowError>::new(&[
    ("charge", false, Some(skip_charge)),
    ("confirm", false, None),
    ("ship", false, None),
  ]);

  flow.on("charge", |ctx: Shared<CheckoutCtx>| {
    Box::pin(async move {
      ctx.write().charged = true;
      info!("charged");
      Ok::<_, FurrowError>(FlowControl::Advance)
    })
  });

  // A dry run halts after confirmation instead of shipping.
  flow.on("confirm", |ctx: Shared<CheckoutCtx>| {
    Box::pin(async move {
      let dry_run = ctx.read().dry_run;
      if dry_run {
        info!("dry run confirmed, halting before ship");
        return Ok::<_, FurrowError>(FlowControl::Halt);
      }
      Ok(FlowControl::Advance)
    })
  });

  flow.on("ship", |ctx: Shared<CheckoutCtx>| {
    Box::pin(async move {
      ctx.write().shipped = true;
      info!("shipped");
      Ok::<_, FurrowError>(FlowControl::Advance)
    })
  });

  let real = Shared::new(CheckoutCtx::default());
  assert_eq!(flow.run(real.clone()).await?, FlowOutcome::Completed);
  info!("real run: charged={}, shipped={}", real.read().charged, real.read().shipped);

  let dry = Shared::new(CheckoutCtx {
    dry_run: true,
    ..Default::default()
  });
  assert_eq!(flow.run(dry.clone()).await?, FlowOutcome::Halted);
  info!("dry run: charged={}, shipped={}", dry.read().charged, dry.read().shipped);

  Ok(())
}
