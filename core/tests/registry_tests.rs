// tests/registry_tests.rs
mod common;

use common::*;
use furrow::{Flow, FlowControl, FlowOutcome, Furrow, FurrowError, Shared};

#[derive(Clone, Debug, Default)]
struct AlphaCtx {
  val: String,
}
#[derive(Clone, Debug, Default)]
struct BetaCtx {
  num: i32,
}

#[tokio::test]
async fn registry_dispatches_by_context_type() {
  setup_tracing();
  let furrow = Furrow::<TestError>::new();

  let mut alpha = Flow::<AlphaCtx, TestError>::new(&[("alpha_task", false, None)]);
  alpha.on("alpha_task", |ctx: Shared<AlphaCtx>| {
    Box::pin(async move {
      ctx.write().val = "alpha_processed".to_string();
      Ok::<FlowControl, FurrowError>(FlowControl::Advance)
    })
  });
  furrow.register(alpha);

  let mut beta = Flow::<BetaCtx, TestError>::new(&[("beta_task", false, None)]);
  beta.on("beta_task", |ctx: Shared<BetaCtx>| {
    Box::pin(async move {
      ctx.write().num = 100;
      Ok::<FlowControl, FurrowError>(FlowControl::Advance)
    })
  });
  furrow.register(beta);

  let alpha_ctx = Shared::new(AlphaCtx::default());
  assert_eq!(furrow.run(alpha_ctx.clone()).await.unwrap(), FlowOutcome::Completed);
  assert_eq!(alpha_ctx.read().val, "alpha_processed");

  let beta_ctx = Shared::new(BetaCtx::default());
  assert_eq!(furrow.run(beta_ctx.clone()).await.unwrap(), FlowOutcome::Completed);
  assert_eq!(beta_ctx.read().num, 100);
}

#[tokio::test]
async fn registry_errors_for_unknown_context_type() {
  setup_tracing();
  let furrow = Furrow::<TestError>::new();

  let ctx = Shared::new(AlphaCtx::default());
  let err = furrow.run(ctx).await.unwrap_err();

  match err {
    TestError::Furrow(msg) => assert!(msg.contains("NotRegistered"), "unexpected message: {msg}"),
    other => panic!("expected a framework error, got {other:?}"),
  }
}

#[tokio::test]
async fn later_registration_replaces_earlier_one() {
  setup_tracing();
  let furrow = Furrow::<TestError>::new();

  let mut first = Flow::<AlphaCtx, TestError>::new(&[("task", false, None)]);
  first.on("task", |ctx: Shared<AlphaCtx>| {
    Box::pin(async move {
      ctx.write().val = "first".to_string();
      Ok::<FlowControl, FurrowError>(FlowControl::Advance)
    })
  });
  furrow.register(first);

  let mut second = Flow::<AlphaCtx, TestError>::new(&[("task", false, None)]);
  second.on("task", |ctx: Shared<AlphaCtx>| {
    Box::pin(async move {
      ctx.write().val = "second".to_string();
      Ok::<FlowControl, FurrowError>(FlowControl::Advance)
    })
  });
  furrow.register(second);

  let ctx = Shared::new(AlphaCtx::default());
  furrow.run(ctx.clone()).await.unwrap();
  assert_eq!(ctx.read().val, "second");
}

#[tokio::test]
async fn registry_halt_outcome_passes_through() {
  setup_tracing();
  let furrow = Furrow::<TestError>::new();

  let mut flow = Flow::<TestCtx, TestError>::new(&[("stop_here", false, None)]);
  flow.on("stop_here", |_ctx: Shared<TestCtx>| {
    Box::pin(async move { Ok::<FlowControl, FurrowError>(FlowControl::Halt) })
  });
  furrow.register(flow);

  let ctx = Shared::new(TestCtx::default());
  assert_eq!(furrow.run(ctx).await.unwrap(), FlowOutcome::Halted);
}
