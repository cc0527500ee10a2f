// tests/flow_execution_tests.rs
mod common;

use common::*;
use furrow::{Flow, FlowControl, FlowOutcome, FurrowError, Shared, SkipWhen};
use std::sync::atomic::Ordering;
use std::sync::Arc;

#[tokio::test]
async fn stages_run_in_declared_order() {
  setup_tracing();
  let mut flow =
    Flow::<TestCtx, TestError>::new(&[("first", false, None), ("second", false, None), ("third", false, None)]);

  flow.on("first", tracing_handler("first", " F"));
  flow.on("second", tracing_handler("second", " S"));
  flow.on("third", tracing_handler("third", " T"));

  let ctx = Shared::new(TestCtx::default());
  let result = flow.run(ctx.clone()).await;

  assert!(result.is_ok());
  assert_eq!(result.unwrap(), FlowOutcome::Completed);

  let guard = ctx.read();
  assert_eq!(guard.counter, 3);
  assert_eq!(guard.trace, " F S T");
  assert_eq!(guard.stages_run, vec!["first", "second", "third"]);
}

#[tokio::test]
async fn halt_ends_the_run_early() {
  setup_tracing();
  let mut flow =
    Flow::<TestCtx, TestError>::new(&[("alpha", false, None), ("brake", false, None), ("gamma", false, None)]);

  flow.on("alpha", tracing_handler("alpha", "A"));
  flow.on("brake", |ctx: Shared<TestCtx>| {
    Box::pin(async move {
      ctx.write().stages_run.push("brake".to_string());
      Ok::<FlowControl, FurrowError>(FlowControl::Halt)
    })
  });
  flow.on("gamma", tracing_handler("gamma", "G")); // must not run

  let ctx = Shared::new(TestCtx::default());
  let result = flow.run(ctx.clone()).await;

  assert!(result.is_ok());
  assert_eq!(result.unwrap(), FlowOutcome::Halted);

  let guard = ctx.read();
  assert_eq!(guard.counter, 1); // only alpha
  assert_eq!(guard.trace, "A");
  assert_eq!(guard.stages_run, vec!["alpha", "brake"]);
}

#[tokio::test]
async fn handler_error_aborts_and_propagates() {
  setup_tracing();
  let mut flow =
    Flow::<TestCtx, TestError>::new(&[("good", false, None), ("bad", false, None), ("never", false, None)]);

  flow.on("good", tracing_handler("good", "g"));
  flow.on("bad", failing_handler("bad", "boom"));
  flow.on("never", tracing_handler("never", "n"));

  let ctx = Shared::new(TestCtx::default());
  let result = flow.run(ctx.clone()).await;

  assert_eq!(result.unwrap_err(), TestError::Handler("boom".to_string()));

  let guard = ctx.read();
  assert_eq!(guard.stages_run, vec!["good", "bad"]);
  assert_eq!(guard.counter, 1);
}

#[tokio::test]
async fn optional_stage_without_handlers_is_skipped() {
  setup_tracing();
  let mut flow = Flow::<TestCtx, TestError>::new(&[("real", false, None), ("placeholder", true, None)]);

  flow.on("real", tracing_handler("real", "r"));
  // no handler for "placeholder"

  let ctx = Shared::new(TestCtx::default());
  let result = flow.run(ctx.clone()).await;

  assert_eq!(result.unwrap(), FlowOutcome::Completed);
  assert_eq!(ctx.read().stages_run, vec!["real"]);
}

#[tokio::test]
async fn required_stage_without_handlers_is_an_error() {
  setup_tracing();
  let mut flow = Flow::<TestCtx, TestError>::new(&[("wired", false, None), ("forgotten", false, None)]);

  flow.on("wired", tracing_handler("wired", "w"));

  let ctx = Shared::new(TestCtx::default());
  let err = flow.run(ctx).await.unwrap_err();

  match err {
    TestError::Furrow(msg) => assert!(msg.contains("forgotten"), "unexpected message: {msg}"),
    other => panic!("expected a framework error, got {other:?}"),
  }
}

#[tokio::test]
async fn skip_when_suppresses_a_stage() {
  setup_tracing();
  let skip_second: SkipWhen<TestCtx> = Arc::new(|ctx: Shared<TestCtx>| ctx.read().counter >= 1);
  let mut flow = Flow::<TestCtx, TestError>::new(&[("one", false, None), ("two", false, Some(skip_second))]);

  flow.on("one", tracing_handler("one", "1"));
  flow.on("two", tracing_handler("two", "2"));

  let ctx = Shared::new(TestCtx::default());
  let result = flow.run(ctx.clone()).await;

  assert_eq!(result.unwrap(), FlowOutcome::Completed);
  // "one" bumped the counter, so "two" was skipped.
  assert_eq!(ctx.read().stages_run, vec!["one"]);
  assert_eq!(ctx.read().trace, "1");
}

#[tokio::test]
async fn before_on_after_run_in_phase_order() {
  setup_tracing();
  let mut flow = Flow::<TestCtx, TestError>::new(&[("only", false, None)]);

  flow.before("only", |ctx: Shared<TestCtx>| {
    Box::pin(async move {
      ctx.write().trace.push('b');
      Ok::<FlowControl, FurrowError>(FlowControl::Advance)
    })
  });
  flow.on("only", |ctx: Shared<TestCtx>| {
    Box::pin(async move {
      ctx.write().trace.push('o');
      Ok::<FlowControl, FurrowError>(FlowControl::Advance)
    })
  });
  flow.after("only", |ctx: Shared<TestCtx>| {
    Box::pin(async move {
      ctx.write().trace.push('a');
      Ok::<FlowControl, FurrowError>(FlowControl::Advance)
    })
  });

  let ctx = Shared::new(TestCtx::default());
  let result = flow.run(ctx.clone()).await;

  assert_eq!(result.unwrap(), FlowOutcome::Completed);
  assert_eq!(ctx.read().trace, "boa");
}

#[tokio::test]
async fn halt_in_before_skips_on_and_after() {
  setup_tracing();
  let mut flow = Flow::<TestCtx, TestError>::new(&[("guarded", false, None)]);

  flow.before("guarded", |ctx: Shared<TestCtx>| {
    Box::pin(async move {
      ctx.write().trace.push('b');
      Ok::<FlowControl, FurrowError>(FlowControl::Halt)
    })
  });
  flow.on("guarded", tracing_handler("guarded", "X"));

  let ctx = Shared::new(TestCtx::default());
  let result = flow.run(ctx.clone()).await;

  assert_eq!(result.unwrap(), FlowOutcome::Halted);
  assert_eq!(ctx.read().trace, "b");
  assert!(ctx.read().stages_run.is_empty());
}

#[tokio::test]
#[serial_test::serial]
async fn handlers_run_exactly_once_per_run() {
  setup_tracing();
  reset_counters();

  let mut flow = Flow::<TestCtx, TestError>::new(&[("counted", false, None)]);
  flow.on("counted", |_ctx: Shared<TestCtx>| {
    Box::pin(async move {
      HANDLER_EXEC_COUNTER.fetch_add(1, Ordering::SeqCst);
      Ok::<FlowControl, FurrowError>(FlowControl::Advance)
    })
  });

  for _ in 0..3 {
    let ctx = Shared::new(TestCtx::default());
    flow.run(ctx).await.unwrap();
  }
  assert_eq!(HANDLER_EXEC_COUNTER.load(Ordering::SeqCst), 3);
}
