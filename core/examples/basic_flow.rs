// core/examples/basic_flow.rs

use furrow::{Flow, FlowControl, FurrowError, Shared};
use tracing::info;

// The context the flow operates on.
#[derive(Clone, Debug, Default)]
struct GreetCtx {
  log: Vec<String>,
  counter: i32,
}

#[tokio::main]
async fn main() -> Result<(), FurrowError> {
  tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

  info!("--- basic flow example ---");

  let mut flow = Flow::<GreetCtx, FurrowError>::new(&[
    ("gather", false, None), // name, optional, skip_when
    ("double", false, None),
    ("report", false, None),
  ]);

  flow.on("gather", |ctx: Shared<GreetCtx>| {
    Box::pin(async move {
      let mut data = ctx.write();
      data.counter += 1;
      let msg = format!("gather ran: counter = {}", data.counter);
      info!("{}", msg);
      data.log.push(msg);
      Ok::<_, FurrowError>(FlowControl::Advance)
    })
  });

  flow.on("double", |ctx: Shared<GreetCtx>| {
    Box::pin(async move {
      let mut data = ctx.write();
      data.counter *= 2;
      let msg = format!("double ran: counter = {}", data.counter);
      info!("{}", msg);
      data.log.push(msg);
      Ok::<_, FurrowError>(FlowControl::Advance)
    })
  });

  flow.on("report", |ctx: Shared<GreetCtx>| {
    Box::pin(async move {
      let data = ctx.read();
      info!("final counter: {}, log entries: {}", data.counter, data.log.len());
      Ok::<_, FurrowError>(FlowControl::Advance)
    })
  });

  let ctx = Shared::new(GreetCtx::default());
  let outcome = flow.run(ctx.clone()).await?;
  info!("flow finished with outcome: {:?}", outcome);

  Ok(())
}
