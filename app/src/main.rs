// app/src/main.rs

use farmstand::config::AppConfig;
use farmstand::flows;
use farmstand::services::{CartService, ConsolePrompt, HttpMarketplaceApi, JsonFileCartStore};
use farmstand::state::AppState;
use farmstand::ui::handlers::{load_farmer_products, load_marketplace};

use furrow::Furrow;
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

/// Headless demo client: wires the live collaborators, registers every
/// flow, then fetches and renders the marketplace and the default farmer's
/// dashboard against the configured backend.
#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_max_level(Level::INFO)
    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
    .with_span_events(FmtSpan::CLOSE)
    .init();

  tracing::info!("Starting farmstand client...");

  let config = match AppConfig::from_env() {
    Ok(cfg) => Arc::new(cfg),
    Err(e) => {
      tracing::error!(error = %e, "Failed to load configuration.");
      panic!("Configuration error: {}", e);
    }
  };

  let flows_registry = Arc::new(Furrow::<farmstand::AppError>::new());
  flows::register_all_flows(&flows_registry);

  let state = AppState {
    api: Arc::new(HttpMarketplaceApi::new(config.api_base_url.clone())),
    cart: Arc::new(CartService::new(Arc::new(JsonFileCartStore::new(config.cart_path.clone())))),
    prompt: Arc::new(ConsolePrompt),
    flows: flows_registry,
    config: config.clone(),
  };

  match load_marketplace(&state).await {
    Ok(view) => {
      println!("--- marketplace ({} products) ---", view.products().len());
      println!("{}", view.render_all());
    }
    Err(e) => tracing::error!(error = %e, "Could not load the marketplace."),
  }

  match load_farmer_products(&state, None).await {
    Ok(view) => {
      println!("--- farmer dashboard ---");
      println!("{}", view.render());
    }
    Err(e) => tracing::error!(error = %e, "Could not load the farmer dashboard."),
  }
}
