// app/src/ui/handlers/cart.rs

use crate::errors::Result;
use crate::flows::contexts::PlaceOrderCtx;
use crate::models::{BuyerOrder, Product, Toast};
use crate::state::AppState;
use crate::ui::handlers::{failure, no_op};
use crate::ui::markup;
use crate::ui::outcome::SubmitOutcome;
use furrow::{FlowOutcome, Shared};
use tracing::{info, instrument};

/// Adds `product` to the cart and announces it through the blocking alert.
/// Storage trouble surfaces as an error toast instead of aborting silently.
#[instrument(name = "handler::add_to_cart", skip_all, fields(product_id = product.product_id))]
pub fn add_to_cart(state: &AppState, product: &Product) -> SubmitOutcome {
  match state.cart.add(product) {
    Ok(_) => {
      state.prompt.alert(&format!("{} added to cart!", product.product_name));
      no_op()
    }
    Err(err) => failure(err, "Could not update cart"),
  }
}

/// Submits the current cart as one order, one line per cart entry. The
/// cart keeps its contents afterwards.
#[instrument(name = "handler::place_order", skip_all)]
pub async fn submit_order(state: &AppState, buyer_id: Option<i64>) -> SubmitOutcome {
  let ctx = Shared::new(PlaceOrderCtx {
    state: state.clone(),
    buyer_id: buyer_id.unwrap_or(state.config.demo_buyer_id),
    lines: Vec::new(),
    server_message: None,
  });

  match state.flows.run(ctx.clone()).await {
    Ok(FlowOutcome::Completed) => {
      let message = ctx
        .read()
        .server_message
        .clone()
        .unwrap_or_else(|| "Order placed successfully".to_string());
      info!("order placed");
      SubmitOutcome::toast(Toast::success(message))
    }
    Ok(FlowOutcome::Halted) => no_op(),
    Err(err) => failure(err, "Failed to place order"),
  }
}

/// A buyer's past orders.
pub struct OrdersView {
  orders: Vec<BuyerOrder>,
}

impl OrdersView {
  pub fn orders(&self) -> &[BuyerOrder] {
    &self.orders
  }

  pub fn render(&self) -> String {
    markup::render_order_items(&self.orders)
  }
}

#[instrument(name = "handler::load_buyer_orders", skip(state))]
pub async fn load_buyer_orders(state: &AppState, buyer_id: Option<i64>) -> Result<OrdersView> {
  let buyer_id = buyer_id.unwrap_or(state.config.demo_buyer_id);
  let orders = state.api.buyer_orders(buyer_id).await?;
  Ok(OrdersView { orders })
}
