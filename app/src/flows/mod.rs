// app/src/flows/mod.rs

//! Defines and registers the furrow flows behind every form submission and
//! user-initiated mutation.

use crate::errors::AppError;
use furrow::Furrow;
use std::sync::Arc;

pub mod contexts;

pub mod add_product_flow;
pub mod delete_product_flow;
pub mod login_flow;
pub mod order_flow;
pub mod payment_flow;
pub mod register_flow;
pub mod update_product_flow;

/// Registers every flow with the given registry. Called once at startup.
pub fn register_all_flows(furrow: &Arc<Furrow<AppError>>) {
  tracing::info!("Registering flows...");

  login_flow::register_login_flow(furrow);
  register_flow::register_registration_flow(furrow);
  add_product_flow::register_add_product_flow(furrow);
  update_product_flow::register_update_product_flow(furrow);
  payment_flow::register_payment_flow(furrow);
  delete_product_flow::register_delete_product_flow(furrow);
  order_flow::register_place_order_flow(furrow);

  tracing::info!("All flows registered.");
}
