// app/src/flows/contexts.rs

//! Context structs for every flow. Handlers receive these wrapped in
//! `furrow::Shared`; the submit handlers read the result fields back out
//! after the run.

use crate::models::{OrderLine, UserType};
use crate::services::market_api::{NewProductPayload, UpdateProductPayload};
use crate::state::AppState;
use crate::ui::outcome::{Navigation, Receipt};

#[derive(Clone)]
pub struct LoginCtx {
  pub state: AppState,
  pub email: String,
  pub password: String,
  // Populated by the flow:
  pub user_type: Option<UserType>,
  pub destination: Option<Navigation>,
}

#[derive(Clone)]
pub struct RegisterCtx {
  pub state: AppState,
  pub name: String,
  pub email: String,
  pub password: String,
  pub user_type: String,
  // Populated by the flow:
  pub server_message: Option<String>,
}

#[derive(Clone)]
pub struct AddProductCtx {
  pub state: AppState,
  // Raw form field values, as read from the inputs:
  pub farmer_id: String,
  pub product_name: String,
  pub description: String,
  pub price: String,
  pub quantity: String,
  // Populated by the flow:
  pub payload: Option<NewProductPayload>,
}

#[derive(Clone)]
pub struct UpdateProductCtx {
  pub state: AppState,
  pub product_id: i64,
  pub product_name: String,
  pub description: String,
  pub price: String,
  pub quantity: String,
  pub image: String,
  // Populated by the flow:
  pub payload: Option<UpdateProductPayload>,
}

#[derive(Clone)]
pub struct PaymentCtx {
  pub state: AppState,
  /// Value of the checked payment-method radio, if any.
  pub selected_method: Option<String>,
  // Populated by the flow:
  pub transaction_id: Option<String>,
  pub receipt: Option<Receipt>,
}

#[derive(Clone)]
pub struct DeleteProductCtx {
  pub state: AppState,
  pub product_id: i64,
  // Populated by the flow:
  pub server_message: Option<String>,
}

#[derive(Clone)]
pub struct PlaceOrderCtx {
  pub state: AppState,
  pub buyer_id: i64,
  // Populated by the flow:
  pub lines: Vec<OrderLine>,
  pub server_message: Option<String>,
}
