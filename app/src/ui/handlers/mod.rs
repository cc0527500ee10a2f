// app/src/ui/handlers/mod.rs

//! Submit and event handlers: each gathers typed form fields, runs the
//! matching flow (or service call), and reports a [`SubmitOutcome`] or a
//! view struct. Failures never propagate out of a submit handler.

pub mod auth;
pub mod cart;
pub mod market;
pub mod payment;
pub mod product;

pub use auth::{submit_login, submit_registration, LoginForm, RegistrationForm};
pub use cart::{add_to_cart, load_buyer_orders, submit_order, OrdersView};
pub use market::{load_marketplace, MarketView};
pub use payment::{submit_payment, PaymentForm};
pub use product::{
  delete_product, load_edit_product, load_farmer_products, submit_new_product, submit_product_update, EditProductForm,
  FarmerView, NewProductForm,
};

use crate::ui::outcome::SubmitOutcome;

pub(crate) use crate::ui::outcome::failure;

/// Outcome of a run the user backed out of: nothing to show, nowhere to go.
pub(crate) fn no_op() -> SubmitOutcome {
  SubmitOutcome::default()
}
