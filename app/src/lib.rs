// app/src/lib.rs

//! Farmstand: the client-side layer of a farmer/buyer marketplace.
//!
//! Form submissions (login, registration, add-product, payment, …) run as
//! [`furrow`] flows over typed contexts; read-only listings are plain async
//! handlers. All network access goes through the [`services::MarketplaceApi`]
//! trait, all cart persistence through [`services::CartStore`], and all
//! user-visible output is produced as data ([`ui::SubmitOutcome`]) or markup
//! strings — there is no ambient document anywhere in this crate.

pub mod config;
pub mod errors;
pub mod flows;
pub mod models;
pub mod services;
pub mod state;
pub mod ui;

pub use crate::config::AppConfig;
pub use crate::errors::{AppError, Result};
pub use crate::state::AppState;
