// app/src/services/mod.rs

//! Injected collaborators: the backend API gateway, the cart repository,
//! the cart mutation logic, and the blocking user prompt.

pub mod cart;
pub mod cart_store;
pub mod market_api;
pub mod prompt;

pub use cart::CartService;
pub use cart_store::{CartStore, JsonFileCartStore, MemoryCartStore, CART_SLOT};
pub use market_api::{
  ApiMessage, HttpMarketplaceApi, LoginPayload, LoginReply, MarketplaceApi, NewProductPayload, PaymentPayload,
  PaymentReply, RegisterPayload, UpdateProductPayload,
};
pub use prompt::{ConsolePrompt, UserPrompt};
