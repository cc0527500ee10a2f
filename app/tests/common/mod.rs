// tests/common/mod.rs
#![allow(dead_code)] // Shared helpers; not every test file uses every one.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use farmstand::config::AppConfig;
use farmstand::errors::{AppError, Result};
use farmstand::flows;
use farmstand::models::{BuyerOrder, OrderRequest, Product};
use farmstand::services::{
  ApiMessage, CartService, LoginPayload, LoginReply, MarketplaceApi, MemoryCartStore, NewProductPayload,
  PaymentPayload, PaymentReply, RegisterPayload, UpdateProductPayload, UserPrompt,
};
use farmstand::state::AppState;
use furrow::Furrow;

// --- Fixtures ---

pub fn product(id: i64, name: &str) -> Product {
  Product {
    product_id: id,
    farmer_id: 1,
    product_name: name.to_string(),
    description: Some(format!("{} from the stand", name)),
    price: 2.5,
    quantity: 7,
    image: Some("placeholder.jpg".to_string()),
  }
}

// --- Scripted API fake ---

/// Configurable stand-in for the backend. Set the plain fields before
/// wrapping in an `Arc`; the `Mutex`ed fields record what the code under
/// test actually sent.
pub struct FakeApi {
  pub calls: Mutex<Vec<String>>,
  pub products: Vec<Product>,
  pub farmer_products: Vec<Product>,
  pub buyer_orders: Vec<BuyerOrder>,
  /// `user_type` reported by a successful login.
  pub login_user_type: String,
  /// When set, every call answers a server error carrying this message.
  pub server_error: Option<String>,
  /// Like `server_error`, but with no decodable message in the body.
  pub server_error_blank: bool,
  /// When true, every call fails at the transport level.
  pub transport_down: bool,
  pub product_payloads: Mutex<Vec<NewProductPayload>>,
  pub payment_payloads: Mutex<Vec<PaymentPayload>>,
  pub order_payloads: Mutex<Vec<OrderRequest>>,
}

impl Default for FakeApi {
  fn default() -> Self {
    Self {
      calls: Mutex::new(Vec::new()),
      products: Vec::new(),
      farmer_products: Vec::new(),
      buyer_orders: Vec::new(),
      login_user_type: "buyer".to_string(),
      server_error: None,
      server_error_blank: false,
      transport_down: false,
      product_payloads: Mutex::new(Vec::new()),
      payment_payloads: Mutex::new(Vec::new()),
      order_payloads: Mutex::new(Vec::new()),
    }
  }
}

impl FakeApi {
  pub fn recorded_calls(&self) -> Vec<String> {
    self.calls.lock().unwrap().clone()
  }

  fn record(&self, call: impl Into<String>) {
    self.calls.lock().unwrap().push(call.into());
  }

  fn gate(&self) -> Result<()> {
    if self.transport_down {
      return Err(AppError::Transport("connection refused".to_string()));
    }
    if self.server_error_blank {
      return Err(AppError::Api { message: None });
    }
    if let Some(message) = &self.server_error {
      return Err(AppError::Api {
        message: Some(message.clone()),
      });
    }
    Ok(())
  }
}

#[async_trait]
impl MarketplaceApi for FakeApi {
  async fn login(&self, _payload: &LoginPayload) -> Result<LoginReply> {
    self.record("POST /api/login");
    self.gate()?;
    Ok(LoginReply {
      message: Some("Login successful".to_string()),
      user_type: self.login_user_type.clone(),
      user_id: Some(1),
    })
  }

  async fn register(&self, _payload: &RegisterPayload) -> Result<ApiMessage> {
    self.record("POST /api/register");
    self.gate()?;
    Ok(ApiMessage {
      message: "User registered successfully".to_string(),
    })
  }

  async fn create_product(&self, payload: &NewProductPayload) -> Result<ApiMessage> {
    self.record("POST /api/products");
    self.gate()?;
    self.product_payloads.lock().unwrap().push(payload.clone());
    Ok(ApiMessage {
      message: "Product added successfully".to_string(),
    })
  }

  async fn list_products(&self) -> Result<Vec<Product>> {
    self.record("GET /api/products");
    self.gate()?;
    Ok(self.products.clone())
  }

  async fn product(&self, product_id: i64) -> Result<Product> {
    self.record(format!("GET /api/products/{}", product_id));
    self.gate()?;
    self
      .products
      .iter()
      .find(|p| p.product_id == product_id)
      .cloned()
      .ok_or(AppError::Api {
        message: Some("Product not found".to_string()),
      })
  }

  async fn update_product(&self, product_id: i64, _payload: &UpdateProductPayload) -> Result<ApiMessage> {
    self.record(format!("PUT /api/products/{}", product_id));
    self.gate()?;
    Ok(ApiMessage {
      message: "Product updated successfully".to_string(),
    })
  }

  async fn farmer_products(&self, farmer_id: i64) -> Result<Vec<Product>> {
    self.record(format!("GET /api/products/farmer/{}", farmer_id));
    self.gate()?;
    Ok(self.farmer_products.clone())
  }

  async fn delete_product(&self, product_id: i64) -> Result<ApiMessage> {
    self.record(format!("DELETE /api/products/{}", product_id));
    self.gate()?;
    Ok(ApiMessage {
      message: "Product deleted successfully".to_string(),
    })
  }

  async fn submit_payment(&self, payload: &PaymentPayload) -> Result<PaymentReply> {
    self.record("POST /api/payments");
    self.gate()?;
    self.payment_payloads.lock().unwrap().push(payload.clone());
    Ok(PaymentReply {
      message: Some("Payment processed".to_string()),
      transaction_id: "TXN11".to_string(),
    })
  }

  async fn place_order(&self, payload: &OrderRequest) -> Result<ApiMessage> {
    self.record("POST /api/orders");
    self.gate()?;
    self.order_payloads.lock().unwrap().push(payload.clone());
    Ok(ApiMessage {
      message: "Order placed successfully".to_string(),
    })
  }

  async fn buyer_orders(&self, buyer_id: i64) -> Result<Vec<BuyerOrder>> {
    self.record(format!("GET /api/orders/buyer/{}", buyer_id));
    self.gate()?;
    Ok(self.buyer_orders.clone())
  }
}

// --- Scripted prompt ---

pub struct ScriptedPrompt {
  pub confirm_answer: bool,
  pub alerts: Mutex<Vec<String>>,
  pub confirms: Mutex<Vec<String>>,
}

impl ScriptedPrompt {
  pub fn answering(confirm_answer: bool) -> Self {
    Self {
      confirm_answer,
      alerts: Mutex::new(Vec::new()),
      confirms: Mutex::new(Vec::new()),
    }
  }

  pub fn recorded_alerts(&self) -> Vec<String> {
    self.alerts.lock().unwrap().clone()
  }
}

impl UserPrompt for ScriptedPrompt {
  fn alert(&self, message: &str) {
    self.alerts.lock().unwrap().push(message.to_string());
  }

  fn confirm(&self, question: &str) -> bool {
    self.confirms.lock().unwrap().push(question.to_string());
    self.confirm_answer
  }
}

// --- State assembly ---

pub fn test_config() -> AppConfig {
  AppConfig {
    api_base_url: "http://backend.invalid".to_string(),
    cart_path: "unused-cart.json".into(),
    default_farmer_id: 1,
    demo_product_id: 1,
    demo_buyer_id: 1,
    placeholder_image: "placeholder.jpg".to_string(),
  }
}

pub fn test_state(api: Arc<FakeApi>, store: Arc<MemoryCartStore>, prompt: Arc<ScriptedPrompt>) -> AppState {
  let flows_registry = Arc::new(Furrow::<AppError>::new());
  flows::register_all_flows(&flows_registry);
  AppState {
    api,
    cart: Arc::new(CartService::new(store)),
    prompt,
    flows: flows_registry,
    config: Arc::new(test_config()),
  }
}

/// State with all-default fakes, for tests that only need the happy path.
pub fn plain_state() -> (AppState, Arc<FakeApi>, Arc<MemoryCartStore>, Arc<ScriptedPrompt>) {
  let api = Arc::new(FakeApi::default());
  let store = Arc::new(MemoryCartStore::new());
  let prompt = Arc::new(ScriptedPrompt::answering(true));
  let state = test_state(api.clone(), store.clone(), prompt.clone());
  (state, api, store, prompt)
}
