// app/src/services/market_api.rs

//! The marketplace backend, behind a trait so flows and tests never touch
//! the network directly. One method and one typed payload/reply pair per
//! endpoint.

use crate::errors::{AppError, Result};
use crate::models::{BuyerOrder, OrderRequest, Product};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

// --- Request / response records, one pair per endpoint ---

#[derive(Debug, Clone, Serialize)]
pub struct LoginPayload {
  pub email: String,
  pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginReply {
  #[serde(default)]
  pub message: Option<String>,
  pub user_type: String,
  #[serde(default)]
  pub user_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterPayload {
  pub name: String,
  pub email: String,
  pub password: String,
  pub user_type: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewProductPayload {
  pub farmer_id: i64,
  pub product_name: String,
  pub description: String,
  pub price: f64,
  pub quantity: i64,
  /// Always the configured placeholder filename; the selected file's bytes
  /// are never uploaded.
  pub image: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateProductPayload {
  pub product_name: String,
  pub description: String,
  pub price: f64,
  pub quantity: i64,
  pub image: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PaymentPayload {
  pub payment_method: String,
  pub product_id: i64,
  pub buyer_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PaymentReply {
  #[serde(default)]
  pub message: Option<String>,
  pub transaction_id: String,
}

/// Generic `{"message": …}` success body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
  pub message: String,
}

/// `{"error": …}` body of non-success responses.
#[derive(Debug, Clone, Deserialize)]
struct ApiErrorBody {
  error: String,
}

// --- The gateway trait ---

#[async_trait]
pub trait MarketplaceApi: Send + Sync {
  async fn login(&self, payload: &LoginPayload) -> Result<LoginReply>;
  async fn register(&self, payload: &RegisterPayload) -> Result<ApiMessage>;
  async fn create_product(&self, payload: &NewProductPayload) -> Result<ApiMessage>;
  async fn list_products(&self) -> Result<Vec<Product>>;
  async fn product(&self, product_id: i64) -> Result<Product>;
  async fn update_product(&self, product_id: i64, payload: &UpdateProductPayload) -> Result<ApiMessage>;
  async fn farmer_products(&self, farmer_id: i64) -> Result<Vec<Product>>;
  async fn delete_product(&self, product_id: i64) -> Result<ApiMessage>;
  async fn submit_payment(&self, payload: &PaymentPayload) -> Result<PaymentReply>;
  async fn place_order(&self, payload: &OrderRequest) -> Result<ApiMessage>;
  async fn buyer_orders(&self, buyer_id: i64) -> Result<Vec<BuyerOrder>>;
}

// --- Live implementation ---

/// HTTP client wrapper for the marketplace backend.
///
/// Requests carry no timeout and are never retried; a request that never
/// resolves simply leaves its flow suspended, matching the original
/// client's behavior.
#[derive(Clone)]
pub struct HttpMarketplaceApi {
  client: reqwest::Client,
  base_url: String,
}

impl HttpMarketplaceApi {
  pub fn new(base_url: impl Into<String>) -> Self {
    Self {
      client: reqwest::Client::new(),
      base_url: base_url.into(),
    }
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.base_url, path)
  }

  /// Uniform response handling: success bodies decode into `T`; any
  /// decode failure counts as a transport problem, and non-success
  /// statuses surface the body's `error` field when present.
  async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T> {
    let status = resp.status();
    if status.is_success() {
      resp
        .json::<T>()
        .await
        .map_err(|e| AppError::Transport(format!("invalid response body: {}", e)))
    } else {
      let message = match resp.json::<ApiErrorBody>().await {
        Ok(body) => Some(body.error),
        Err(_) => {
          warn!(%status, "non-success response without a decodable error body");
          None
        }
      };
      Err(AppError::Api { message })
    }
  }

  async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
    let resp = self
      .client
      .get(self.url(path))
      .send()
      .await
      .map_err(|e| AppError::Transport(format!("request failed: {}", e)))?;
    Self::decode(resp).await
  }

  async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
    let resp = self
      .client
      .post(self.url(path))
      .json(body)
      .send()
      .await
      .map_err(|e| AppError::Transport(format!("request failed: {}", e)))?;
    Self::decode(resp).await
  }

  async fn put_json<B: Serialize + Sync, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
    let resp = self
      .client
      .put(self.url(path))
      .json(body)
      .send()
      .await
      .map_err(|e| AppError::Transport(format!("request failed: {}", e)))?;
    Self::decode(resp).await
  }

  async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
    let resp = self
      .client
      .delete(self.url(path))
      .send()
      .await
      .map_err(|e| AppError::Transport(format!("request failed: {}", e)))?;
    Self::decode(resp).await
  }
}

#[async_trait]
impl MarketplaceApi for HttpMarketplaceApi {
  #[instrument(name = "api::login", skip_all, fields(email = %payload.email))]
  async fn login(&self, payload: &LoginPayload) -> Result<LoginReply> {
    self.post_json("/api/login", payload).await
  }

  #[instrument(name = "api::register", skip_all, fields(email = %payload.email))]
  async fn register(&self, payload: &RegisterPayload) -> Result<ApiMessage> {
    self.post_json("/api/register", payload).await
  }

  #[instrument(name = "api::create_product", skip_all, fields(product_name = %payload.product_name))]
  async fn create_product(&self, payload: &NewProductPayload) -> Result<ApiMessage> {
    self.post_json("/api/products", payload).await
  }

  #[instrument(name = "api::list_products", skip_all)]
  async fn list_products(&self) -> Result<Vec<Product>> {
    self.get_json("/api/products").await
  }

  #[instrument(name = "api::product", skip(self))]
  async fn product(&self, product_id: i64) -> Result<Product> {
    self.get_json(&format!("/api/products/{}", product_id)).await
  }

  #[instrument(name = "api::update_product", skip(self, payload))]
  async fn update_product(&self, product_id: i64, payload: &UpdateProductPayload) -> Result<ApiMessage> {
    self.put_json(&format!("/api/products/{}", product_id), payload).await
  }

  #[instrument(name = "api::farmer_products", skip(self))]
  async fn farmer_products(&self, farmer_id: i64) -> Result<Vec<Product>> {
    self.get_json(&format!("/api/products/farmer/{}", farmer_id)).await
  }

  #[instrument(name = "api::delete_product", skip(self))]
  async fn delete_product(&self, product_id: i64) -> Result<ApiMessage> {
    self.delete_json(&format!("/api/products/{}", product_id)).await
  }

  #[instrument(name = "api::submit_payment", skip_all, fields(payment_method = %payload.payment_method))]
  async fn submit_payment(&self, payload: &PaymentPayload) -> Result<PaymentReply> {
    self.post_json("/api/payments", payload).await
  }

  #[instrument(name = "api::place_order", skip_all, fields(lines = payload.orders.len()))]
  async fn place_order(&self, payload: &OrderRequest) -> Result<ApiMessage> {
    self.post_json("/api/orders", payload).await
  }

  #[instrument(name = "api::buyer_orders", skip(self))]
  async fn buyer_orders(&self, buyer_id: i64) -> Result<Vec<BuyerOrder>> {
    self.get_json(&format!("/api/orders/buyer/{}", buyer_id)).await
  }
}
