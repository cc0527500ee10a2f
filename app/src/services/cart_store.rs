// app/src/services/cart_store.rs

//! The cart repository: one durable slot holding the whole collection as
//! JSON text, mirroring the original's single local-storage key.

use crate::errors::{AppError, Result};
use crate::models::CartItem;
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

/// Name of the single storage slot.
pub const CART_SLOT: &str = "cart";

/// Storage access for the cart collection. Both operations are synchronous,
/// like the browser storage they stand in for; an absent slot reads as an
/// empty collection, while unreadable or unparsable slot content is an
/// explicit [`AppError::Storage`].
pub trait CartStore: Send + Sync {
  fn get(&self) -> Result<Vec<CartItem>>;
  fn put(&self, items: &[CartItem]) -> Result<()>;
}

fn parse_slot(text: &str) -> Result<Vec<CartItem>> {
  serde_json::from_str(text).map_err(|e| AppError::Storage(format!("corrupt '{}' slot: {}", CART_SLOT, e)))
}

fn serialize_slot(items: &[CartItem]) -> Result<String> {
  serde_json::to_string(items).map_err(|e| AppError::Storage(format!("could not serialize cart: {}", e)))
}

/// File-backed store: the slot is a single JSON file on disk.
pub struct JsonFileCartStore {
  path: PathBuf,
}

impl JsonFileCartStore {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }
}

impl CartStore for JsonFileCartStore {
  fn get(&self) -> Result<Vec<CartItem>> {
    if !self.path.exists() {
      return Ok(Vec::new());
    }
    let text =
      fs::read_to_string(&self.path).map_err(|e| AppError::Storage(format!("could not read cart slot: {}", e)))?;
    parse_slot(&text)
  }

  fn put(&self, items: &[CartItem]) -> Result<()> {
    let text = serialize_slot(items)?;
    fs::write(&self.path, text).map_err(|e| AppError::Storage(format!("could not write cart slot: {}", e)))
  }
}

/// In-memory store keeping the slot as serialized text, so tests exercise
/// the same JSON round-trip (and the same corruption failure mode) as the
/// file-backed store.
#[derive(Default)]
pub struct MemoryCartStore {
  slot: Mutex<Option<String>>,
}

impl MemoryCartStore {
  pub fn new() -> Self {
    Self::default()
  }

  /// Replaces the raw slot content, bypassing serialization. Lets tests
  /// seed corrupt text.
  pub fn set_raw(&self, text: impl Into<String>) {
    *self.slot.lock().unwrap() = Some(text.into());
  }

  pub fn raw(&self) -> Option<String> {
    self.slot.lock().unwrap().clone()
  }
}

impl CartStore for MemoryCartStore {
  fn get(&self) -> Result<Vec<CartItem>> {
    match self.slot.lock().unwrap().as_deref() {
      None => Ok(Vec::new()),
      Some(text) => parse_slot(text),
    }
  }

  fn put(&self, items: &[CartItem]) -> Result<()> {
    let text = serialize_slot(items)?;
    *self.slot.lock().unwrap() = Some(text);
    Ok(())
  }
}
