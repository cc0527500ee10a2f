// app/src/models/user.rs

use serde::{Deserialize, Serialize};

/// The two roles the marketplace distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
  Farmer,
  Buyer,
}

impl UserType {
  /// Lenient mapping of the login response's `user_type` field: the
  /// literal `"farmer"` routes to the farmer dashboard, anything else to
  /// the buyer dashboard.
  pub fn from_login(raw: &str) -> Self {
    if raw == "farmer" {
      UserType::Farmer
    } else {
      UserType::Buyer
    }
  }
}
