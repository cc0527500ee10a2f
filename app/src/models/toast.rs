// app/src/models/toast.rs

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
  Success,
  Error,
}

/// A transient on-screen notification. Toasts are not queued or
/// deduplicated; concurrent toasts may overlap visually.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
  pub message: String,
  pub kind: ToastKind,
}

impl Toast {
  /// Fixed visible lifetime before auto-dismissal.
  pub const VISIBLE_FOR: Duration = Duration::from_secs(3);

  pub fn success(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
      kind: ToastKind::Success,
    }
  }

  pub fn error(message: impl Into<String>) -> Self {
    Self {
      message: message.into(),
      kind: ToastKind::Error,
    }
  }
}
