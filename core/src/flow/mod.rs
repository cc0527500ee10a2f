// core/src/flow/mod.rs

//! The `Flow<TData, Err>` type: construction, handler registration, and
//! execution.

pub mod define;
pub mod exec;

pub use define::{Flow, Handler};
