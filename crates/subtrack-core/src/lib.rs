//! Core types and trait definitions for the subtrack subscription service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod cost;
pub mod error;
pub mod month;
pub mod store;
pub mod subscription;

pub use error::{Error, Result};
