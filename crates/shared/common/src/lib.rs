//! Common utilities shared across the workspace crates.
//!
//! This crate provides:
//! - Unified application error handling
//! - Configuration loaded from the environment

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult};
