//! # Productos Config
//!
//! Configuration management for the Productos catalog client.
//! Supports layered configuration from built-in defaults, TOML files,
//! a `.env` file, and environment variables.

mod app_config;
mod loader;
mod validation;

pub use app_config::*;
pub use loader::*;
pub use validation::*;
