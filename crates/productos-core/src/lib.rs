//! # Productos Core
//!
//! Core types, traits, and error definitions for the Productos catalog client.
//! This crate provides the product schema, the gateway abstraction, and the
//! error taxonomy shared by every other crate in the workspace.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod telemetry;
pub mod traits;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use telemetry::*;
pub use traits::*;
pub use validation::*;
