//! # Productos Domain
//!
//! The product schema exchanged with the catalog API.

pub mod product;

pub use product::*;
