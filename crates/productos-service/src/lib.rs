//! # Productos Service
//!
//! Use cases behind the catalog screens: list, view, create, edit, delete.
//! This layer owns input validation and failure logging; the gateway it
//! wraps stays a plain pass-through.

mod product_catalog;

pub use product_catalog::*;
