//! # Productos Client
//!
//! HTTP implementation of [`productos_core::ProductGateway`].
//!
//! | Operation | Method | Path    |
//! |-----------|--------|---------|
//! | list      | GET    | `/`     |
//! | get       | GET    | `/{id}` |
//! | create    | POST   | `/`     |
//! | update    | PUT    | `/{id}` |
//! | delete    | DELETE | `/{id}` |
//!
//! Paths are relative to the configured base URL.

mod http_product_gateway;

pub use http_product_gateway::*;
