//! Result type aliases for Productos.

use crate::ProductosError;

/// A specialized `Result` type for Productos operations.
pub type ProductosResult<T> = Result<T, ProductosError>;
