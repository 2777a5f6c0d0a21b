//! Core traits.

use crate::{Product, ProductDraft, ProductId, ProductosResult};
use async_trait::async_trait;

/// Confirmation returned by the backend for a delete; `None` when the body is empty.
pub type DeleteReceipt = Option<serde_json::Value>;

/// Access to the remote product collection.
///
/// Implementations are stateless pass-throughs: every call is an independent
/// round trip with no caching, no retry and no ordering guarantee relative to
/// other in-flight calls. Failures are returned, never logged or swallowed.
#[async_trait]
pub trait ProductGateway: Send + Sync {
    /// Lists every product in the collection.
    async fn list_products(&self) -> ProductosResult<Vec<Product>>;

    /// Gets a product by ID.
    async fn get_product(&self, id: &ProductId) -> ProductosResult<Product>;

    /// Creates a product and returns it as stored by the backend.
    async fn create_product(&self, draft: &ProductDraft) -> ProductosResult<Product>;

    /// Replaces a product's fields and returns the updated record.
    async fn update_product(&self, id: &ProductId, draft: &ProductDraft) -> ProductosResult<Product>;

    /// Deletes a product.
    async fn delete_product(&self, id: &ProductId) -> ProductosResult<DeleteReceipt>;
}
