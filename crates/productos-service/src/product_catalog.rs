//! Product catalog use cases.

use productos_core::{
    DeleteReceipt, Product, ProductDraft, ProductGateway, ProductId, ProductosError, ProductosResult,
    ValidateExt,
};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Catalog use cases over an injected gateway.
///
/// Every gateway failure is logged here with the operation and target id,
/// then returned unchanged. Drafts are validated before any request is sent.
#[derive(Clone)]
pub struct ProductCatalog {
    gateway: Arc<dyn ProductGateway>,
}

impl ProductCatalog {
    /// Creates a new catalog over `gateway`.
    pub fn new(gateway: Arc<dyn ProductGateway>) -> Self {
        Self { gateway }
    }

    /// Lists every product.
    pub async fn list(&self) -> ProductosResult<Vec<Product>> {
        let products = self
            .gateway
            .list_products()
            .await
            .map_err(|e| log_failure("list_products", None, e))?;

        debug!("Listed {} products", products.len());
        Ok(products)
    }

    /// Shows one product.
    pub async fn view(&self, id: &ProductId) -> ProductosResult<Product> {
        self.gateway
            .get_product(id)
            .await
            .map_err(|e| log_failure("get_product", Some(id), e))
    }

    /// Validates and creates a product.
    pub async fn create(&self, draft: &ProductDraft) -> ProductosResult<Product> {
        draft.validate_request()?;

        let product = self
            .gateway
            .create_product(draft)
            .await
            .map_err(|e| log_failure("create_product", None, e))?;

        info!(product_id = %product.id, "Product created");
        Ok(product)
    }

    /// Validates and replaces a product's fields.
    pub async fn edit(&self, id: &ProductId, draft: &ProductDraft) -> ProductosResult<Product> {
        draft.validate_request()?;

        let product = self
            .gateway
            .update_product(id, draft)
            .await
            .map_err(|e| log_failure("update_product", Some(id), e))?;

        info!(product_id = %id, "Product updated");
        Ok(product)
    }

    /// Deletes a product.
    pub async fn delete(&self, id: &ProductId) -> ProductosResult<DeleteReceipt> {
        let receipt = self
            .gateway
            .delete_product(id)
            .await
            .map_err(|e| log_failure("delete_product", Some(id), e))?;

        info!(product_id = %id, "Product deleted");
        Ok(receipt)
    }
}

fn log_failure(operation: &'static str, id: Option<&ProductId>, err: ProductosError) -> ProductosError {
    match id {
        Some(id) => error!(
            operation,
            product_id = %id,
            error_code = err.error_code(),
            status = ?err.status_code(),
            "Catalog request failed: {}",
            err
        ),
        None => error!(
            operation,
            error_code = err.error_code(),
            status = ?err.status_code(),
            "Catalog request failed: {}",
            err
        ),
    }
    err
}
