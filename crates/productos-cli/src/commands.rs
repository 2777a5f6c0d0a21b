//! Subcommand execution.

use crate::cli::{Command, OutputFormat};
use crate::output::{render_product, render_products, render_receipt};
use productos_core::{ProductId, ProductosResult};
use productos_service::ProductCatalog;
use tracing::debug;

/// Runs one subcommand and returns what should be printed on stdout.
pub async fn execute(catalog: &ProductCatalog, command: &Command, format: OutputFormat) -> ProductosResult<String> {
    match command {
        Command::List => {
            let products = catalog.list().await?;
            render_products(&products, format)
        }
        Command::View { id } => {
            let product = catalog.view(&ProductId::new(id.as_str())).await?;
            render_product(&product, format)
        }
        Command::Create(args) => {
            let product = catalog.create(&args.to_draft()).await?;
            render_product(&product, format)
        }
        Command::Edit(args) => {
            let id = ProductId::new(args.id.as_str());
            // Same flow as the edit form: load the record, change it, write it back whole.
            let current = catalog.view(&id).await?;
            let draft = args.apply(current.to_draft());
            debug!(product_id = %id, "Submitting edited product");
            let product = catalog.edit(&id, &draft).await?;
            render_product(&product, format)
        }
        Command::Delete { id } => {
            let id = ProductId::new(id.as_str());
            let receipt = catalog.delete(&id).await?;
            render_receipt(&id, &receipt, format)
        }
    }
}
