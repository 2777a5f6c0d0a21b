//! Rendering of command results.

use crate::cli::OutputFormat;
use productos_core::{DeleteReceipt, ErrorResponse, Product, ProductId, ProductosError, ProductosResult};
use std::fmt::Write as _;

/// Renders a product list.
pub fn render_products(products: &[Product], format: OutputFormat) -> ProductosResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(products)?),
        OutputFormat::Table => Ok(products_table(products)),
    }
}

/// Renders a single product.
pub fn render_product(product: &Product, format: OutputFormat) -> ProductosResult<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(product)?),
        OutputFormat::Table => Ok(product_details(product)),
    }
}

/// Renders the confirmation of a delete.
pub fn render_receipt(id: &ProductId, receipt: &DeleteReceipt, format: OutputFormat) -> ProductosResult<String> {
    match (format, receipt) {
        (OutputFormat::Json, Some(payload)) => Ok(serde_json::to_string_pretty(payload)?),
        (OutputFormat::Json, None) => Ok(serde_json::json!({ "deleted": id }).to_string()),
        (OutputFormat::Table, Some(serde_json::Value::String(text))) => Ok(format!("Deleted product {}: {}", id, text)),
        (OutputFormat::Table, Some(payload)) => Ok(format!("Deleted product {}: {}", id, payload)),
        (OutputFormat::Table, None) => Ok(format!("Deleted product {}", id)),
    }
}

/// Renders an error for stderr.
#[must_use]
pub fn render_error(error: &ProductosError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Json => {
            let response = ErrorResponse::from_error(error);
            serde_json::to_string(&response).unwrap_or_else(|_| error.to_string())
        }
        OutputFormat::Table => format!("error: {}", error),
    }
}

fn products_table(products: &[Product]) -> String {
    if products.is_empty() {
        return "No products found".to_string();
    }

    let rows: Vec<[String; 4]> = products
        .iter()
        .map(|p| {
            [
                p.id.to_string(),
                p.name.clone(),
                p.price.to_string(),
                p.description.clone().unwrap_or_default(),
            ]
        })
        .collect();

    let header = ["ID", "NAME", "PRICE", "DESCRIPTION"];
    let mut widths = header.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let header_row = header.map(str::to_string);
    for row in std::iter::once(&header_row).chain(rows.iter()) {
        let line = row
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ");
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out.trim_end().to_string()
}

fn product_details(product: &Product) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "ID:          {}", product.id);
    let _ = writeln!(out, "Name:        {}", product.name);
    let _ = writeln!(out, "Price:       {}", product.price);
    if let Some(description) = &product.description {
        let _ = writeln!(out, "Description: {}", description);
    }
    for (key, value) in &product.extra {
        let _ = writeln!(out, "{:<12} {}", format!("{}:", key), value);
    }
    out.trim_end().to_string()
}
