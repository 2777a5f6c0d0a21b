//! Command-line arguments.

use clap::{Args, Parser, Subcommand, ValueEnum};
use productos_core::{is_schema_field, ProductDraft};
use serde_json::Value;
use std::path::PathBuf;

/// Manage the product catalog.
#[derive(Debug, Parser)]
#[command(name = "productos", version, about, long_about = None)]
pub struct Cli {
    /// Directory holding `default.toml` and friends.
    #[arg(long, env = "PRODUCTOS_CONFIG_DIR", default_value = "./config")]
    pub config_dir: PathBuf,

    /// Overrides `api.base_url` from configuration.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table.
    Table,
    /// Pretty-printed JSON.
    Json,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every product.
    List,
    /// Show one product.
    View {
        /// Product id.
        id: String,
    },
    /// Create a product.
    Create(CreateArgs),
    /// Edit a product; unspecified fields keep their current value.
    Edit(EditArgs),
    /// Delete a product.
    Delete {
        /// Product id.
        id: String,
    },
}

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Product name.
    #[arg(long)]
    pub name: String,

    /// Unit price.
    #[arg(long, allow_hyphen_values = true)]
    pub price: f64,

    /// Free-form description.
    #[arg(long)]
    pub description: Option<String>,

    /// Extra backend field as `key=value`; the value is parsed as JSON when possible.
    #[arg(long = "field", value_parser = parse_field)]
    pub fields: Vec<(String, Value)>,
}

impl CreateArgs {
    /// Builds the draft sent to the backend.
    #[must_use]
    pub fn to_draft(&self) -> ProductDraft {
        let mut draft = ProductDraft::new(self.name.clone(), self.price);
        if let Some(description) = &self.description {
            draft = draft.with_description(description.clone());
        }
        self.fields
            .iter()
            .fold(draft, |draft, (key, value)| draft.with_field(key.clone(), value.clone()))
    }
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Product id.
    pub id: String,

    /// New name.
    #[arg(long)]
    pub name: Option<String>,

    /// New unit price.
    #[arg(long, allow_hyphen_values = true)]
    pub price: Option<f64>,

    /// New description.
    #[arg(long, conflicts_with = "clear_description")]
    pub description: Option<String>,

    /// Remove the description.
    #[arg(long)]
    pub clear_description: bool,

    /// Extra backend field as `key=value`; the value is parsed as JSON when possible.
    #[arg(long = "field", value_parser = parse_field)]
    pub fields: Vec<(String, Value)>,
}

impl EditArgs {
    /// Applies the requested changes on top of the current record's draft.
    #[must_use]
    pub fn apply(&self, mut draft: ProductDraft) -> ProductDraft {
        if let Some(name) = &self.name {
            draft.name = name.clone();
        }
        if let Some(price) = self.price {
            draft.price = price;
        }
        if self.clear_description {
            draft.description = None;
        } else if let Some(description) = &self.description {
            draft.description = Some(description.clone());
        }
        self.fields
            .iter()
            .fold(draft, |draft, (key, value)| draft.with_field(key.clone(), value.clone()))
    }
}

/// Parses `key=value`, reading the value as JSON and falling back to a string.
pub fn parse_field(raw: &str) -> Result<(String, Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", raw))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("field key cannot be empty in '{}'", raw));
    }
    if is_schema_field(key) {
        return Err(format!("'{}' is a product field; use --{} instead", key, key));
    }

    let value = serde_json::from_str(value).unwrap_or_else(|_| Value::String(value.to_string()));
    Ok((key.to_string(), value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use serde_json::json;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_field() {
        assert_eq!(parse_field("stock=12").unwrap(), ("stock".to_string(), json!(12)));
        assert_eq!(parse_field("color=black").unwrap(), ("color".to_string(), json!("black")));
        assert_eq!(
            parse_field("tags=[\"a\",\"b\"]").unwrap(),
            ("tags".to_string(), json!(["a", "b"]))
        );
        assert_eq!(parse_field("note=a=b").unwrap(), ("note".to_string(), json!("a=b")));
        assert!(parse_field("novalue").is_err());
        assert!(parse_field("=1").is_err());
    }

    #[test]
    fn test_parse_field_rejects_schema_keys() {
        let err = parse_field("price=5").unwrap_err();
        assert!(err.contains("use --price"));
        assert!(parse_field("name=x").is_err());
        assert!(parse_field(" description =y").is_err());
        assert!(parse_field("id=3").is_err());

        assert!(Cli::try_parse_from([
            "productos", "create", "--name", "Widget", "--price", "1", "--field", "price=5",
        ])
        .is_err());
    }

    #[test]
    fn test_parse_create() {
        let cli = Cli::try_parse_from([
            "productos", "create", "--name", "Widget", "--price", "9.99", "--field", "stock=3",
        ])
        .unwrap();

        let Command::Create(args) = cli.command else {
            panic!("expected create");
        };
        let draft = args.to_draft();
        assert_eq!(draft.name, "Widget");
        assert_eq!(draft.price, 9.99);
        assert_eq!(draft.extra.get("stock"), Some(&json!(3)));
        assert_eq!(cli.output, OutputFormat::Table);
    }

    #[test]
    fn test_create_requires_name_and_price() {
        assert!(Cli::try_parse_from(["productos", "create", "--name", "Widget"]).is_err());
        assert!(Cli::try_parse_from(["productos", "create", "--price", "1"]).is_err());
    }

    #[test]
    fn test_negative_price_reaches_validation() {
        let cli = Cli::try_parse_from(["productos", "create", "--name", "W", "--price", "-1"]).unwrap();
        let Command::Create(args) = cli.command else {
            panic!("expected create");
        };
        assert_eq!(args.price, -1.0);
    }

    #[test]
    fn test_edit_apply_keeps_unspecified_fields() {
        let cli = Cli::try_parse_from(["productos", "edit", "5", "--price", "12.5"]).unwrap();
        let Command::Edit(args) = cli.command else {
            panic!("expected edit");
        };

        let current = ProductDraft::new("Widget", 9.99)
            .with_description("Blue")
            .with_field("sku", json!("W-1"));
        let draft = args.apply(current);

        assert_eq!(args.id, "5");
        assert_eq!(draft.name, "Widget");
        assert_eq!(draft.price, 12.5);
        assert_eq!(draft.description.as_deref(), Some("Blue"));
        assert_eq!(draft.extra.get("sku"), Some(&json!("W-1")));
    }

    #[test]
    fn test_edit_clear_description() {
        let cli = Cli::try_parse_from(["productos", "edit", "5", "--clear-description"]).unwrap();
        let Command::Edit(args) = cli.command else {
            panic!("expected edit");
        };
        let draft = args.apply(ProductDraft::new("Widget", 1.0).with_description("Old"));
        assert!(draft.description.is_none());

        assert!(Cli::try_parse_from([
            "productos", "edit", "5", "--clear-description", "--description", "x",
        ])
        .is_err());
    }

    #[test]
    fn test_global_options() {
        let cli = Cli::try_parse_from([
            "productos",
            "--base-url",
            "http://catalog:9000",
            "--output",
            "json",
            "view",
            "1",
        ])
        .unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("http://catalog:9000"));
        assert_eq!(cli.output, OutputFormat::Json);
        assert!(matches!(cli.command, Command::View { ref id } if id == "1"));
    }
}
