//! Application wiring: configuration, logging, gateway construction.

use crate::cli::Cli;
use crate::commands;
use productos_client::create_http_product_gateway;
use productos_config::{AppConfig, ConfigLoader};
use productos_core::{init_logging, ProductosError, ProductosResult};
use productos_service::ProductCatalog;
use std::process::ExitCode;
use tracing::{debug, info};

/// Exit status for a missing product, so scripts can tell it apart.
pub const EXIT_NOT_FOUND: u8 = 2;

/// Loads and validates configuration, command-line overrides included.
pub fn load_config(cli: &Cli) -> ProductosResult<AppConfig> {
    let mut loader = ConfigLoader::new(&cli.config_dir);
    if let Some(base_url) = &cli.base_url {
        loader = loader.with_override("api.base_url", base_url.as_str());
    }
    loader.load()
}

/// Builds the catalog over an HTTP gateway for `config`.
pub fn build_catalog(config: &AppConfig) -> ProductosResult<ProductCatalog> {
    let gateway = create_http_product_gateway(&config.api)?;
    debug!(base_url = %config.api.base_url, "Catalog gateway ready");
    Ok(ProductCatalog::new(gateway))
}

/// Records which configuration the run uses. Needs logging to be initialised.
pub fn log_loaded_config(cli: &Cli, config: &AppConfig) {
    info!(
        environment = %config.app.environment,
        config_dir = %cli.config_dir.display(),
        base_url = %config.api.base_url,
        base_url_overridden = cli.base_url.is_some(),
        "Configuration loaded"
    );
}

/// Runs the parsed command line end to end.
pub async fn run(cli: &Cli) -> ProductosResult<String> {
    let config = load_config(cli)?;
    init_logging(&config.logging)?;
    log_loaded_config(cli, &config);

    let catalog = build_catalog(&config)?;
    commands::execute(&catalog, &cli.command, cli.output).await
}

/// Maps an error to the process exit status.
#[must_use]
pub fn exit_code(error: &ProductosError) -> ExitCode {
    if error.is_not_found() {
        ExitCode::from(EXIT_NOT_FOUND)
    } else {
        ExitCode::FAILURE
    }
}
