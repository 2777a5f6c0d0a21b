//! # Productos
//!
//! Command-line client for the product catalog API.

use clap::Parser;
use productos_cli::app;
use productos_cli::cli::Cli;
use productos_cli::output::render_error;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match app::run(&cli).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", render_error(&e, cli.output));
            app::exit_code(&e)
        }
    }
}
