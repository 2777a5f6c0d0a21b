//! # Productos CLI
//!
//! Command-line front end for the product catalog. Each subcommand matches
//! one catalog screen: `list`, `view`, `create`, `edit`, plus `delete`.

pub mod app;
pub mod cli;
pub mod commands;
pub mod output;
