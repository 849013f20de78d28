//! embedweb - embed a compiled web bundle into firmware as C++ sources.

#![allow(dead_code)]

mod asset;
mod cli;
mod codegen;
mod config;
mod logger;
mod pipeline;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::EmbedConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose());

    let config = EmbedConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { args } => cli::build::build_assets(args, &config),
        Commands::List { args } => cli::list::list_assets(args, &config),
    }
}
