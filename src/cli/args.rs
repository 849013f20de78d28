//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::codegen::LineEnding;

/// Embed compiled web assets into firmware as gzip-compressed C++ tables
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: embedweb.toml, searched upward)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compress a bundle and write the C++ header and source
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        args: BuildArgs,
    },

    /// Show the table a build would emit, without writing anything
    #[command(visible_alias = "l")]
    List {
        #[command(flatten)]
        args: ListArgs,
    },
}

/// Build command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct BuildArgs {
    /// Bundler output directory to embed
    #[arg(value_name = "DIST", value_hint = clap::ValueHint::DirPath)]
    pub dist: PathBuf,

    /// Directory for the generated files (default: DIST)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Gzip compression level (1-9)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=9))]
    pub level: Option<u32>,

    /// Compress assets in parallel
    #[arg(short, long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub parallel: Option<bool>,

    /// Line ending of the generated files
    #[arg(long, value_enum)]
    pub line_ending: Option<LineEnding>,

    /// Rewrite generated files even if their content is unchanged
    #[arg(short, long)]
    pub force: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

/// List command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ListArgs {
    /// Bundler output directory to inspect
    #[arg(value_name = "DIST", value_hint = clap::ValueHint::DirPath)]
    pub dist: PathBuf,

    /// Print JSON instead of a table
    #[arg(short, long)]
    pub json: bool,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

impl Cli {
    pub const fn verbose(&self) -> bool {
        match &self.command {
            Commands::Build { args } => args.verbose,
            Commands::List { args } => args.verbose,
        }
    }
}
