mod commands;

pub use commands::*;

use crate::types::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "textgauge")]
#[command(about = "Count characters, words, and sentences in text", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Output format (overrides the configured default)"
    )]
    pub format: Option<OutputFormat>,

    #[arg(
        long,
        global = true,
        value_name = "PATH",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
