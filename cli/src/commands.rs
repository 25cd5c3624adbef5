pub mod calc;
pub mod catalog;
pub mod convert;
pub mod slices;

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use tally_common::config::DEFAULT_OUTPUT_FILE;

#[derive(Parser)]
#[command(name = "tally", version)]
#[command(about = "Small calculators and list demos.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Print less (-q hides headers, -qq prints bare results)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Slice a fixed list of hobbies and edit a list of goals
    #[command(alias = "s")]
    Slices,
    /// Build a small product catalog and append to it
    #[command(alias = "p")]
    Catalog,
    /// Compute earnings before and after tax from stdin
    #[command(alias = "c")]
    Calc {
        /// File the results are written to, replacing its contents
        #[arg(short, long, default_value = DEFAULT_OUTPUT_FILE)]
        output: PathBuf,
    },
    /// Convert text tokens to decimal numbers
    #[command(alias = "v")]
    Convert {
        #[arg(allow_negative_numbers = true)]
        tokens: Vec<String>,
        /// Read tokens from a file, one per line, before any given inline
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
