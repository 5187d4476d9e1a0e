//! Command-line interface implementation for avcreate.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments. None are required: a bare invocation scaffolds
/// the current directory interactively.
#[derive(Parser, Debug)]
#[command(author, version, about = "Create a new Aardvark gadget project", long_about = None)]
pub struct Args {
    /// Directory to create the project in
    #[arg(value_name = "OUTPUT_DIR", default_value = ".")]
    pub output_dir: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Read answers from stdin as a JSON or YAML object; questions without
    /// an answer there are still asked
    #[arg(short, long)]
    pub stdin: bool,
}

/// Parses command line arguments, exiting with clap's usage error on failure.
pub fn get_args() -> Args {
    Args::parse()
}
