pub mod positions;

use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::extract::{self, ExtractReport};
use crate::manifest::Manifest;
use crate::output::Printer;

/// chop - Split a spritesheet into individual sprites
#[derive(Parser, Debug)]
#[command(name = "chop")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Grid description (.json) or stylesheet (.scss) to chop
    pub input: PathBuf,

    /// Output directory (default: manifest output, else ./images)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Manifest file (default: ./chop.yaml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print every written sprite
    #[arg(long, short)]
    pub verbose: bool,
}

pub fn run(cli: Cli) -> Result<ExtractReport> {
    let printer = Printer::new().with_verbose(cli.verbose);

    let mut manifest = Manifest::resolve(cli.config.as_deref(), &std::env::current_dir()?)?;
    if let Some(output) = cli.output {
        manifest.output = output;
    }

    extract::run(&cli.input, &manifest, &printer)
}
