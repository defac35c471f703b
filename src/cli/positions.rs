//! Position table command.
//!
//! Reads a stylesheet and writes the sprite position table used by web
//! front ends that draw straight from the sheet.

use std::fs;
use std::path::PathBuf;

use clap::Parser;

use crate::error::{ChopError, Result};
use crate::output::{display_path, plural, Printer};
use crate::parser::extract_positions;
use crate::render::{write_positions, PositionFormat};
use crate::types::PositionTable;

const DEFAULT_INPUT: &str = "./output/pokesprite.scss";
const DEFAULT_OUTPUT: &str = "./output/sprite-positions.ts";

/// chop-positions - Generate a sprite position table from a stylesheet
#[derive(Parser, Debug)]
#[command(name = "chop-positions")]
#[command(version, about, long_about = None)]
pub struct PositionsCli {
    /// Stylesheet to read [default: ./output/pokesprite.scss]
    #[arg(requires = "output")]
    pub input: Option<PathBuf>,

    /// Table to write; `.json` writes JSON, anything else TypeScript
    /// [default: ./output/sprite-positions.ts]
    pub output: Option<PathBuf>,
}

impl PositionsCli {
    fn paths(&self) -> (PathBuf, PathBuf) {
        match (&self.input, &self.output) {
            (Some(input), Some(output)) => (input.clone(), output.clone()),
            _ => (PathBuf::from(DEFAULT_INPUT), PathBuf::from(DEFAULT_OUTPUT)),
        }
    }
}

pub fn run(cli: PositionsCli) -> Result<PositionTable> {
    let printer = Printer::new();
    let (input, output) = cli.paths();

    printer.status("Reading", &display_path(&input));
    let source = fs::read_to_string(&input).map_err(|e| ChopError::Io {
        path: input.clone(),
        message: format!("Failed to read stylesheet: {}", e),
    })?;

    let table = extract_positions(&source);
    printer.info(
        "Extracted",
        &plural(table.len(), "sprite position", "sprite positions"),
    );

    write_positions(&output, &table, PositionFormat::from_path(&output))?;
    printer.info("Generated", &display_path(&output));

    Ok(table)
}
