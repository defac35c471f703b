//! Sprite extraction pipelines.
//!
//! Both modes end the same way: each resolved sprite is cropped out of the
//! decoded sheet and written to the output directory. Sprites whose region
//! falls outside the sheet are reported and skipped; every other failure
//! aborts the run.

pub mod grid;
pub mod stylesheet;

use std::fs;
use std::path::{Component, Path, PathBuf};

use image::RgbaImage;

use crate::error::{ChopError, Result};
use crate::manifest::Manifest;
use crate::output::{display_path, plural, Printer};
use crate::render::{crop, write_png};
use crate::types::SourceRect;

/// Which pipeline handles an input file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// JSON grid description.
    Grid,
    /// Stylesheet with one positional rule per sprite.
    Stylesheet,
}

impl InputKind {
    /// Select the pipeline by extension: `.scss` and `.css` are stylesheets,
    /// everything else is treated as a grid description.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("scss") | Some("css") => InputKind::Stylesheet,
            _ => InputKind::Grid,
        }
    }
}

/// What an extraction run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractReport {
    /// Files written, in extraction order.
    pub written: Vec<PathBuf>,
    /// Sprites that were resolved but not written.
    pub skipped: usize,
}

/// Run the pipeline matching `input`'s extension.
pub fn run(input: &Path, manifest: &Manifest, printer: &Printer) -> Result<ExtractReport> {
    let report = match InputKind::from_path(input) {
        InputKind::Grid => grid::run(input, manifest, printer)?,
        InputKind::Stylesheet => stylesheet::run(input, manifest, printer)?,
    };

    let written = plural(report.written.len(), "sprite", "sprites");
    if report.skipped > 0 {
        printer.info(
            "Finished",
            &format!(
                "{} to {} ({} skipped)",
                written,
                display_path(&manifest.output),
                report.skipped
            ),
        );
    } else {
        printer.info(
            "Finished",
            &format!("{} to {}", written, display_path(&manifest.output)),
        );
    }

    Ok(report)
}

/// Create the output directory if needed.
fn ensure_output_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| ChopError::Io {
            path: dir.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }
    Ok(())
}

/// Whether `file_name` names a file directly inside the output directory.
///
/// Stylesheet tokens come from arbitrary selector text, so a name with a
/// root, a `..` or a separator must not reach `Path::join`.
fn is_plain_file_name(file_name: &str) -> bool {
    let mut components = Path::new(file_name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(name)), None) if name == file_name
    )
}

/// Crop one sprite and write it to `output/file_name`.
///
/// A name that would leave the output directory or a region outside the
/// sheet is logged and counted; a failed write is fatal.
fn emit_sprite(
    sheet: &RgbaImage,
    rect: &SourceRect,
    file_name: &str,
    output: &Path,
    printer: &Printer,
    report: &mut ExtractReport,
) -> Result<()> {
    if !is_plain_file_name(file_name) {
        printer.warning(
            "Skipping",
            &format!("{} (name is not a plain file name)", file_name),
        );
        report.skipped += 1;
        return Ok(());
    }

    let sprite = match crop(sheet, rect) {
        Ok(sprite) => sprite,
        Err(e) => {
            printer.warning("Skipping", &format!("{} ({})", file_name, e));
            report.skipped += 1;
            return Ok(());
        }
    };

    let path = output.join(file_name);
    write_png(&sprite, &path)?;
    printer.verbose("Writing", &display_path(&path));

    report.written.push(path);
    Ok(())
}
