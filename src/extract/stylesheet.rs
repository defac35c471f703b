//! Stylesheet-mode extraction.
//!
//! The sheet image is expected next to the stylesheet under the manifest's
//! `sheet_image` name (`pokesprite.png` by default).

use std::fs;
use std::path::Path;

use crate::error::{ChopError, Result};
use crate::manifest::Manifest;
use crate::output::{display_path, plural, Printer};
use crate::parser::parse_stylesheet;
use crate::render::load_image;

use super::{emit_sprite, ensure_output_dir, ExtractReport};

/// Chop the sheet next to the stylesheet at `path`.
pub fn run(path: &Path, manifest: &Manifest, printer: &Printer) -> Result<ExtractReport> {
    let source = fs::read_to_string(path).map_err(|e| ChopError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to read stylesheet: {}", e),
    })?;

    let image_path = path
        .parent()
        .unwrap_or_else(|| Path::new(""))
        .join(&manifest.sheet_image);
    printer.status("Loading", &display_path(&image_path));
    let image = load_image(&image_path)?;

    let rules = parse_stylesheet(&source);
    printer.info(
        "Parsed",
        &format!(
            "{} from {}",
            plural(rules.len(), "rule", "rules"),
            display_path(path)
        ),
    );

    ensure_output_dir(&manifest.output)?;

    let mut report = ExtractReport::default();
    for rule in &rules {
        let Some(file_name) = rule.identity().file_name() else {
            printer.verbose("Skipping", "rule without a sprite token");
            report.skipped += 1;
            continue;
        };

        emit_sprite(
            &image,
            &rule.source_rect(),
            &file_name,
            &manifest.output,
            printer,
            &mut report,
        )?;
    }

    Ok(report)
}
