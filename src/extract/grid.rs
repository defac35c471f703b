//! Grid-mode extraction.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::layout::{plan, GridLayout};
use crate::manifest::Manifest;
use crate::output::{display_path, plural, Printer};
use crate::render::load_image;
use crate::types::SheetDescription;

use super::{emit_sprite, ensure_output_dir, ExtractReport};

/// Locate the sheet image named by a description.
///
/// Relative names are tried against the working directory first, then
/// against the description's own directory.
fn resolve_sheet_path(description: &Path, filename: &Path) -> PathBuf {
    if filename.is_absolute() || filename.exists() {
        return filename.to_path_buf();
    }

    match description.parent() {
        Some(dir) if dir.join(filename).exists() => dir.join(filename),
        _ => filename.to_path_buf(),
    }
}

/// Chop the sheet described by the JSON file at `path`.
pub fn run(path: &Path, manifest: &Manifest, printer: &Printer) -> Result<ExtractReport> {
    let sheet = SheetDescription::load(path)?;

    let image_path = resolve_sheet_path(path, &sheet.filename);
    printer.status("Loading", &display_path(&image_path));
    let image = load_image(&image_path)?;

    let layout = GridLayout::new(&sheet, image.width(), image.height(), manifest.grid_axes)?;
    let (cell_w, cell_h) = layout.cell_size();
    printer.info(
        "Layout",
        &format!(
            "{}x{} grid of {}x{} cells, {}",
            sheet.columns,
            sheet.rows,
            cell_w,
            cell_h,
            plural(sheet.emit_count(), "sprite", "sprites")
        ),
    );

    // Resolve the whole grid before touching the output directory so a bad
    // description writes nothing.
    let placements = plan(&sheet, &layout)?;

    ensure_output_dir(&manifest.output)?;

    let mut report = ExtractReport::default();
    for placement in &placements {
        emit_sprite(
            &image,
            &placement.rect,
            &placement.file_name,
            &manifest.output,
            printer,
            &mut report,
        )?;
    }

    Ok(report)
}
