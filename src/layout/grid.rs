//! Grid layout resolution.
//!
//! A grid sheet is `columns x rows` equally sized cells separated (and
//! surrounded) by an outline of uniform thickness. Each cell is inset by
//! `padding` on every side before cropping. Entries consume cells in
//! row-major order through a monotonic cursor.

use serde::{Deserialize, Serialize};

use crate::error::{ChopError, Result};
use crate::types::{ResolvedIdentity, SheetDescription, SourceRect, SpriteEntry};

/// How a cell's row and column are scaled into pixel offsets.
///
/// Existing sprite sets were generated with the column index scaled by the
/// cell height and the row index by the cell width. `Legacy` reproduces
/// that exactly; `Corrected` scales each axis by its own extent. The two
/// agree whenever cells are square.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisMode {
    #[default]
    Legacy,
    Corrected,
}

/// Row-major index into the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridCursor {
    index: u64,
}

impl GridCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn advance(&mut self, slots: u32) {
        self.index = self.index.saturating_add(slots as u64);
    }

    /// `(row, column)` of the current slot.
    pub fn position(&self, columns: u32) -> (u64, u64) {
        let columns = columns as u64;
        (self.index / columns, self.index % columns)
    }
}

/// Cell geometry of one grid sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    columns: u32,
    rows: u32,
    outline: u32,
    padding: u32,
    cell_width: u32,
    cell_height: u32,
    axes: AxisMode,
}

/// Truncating cell extent along one axis; may be zero or negative.
fn cell_extent(total: u32, count: u32, outline: u32) -> i64 {
    (total as i64 - (count as i64 + 1) * outline as i64) / count as i64
}

impl GridLayout {
    /// Compute cell geometry for a sheet image of the given size.
    ///
    /// Dimensions that do not divide evenly are truncated. Fails if a cell
    /// would be too small to hold anything after padding.
    pub fn new(
        sheet: &SheetDescription,
        image_width: u32,
        image_height: u32,
        axes: AxisMode,
    ) -> Result<Self> {
        let cell_width = cell_extent(image_width, sheet.columns, sheet.outline);
        let cell_height = cell_extent(image_height, sheet.rows, sheet.outline);
        let inset = 2 * sheet.padding as i64;

        if cell_width <= inset || cell_height <= inset {
            return Err(ChopError::Layout {
                message: format!(
                    "{}x{} image leaves {}x{} cells for a {}x{} grid with {}px outline and {}px padding",
                    image_width,
                    image_height,
                    cell_width,
                    cell_height,
                    sheet.columns,
                    sheet.rows,
                    sheet.outline,
                    sheet.padding
                ),
                help: Some(
                    "Check columns, rows, outline_px_size and padding_px_size against the sheet image"
                        .to_string(),
                ),
            });
        }

        Ok(Self {
            columns: sheet.columns,
            rows: sheet.rows,
            outline: sheet.outline,
            padding: sheet.padding,
            cell_width: cell_width as u32,
            cell_height: cell_height as u32,
            axes,
        })
    }

    /// `(width, height)` of a cell, outline excluded.
    pub fn cell_size(&self) -> (u32, u32) {
        (self.cell_width, self.cell_height)
    }

    /// `(width, height)` of every extracted sprite.
    pub fn sprite_size(&self) -> (u32, u32) {
        (
            self.cell_width - 2 * self.padding,
            self.cell_height - 2 * self.padding,
        )
    }

    /// Total number of cells.
    pub fn capacity(&self) -> u64 {
        self.columns as u64 * self.rows as u64
    }

    /// Region of the sprite in slot `index`, or `None` past the last cell.
    pub fn rect_at(&self, index: u64) -> Option<SourceRect> {
        if index >= self.capacity() {
            return None;
        }

        let cursor = GridCursor { index };
        let (row, col) = cursor.position(self.columns);
        let (row, col) = (row as i64, col as i64);

        let (col_step, row_step) = match self.axes {
            AxisMode::Legacy => (self.cell_height, self.cell_width),
            AxisMode::Corrected => (self.cell_width, self.cell_height),
        };
        let outline = self.outline as i64;
        let padding = self.padding as i64;

        let x = col * col_step as i64 + (col + 1) * outline + padding;
        let y = row * row_step as i64 + (row + 1) * outline + padding;
        let (width, height) = self.sprite_size();

        Some(SourceRect::new(x, y, width, height))
    }

    /// Lazily resolve every emitted entry of `sheet` to a placement.
    pub fn placements<'a>(&'a self, sheet: &'a SheetDescription) -> Placements<'a> {
        Placements {
            layout: self,
            suffix: sheet.suffix.as_deref(),
            entries: sheet.entries.iter(),
            cursor: GridCursor::new(),
            failed: false,
        }
    }
}

/// A sprite resolved to its output name and sheet region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub id: u32,
    pub slot: u64,
    pub file_name: String,
    pub rect: SourceRect,
}

/// Iterator over the placements of a grid sheet.
///
/// Yields one item per `Emit` entry in order. Running past the last cell
/// yields a single error and ends the iteration.
pub struct Placements<'a> {
    layout: &'a GridLayout,
    suffix: Option<&'a str>,
    entries: std::slice::Iter<'a, SpriteEntry>,
    cursor: GridCursor,
    failed: bool,
}

impl Iterator for Placements<'_> {
    type Item = Result<Placement>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        for entry in self.entries.by_ref() {
            let slots = entry.slots();
            let SpriteEntry::Emit { id, form } = entry else {
                self.cursor.advance(slots);
                continue;
            };

            let slot = self.cursor.index();
            let Some(rect) = self.layout.rect_at(slot) else {
                self.failed = true;
                return Some(Err(ChopError::Layout {
                    message: format!(
                        "sprite {:03} needs grid slot {}, but a {}x{} grid only has {} slots",
                        id,
                        slot,
                        self.layout.columns,
                        self.layout.rows,
                        self.layout.capacity()
                    ),
                    help: Some("Check skip counts and the rows/columns of the description".to_string()),
                }));
            };
            self.cursor.advance(slots);

            return Some(Ok(Placement {
                id: *id,
                slot,
                file_name: ResolvedIdentity::grid_file_name(*id, self.suffix, form.as_deref()),
                rect,
            }));
        }

        None
    }
}

/// Resolve every placement up front.
///
/// The returned list is independent of the cursor, so sprites can be
/// written in any order.
pub fn plan(sheet: &SheetDescription, layout: &GridLayout) -> Result<Vec<Placement>> {
    layout.placements(sheet).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sheet(
        columns: u32,
        rows: u32,
        outline: u32,
        padding: u32,
        entries: Vec<SpriteEntry>,
    ) -> SheetDescription {
        SheetDescription {
            filename: "sheet.png".into(),
            columns,
            rows,
            outline,
            padding,
            suffix: None,
            entries,
        }
    }

    fn emit(id: u32) -> SpriteEntry {
        SpriteEntry::Emit { id, form: None }
    }

    #[test]
    fn test_cursor_position() {
        let mut cursor = GridCursor::new();
        cursor.advance(5);
        assert_eq!(cursor.position(4), (1, 1));
        assert_eq!(cursor.index(), 5);
    }

    #[test]
    fn test_cell_size_with_outline() {
        // 2x2 grid of 2px cells with a 1px outline: 1 + 2 + 1 + 2 + 1 = 7
        let s = sheet(2, 2, 1, 0, vec![]);
        let layout = GridLayout::new(&s, 7, 7, AxisMode::Legacy).unwrap();

        assert_eq!(layout.cell_size(), (2, 2));
        assert_eq!(layout.capacity(), 4);
    }

    #[test]
    fn test_cell_size_truncates() {
        let s = sheet(3, 1, 0, 0, vec![]);
        let layout = GridLayout::new(&s, 10, 4, AxisMode::Legacy).unwrap();
        assert_eq!(layout.cell_size(), (3, 4));
    }

    #[test]
    fn test_rects_row_major() {
        let s = sheet(2, 2, 1, 0, vec![]);
        let layout = GridLayout::new(&s, 7, 7, AxisMode::Legacy).unwrap();

        assert_eq!(layout.rect_at(0), Some(SourceRect::new(1, 1, 2, 2)));
        assert_eq!(layout.rect_at(1), Some(SourceRect::new(4, 1, 2, 2)));
        assert_eq!(layout.rect_at(2), Some(SourceRect::new(1, 4, 2, 2)));
        assert_eq!(layout.rect_at(3), Some(SourceRect::new(4, 4, 2, 2)));
        assert_eq!(layout.rect_at(4), None);
    }

    #[test]
    fn test_padding_insets_rect() {
        // 1x1 grid, 1px outline, 8x6 cell, 2px padding
        let s = sheet(1, 1, 1, 2, vec![]);
        let layout = GridLayout::new(&s, 10, 8, AxisMode::Legacy).unwrap();

        assert_eq!(layout.sprite_size(), (4, 2));
        assert_eq!(layout.rect_at(0), Some(SourceRect::new(3, 3, 4, 2)));
    }

    #[test]
    fn test_legacy_axes_swap_cell_extents() {
        // 10x5 cells: column 1 lands at x = 1 * cell_height
        let s = sheet(2, 2, 0, 0, vec![]);
        let layout = GridLayout::new(&s, 20, 10, AxisMode::Legacy).unwrap();

        assert_eq!(layout.cell_size(), (10, 5));
        assert_eq!(layout.rect_at(1), Some(SourceRect::new(5, 0, 10, 5)));
        assert_eq!(layout.rect_at(2), Some(SourceRect::new(0, 10, 10, 5)));
    }

    #[test]
    fn test_corrected_axes() {
        let s = sheet(2, 2, 0, 0, vec![]);
        let layout = GridLayout::new(&s, 20, 10, AxisMode::Corrected).unwrap();

        assert_eq!(layout.rect_at(1), Some(SourceRect::new(10, 0, 10, 5)));
        assert_eq!(layout.rect_at(2), Some(SourceRect::new(0, 5, 10, 5)));
    }

    #[test]
    fn test_too_small_image_is_rejected() {
        let s = sheet(4, 4, 1, 0, vec![]);
        let err = GridLayout::new(&s, 5, 5, AxisMode::Legacy).unwrap_err();
        assert!(matches!(err, ChopError::Layout { .. }));
    }

    #[test]
    fn test_padding_consuming_cell_is_rejected() {
        let s = sheet(1, 1, 0, 2, vec![]);
        assert!(GridLayout::new(&s, 4, 4, AxisMode::Legacy).is_err());
        assert!(GridLayout::new(&s, 5, 5, AxisMode::Legacy).is_ok());
    }

    #[test]
    fn test_skip_run_advances_cursor() {
        let json = r#"{
            "filename": "sheet.png", "columns": 4, "rows": 2,
            "outline_px_size": 0, "padding_px_size": 0, "suffix": null,
            "pokemon": [
                { "skip": true, "skip_count": 2 },
                { "skip": true, "skip_count": 0 },
                { "skip": true, "skip_count": 3 },
                { "id": 7 }
            ]
        }"#;
        let s = SheetDescription::parse(json).unwrap();
        let layout = GridLayout::new(&s, 8, 4, AxisMode::Legacy).unwrap();

        let placements = plan(&s, &layout).unwrap();
        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].slot, 6);
        assert_eq!(placements[0].rect, SourceRect::new(4, 2, 2, 2));
    }

    #[test]
    fn test_placement_count_matches_emitted_entries() {
        let s = sheet(
            3,
            3,
            0,
            0,
            vec![
                emit(1),
                SpriteEntry::Skip { count: 1 },
                emit(2),
                emit(3),
                SpriteEntry::Skip { count: 2 },
                emit(4),
            ],
        );
        let layout = GridLayout::new(&s, 9, 9, AxisMode::Legacy).unwrap();
        let placements = plan(&s, &layout).unwrap();

        assert_eq!(placements.len(), s.emit_count());
        let slots: Vec<u64> = placements.iter().map(|p| p.slot).collect();
        assert_eq!(slots, vec![0, 2, 3, 6]);
    }

    #[test]
    fn test_placement_names_use_suffix_and_form() {
        let mut s = sheet(
            2,
            1,
            0,
            0,
            vec![
                emit(25),
                SpriteEntry::Emit {
                    id: 25,
                    form: Some("cap".to_string()),
                },
            ],
        );
        s.suffix = Some("legends_arceus".to_string());
        let layout = GridLayout::new(&s, 4, 2, AxisMode::Legacy).unwrap();
        let names: Vec<String> = plan(&s, &layout)
            .unwrap()
            .into_iter()
            .map(|p| p.file_name)
            .collect();

        assert_eq!(names, vec!["025-legends_arceus.png", "025-legends_arceus-cap.png"]);
    }

    #[test]
    fn test_out_of_range_slot_fails() {
        let s = sheet(2, 1, 0, 0, vec![emit(1), emit(2), emit(3), emit(4)]);
        let layout = GridLayout::new(&s, 4, 2, AxisMode::Legacy).unwrap();

        let results: Vec<_> = layout.placements(&s).collect();
        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        assert!(results[1].is_ok());
        assert!(matches!(results[2], Err(ChopError::Layout { .. })));
        assert!(plan(&s, &layout).is_err());
    }

    #[test]
    fn test_skip_past_end_without_emit_is_fine() {
        let s = sheet(2, 1, 0, 0, vec![emit(1), SpriteEntry::Skip { count: 10 }]);
        let layout = GridLayout::new(&s, 4, 2, AxisMode::Legacy).unwrap();
        assert_eq!(plan(&s, &layout).unwrap().len(), 1);
    }

    #[test]
    fn test_each_placement_sits_after_preceding_slots() {
        let entries = vec![
            SpriteEntry::Skip { count: 2 },
            emit(1),
            SpriteEntry::Skip { count: 1 },
            emit(2),
            emit(3),
        ];
        let s = sheet(3, 3, 0, 0, entries.clone());
        let layout = GridLayout::new(&s, 9, 9, AxisMode::Legacy).unwrap();
        let placements = plan(&s, &layout).unwrap();

        let mut expected = Vec::new();
        let mut consumed = 0u64;
        for entry in &entries {
            if let SpriteEntry::Emit { id, .. } = entry {
                expected.push((*id, consumed, format!("{:03}.png", id)));
            }
            consumed += entry.slots() as u64;
        }

        let actual: Vec<(u32, u64, String)> = placements
            .into_iter()
            .map(|p| (p.id, p.slot, p.file_name))
            .collect();
        assert_eq!(actual, expected);
    }
}
