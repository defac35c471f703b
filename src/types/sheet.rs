//! Grid-mode sheet descriptions.
//!
//! A description is a JSON document naming the sheet image, its grid shape,
//! and the sprites in row-major order:
//!
//! ```json
//! {
//!   "filename": "sheets/legends_arceus.png",
//!   "columns": 12,
//!   "rows": 20,
//!   "outline_px_size": 1,
//!   "padding_px_size": 2,
//!   "suffix": "legends_arceus",
//!   "pokemon": [
//!     { "id": 722 },
//!     { "id": 479, "form": "wash" },
//!     { "skip": true, "skip_count": 3 }
//!   ]
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{ChopError, Result};

/// One slot-consuming entry of a grid description.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawEntry")]
pub enum SpriteEntry {
    /// Extract the next cell as sprite `id`.
    Emit { id: u32, form: Option<String> },
    /// Leave `count` cells unused. Always at least 1.
    Skip { count: u32 },
}

impl SpriteEntry {
    /// Number of grid cells this entry consumes.
    pub fn slots(&self) -> u32 {
        match self {
            SpriteEntry::Emit { .. } => 1,
            SpriteEntry::Skip { count } => *count,
        }
    }
}

#[derive(Deserialize)]
struct RawEntry {
    #[serde(default)]
    id: u32,
    #[serde(default)]
    form: Option<String>,
    #[serde(default)]
    skip: bool,
    #[serde(default)]
    skip_count: u32,
}

impl From<RawEntry> for SpriteEntry {
    fn from(raw: RawEntry) -> Self {
        if raw.skip {
            SpriteEntry::Skip {
                count: raw.skip_count.max(1),
            }
        } else {
            SpriteEntry::Emit {
                id: raw.id,
                form: raw.form,
            }
        }
    }
}

/// A grid-mode spritesheet description.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawSheet")]
pub struct SheetDescription {
    pub filename: PathBuf,
    pub columns: u32,
    pub rows: u32,
    pub outline: u32,
    pub padding: u32,
    pub suffix: Option<String>,
    pub entries: Vec<SpriteEntry>,
}

#[derive(Deserialize)]
struct RawSheet {
    filename: PathBuf,
    columns: u32,
    rows: u32,
    #[serde(default, rename = "outline_px_size")]
    outline: u32,
    #[serde(default, rename = "padding_px_size")]
    padding: u32,
    #[serde(default)]
    suffix: Option<String>,
    #[serde(default, rename = "pokemon")]
    entries: Vec<SpriteEntry>,
}

impl TryFrom<RawSheet> for SheetDescription {
    type Error = String;

    fn try_from(raw: RawSheet) -> std::result::Result<Self, Self::Error> {
        if raw.columns == 0 || raw.rows == 0 {
            return Err(format!(
                "grid must have at least one column and one row, got {}x{}",
                raw.columns, raw.rows
            ));
        }

        Ok(Self {
            filename: raw.filename,
            columns: raw.columns,
            rows: raw.rows,
            outline: raw.outline,
            padding: raw.padding,
            suffix: raw.suffix,
            entries: raw.entries,
        })
    }
}

impl SheetDescription {
    /// Load a description from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ChopError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read sheet description: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse a description from a JSON string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_json::from_str(content).map_err(|e| ChopError::Parse {
            message: format!("Invalid sheet description: {}", e),
            help: Some(
                "Expected filename, columns, rows, outline_px_size, padding_px_size and pokemon"
                    .to_string(),
            ),
        })
    }

    /// Number of entries that produce a sprite.
    pub fn emit_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, SpriteEntry::Emit { .. }))
            .count()
    }
}
