//! chop - Spritesheet chopper
//!
//! A library for cutting a composite spritesheet into one image per sprite,
//! driven either by a JSON grid description or by a stylesheet of
//! positional rules.

pub mod cli;
pub mod error;
pub mod extract;
pub mod layout;
pub mod manifest;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;

pub use error::{ChopError, Result};
pub use extract::{ExtractReport, InputKind};
pub use layout::{plan, AxisMode, GridCursor, GridLayout, Placement};
pub use manifest::Manifest;
pub use parser::{extract_positions, parse_rule_line, parse_stylesheet, StyleRule};
pub use render::{crop, load_image, write_png, CropError, PositionFormat};
pub use types::{
    PositionTable, ResolvedIdentity, SheetDescription, SourceRect, SpriteEntry, SpritePosition,
};
