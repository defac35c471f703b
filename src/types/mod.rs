//! Core domain types for chop.
//!
//! This module contains the types shared by both extraction modes:
//! - `SheetDescription` / `SpriteEntry` - grid-mode input
//! - `ResolvedIdentity` - the naming key for one output sprite
//! - `SourceRect` - a pixel region within the sheet
//! - `PositionTable` - per-sprite positions in discovery order

mod identity;
mod position;
mod rect;
mod sheet;

pub use identity::ResolvedIdentity;
pub use position::{PositionTable, SpritePosition};
pub use rect::SourceRect;
pub use sheet::{SheetDescription, SpriteEntry};
