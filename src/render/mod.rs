//! Rendering module for chop.
//!
//! Copies sprite regions out of a decoded sheet, writes them as PNG files,
//! and renders position tables.

mod crop;
mod png;
mod positions;

pub use crop::{crop, CropError};
pub use png::{load_image, write_png};
pub use positions::{render_json, render_typescript, write_positions, PositionFormat};
