//! PNG input and output.
//!
//! Sheets are decoded to RGBA once; every sprite is written back as PNG
//! whatever the destination's extension.

use std::path::Path;

use image::{ImageError, ImageFormat, RgbaImage};

use crate::error::{ChopError, Result};

/// Open and decode a spritesheet.
///
/// Missing or unreadable files are IO errors; anything the decoder rejects
/// is an image error.
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let img = image::open(path).map_err(|e| match e {
        ImageError::IoError(io) => ChopError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to open image: {}", io),
        },
        other => ChopError::Image {
            path: path.to_path_buf(),
            message: format!("Failed to decode image: {}", other),
        },
    })?;

    Ok(img.to_rgba8())
}

/// Write a sprite to a PNG file, replacing any existing file.
pub fn write_png(sprite: &RgbaImage, path: &Path) -> Result<()> {
    sprite
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| ChopError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })?;

    Ok(())
}
