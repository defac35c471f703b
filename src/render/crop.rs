//! Sprite cropping.
//!
//! Copies a rectangle of pixels out of a sheet verbatim: no resampling and
//! no colour conversion beyond the sheet's own RGBA decoding.

use image::RgbaImage;
use thiserror::Error;

use crate::types::SourceRect;

/// Why a sprite region could not be cropped.
///
/// These are per-sprite conditions; callers report them and move on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CropError {
    #[error("bounds {x},{y} {width}x{height} outside {image_width}x{image_height} image")]
    OutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
        image_width: u32,
        image_height: u32,
    },

    #[error("empty {width}x{height} region")]
    Empty { width: u32, height: u32 },
}

/// Copy `rect` out of `sheet` into a new image.
pub fn crop(sheet: &RgbaImage, rect: &SourceRect) -> Result<RgbaImage, CropError> {
    if rect.is_empty() {
        return Err(CropError::Empty {
            width: rect.width,
            height: rect.height,
        });
    }

    if !rect.fits_within(sheet.width(), sheet.height()) {
        return Err(CropError::OutOfBounds {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            image_width: sheet.width(),
            image_height: sheet.height(),
        });
    }

    Ok(image::imageops::crop_imm(
        sheet,
        rect.x as u32,
        rect.y as u32,
        rect.width,
        rect.height,
    )
    .to_image())
}
