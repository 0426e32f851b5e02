//! PNG output for canvases.
//!
//! Converts a canvas to a PNG file with optional integer scaling.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{Result, SpriteError};
use crate::types::Canvas;

/// Write a canvas to a PNG file.
///
/// # Arguments
///
/// * `canvas` - The canvas to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling)
pub fn write_png(canvas: &Canvas, path: &Path, scale: u32) -> Result<()> {
    let scale = scale.max(1); // Minimum scale of 1

    let width = canvas.width() as u32 * scale;
    let height = canvas.height() as u32 * scale;

    let mut img: RgbaImage = ImageBuffer::new(width, height);

    for (y, row) in canvas.pixels().iter().enumerate() {
        for (x, colour) in row.iter().enumerate() {
            let rgba = Rgba(colour.to_rgba());

            // Nearest-neighbour fill keeps pixel art crisp
            for sy in 0..scale {
                for sx in 0..scale {
                    let px = x as u32 * scale + sx;
                    let py = y as u32 * scale + sy;
                    img.put_pixel(px, py, rgba);
                }
            }
        }
    }

    img.save(path).map_err(|e| SpriteError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}
