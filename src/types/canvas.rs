//! Canvas - an owned grid of RGBA pixels.
//!
//! Every sprite generator draws into a canvas and returns it; after that
//! the canvas is treated as immutable. Access is bounds-checked, and the
//! drawing primitives clip silently at the edges.

use super::Colour;

/// A mutable pixel grid, initialised fully transparent.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    /// Pixel grid (row-major: pixels[y][x]).
    pixels: Vec<Vec<Colour>>,

    /// Width in pixels.
    width: usize,

    /// Height in pixels.
    height: usize,
}

impl Canvas {
    /// Create a new transparent canvas.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![vec![Colour::TRANSPARENT; width]; height],
            width,
            height,
        }
    }

    /// Get the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: usize, y: usize) -> Option<Colour> {
        self.pixels.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Overwrite a pixel at the given position.
    ///
    /// Out-of-range positions are ignored; primitives rely on this for
    /// edge clipping. The pixel is replaced, alpha included - there is
    /// no compositing.
    pub fn put(&mut self, x: usize, y: usize, colour: Colour) {
        if let Some(row) = self.pixels.get_mut(y) {
            if let Some(pixel) = row.get_mut(x) {
                *pixel = colour;
            }
        }
    }

    /// Get a reference to the pixel grid.
    pub fn pixels(&self) -> &[Vec<Colour>] {
        &self.pixels
    }

    /// Convert to a flat RGBA buffer (for image output).
    pub fn to_rgba_buffer(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.width * self.height * 4);
        for row in &self.pixels {
            for colour in row {
                buffer.extend_from_slice(&colour.to_rgba());
            }
        }
        buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_transparent() {
        let canvas = Canvas::new(4, 3);
        assert_eq!(canvas.width(), 4);
        assert_eq!(canvas.height(), 3);
        assert_eq!(canvas.size(), (4, 3));

        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(canvas.get(x, y), Some(Colour::TRANSPARENT));
            }
        }
    }

    #[test]
    fn test_put_and_get() {
        let mut canvas = Canvas::new(2, 2);
        canvas.put(1, 0, Colour::rgb(255, 0, 0));

        assert_eq!(canvas.get(1, 0), Some(Colour::rgb(255, 0, 0)));
        assert_eq!(canvas.get(0, 0), Some(Colour::TRANSPARENT));
        assert_eq!(canvas.get(5, 5), None);
    }

    #[test]
    fn test_put_out_of_range_ignored() {
        let mut canvas = Canvas::new(2, 2);
        canvas.put(10, 10, Colour::rgb(0, 255, 0));
        assert_eq!(canvas, Canvas::new(2, 2));
    }

    #[test]
    fn test_put_overwrites_alpha() {
        let mut canvas = Canvas::new(1, 1);
        canvas.put(0, 0, Colour::rgb(10, 20, 30));
        canvas.put(0, 0, Colour::new(1, 2, 3, 100));
        assert_eq!(canvas.get(0, 0), Some(Colour::new(1, 2, 3, 100)));
    }

    #[test]
    fn test_to_rgba_buffer() {
        let mut canvas = Canvas::new(2, 1);
        canvas.put(0, 0, Colour::rgb(255, 0, 0));
        canvas.put(1, 0, Colour::rgb(0, 255, 0));

        let buffer = canvas.to_rgba_buffer();
        assert_eq!(buffer.len(), 8); // 2 pixels * 4 bytes
        assert_eq!(&buffer[0..4], &[255, 0, 0, 255]);
        assert_eq!(&buffer[4..8], &[0, 255, 0, 255]);
    }
}
