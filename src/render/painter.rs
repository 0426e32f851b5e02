//! Drawing primitives over a canvas.
//!
//! The painter borrows a canvas mutably and layers filled shapes onto it
//! in call order (later calls overwrite earlier pixels). Coordinates are
//! inclusive bounding boxes, so `fill_rect(0, 0, 3, 3, ..)` covers a 4x4
//! block. Everything clips silently at the canvas edges.

use crate::types::{Canvas, Colour};

/// Painter over a mutably borrowed canvas.
pub struct Painter<'a> {
    canvas: &'a mut Canvas,
}

impl<'a> Painter<'a> {
    /// Create a painter over a canvas.
    pub fn new(canvas: &'a mut Canvas) -> Self {
        Self { canvas }
    }

    /// Fill an axis-aligned rectangle given by inclusive corners.
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, colour: Colour) {
        let (x0, x1) = ordered(x0, x1);
        let (y0, y1) = ordered(y0, y1);

        for y in y0..=y1 {
            for x in x0..=x1 {
                self.put(x, y, colour);
            }
        }
    }

    /// Fill the ellipse inscribed in an inclusive bounding box.
    pub fn fill_ellipse(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, colour: Colour) {
        let (x0, x1) = ordered(x0, x1);
        let (y0, y1) = ordered(y0, y1);

        let cx = (x0 + x1) as f32 * 0.5;
        let cy = (y0 + y1) as f32 * 0.5;
        // Degenerate boxes still cover their single row/column.
        let rx = ((x1 - x0) as f32 * 0.5).max(0.5);
        let ry = ((y1 - y0) as f32 * 0.5).max(0.5);

        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = (x as f32 - cx) / rx;
                let dy = (y as f32 - cy) / ry;
                if dx * dx + dy * dy <= 1.0 {
                    self.put(x, y, colour);
                }
            }
        }
    }

    /// Fill a closed polygon (even-odd scanline rule) and stroke its
    /// outline so single-pixel apexes are not lost between scanlines.
    pub fn fill_polygon(&mut self, points: &[(i32, i32)], colour: Colour) {
        if points.len() < 3 {
            return;
        }

        let min_y = points.iter().map(|p| p.1).min().unwrap_or(0);
        let max_y = points.iter().map(|p| p.1).max().unwrap_or(0);

        for y in min_y..=max_y {
            let mut crossings: Vec<f32> = Vec::new();

            for i in 0..points.len() {
                let (ax, ay) = points[i];
                let (bx, by) = points[(i + 1) % points.len()];
                if ay == by {
                    continue;
                }
                let (lo, hi) = ordered(ay, by);
                // Half-open rule: a vertex counts for the edge below it only.
                if y >= lo && y < hi {
                    let t = (y - ay) as f32 / (by - ay) as f32;
                    crossings.push(ax as f32 + t * (bx - ax) as f32);
                }
            }

            crossings.sort_by(f32::total_cmp);

            for pair in crossings.chunks(2) {
                if let [start, end] = pair {
                    let start = start.round() as i32;
                    let end = end.round() as i32;
                    for x in start..=end {
                        self.put(x, y, colour);
                    }
                }
            }
        }

        for i in 0..points.len() {
            let (ax, ay) = points[i];
            let (bx, by) = points[(i + 1) % points.len()];
            self.line(ax, ay, bx, by, colour, 1);
        }
    }

    /// Draw a straight line with the given pen width (Bresenham walk,
    /// stamping a square pen at each step).
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, colour: Colour, width: u32) {
        let mut x = x0;
        let mut y = y0;
        let dx = (x1 - x0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 - y0).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.stamp(x, y, colour, width);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Draw an elliptical arc inscribed in an inclusive bounding box.
    ///
    /// Angles are in degrees, measured clockwise from three o'clock
    /// (y-axis points down), so 180..360 is the top half of the box.
    pub fn arc(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        start_deg: f32,
        end_deg: f32,
        colour: Colour,
        width: u32,
    ) {
        let (x0, x1) = ordered(x0, x1);
        let (y0, y1) = ordered(y0, y1);

        let cx = (x0 + x1) as f32 * 0.5;
        let cy = (y0 + y1) as f32 * 0.5;
        let rx = (x1 - x0) as f32 * 0.5;
        let ry = (y1 - y0) as f32 * 0.5;

        // Half-degree sampling keeps consecutive stamps touching at the
        // radii this tool draws at.
        let steps = ((end_deg - start_deg).abs() * 2.0).ceil().max(1.0) as u32;

        for i in 0..=steps {
            let t = start_deg + (end_deg - start_deg) * (i as f32 / steps as f32);
            let rad = t.to_radians();
            let x = (cx + rx * rad.cos()).round() as i32;
            let y = (cy + ry * rad.sin()).round() as i32;
            self.stamp(x, y, colour, width);
        }
    }

    /// Stamp a square pen of the given width centred near (x, y).
    fn stamp(&mut self, x: i32, y: i32, colour: Colour, width: u32) {
        let width = width.max(1) as i32;
        let offset = width / 2;
        for dy in -offset..(width - offset) {
            for dx in -offset..(width - offset) {
                self.put(x + dx, y + dy, colour);
            }
        }
    }

    /// Clipped single-pixel write.
    fn put(&mut self, x: i32, y: i32, colour: Colour) {
        if x >= 0 && y >= 0 {
            self.canvas.put(x as usize, y as usize, colour);
        }
    }
}

fn ordered(a: i32, b: i32) -> (i32, i32) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}
