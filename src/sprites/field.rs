//! Neutral field sprites: resource nodes and terrain obstacles.
//!
//! The two resource nodes are deliberately separate routines rather than
//! one function with a flag: they share no drawing code.

use crate::render::Painter;
use crate::types::{Canvas, Colour};

/// Temporary resource node - a pile of ore chunks with metallic glints.
pub fn resource_temp(size: u32) -> Canvas {
    let s = size as i32;
    let mut canvas = Canvas::new(size as usize, size as usize);
    let mut p = Painter::new(&mut canvas);

    let cx = s / 2;
    let cy = s / 2;
    let chunk_colour = Colour::rgb(220, 180, 60);

    // Base pile
    p.fill_ellipse(4, s / 2, s - 4, s - 4, Colour::rgb(180, 140, 40));

    // Individual chunks heaped on top
    for i in 0..5 {
        let ox = 8 + (i % 3) * 10 + (i / 3) * 5;
        let oy = s / 3 + (i % 2) * 8;
        let chunk = 8 + (i % 3) * 2;
        p.fill_ellipse(ox, oy, ox + chunk, oy + chunk, chunk_colour);
    }

    // Metallic glints
    p.fill_ellipse(cx - 2, cy - 4, cx + 2, cy, Colour::rgb(255, 240, 180));
    p.fill_ellipse(cx + 6, cy + 2, cx + 9, cy + 5, Colour::rgb(255, 230, 160));

    canvas
}

/// Permanent resource node - a crystalline deposit with a soft glow.
pub fn resource_perm(size: u32) -> Canvas {
    let s = size as i32;
    let mut canvas = Canvas::new(size as usize, size as usize);
    let mut p = Painter::new(&mut canvas);

    let cx = s / 2;
    let cy = s / 2;

    // Central crystal
    p.fill_polygon(
        &[
            (cx, 4),
            (cx + 10, cy - 4),
            (cx + 8, s - 8),
            (cx - 8, s - 8),
            (cx - 10, cy - 4),
        ],
        Colour::rgb(60, 200, 100),
    );

    // Side shards
    p.fill_polygon(&[(6, cy), (14, 8), (16, cy + 6)], Colour::rgb(80, 220, 120));
    p.fill_polygon(
        &[(s - 6, cy), (s - 14, 10), (s - 16, cy + 4)],
        Colour::rgb(50, 180, 90),
    );

    // Translucent glow over the crystal face
    p.fill_ellipse(cx - 6, cy - 2, cx + 6, cy + 8, Colour::new(100, 255, 150, 100));

    canvas
}

/// Terrain obstacle sprite - a rock formation.
///
/// The canvas is `size` wide but a fixed 60 pixels tall; the rock shapes
/// themselves are literal coordinates in that frame.
pub fn terrain(size: u32) -> Canvas {
    let mut canvas = Canvas::new(size as usize, 60);
    let mut p = Painter::new(&mut canvas);

    // Main formation
    p.fill_polygon(
        &[
            (10, 55),
            (5, 35),
            (15, 15),
            (35, 8),
            (55, 12),
            (70, 20),
            (75, 40),
            (70, 55),
        ],
        Colour::rgb(100, 95, 85),
    );

    // Highlighted face
    p.fill_polygon(
        &[(20, 45), (18, 30), (30, 18), (45, 20), (48, 35)],
        Colour::rgb(120, 115, 105),
    );

    // Shadowed face
    p.fill_polygon(
        &[(50, 50), (55, 25), (68, 30), (70, 50)],
        Colour::rgb(80, 75, 65),
    );

    canvas
}
