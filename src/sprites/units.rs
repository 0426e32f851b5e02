//! Unit sprites: infantry, ranger, harvester.
//!
//! Coordinates are integer fractions of `size`, so each routine scales
//! proportionally. Shapes are layered back to front; later draws
//! overwrite earlier ones.

use crate::render::Painter;
use crate::types::{Canvas, Colour};

/// Soldier sprite - humanoid with rifle.
pub fn infantry(size: u32) -> Canvas {
    let s = size as i32;
    let mut canvas = Canvas::new(size as usize, size as usize);
    let mut p = Painter::new(&mut canvas);

    let cx = s / 2;
    let cy = s / 2;

    // Head
    let head_r = s / 8;
    p.fill_ellipse(cx - head_r, 4, cx + head_r, 4 + head_r * 2, Colour::rgb(200, 200, 200));

    // Torso
    let body_top = 4 + head_r * 2;
    let body_bottom = cy + s / 4;
    p.fill_rect(cx - s / 6, body_top, cx + s / 6, body_bottom, Colour::rgb(100, 100, 100));

    // Legs
    let leg_w = s / 10;
    p.fill_rect(cx - s / 5, body_bottom, cx - s / 5 + leg_w, s - 4, Colour::rgb(80, 80, 80));
    p.fill_rect(cx + s / 5 - leg_w, body_bottom, cx + s / 5, s - 4, Colour::rgb(80, 80, 80));

    // Arms
    p.fill_rect(cx - s / 4, body_top + 2, cx - s / 6, body_bottom - 4, Colour::rgb(100, 100, 100));
    p.fill_rect(cx + s / 6, body_top + 2, cx + s / 4, body_bottom - 4, Colour::rgb(100, 100, 100));

    // Rifle, angled up from the hands
    p.line(cx + s / 4, body_top + 4, cx + s / 3 + 4, body_top - 4, Colour::rgb(60, 60, 60), 2);

    canvas
}

/// Ranger sprite - hooded, cloaked, with a long sniper rifle.
pub fn ranger(size: u32) -> Canvas {
    let s = size as i32;
    let mut canvas = Canvas::new(size as usize, size as usize);
    let mut p = Painter::new(&mut canvas);

    let cx = s / 2;

    // Hood behind the face
    let head_r = s / 10;
    p.fill_ellipse(cx - head_r - 1, 2, cx + head_r + 1, 2 + head_r * 2 + 2, Colour::rgb(60, 80, 60));
    p.fill_ellipse(cx - head_r, 3, cx + head_r, 3 + head_r * 2, Colour::rgb(180, 160, 140));

    // Triangular cloak
    let body_top = 3 + head_r * 2;
    p.fill_polygon(
        &[(cx, body_top), (cx - s / 4, s - 6), (cx + s / 4, s - 6)],
        Colour::rgb(50, 70, 50),
    );

    // Long rifle reaching past the top edge
    p.line(cx - 2, body_top + 4, cx + s / 2 - 2, 0, Colour::rgb(40, 40, 40), 3);

    // Scope glint
    p.fill_ellipse(cx + s / 4 - 1, 2, cx + s / 4 + 2, 5, Colour::rgb(100, 200, 255));

    canvas
}

/// Harvester sprite - boxy worker vehicle with cab, scoop, and tracks.
pub fn harvester(size: u32) -> Canvas {
    let s = size as i32;
    let mut canvas = Canvas::new(size as usize, size as usize);
    let mut p = Painter::new(&mut canvas);

    let margin = 4;
    let cx = s / 2;

    // Hull
    p.fill_rect(margin, s / 3, s - margin, s - 6, Colour::rgb(180, 140, 60));

    // Cab with window
    let cab_w = s / 3;
    p.fill_rect(cx - cab_w / 2, 6, cx + cab_w / 2, s / 3 + 2, Colour::rgb(160, 120, 40));
    p.fill_rect(cx - cab_w / 4, 8, cx + cab_w / 4, s / 4, Colour::rgb(100, 180, 220));

    // Front scoop
    p.fill_polygon(
        &[
            (2, s - 8),
            (margin, s / 2),
            (margin + s / 4, s / 2),
            (margin + s / 4 + 2, s - 8),
        ],
        Colour::rgb(120, 100, 40),
    );

    // Tracks
    let track_y = s - 5;
    p.fill_ellipse(margin, track_y - 3, margin + 8, track_y + 3, Colour::rgb(40, 40, 40));
    p.fill_ellipse(s - margin - 8, track_y - 3, s - margin, track_y + 3, Colour::rgb(40, 40, 40));

    // Cargo indicator lines across the hull
    for i in 0..3 {
        let y = s / 2 + 4 + i * 4;
        p.line(margin + 4, y, s - margin - 4, y, Colour::rgb(140, 100, 40), 1);
    }

    canvas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infantry_dimensions() {
        let canvas = infantry(32);
        assert_eq!(canvas.size(), (32, 32));
    }

    #[test]
    fn test_infantry_head_and_torso() {
        let canvas = infantry(32);
        // Head centre
        assert_eq!(canvas.get(16, 8), Some(Colour::rgb(200, 200, 200)));
        // Torso centre
        assert_eq!(canvas.get(16, 16), Some(Colour::rgb(100, 100, 100)));
        // Top corners stay transparent
        assert_eq!(canvas.get(0, 0), Some(Colour::TRANSPARENT));
        assert_eq!(canvas.get(31, 31), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_ranger_cloak() {
        let canvas = ranger(32);
        assert_eq!(canvas.size(), (32, 32));
        // Inside the cloak triangle, below the rifle
        assert_eq!(canvas.get(16, 22), Some(Colour::rgb(50, 70, 50)));
        assert_eq!(canvas.get(0, 31), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_harvester_hull_and_window() {
        let canvas = harvester(36);
        assert_eq!(canvas.size(), (36, 36));
        // Window sits over the cab
        assert_eq!(canvas.get(18, 8), Some(Colour::rgb(100, 180, 220)));
        assert_eq!(canvas.get(0, 0), Some(Colour::TRANSPARENT));
    }
}
