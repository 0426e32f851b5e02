//! Building sprites: depot, barracks, supply depot, tech lab, turret.

use crate::render::Painter;
use crate::types::{Canvas, Colour};

/// Main depot sprite - the faction's central base building.
pub fn depot(size: u32) -> Canvas {
    let s = size as i32;
    let mut canvas = Canvas::new(size as usize, size as usize);
    let mut p = Painter::new(&mut canvas);

    let margin = 4;
    let cx = s / 2;

    // Main structure
    p.fill_rect(margin, s / 4, s - margin, s - margin, Colour::rgb(100, 110, 130));

    // Peaked roof
    p.fill_polygon(
        &[(margin, s / 4), (s / 2, margin), (s - margin, s / 4)],
        Colour::rgb(70, 80, 100),
    );

    // Window grid
    let win = 6;
    for row in 0..2 {
        for col in 0..4 {
            let wx = margin + 8 + col * 12;
            let wy = s / 4 + 8 + row * 14;
            p.fill_rect(wx, wy, wx + win, wy + win, Colour::rgb(80, 160, 200));
        }
    }

    // Door
    let door_w = 12;
    let door_h = 16;
    p.fill_rect(
        cx - door_w / 2,
        s - margin - door_h,
        cx + door_w / 2,
        s - margin,
        Colour::rgb(60, 50, 40),
    );

    // Comm tower with beacon
    p.line(s - margin - 8, margin + 4, s - margin - 8, s / 4, Colour::rgb(80, 80, 80), 2);
    p.fill_ellipse(s - margin - 11, margin + 1, s - margin - 5, margin + 7, Colour::rgb(255, 100, 100));

    canvas
}

/// Barracks sprite - flat-roofed military building with a star emblem.
pub fn barracks(size: u32) -> Canvas {
    let s = size as i32;
    let mut canvas = Canvas::new(size as usize, size as usize);
    let mut p = Painter::new(&mut canvas);

    let margin = 3;
    let cx = s / 2;

    // Main building with a reinforced flat roof
    p.fill_rect(margin, s / 5, s - margin, s - margin, Colour::rgb(90, 85, 80));
    p.fill_rect(margin - 1, s / 5 - 3, s - margin + 1, s / 5 + 2, Colour::rgb(70, 65, 60));

    // Bunker-style window slits
    for i in 0..3 {
        let wx = margin + 8 + i * 12;
        p.fill_rect(wx, s / 3, wx + 8, s / 3 + 4, Colour::rgb(40, 60, 80));
    }

    // Hangar door with a centre seam
    let door_w = 20;
    p.fill_rect(cx - door_w / 2, s / 2, cx + door_w / 2, s - margin, Colour::rgb(50, 50, 50));
    p.line(cx, s / 2, cx, s - margin, Colour::rgb(40, 40, 40), 1);

    // Star emblem
    let star_cx = s - margin - 10;
    let star_cy = s / 3 + 8;
    p.fill_polygon(
        &[
            (star_cx, star_cy - 5),
            (star_cx + 2, star_cy - 1),
            (star_cx + 5, star_cy),
            (star_cx + 2, star_cy + 1),
            (star_cx, star_cy + 5),
            (star_cx - 2, star_cy + 1),
            (star_cx - 5, star_cy),
            (star_cx - 2, star_cy - 1),
        ],
        Colour::rgb(180, 50, 50),
    );

    canvas
}

/// Supply depot sprite - a warehouse with crates behind the cargo door.
pub fn supply_depot(size: u32) -> Canvas {
    let s = size as i32;
    let mut canvas = Canvas::new(size as usize, size as usize);
    let mut p = Painter::new(&mut canvas);

    let margin = 2;

    p.fill_rect(margin, s / 3, s - margin, s - margin, Colour::rgb(140, 130, 110));

    // Peaked roof
    p.fill_polygon(
        &[(margin, s / 3), (s / 2, margin + 2), (s - margin, s / 3)],
        Colour::rgb(120, 80, 60),
    );

    // Cargo door
    p.fill_rect(4, s / 2, s - 4, s - margin, Colour::rgb(100, 90, 70));

    // Crates visible through the door
    p.fill_rect(6, s / 2 + 4, 12, s - 4, Colour::rgb(180, 140, 80));
    p.fill_rect(14, s / 2 + 6, 20, s - 4, Colour::rgb(160, 120, 60));
    p.fill_rect(22, s / 2 + 4, 28, s - 4, Colour::rgb(170, 130, 70));

    canvas
}

/// Tech lab sprite - domed research building with glowing details.
pub fn tech_lab(size: u32) -> Canvas {
    let s = size as i32;
    let mut canvas = Canvas::new(size as usize, size as usize);
    let mut p = Painter::new(&mut canvas);

    let margin = 3;
    let cx = s / 2;

    p.fill_rect(margin, s / 4, s - margin, s - margin, Colour::rgb(80, 70, 120));

    // Dome
    p.fill_ellipse(cx - s / 4, margin, cx + s / 4, s / 3, Colour::rgb(100, 90, 150));

    // Glowing porthole windows
    for i in 0..2 {
        for j in 0..2 {
            let wx = margin + 6 + i * 16;
            let wy = s / 3 + 4 + j * 10;
            p.fill_ellipse(wx, wy, wx + 8, wy + 6, Colour::rgb(100, 200, 255));
        }
    }

    // Energy core
    p.fill_ellipse(cx - 4, s / 5, cx + 4, s / 5 + 8, Colour::rgb(150, 100, 255));

    // Satellite dish
    p.arc(
        s - margin - 12,
        margin,
        s - margin,
        margin + 10,
        180.0,
        360.0,
        Colour::rgb(150, 150, 150),
        2,
    );
    p.line(s - margin - 6, margin + 5, s - margin - 6, margin + 12, Colour::rgb(100, 100, 100), 1);

    canvas
}

/// Defensive turret sprite - platform, column, head, and barrel.
pub fn turret(size: u32) -> Canvas {
    let s = size as i32;
    let mut canvas = Canvas::new(size as usize, size as usize);
    let mut p = Painter::new(&mut canvas);

    let cx = s / 2;
    let cy = s / 2;

    // Platform
    let base_r = s / 3;
    p.fill_ellipse(cx - base_r, s - 8, cx + base_r, s - 2, Colour::rgb(80, 80, 80));

    // Support column
    let col_w = 4;
    p.fill_rect(cx - col_w, cy, cx + col_w, s - 6, Colour::rgb(100, 100, 100));

    // Rotating head
    let head_r = s / 4;
    p.fill_ellipse(cx - head_r, cy - head_r + 2, cx + head_r, cy + head_r + 2, Colour::rgb(120, 120, 120));

    // Barrel and muzzle glow
    p.fill_rect(cx - 2, 2, cx + 2, cy, Colour::rgb(60, 60, 60));
    p.fill_ellipse(cx - 3, 0, cx + 3, 5, Colour::new(255, 200, 100, 200));

    canvas
}
