//! Faction tinting - per-pixel blend toward a faction base colour.

use crate::types::{Canvas, Colour};

/// Blend every visible pixel of a canvas toward a faction colour.
///
/// Each RGB channel of a pixel with alpha > 0 becomes
/// `channel * (1 - intensity) + target * intensity`, truncated toward
/// zero. Truncation (not rounding) matches the shipped game assets
/// exactly. Alpha is never changed, fully transparent pixels are copied
/// untouched, and the input canvas is not mutated.
///
/// Intensity is normally in [0, 1]; values outside that range
/// extrapolate the blend rather than fail.
///
/// Tinting composes rather than being idempotent: tinting twice at 0.35
/// lands closer to the target than tinting once.
pub fn apply_faction_tint(canvas: &Canvas, target: Colour, intensity: f32) -> Canvas {
    let mut result = canvas.clone();

    for y in 0..canvas.height() {
        for x in 0..canvas.width() {
            let Some(pixel) = canvas.get(x, y) else { continue };
            if pixel.a == 0 {
                continue;
            }
            result.put(
                x,
                y,
                Colour::new(
                    blend(pixel.r, target.r, intensity),
                    blend(pixel.g, target.g, intensity),
                    blend(pixel.b, target.b, intensity),
                    pixel.a,
                ),
            );
        }
    }

    result
}

/// Single-channel blend with truncation toward zero.
fn blend(channel: u8, target: u8, intensity: f32) -> u8 {
    (channel as f32 * (1.0 - intensity) + target as f32 * intensity) as u8
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::types::Faction;

    fn sample_canvas() -> Canvas {
        let mut canvas = Canvas::new(3, 1);
        canvas.put(0, 0, Colour::rgb(100, 100, 100));
        canvas.put(1, 0, Colour::new(200, 50, 0, 128));
        // (2, 0) stays transparent
        canvas
    }

    #[test]
    fn test_intensity_zero_is_identity() {
        let canvas = sample_canvas();
        let tinted = apply_faction_tint(&canvas, Faction::CONTINUITY.colour, 0.0);
        assert_eq!(tinted, canvas);
    }

    #[test]
    fn test_intensity_one_hits_target_exactly() {
        let canvas = sample_canvas();
        let target = Faction::COLLEGIUM.colour;
        let tinted = apply_faction_tint(&canvas, target, 1.0);

        for x in 0..2 {
            let pixel = tinted.get(x, 0).unwrap();
            assert_eq!((pixel.r, pixel.g, pixel.b), (target.r, target.g, target.b));
        }
    }

    #[test]
    fn test_alpha_preserved_exactly() {
        let canvas = sample_canvas();
        let tinted = apply_faction_tint(&canvas, Faction::CONTINUITY.colour, 0.35);

        assert_eq!(tinted.get(0, 0).unwrap().a, 255);
        assert_eq!(tinted.get(1, 0).unwrap().a, 128);
    }

    #[test]
    fn test_transparent_pixels_untouched() {
        let canvas = sample_canvas();
        let tinted = apply_faction_tint(&canvas, Faction::CONTINUITY.colour, 0.35);
        assert_eq!(tinted.get(2, 0), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_input_not_mutated() {
        let canvas = sample_canvas();
        let before = canvas.clone();
        let _ = apply_faction_tint(&canvas, Faction::CONTINUITY.colour, 0.35);
        assert_eq!(canvas, before);
    }

    #[test]
    fn test_blend_truncates_toward_zero() {
        // 100 * 0.65 + 51 * 0.35 = 82.85, truncated to 82 (not 83)
        assert_eq!(blend(100, 51, 0.35), 82);
    }

    #[test]
    fn test_not_idempotent() {
        // Tinting composes: two passes at 0.35 move further toward the
        // target than one pass. This is intentional; callers must tint
        // the base sprite, never an already-tinted one.
        let canvas = sample_canvas();
        let target = Colour::rgb(51, 102, 204);

        let once = apply_faction_tint(&canvas, target, 0.35);
        let twice = apply_faction_tint(&once, target, 0.35);

        assert_ne!(once, twice);
        // 100 -> 82 after one pass, 71 after two
        assert_eq!(once.get(0, 0).unwrap().r, 82);
        assert_eq!(twice.get(0, 0).unwrap().r, 71);
    }
}
