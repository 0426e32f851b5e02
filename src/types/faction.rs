//! Faction palettes.
//!
//! A faction contributes exactly one thing to the pipeline: the base
//! colour that unit and building sprites are blended toward.

use super::Colour;

/// Blend intensity used for all faction-tinted sprite variants.
pub const TINT_INTENSITY: f32 = 0.35;

/// A named team palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Faction {
    /// Faction name (used as the output subdirectory).
    pub name: &'static str,

    /// Base colour used as the tint target.
    pub colour: Colour,
}

impl Faction {
    pub const CONTINUITY: Self = Self {
        name: "continuity",
        colour: Colour::rgb(51, 102, 204),
    };

    pub const COLLEGIUM: Self = Self {
        name: "collegium",
        colour: Colour::rgb(204, 153, 51),
    };

    /// All factions, in output order.
    pub fn all() -> [Faction; 2] {
        [Self::CONTINUITY, Self::COLLEGIUM]
    }

    /// Look up a faction by name.
    pub fn get(name: &str) -> Option<Faction> {
        Self::all().into_iter().find(|f| f.name == name)
    }
}
