//! The sprite catalog.
//!
//! Eleven named generators with their documented default sizes. Each
//! generator is a pure function from size to canvas; the catalog is the
//! single source of truth for names, sizes, and which sprites receive
//! faction tints.

mod buildings;
mod field;
mod units;

pub use buildings::{barracks, depot, supply_depot, tech_lab, turret};
pub use field::{resource_perm, resource_temp, terrain};
pub use units::{harvester, infantry, ranger};

use serde::Serialize;

use crate::types::Canvas;

/// A sprite generator function.
pub type GeneratorFn = fn(u32) -> Canvas;

/// The kind of game object a sprite depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpriteKind {
    Unit,
    Building,
    Resource,
    Terrain,
}

impl SpriteKind {
    /// Human-readable kind name.
    pub fn name(self) -> &'static str {
        match self {
            SpriteKind::Unit => "unit",
            SpriteKind::Building => "building",
            SpriteKind::Resource => "resource",
            SpriteKind::Terrain => "terrain",
        }
    }
}

/// One entry in the sprite catalog.
#[derive(Clone, Copy)]
pub struct SpriteEntry {
    /// Sprite name (used as the output file stem).
    pub name: &'static str,

    /// What the sprite depicts.
    pub kind: SpriteKind,

    /// Default generation size in pixels.
    pub size: u32,

    generator: GeneratorFn,
}

impl SpriteEntry {
    /// Render the sprite at its catalog size.
    pub fn render(&self) -> Canvas {
        (self.generator)(self.size)
    }

    /// Whether this sprite gets per-faction tinted variants.
    ///
    /// Units and buildings are faction-owned; resource nodes and terrain
    /// stay neutral.
    pub fn tintable(&self) -> bool {
        matches!(self.kind, SpriteKind::Unit | SpriteKind::Building)
    }

    /// Output dimensions in pixels. Terrain canvases have a fixed height.
    pub fn dimensions(&self) -> (u32, u32) {
        match self.kind {
            SpriteKind::Terrain => (self.size, 60),
            _ => (self.size, self.size),
        }
    }
}

/// The fixed base sprite set, in output order.
pub static CATALOG: [SpriteEntry; 11] = [
    SpriteEntry { name: "infantry", kind: SpriteKind::Unit, size: 32, generator: infantry },
    SpriteEntry { name: "ranger", kind: SpriteKind::Unit, size: 32, generator: ranger },
    SpriteEntry { name: "harvester", kind: SpriteKind::Unit, size: 36, generator: harvester },
    SpriteEntry { name: "depot", kind: SpriteKind::Building, size: 64, generator: depot },
    SpriteEntry { name: "barracks", kind: SpriteKind::Building, size: 48, generator: barracks },
    SpriteEntry { name: "supply_depot", kind: SpriteKind::Building, size: 32, generator: supply_depot },
    SpriteEntry { name: "tech_lab", kind: SpriteKind::Building, size: 40, generator: tech_lab },
    SpriteEntry { name: "turret", kind: SpriteKind::Building, size: 24, generator: turret },
    SpriteEntry { name: "resource_temp", kind: SpriteKind::Resource, size: 40, generator: resource_temp },
    SpriteEntry { name: "resource_perm", kind: SpriteKind::Resource, size: 40, generator: resource_perm },
    SpriteEntry { name: "terrain", kind: SpriteKind::Terrain, size: 80, generator: terrain },
];

/// Look up a catalog entry by name.
pub fn find_sprite(name: &str) -> Option<&'static SpriteEntry> {
    CATALOG.iter().find(|e| e.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_has_eleven_entries() {
        assert_eq!(CATALOG.len(), 11);
    }

    #[test]
    fn test_catalog_names_unique() {
        for (i, a) in CATALOG.iter().enumerate() {
            for b in &CATALOG[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn test_every_sprite_matches_declared_dimensions() {
        for entry in &CATALOG {
            let canvas = entry.render();
            let (w, h) = entry.dimensions();
            assert_eq!(
                canvas.size(),
                (w as usize, h as usize),
                "dimensions mismatch for {}",
                entry.name
            );
        }
    }

    #[test]
    fn test_every_sprite_has_opaque_and_transparent_pixels() {
        for entry in &CATALOG {
            let canvas = entry.render();
            let mut opaque = 0usize;
            let mut transparent = 0usize;
            for row in canvas.pixels() {
                for pixel in row {
                    if pixel.is_transparent() {
                        transparent += 1;
                    } else {
                        opaque += 1;
                    }
                }
            }
            assert!(opaque > 0, "{} drew nothing", entry.name);
            assert!(transparent > 0, "{} has no transparent background", entry.name);
        }
    }

    #[test]
    fn test_tintable_split() {
        let tintable: Vec<&str> = CATALOG
            .iter()
            .filter(|e| e.tintable())
            .map(|e| e.name)
            .collect();

        assert_eq!(
            tintable,
            [
                "infantry",
                "ranger",
                "harvester",
                "depot",
                "barracks",
                "supply_depot",
                "tech_lab",
                "turret"
            ]
        );
    }

    #[test]
    fn test_find_sprite() {
        assert_eq!(find_sprite("turret").map(|e| e.size), Some(24));
        assert!(find_sprite("dreadnought").is_none());
    }

    #[test]
    fn test_generation_is_deterministic() {
        for entry in &CATALOG {
            assert_eq!(entry.render(), entry.render(), "{} not deterministic", entry.name);
        }
    }
}
