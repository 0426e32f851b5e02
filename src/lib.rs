//! spritegen - procedural sprite set generator
//!
//! A library for drawing the fixed pixel-art sprite catalog of the RTS
//! prototype (units, buildings, resource nodes, terrain) and producing
//! faction-tinted variants of the unit and building sprites.

pub mod cli;
pub mod error;
pub mod output;
pub mod render;
pub mod sprites;
pub mod types;

pub use error::{Result, SpriteError};
pub use render::{apply_faction_tint, write_png, Painter};
pub use sprites::{find_sprite, GeneratorFn, SpriteEntry, SpriteKind, CATALOG};
pub use types::{Canvas, Colour, Faction, TINT_INTENSITY};
