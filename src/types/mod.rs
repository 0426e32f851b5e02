//! Core domain types for spritegen.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - RGBA colour values
//! - `Canvas` - the owned pixel grid sprites are drawn into
//! - `Faction` - named team palettes used as tint targets

mod canvas;
mod colour;
mod faction;

pub use canvas::Canvas;
pub use colour::Colour;
pub use faction::{Faction, TINT_INTENSITY};
