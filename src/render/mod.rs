//! Rendering module for spritegen.
//!
//! This module holds the drawing primitives the generators paint with,
//! the faction tint transform, and PNG output.

mod painter;
mod png;
mod tint;

pub use painter::Painter;
pub use png::write_png;
pub use tint::apply_faction_tint;
