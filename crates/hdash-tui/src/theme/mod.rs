//! Centralized theme system.
//!
//! - `palette` - Dark and light color sets, picked by the server-side theme
//! - `styles` - Semantic style builder functions

pub mod palette;
pub mod styles;

pub use palette::Palette;
