//! Colors of the ambassador deck.

use deck_core::Rgb;

pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const LIGHT: Rgb = Rgb(200, 200, 220);
pub const MUTED: Rgb = Rgb(150, 150, 170);
pub const PURPLE: Rgb = Rgb(168, 85, 247);
pub const CYAN: Rgb = Rgb(56, 189, 248);
pub const GREEN: Rgb = Rgb(74, 222, 128);
pub const AMBER: Rgb = Rgb(251, 191, 36);
pub const RED: Rgb = Rgb(248, 113, 113);

/// Solid slide background, visible wherever the picture is missing.
pub const DARK_BG: Rgb = Rgb(15, 15, 35);
