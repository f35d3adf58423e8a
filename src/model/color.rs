//! Display colors and the chord-type color table.

use serde::{Deserialize, Serialize};
use super::ChordType;

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `"#RRGGBB"` or `"RRGGBB"`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self::rgb(r, g, b))
    }

    /// `#rrggbb`, as used in SVG attributes.
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    // CSS named colors.
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const PURPLE: Color = Color::rgb(128, 0, 128);
    pub const DARK_VIOLET: Color = Color::rgb(148, 0, 211);
    pub const ORANGE: Color = Color::rgb(255, 165, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const PINK: Color = Color::rgb(255, 192, 203);
    pub const GOLD: Color = Color::rgb(255, 215, 0);
    pub const DARK_RED: Color = Color::rgb(139, 0, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.hex())
    }
}

/// Marker color for a chord type.
///
/// The table covers every `ChordType`, including the three categories the
/// catalog never uses (`Major7`, `Dominant7`, `Suspended`).
pub const fn color_for(chord_type: ChordType) -> Color {
    match chord_type {
        ChordType::Minor => Color::RED,
        ChordType::Major => Color::BLUE,
        ChordType::Diminished => Color::PURPLE,
        ChordType::Diminished7 => Color::DARK_VIOLET,
        ChordType::Augmented => Color::ORANGE,
        ChordType::Minor7 => Color::GREEN,
        ChordType::Major7 => Color::YELLOW,
        ChordType::Dominant7 => Color::PINK,
        ChordType::MinorMajor7 => Color::GOLD,
        ChordType::HalfDiminished => Color::DARK_RED,
        ChordType::Suspended => Color::CYAN,
    }
}
