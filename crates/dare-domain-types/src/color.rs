// Copyright 2025 Schelling Point Labs Inc
// SPDX-License-Identifier: AGPL-3.0-only

//! Plain RGB colors used by the derived display rules.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color must look like #RRGGBB, got '{0}'")]
    Malformed(String),
}

/// 24-bit color, rendered by the UI layer in whatever way it supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` string (the leading `#` is optional).
    pub fn from_hex(value: &str) -> Result<Self, ColorParseError> {
        let hex = value.strip_prefix('#').unwrap_or(value);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::Malformed(value.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|_| ColorParseError::Malformed(value.to_string()))
        };
        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// CSS-style `rgb(r, g, b)` notation
    pub fn to_css_rgb(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Linear blend towards `other`; `t` is clamped to [0, 1].
    pub fn mix(self, other: RgbColor, t: f64) -> RgbColor {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        RgbColor {
            r: lerp(self.r, other.r),
            g: lerp(self.g, other.g),
            b: lerp(self.b, other.b),
        }
    }
}

impl TryFrom<String> for RgbColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        RgbColor::from_hex(&value)
    }
}

impl From<RgbColor> for String {
    fn from(color: RgbColor) -> Self {
        color.to_hex()
    }
}

impl std::fmt::Display for RgbColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Semantic palette shared by the derived rules
pub mod palette {
    use super::RgbColor;

    pub const STATUS_OPEN: RgbColor = RgbColor::new(0x3B, 0x82, 0xF6); // blue
    pub const STATUS_ACTIVE: RgbColor = RgbColor::new(0xF5, 0x9E, 0x0B); // yellow
    pub const STATUS_COMPLETED: RgbColor = RgbColor::new(0x10, 0xB9, 0x81); // green
    pub const STATUS_CANCELLED: RgbColor = RgbColor::new(0xEF, 0x44, 0x44); // red
    pub const NEUTRAL: RgbColor = RgbColor::new(0x6B, 0x72, 0x80); // gray

    pub const ACCENT_POSITIVE: RgbColor = RgbColor::new(0x00, 0xD4, 0xAA);
    pub const ACCENT_NEGATIVE: RgbColor = RgbColor::new(0xFF, 0x66, 0x66);
    pub const WHITE: RgbColor = RgbColor::new(0xFF, 0xFF, 0xFF);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(RgbColor::from_hex("#00D4AA").unwrap(), palette::ACCENT_POSITIVE);
        assert_eq!(RgbColor::from_hex("ff6666").unwrap(), palette::ACCENT_NEGATIVE);
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(RgbColor::from_hex("#12345").is_err());
        assert!(RgbColor::from_hex("#GG0000").is_err());
    }

    #[test]
    fn css_rgb_matches_channel_values() {
        assert_eq!(palette::ACCENT_POSITIVE.to_css_rgb(), "rgb(0, 212, 170)");
    }

    #[test]
    fn mix_reaches_both_ends() {
        let from = palette::ACCENT_NEGATIVE;
        assert_eq!(from.mix(palette::WHITE, 0.0), from);
        assert_eq!(from.mix(palette::WHITE, 1.0), palette::WHITE);
        assert_eq!(from.mix(palette::WHITE, 7.0), palette::WHITE);
    }
}
