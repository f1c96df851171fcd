// File: crates/skyai-chart/src/color.rs
// Summary: Backend-neutral RGBA color with hex parsing and CSS output.

use std::fmt;
use std::str::FromStr;

use crate::error::ChartError;

/// RGBA color; alpha in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a: a.clamp(0.0, 1.0), ..self }
    }

    /// Parse `#rgb` or `#rrggbb` (leading `#` optional, case-insensitive).
    pub fn from_hex(s: &str) -> Result<Self, ChartError> {
        let bad = || ChartError::InvalidColor(s.to_string());
        let hex = s.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let byte = |h: &str| u8::from_str_radix(h, 16).map_err(|_| bad());
        match hex.len() {
            3 => {
                let mut c = [0u8; 3];
                for (i, ch) in hex.chars().enumerate() {
                    let v = byte(&ch.to_string())?;
                    c[i] = v * 17;
                }
                Ok(Self::rgb(c[0], c[1], c[2]))
            }
            6 => Ok(Self::rgb(byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?)),
            _ => Err(bad()),
        }
    }

    pub fn to_css(self) -> String {
        if (self.a - 1.0).abs() < 0.001 {
            self.to_hex()
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha as an 8-bit channel.
    pub fn alpha_u8(self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }
}

impl FromStr for Color {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("transparent") {
            return Ok(Color::TRANSPARENT);
        }
        Color::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_and_short_hex() {
        assert_eq!(Color::from_hex("#ef4444").unwrap(), Color::rgb(0xef, 0x44, 0x44));
        assert_eq!(Color::from_hex("fff").unwrap(), Color::WHITE);
        assert_eq!(Color::from_hex("#00AA00").unwrap().to_hex(), "#00aa00");
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(Color::from_hex("#12345"), Err(ChartError::InvalidColor(_))));
        assert!(Color::from_hex("#gggggg").is_err());
        assert!(Color::from_hex("#ééé").is_err());
    }

    #[test]
    fn rejects_signed_nibbles() {
        assert!(Color::from_hex("#+f+f+f").is_err());
        assert!(Color::from_hex("+ff").is_err());
        assert!(Color::from_hex("#-1-1-1").is_err());
    }

    #[test]
    fn transparent_keyword_and_rgba_css() {
        let c: Color = "transparent".parse().unwrap();
        assert_eq!(c.to_css(), "rgba(0, 0, 0, 0)");
    }
}
