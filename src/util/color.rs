//! `#rrggbb` color strings as used in option files.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An RGB color in [0, 1] that serializes as a `#rrggbb` hex string.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(pub [f32; 3]);

impl HexColor {
    /// Pure white.
    pub const WHITE: Self = Self([1.0, 1.0, 1.0]);

    /// Parse `#rrggbb`, `rrggbb`, or the short `#rgb` form.
    ///
    /// # Errors
    ///
    /// Returns a message describing the malformed input.
    pub fn parse(input: &str) -> Result<Self, String> {
        let digits = input.trim().trim_start_matches('#');
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_owned(),
            _ => return Err(format!("expected #rrggbb, got {input:?}")),
        };
        let mut rgb = [0.0; 3];
        for (i, channel) in rgb.iter_mut().enumerate() {
            let byte = expanded
                .get(i * 2..i * 2 + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| format!("invalid hex color {input:?}"))?;
            *channel = f32::from(byte) / 255.0;
        }
        Ok(Self(rgb))
    }

    /// The color as an RGB triple.
    #[must_use]
    pub fn rgb(self) -> [f32; 3] {
        self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] =
            self.0.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.to_string()
    }
}
