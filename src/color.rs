//! src/color.rs
//! ------------
//! Packed 24-bit `0xRRGGBB` colors and the two integer operations the shader
//! composes them with.

use crate::fixed::{Fixed, SCALE, SHIFT};
use serde::Deserialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb(pub u32);

impl Rgb {
    pub const BLACK: Self = Self(0x000000);
    pub const WHITE: Self = Self(0xFFFFFF);

    pub fn from_channels([r, g, b]: [u8; 3]) -> Self {
        Self((r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub fn channels(self) -> [u8; 3] {
        [(self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8]
    }

    /// Parses `#RRGGBB` (the `#` is optional).
    pub fn from_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self)
    }
}

/// Scale every channel by `intensity / SCALE`, intensity clamped to `[0, SCALE]`.
pub fn color_mul(col: Rgb, intensity: Fixed) -> Rgb {
    let i = intensity.clamp(0, SCALE) as u32;
    let [r, g, b] = col.channels();
    Rgb::from_channels([
        ((r as u32 * i) >> SHIFT) as u8,
        ((g as u32 * i) >> SHIFT) as u8,
        ((b as u32 * i) >> SHIFT) as u8,
    ])
}

/// Channel-wise sum, saturating at 255.
pub fn color_add(c1: Rgb, c2: Rgb) -> Rgb {
    let [r1, g1, b1] = c1.channels();
    let [r2, g2, b2] = c2.channels();
    Rgb::from_channels([r1.saturating_add(r2), g1.saturating_add(g2), b1.saturating_add(b2)])
}

/* Serde helper: "#RRGGBB" string to Rgb */
pub fn rgb_from_hex<'de, D>(d: D) -> Result<Rgb, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(d)?;
    Rgb::from_hex(&s)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid color {s:?}, expected #RRGGBB")))
}
