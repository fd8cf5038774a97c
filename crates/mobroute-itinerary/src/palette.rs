use std::fmt;

use serde::{Deserialize, Serialize};

/// An RGB colour packed into a `u32` (0x00RRGGBB).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb(pub u32);

impl Rgb {
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    #[inline]
    pub const fn r(self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 & 0xFF) as u8
    }
}

/// CSS hex notation, `#rrggbb`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r(), self.g(), self.b())
    }
}

/// Marker colours, chosen to stay readable on dark minimaps.
pub const MARKER_PALETTE: [Rgb; 8] = [
    Rgb::from_rgb(0xff, 0x33, 0x33),
    Rgb::from_rgb(0x4c, 0xaf, 0x50),
    Rgb::from_rgb(0x29, 0xb6, 0xf6),
    Rgb::from_rgb(0xff, 0xca, 0x28),
    Rgb::from_rgb(0xab, 0x47, 0xbc),
    Rgb::from_rgb(0xff, 0x70, 0x43),
    Rgb::from_rgb(0x26, 0xc6, 0xda),
    Rgb::from_rgb(0xec, 0x40, 0x7a),
];

fn fnv1a(s: &str) -> u64 {
    let mut h: u64 = 0xcbf2_9ce4_8422_2325;
    for b in s.bytes() {
        h ^= u64::from(b);
        h = h.wrapping_mul(0x0100_0000_01b3);
    }
    h
}

/// Colour for the `index`-th portal marker labelled `direction`.
///
/// The same inputs always give the same colour, and consecutive indices
/// with the same label never share one.
pub fn marker_color(direction: &str, index: usize) -> Rgb {
    let n = MARKER_PALETTE.len() as u64;
    let slot = (fnv1a(direction) % n + index as u64 % n) % n;
    MARKER_PALETTE[slot as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_and_hex() {
        let c = Rgb::from_rgb(0x12, 0xab, 0x07);
        assert_eq!((c.r(), c.g(), c.b()), (0x12, 0xab, 0x07));
        assert_eq!(c.to_string(), "#12ab07");
    }

    #[test]
    fn markers_are_deterministic() {
        assert_eq!(marker_color("top left", 0), marker_color("top left", 0));
        assert_ne!(marker_color("top left", 0), marker_color("top left", 1));
        assert_eq!(marker_color("top left", 0), marker_color("top left", 8));
        assert!(MARKER_PALETTE.contains(&marker_color("", 3)));
    }
}
