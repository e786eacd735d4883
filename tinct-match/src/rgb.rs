use std::fmt::{self, Display, Formatter};

use log::debug;

/// Color in raw 8-bit RGB space.
#[derive(Debug, Eq, PartialEq, Copy, Clone, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Parses a hex triplet: an optional leading `#` followed by exactly
    /// six hex digits, case-insensitive.
    ///
    /// Returns `None` for anything else, including three-digit shorthand
    /// and strings with surrounding garbage.
    pub fn parse_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        let well_formed =
            digits.len() == 6 && digits.bytes().all(|b| b.is_ascii_hexdigit());
        if !well_formed {
            return None;
        }

        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;

        Some(Self { r, g, b })
    }

    /// Variant of [`Rgb::parse_hex`] used on the matching path: malformed
    /// input is silently normalized to black, never an error.
    ///
    /// Callers that need to tell a parsed color apart from the fallback
    /// should use [`Rgb::parse_hex`] instead.
    pub fn parse_hex_lossy(s: &str) -> Self {
        match Self::parse_hex(s) {
            Some(rgb) => rgb,
            None => {
                debug!("malformed hex {s:?} normalized to black");
                Self::BLACK
            }
        }
    }

    /// Converts fractional channels, each nominally in `0.0..=1.0`, to
    /// 8-bit RGB. Channels are clamped into range (NaN clamps to zero),
    /// scaled by 255 and rounded to nearest.
    pub fn from_fraction(r: f32, g: f32, b: f32) -> Self {
        fn channel(value: f32) -> u8 {
            (value.clamp(0.0, 1.0) * 255.0).round() as u8
        }

        Self {
            r: channel(r),
            g: channel(g),
            b: channel(b),
        }
    }

    /// Euclidean distance to `other` in raw RGB space.
    ///
    /// No color-space transform or perceptual weighting is applied; plain
    /// channel geometry is sufficient to rank palette candidates.
    pub fn distance(self, other: Self) -> f64 {
        f64::from(self.distance_sq(other)).sqrt()
    }

    /// Squared distance. Shares its argmin and zero set with
    /// [`Rgb::distance`], so scans can rank on it and skip the root.
    pub(crate) fn distance_sq(self, other: Self) -> u32 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl Display for Rgb {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
