use serde::{Deserialize, Serialize};

/// A single named color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    /// Human-readable name, e.g. `"Air Force Blue"`.
    pub name: String,
    /// Hex triplet: six hex digits with an optional `#` prefix.
    pub hex: String,
}

impl ColorEntry {
    pub fn new(name: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex: hex.into(),
        }
    }

    /// Returns the hex digits without the optional `#` prefix.
    pub fn hex_digits(&self) -> &str {
        self.hex.strip_prefix('#').unwrap_or(&self.hex)
    }

    /// Checks the palette invariant for this entry: a non-empty name and
    /// exactly six hex digits, case-insensitive.
    pub fn is_well_formed(&self) -> bool {
        let digits = self.hex_digits();
        !self.name.is_empty()
            && digits.len() == 6
            && digits.bytes().all(|b| b.is_ascii_hexdigit())
    }
}
