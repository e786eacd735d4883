use log::debug;
use thiserror::Error;

use crate::entry::ColorEntry;

/// Dataset bundled into the crate, one `{ name, hex }` object per color.
const BUNDLED_DATASET: &str = include_str!("../data/colornames.json");

/// Errors raised while constructing a [`Palette`].
#[derive(Debug, Error)]
pub enum PaletteError {
    #[error("palette dataset failed to decode: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("palette must contain at least one entry")]
    Empty,

    #[error("palette entry {name:?} has malformed hex {hex:?}")]
    MalformedEntry { name: String, hex: String },
}

/// Ordered, immutable collection of named colors.
///
/// Entry order is the dataset's insertion order and is preserved exactly.
/// It carries no meaning beyond acting as the iteration order, and thereby
/// the tie-break order, for nearest-color search. Duplicate hex values are
/// allowed; duplicate names are not rejected either.
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<ColorEntry>,
}

impl Palette {
    /// Builds a palette from `entries`, checking the palette invariants:
    /// at least one entry, every entry well-formed.
    pub fn from_entries(
        entries: Vec<ColorEntry>,
    ) -> Result<Self, PaletteError> {
        if entries.is_empty() {
            return Err(PaletteError::Empty);
        }

        for entry in &entries {
            if !entry.is_well_formed() {
                return Err(PaletteError::MalformedEntry {
                    name: entry.name.clone(),
                    hex: entry.hex.clone(),
                });
            }
        }

        Ok(Self { entries })
    }

    /// Decodes the dataset embedded at compile time.
    ///
    /// The dataset is a frozen resource; it is decoded here once per call
    /// and never fetched or regenerated at runtime. Callers construct the
    /// palette at startup and pass it around by reference.
    pub fn bundled() -> Result<Self, PaletteError> {
        let entries: Vec<ColorEntry> = serde_json::from_str(BUNDLED_DATASET)?;
        let palette = Self::from_entries(entries)?;
        debug!("loaded bundled palette with {} colors", palette.len());
        Ok(palette)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry in palette order.
    ///
    /// Construction rejects empty palettes, so this cannot fail.
    pub fn first(&self) -> &ColorEntry {
        &self.entries[0]
    }

    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColorEntry> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Palette {
    type Item = &'a ColorEntry;
    type IntoIter = std::slice::Iter<'a, ColorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
