//! Static palette of named colors.
//!
//! The palette is an ordered, immutable list of `(name, hex)` entries
//! decoded once from the dataset bundled with this crate. Construction
//! validates every entry, so downstream consumers can rely on a non-empty
//! palette of well-formed hex triplets without re-checking.
//!
//! The main entry points are:
//! - [`Palette::bundled`], which decodes the embedded dataset, and
//! - [`Palette::from_entries`], which builds a palette from caller-supplied
//!   entries under the same invariants.

mod entry;
mod palette;

pub use entry::ColorEntry;
pub use palette::{Palette, PaletteError};
