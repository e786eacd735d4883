//! Nearest named color matching.
//!
//! Pure functions over [`Rgb`]: hex parsing with a defined black fallback,
//! fractional-channel conversion, a Euclidean distance metric and a linear
//! nearest-neighbor scan over a borrowed [`tinct_palette::Palette`].
//!
//! The main entry points are:
//! - [`find_closest`], which matches a hex query string, and
//! - [`find_closest_rgb`], which matches an already-resolved [`Rgb`].
//!
//! Everything here is synchronous and side-effect free; the palette is only
//! ever borrowed immutably, so concurrent lookups need no coordination.

mod matcher;
mod rgb;

pub use matcher::{Match, find_closest, find_closest_rgb};
pub use rgb::Rgb;
