//! JSON fill documents, the host-side shape a query color arrives in.
//!
//! A document carries the paint list of one selected object. Only the
//! first visible solid paint matters for matching; gradient and image
//! paints exist to be skipped during extraction.

use std::fs;
use std::io::{self, Read};

use serde::Deserialize;
use tinct_match::Rgb;

use crate::error::CliError;

/// Paint list of one selected object.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct FillDocument {
    #[serde(default)]
    fills: Vec<Paint>,
}

/// One paint in a fill list.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub(crate) enum Paint {
    Solid {
        color: FractionColor,
        #[serde(default = "default_visible")]
        visible: bool,
    },
    Gradient,
    Image,
}

fn default_visible() -> bool {
    true
}

/// Normalized fractional color, each channel nominally in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub(crate) struct FractionColor {
    r: f32,
    g: f32,
    b: f32,
}

impl FractionColor {
    pub(crate) fn to_rgb(self) -> Rgb {
        Rgb::from_fraction(self.r, self.g, self.b)
    }
}

impl FillDocument {
    /// Reads a document from `path`, or from stdin when `path` is `-`.
    pub(crate) fn load(path: &str) -> Result<Self, CliError> {
        let data = if path == "-" {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        } else {
            fs::read_to_string(path)?
        };

        Ok(serde_json::from_str(&data)?)
    }

    /// Extracts the color to match: the first paint in paint order that is
    /// both solid and visible.
    pub(crate) fn first_visible_solid(
        &self,
    ) -> Result<FractionColor, CliError> {
        if self.fills.is_empty() {
            return Err(CliError::NoFills);
        }

        self.fills
            .iter()
            .find_map(|paint| match paint {
                Paint::Solid {
                    color,
                    visible: true,
                } => Some(*color),
                _ => None,
            })
            .ok_or(CliError::NoSolidFill)
    }
}
