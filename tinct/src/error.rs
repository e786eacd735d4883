use std::io;

use thiserror::Error;

use tinct_palette::PaletteError;

/// Errors surfaced by the command line front-end.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error("palette failed to load: {0}")]
    Palette(#[from] PaletteError),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    #[error("fill document JSON failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("fill document has no fills")]
    NoFills,

    #[error("fill document has no visible solid fill")]
    NoSolidFill,
}
