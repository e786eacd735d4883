//! Command line front-end for nearest named color matching.
//!
//! Resolves a query color from a hex argument or a JSON fill document,
//! matches it against the bundled palette and reports the winning name.

mod clipboard;
mod error;
mod fill;

use clap::Parser;
use env_logger::Env;
use log::debug;
use tinct_match::find_closest;
use tinct_palette::Palette;

use crate::error::CliError;
use crate::fill::FillDocument;

/// Name the nearest palette color for a fill or hex value.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Hex color to match, e.g. `#1e90ff` or `1e90ff`.
    #[arg(
        value_name = "COLOR",
        conflicts_with = "fills",
        required_unless_present = "fills"
    )]
    color: Option<String>,

    /// Match the first visible solid fill of a JSON fill document.
    /// Pass `-` to read the document from stdin.
    #[arg(long, value_name = "PATH")]
    fills: Option<String>,

    /// Copy the matched name to the terminal clipboard (OSC 52).
    #[arg(long)]
    copy: bool,
}

fn main() -> Result<(), CliError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    run(Args::parse())
}

fn run(args: Args) -> Result<(), CliError> {
    let palette = Palette::bundled()?;
    debug!("palette ready with {} colors", palette.len());

    let query_hex = resolve_query(&args)?;
    let found = find_closest(&palette, &query_hex);
    debug!(
        "query {} matched {:?} at distance {:.2}",
        found.query, found.entry.name, found.distance
    );

    if args.copy {
        clipboard::copy_to_clipboard(&found.entry.name)?;
        println!(
            "Copied \"{}\" to clipboard ({} -> {})",
            found.entry.name, found.query, found.entry.hex
        );
    } else {
        println!(
            "{} -> \"{}\" ({})",
            found.query, found.entry.name, found.entry.hex
        );
    }

    Ok(())
}

/// Resolves the query hex string from the chosen color source.
///
/// Fill documents go through the fractional-to-hex conversion first, so
/// the matcher sees the same normalized form either way.
fn resolve_query(args: &Args) -> Result<String, CliError> {
    if let Some(color) = &args.color {
        return Ok(color.clone());
    }

    // clap guarantees one of the two sources is present.
    let path = args.fills.as_deref().unwrap_or("-");
    let document = FillDocument::load(path)?;
    let color = document.first_visible_solid()?;
    Ok(color.to_rgb().to_string())
}
