//! Print the nearest palette name for every color given on the command line.
use tinct_match::find_closest;
use tinct_palette::{Palette, PaletteError};

fn main() -> Result<(), PaletteError> {
    let palette = Palette::bundled()?;

    for hex in std::env::args().skip(1) {
        let found = find_closest(&palette, &hex);
        println!(
            "{} -> {} ({})",
            found.query, found.entry.name, found.entry.hex
        );
    }

    Ok(())
}
