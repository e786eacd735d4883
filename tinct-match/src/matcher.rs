use tinct_palette::{ColorEntry, Palette};

use crate::rgb::Rgb;

/// Result of a nearest-color search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match<'a> {
    /// Winning palette entry.
    pub entry: &'a ColorEntry,
    /// Query color after normalization, including the black fallback for
    /// malformed hex input.
    pub query: Rgb,
    /// Euclidean distance between `query` and `entry`.
    pub distance: f64,
}

/// Finds the palette entry closest to a hex query string.
///
/// The query is normalized with [`Rgb::parse_hex_lossy`], so malformed
/// input matches as black rather than failing.
pub fn find_closest<'a>(palette: &'a Palette, hex: &str) -> Match<'a> {
    find_closest_rgb(palette, Rgb::parse_hex_lossy(hex))
}

/// Finds the palette entry closest to `query`.
///
/// Linear scan in palette order. A candidate replaces the running best only
/// on strictly smaller distance, so among entries at equal distance the
/// earliest in palette order wins. An exact match ends the scan
/// immediately; with the strict comparison this keeps first-match
/// semantics for duplicate hex values as well.
pub fn find_closest_rgb(palette: &Palette, query: Rgb) -> Match<'_> {
    let mut best = palette.first();
    let mut best_sq = u32::MAX;

    for entry in palette {
        // Entries are validated at palette construction, so the black
        // fallback is unreachable here.
        let sq = query.distance_sq(Rgb::parse_hex_lossy(&entry.hex));

        if sq < best_sq {
            best_sq = sq;
            best = entry;
        }

        if sq == 0 {
            break;
        }
    }

    Match {
        entry: best,
        query,
        distance: f64::from(best_sq).sqrt(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(colors: &[(&str, &str)]) -> Palette {
        let entries = colors
            .iter()
            .map(|(name, hex)| ColorEntry::new(*name, *hex))
            .collect();
        Palette::from_entries(entries).unwrap()
    }

    #[test]
    fn exact_match_wins() {
        let palette = palette(&[("White", "#ffffff"), ("Red", "#ff0000")]);
        let found = find_closest(&palette, "#ff0000");
        assert_eq!(found.entry.name, "Red");
        assert_eq!(found.distance, 0.0);
    }

    #[test]
    fn first_of_duplicate_hex_entries_wins() {
        let palette = palette(&[("Red", "#ff0000"), ("Crimson", "#ff0000")]);
        let found = find_closest(&palette, "#ff0000");
        assert_eq!(found.entry.name, "Red");
    }

    #[test]
    fn exact_match_short_circuits_before_later_candidates() {
        let palette = palette(&[("A", "#000000"), ("B", "#010101")]);
        let found = find_closest(&palette, "#000000");
        assert_eq!(found.entry.name, "A");
        assert_eq!(found.distance, 0.0);
    }

    #[test]
    fn nearest_entry_wins_without_exact_match() {
        let palette = palette(&[("White", "#ffffff"), ("Black", "#000000")]);
        let found = find_closest(&palette, "#111111");
        assert_eq!(found.entry.name, "Black");
        assert_eq!(found.distance, (3.0_f64 * 17.0 * 17.0).sqrt());
    }

    #[test]
    fn equal_distances_keep_the_earlier_entry() {
        // Both entries sit at squared distance 3 from #010101.
        let palette = palette(&[("A", "#000002"), ("B", "#020000")]);
        let found = find_closest(&palette, "#010101");
        assert_eq!(found.entry.name, "A");
    }

    #[test]
    fn malformed_query_matches_as_black() {
        let palette = palette(&[("White", "#ffffff"), ("Ink", "#010101")]);
        let found = find_closest(&palette, "not-a-color");
        assert_eq!(found.query, Rgb::BLACK);
        assert_eq!(found.entry.name, "Ink");
    }

    #[test]
    fn single_entry_palette_always_matches_it() {
        let palette = palette(&[("Only", "#123456")]);
        let found = find_closest(&palette, "#fedcba");
        assert_eq!(found.entry.name, "Only");
        assert!(found.distance > 0.0);
    }

    #[test]
    fn query_hex_is_reported_normalized() {
        let palette = palette(&[("Red", "#ff0000")]);
        let found = find_closest(&palette, "FF0000");
        assert_eq!(found.query.to_string(), "#ff0000");
    }

    #[test]
    fn bundled_palette_resolves_pure_red() {
        let palette = Palette::bundled().unwrap();
        let found = find_closest(&palette, "#ff0000");
        assert_eq!(found.entry.name, "Red");
        assert_eq!(found.distance, 0.0);
    }
}
