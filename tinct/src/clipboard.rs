//! Terminal clipboard writes via OSC 52.

use std::io::{self, Write};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Builds the OSC 52 sequence that places `text` into the terminal's
/// clipboard selection.
fn osc52_sequence(text: &str) -> String {
    let payload = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{payload}\x07")
}

/// Writes the OSC 52 copy sequence for `text` to stdout.
///
/// Whether the write reaches a real clipboard is up to the terminal; most
/// modern emulators honor OSC 52, multiplexers may need it enabled.
pub(crate) fn copy_to_clipboard(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(osc52_sequence(text).as_bytes())?;
    stdout.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_wraps_base64_payload() {
        // "Red" encodes to "UmVk".
        assert_eq!(osc52_sequence("Red"), "\x1b]52;c;UmVk\x07");
    }

    #[test]
    fn sequence_handles_spaces_and_unicode() {
        let sequence = osc52_sequence("Café au Lait");
        assert!(sequence.starts_with("\x1b]52;c;"));
        assert!(sequence.ends_with('\x07'));
        // Payload stays base64: no raw spaces or non-ASCII bytes leak in.
        let payload = &sequence[7..sequence.len() - 1];
        assert!(payload.bytes().all(|b| b.is_ascii_alphanumeric()
            || b == b'+'
            || b == b'/'
            || b == b'='));
    }
}
