//! Clipboard support using OSC 52 escape sequences
//!
//! OSC 52 is a terminal escape sequence that allows applications to write to the system
//! clipboard. This works even over SSH connections and in terminal multiplexers like tmux.
//!
//! The format is: `\x1b]52;c;<base64_content>\x1b\\` or `\x1b]52;c;<base64_content>\x07`
//!
//! References:
//! - https://invisible-island.net/xterm/ctlseqs/ctlseqs.html#h3-Operating-System-Commands
//! - https://github.com/ojroques/vim-oscyank

use base64::{Engine, engine::general_purpose::STANDARD};
use std::io::{self, Write};

/// Build the OSC 52 sequence that places `text` on the clipboard as plain text.
pub fn osc52_sequence(text: &str) -> String {
    let encoded = STANDARD.encode(text);
    // BEL terminator; some terminals don't support ST (\x1b\\)
    format!("\x1b]52;c;{encoded}\x07")
}

/// Copy text to the clipboard using OSC 52 escape sequence
///
/// The sequence goes to stderr so that stdout stays clean when piped.
pub fn copy_to_clipboard(text: &str) -> io::Result<()> {
    write_clipboard_sequence(text, &mut io::stderr())
}

/// Write the clipboard sequence for `text` to `out`.
pub fn write_clipboard_sequence<W: Write>(text: &str, out: &mut W) -> io::Result<()> {
    out.write_all(osc52_sequence(text).as_bytes())?;
    out.flush()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_wraps_base64_payload() {
        assert_eq!(osc52_sequence("SELECT 1;"), "\x1b]52;c;U0VMRUNUIDE7\x07");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(osc52_sequence(""), "\x1b]52;c;\x07");
    }

    #[test]
    fn test_multiline_content_roundtrips() {
        let content = "SELECT *\nFROM t\nWHERE a = 'x';";
        let sequence = osc52_sequence(content);
        let payload = sequence
            .strip_prefix("\x1b]52;c;")
            .and_then(|s| s.strip_suffix('\x07'))
            .unwrap();
        let decoded = STANDARD.decode(payload).unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), content);
    }

    #[test]
    fn test_writes_to_given_writer() {
        let mut buf = Vec::new();
        write_clipboard_sequence("x", &mut buf).unwrap();
        assert_eq!(buf, b"\x1b]52;c;eA==\x07");
    }
}
