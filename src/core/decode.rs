// src/core/decode.rs
//
// Byte → text with a fixed fallback chain: UTF-8, Windows-1250, Latin-1.
// First strict decode that succeeds wins.

use std::borrow::Cow;
use std::fmt;

use encoding_rs::{UTF_8, WINDOWS_1250};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceEncoding {
    Utf8,
    Windows1250,
    Latin1,
}

impl SourceEncoding {
    pub const CASCADE: [SourceEncoding; 3] = [
        SourceEncoding::Utf8,
        SourceEncoding::Windows1250,
        SourceEncoding::Latin1,
    ];

    /// Strict decode; `None` when the bytes aren't valid in this encoding.
    pub fn decode<'a>(&self, bytes: &'a [u8]) -> Option<Cow<'a, str>> {
        match self {
            SourceEncoding::Utf8 => {
                let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
                UTF_8.decode_without_bom_handling_and_without_replacement(bytes)
            }
            SourceEncoding::Windows1250 => {
                // The WHATWG table maps these to C1 controls; the code page
                // itself leaves them undefined.
                if bytes.iter().any(|b| CP1250_UNDEFINED.contains(b)) {
                    return None;
                }
                WINDOWS_1250.decode_without_bom_handling_and_without_replacement(bytes)
            }
            SourceEncoding::Latin1 => {
                Some(Cow::Owned(bytes.iter().map(|&b| b as char).collect()))
            }
        }
    }
}

const CP1250_UNDEFINED: [u8; 5] = [0x81, 0x83, 0x88, 0x90, 0x98];

impl fmt::Display for SourceEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SourceEncoding::Utf8 => "utf-8",
            SourceEncoding::Windows1250 => "windows-1250",
            SourceEncoding::Latin1 => "latin-1",
        })
    }
}

/// Run the cascade. `None` only if every encoding rejected the input.
pub fn decode_cascade(bytes: &[u8]) -> Option<(String, SourceEncoding)> {
    SourceEncoding::CASCADE
        .iter()
        .find_map(|enc| enc.decode(bytes).map(|text| (text.into_owned(), *enc)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_wins_and_bom_is_dropped() {
        let (text, enc) = decode_cascade("\u{feff}Łódź".as_bytes()).unwrap();
        assert_eq!(enc, SourceEncoding::Utf8);
        assert_eq!(text, "Łódź");
    }

    #[test]
    fn cp1250_bytes_fall_through_to_windows_1250() {
        // "Łódź" in Windows-1250
        let (text, enc) = decode_cascade(&[0xA3, 0xF3, 0x64, 0x9F]).unwrap();
        assert_eq!(enc, SourceEncoding::Windows1250);
        assert_eq!(text, "Łódź");
    }

    #[test]
    fn undefined_cp1250_byte_ends_at_latin1() {
        let (text, enc) = decode_cascade(&[b'a', 0x81, 0xE9]).unwrap();
        assert_eq!(enc, SourceEncoding::Latin1);
        assert_eq!(text, "a\u{81}é");
    }
}
