//! Text encoding normalization between backends and the public API.

/// Generic plain-text mime type, the paste fallback.
pub(crate) const PLAIN_TEXT: &str = "text/plain";

/// UTF-8 tagged plain-text mime type used on Windows and Linux.
pub(crate) const UTF8_TEXT: &str = "text/plain;charset=utf-8";

/// Whether `mime_type` names a plain-text format this crate can decode.
pub(crate) fn is_text_mime(mime_type: &str) -> bool {
    mime_type == PLAIN_TEXT || mime_type.starts_with("text/plain;")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Encoding {
    Utf8,
    Utf16Le,
}

/// The canonical text mime type and byte encoding of one platform.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TextFormat {
    pub(crate) mime_type: &'static str,
    pub(crate) encoding: Encoding,
    /// The Win32 clipboard expects CF_UNICODETEXT data to carry a trailing
    /// NUL; without it other applications read garbage past the end.
    pub(crate) null_terminated: bool,
}

/// Text format of the compilation target.
#[cfg(target_os = "windows")]
pub(crate) const NATIVE: TextFormat = TextFormat {
    mime_type: UTF8_TEXT,
    encoding: Encoding::Utf16Le,
    null_terminated: true,
};

/// Text format of the compilation target.
#[cfg(target_os = "linux")]
pub(crate) const NATIVE: TextFormat = TextFormat {
    mime_type: UTF8_TEXT,
    encoding: Encoding::Utf8,
    null_terminated: false,
};

/// Text format of the compilation target.
#[cfg(not(any(target_os = "windows", target_os = "linux")))]
pub(crate) const NATIVE: TextFormat = TextFormat {
    mime_type: PLAIN_TEXT,
    encoding: Encoding::Utf8,
    null_terminated: false,
};

/// Byte length of a UTF-16-LE buffer up to (excluding) its first NUL code
/// unit.
///
/// CF_UNICODETEXT data ends at the NUL terminator, but the Win32 allocation
/// holding it may be larger and carry arbitrary slack bytes past the end.
pub(crate) fn utf16_len_to_nul(data: &[u8]) -> usize {
    data.chunks_exact(2)
        .position(|pair| pair == [0, 0])
        .map_or(data.len(), |units| units * 2)
}

impl TextFormat {
    /// Encode `text` into clipboard bytes, terminator included where the
    /// platform wants one.
    pub(crate) fn encode(&self, text: &str) -> Vec<u8> {
        let mut data: Vec<u8> = match self.encoding {
            Encoding::Utf8 => text.as_bytes().to_vec(),
            Encoding::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
        };
        if self.null_terminated {
            match self.encoding {
                Encoding::Utf8 => data.push(0),
                Encoding::Utf16Le => data.extend_from_slice(&[0, 0]),
            }
        }
        data
    }

    /// Decode clipboard bytes leniently: malformed sequences become
    /// replacement characters and embedded NULs are stripped.
    pub(crate) fn decode(&self, data: &[u8]) -> String {
        let decoded = match self.encoding {
            Encoding::Utf8 => String::from_utf8_lossy(data).into_owned(),
            Encoding::Utf16Le => {
                // an odd trailing byte cannot be part of any code unit
                let units: Vec<u16> = data
                    .chunks_exact(2)
                    .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
                    .collect();
                String::from_utf16_lossy(&units)
            }
        };
        if decoded.contains('\0') {
            decoded.replace('\0', "")
        } else {
            decoded
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UTF16_WINDOWS: TextFormat = TextFormat {
        mime_type: UTF8_TEXT,
        encoding: Encoding::Utf16Le,
        null_terminated: true,
    };

    const UTF8_LINUX: TextFormat = TextFormat {
        mime_type: UTF8_TEXT,
        encoding: Encoding::Utf8,
        null_terminated: false,
    };

    #[test]
    fn utf8_encode_is_plain_bytes() {
        assert_eq!(UTF8_LINUX.encode("hi"), b"hi".to_vec());
    }

    #[test]
    fn utf16_encode_appends_terminator() {
        assert_eq!(
            UTF16_WINDOWS.encode("hi"),
            vec![0x68, 0x00, 0x69, 0x00, 0x00, 0x00]
        );
    }

    #[test]
    fn utf16_decode_strips_terminator() {
        let data = UTF16_WINDOWS.encode("hello");
        assert_eq!(UTF16_WINDOWS.decode(&data), "hello");
    }

    #[test]
    fn decode_strips_embedded_nuls() {
        assert_eq!(UTF8_LINUX.decode(b"he\x00llo\x00"), "hello");
    }

    #[test]
    fn utf16_round_trip_non_ascii() {
        let data = UTF16_WINDOWS.encode("grüße ✓");
        assert_eq!(UTF16_WINDOWS.decode(&data), "grüße ✓");
    }

    #[test]
    fn utf8_decode_is_lenient_on_malformed_input() {
        assert_eq!(UTF8_LINUX.decode(b"ok\xff"), "ok\u{fffd}");
    }

    #[test]
    fn utf16_decode_ignores_odd_trailing_byte() {
        let mut data = UTF16_WINDOWS.encode("ab");
        data.push(0x41);
        assert_eq!(UTF16_WINDOWS.decode(&data), "ab");
    }

    #[test]
    fn utf16_len_to_nul_stops_at_terminator() {
        // "hi\0" plus allocation slack past the stored string
        let data = [0x68, 0x00, 0x69, 0x00, 0x00, 0x00, 0x41, 0x42];
        let len = utf16_len_to_nul(&data);
        assert_eq!(len, 4);
        assert_eq!(UTF16_WINDOWS.decode(&data[..len]), "hi");
    }

    #[test]
    fn utf16_len_to_nul_without_terminator_is_full_length() {
        assert_eq!(utf16_len_to_nul(&[0x68, 0x00, 0x69, 0x00]), 4);
        assert_eq!(utf16_len_to_nul(&[]), 0);
    }

    #[test]
    fn text_mime_detection() {
        assert!(is_text_mime(PLAIN_TEXT));
        assert!(is_text_mime(UTF8_TEXT));
        assert!(!is_text_mime("image/png"));
    }
}
