// src/util.rs

/// Decode a captured output stream as UTF-8.
///
/// Invalid byte sequences are replaced with U+FFFD rather than failing the
/// request, so a binary that prints raw bytes still gets a 200 reply.
pub fn decode_stream(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Shorten `s` to at most `max` chars for log fields.
///
/// Example:
/// truncate_for_log("abcdef", 3) → "abc…"
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => format!("{}…", &s[..idx]),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_keeps_valid_utf8() {
        assert_eq!(decode_stream("héllo\n".as_bytes()), "héllo\n");
    }

    #[test]
    fn decode_replaces_invalid_bytes() {
        assert_eq!(decode_stream(&[b'a', 0xC3, b'b']), "a\u{FFFD}b");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_for_log("ééééé", 2), "éé…");
        assert_eq!(truncate_for_log("short", 10), "short");
    }
}
