//! Best-effort percent-decoding.
//!
//! Clients do not agree on how to put non-ASCII text in a request URI. Some
//! percent-encode the UTF-8 bytes (`%E6%9D%8E`), others send the raw UTF-8
//! characters. [`decode`] accepts both: text without an escape sequence is
//! returned untouched, and text whose escapes are malformed or do not form
//! valid UTF-8 is also returned untouched rather than rejected.

use percent_encoding::percent_decode_str;
use std::borrow::Cow;

/// Why a decode attempt fell back to the raw input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Fallback {
    /// `%` not followed by two hexadecimal digits.
    MalformedEscape,
    /// The decoded bytes are not UTF-8.
    InvalidUtf8,
}

impl Fallback {
    fn as_str(self) -> &'static str {
        match self {
            Self::MalformedEscape => "malformed escape",
            Self::InvalidUtf8 => "invalid utf-8",
        }
    }
}

/// Decodes a possibly percent-encoded token.
///
/// Never fails. When `raw` has no `%` the result borrows `raw` unchanged.
///
/// # Example
///
/// ```rust
/// use restfacade_core::decode;
///
/// assert_eq!(decode("%E6%9D%8E%E5%BC%BA"), "李强");
/// assert_eq!(decode("李强"), "李强");
/// assert_eq!(decode("100%"), "100%");
/// ```
#[must_use]
pub fn decode(raw: &str) -> Cow<'_, str> {
    decode_with(raw, false)
}

/// Decodes a token, optionally treating `+` as an encoded space.
///
/// With `plus_as_space` disabled this is exactly [`decode`]. When enabled,
/// `+` becomes a space and takes part in decoding like any escape; a token
/// with neither `%` nor `+` is still returned unchanged.
#[must_use]
pub fn decode_with(raw: &str, plus_as_space: bool) -> Cow<'_, str> {
    let needs_decoding = raw
        .bytes()
        .any(|b| b == b'%' || (plus_as_space && b == b'+'));
    if !needs_decoding {
        return Cow::Borrowed(raw);
    }

    match decode_escapes(raw, plus_as_space) {
        Ok(decoded) => Cow::Owned(decoded),
        Err(reason) => {
            tracing::trace!(reason = reason.as_str(), "percent-decoding fell back to raw text");
            Cow::Borrowed(raw)
        }
    }
}

fn decode_escapes(raw: &str, plus_as_space: bool) -> Result<String, Fallback> {
    // percent_decode_str passes malformed escapes through; those must fall back.
    if !escapes_well_formed(raw.as_bytes()) {
        return Err(Fallback::MalformedEscape);
    }

    let spaced;
    let input = if plus_as_space {
        spaced = raw.replace('+', " ");
        spaced.as_str()
    } else {
        raw
    };

    percent_decode_str(input)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|_| Fallback::InvalidUtf8)
}

fn escapes_well_formed(bytes: &[u8]) -> bool {
    bytes.iter().enumerate().all(|(i, &b)| {
        b != b'%'
            || matches!(
                (bytes.get(i + 1), bytes.get(i + 2)),
                (Some(hi), Some(lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
            )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_plain_ascii_is_borrowed() {
        let decoded = decode("lily");
        assert_eq!(decoded, "lily");
        assert!(matches!(decoded, Cow::Borrowed(_)));
    }

    #[test]
    fn test_raw_utf8_is_unchanged() {
        assert_eq!(decode("李强"), "李强");
    }

    #[test]
    fn test_percent_encoded_utf8() {
        assert_eq!(decode("%E6%9D%8E%E5%BC%BA"), "李强");
    }

    #[test]
    fn test_lowercase_hex_digits() {
        assert_eq!(decode("%e6%9d%8e"), "李");
    }

    #[test]
    fn test_mixed_escaped_and_literal() {
        assert_eq!(decode("Hello%20World"), "Hello World");
        assert_eq!(decode("李%E5%BC%BA"), "李强");
    }

    #[test]
    fn test_truncated_escape_falls_back() {
        assert_eq!(decode("100%"), "100%");
        assert_eq!(decode("abc%4"), "abc%4");
    }

    #[test]
    fn test_non_hex_escape_falls_back() {
        assert_eq!(decode("%zz"), "%zz");
        assert_eq!(decode("50%off%20now"), "50%off%20now");
    }

    #[test]
    fn test_invalid_utf8_falls_back() {
        // 0xE6 starts a three-byte sequence that never completes
        assert_eq!(decode("%E6%9D"), "%E6%9D");
        assert_eq!(decode("%FF"), "%FF");
    }

    #[test]
    fn test_plus_is_literal_by_default() {
        assert_eq!(decode("rust+lang"), "rust+lang");
        assert_eq!(decode("a+b%20c"), "a+b c");
    }

    #[test]
    fn test_plus_as_space() {
        assert_eq!(decode_with("rust+lang", true), "rust lang");
        assert_eq!(decode_with("a+b%2Bc", true), "a b+c");
    }

    #[test]
    fn test_plus_as_space_still_falls_back() {
        assert_eq!(decode_with("a+b%zz", true), "a+b%zz");
    }

    #[test]
    fn test_escape_after_literal_percent_falls_back() {
        assert_eq!(decode("%%41"), "%%41");
        assert_eq!(decode("%4"), "%4");
        assert_eq!(decode("%E6%9D%8E%"), "%E6%9D%8E%");
    }

    #[test]
    fn test_escapes_well_formed() {
        assert!(escapes_well_formed(b"a%20b%e6"));
        assert!(escapes_well_formed(b"plain"));
        assert!(!escapes_well_formed(b"%g0"));
        assert!(!escapes_well_formed(b"%0"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(decode(""), "");
    }

    proptest! {
        #[test]
        fn prop_identity_without_percent(s in "[^%]*") {
            prop_assert_eq!(decode(&s), s.as_str());
        }

        #[test]
        fn prop_never_panics(s in ".*") {
            let _ = decode(&s);
            let _ = decode_with(&s, true);
        }
    }
}
