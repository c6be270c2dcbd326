/// Length of a blob key: a hex-encoded SHA-256 digest.
pub const BLOB_KEY_LEN: usize = 64;

/// Returns `true` if every character of `s` is a hex digit (either case).
///
/// The empty string is vacuously hex. Length is deliberately not checked
/// here; see [`is_blob_key`] for the full blob-key test.
pub fn is_hex(s: &str) -> bool {
    s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Returns `true` if `key` is exactly 64 hex characters.
///
/// This is the filter that separates blob objects from any incidental
/// non-blob object sharing the bucket: anything that is not a full
/// hex-encoded SHA-256 digest is not a blob.
pub fn is_blob_key(key: &str) -> bool {
    key.len() == BLOB_KEY_LEN && is_hex(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn hex_accepts_both_cases() {
        assert!(is_hex("abcdef0123456789"));
        assert!(is_hex("ABCDEF0123456789"));
        assert!(is_hex("aAbBcC"));
    }

    #[test]
    fn hex_rejects_non_hex_characters() {
        assert!(!is_hex("ghijkl"));
        assert!(!is_hex("abc!def"));
        assert!(!is_hex("deadbeef "));
    }

    #[test]
    fn empty_string_is_vacuously_hex() {
        assert!(is_hex(""));
        assert!(!is_blob_key(""));
    }

    #[test]
    fn blob_key_requires_exact_length() {
        let valid = "a".repeat(64);
        assert!(is_blob_key(&valid));
        assert!(!is_blob_key(&"a".repeat(63)));
        assert!(!is_blob_key(&"a".repeat(65)));
    }

    #[test]
    fn blob_key_accepts_mixed_case() {
        let key = "AbCdEf0123456789".repeat(4);
        assert_eq!(key.len(), 64);
        assert!(is_blob_key(&key));
    }

    #[test]
    fn blob_key_rejects_non_hex_at_any_position() {
        let mut key = "0".repeat(64);
        key.replace_range(31..32, "g");
        assert!(!is_blob_key(&key));
    }

    proptest! {
        #[test]
        fn any_64_hex_chars_is_a_blob_key(key in "[0-9a-fA-F]{64}") {
            prop_assert!(is_blob_key(&key));
        }

        #[test]
        fn wrong_length_is_never_a_blob_key(key in "[0-9a-fA-F]{0,63}") {
            prop_assert!(!is_blob_key(&key));
        }

        #[test]
        fn a_single_non_hex_byte_fails_validation(
            prefix in "[0-9a-fA-F]{0,63}",
            bad in "[g-z!-/]",
        ) {
            let mut key = prefix;
            key.push_str(&bad);
            while key.len() < 64 {
                key.push('0');
            }
            key.truncate(64);
            prop_assert!(!is_blob_key(&key));
        }
    }
}
