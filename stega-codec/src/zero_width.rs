//! Invisible-alphabet implementation of the annotation codec.
//!
//! The metadata is serialized to JSON and appended to the value as a run of
//! code points from the Variation Selectors Supplement block (U+E0100 to
//! U+E010F), one code point per nibble. The block renders as nothing in
//! every mainstream renderer and does not occur in ordinary text, so the
//! annotated string stays visually identical to the original and `split`
//! can recover the payload with a single scan.

use crate::{AnnotationCodec, AnnotationMetadata, SplitOutcome};

/// First code point of the invisible alphabet.
const ALPHABET_BASE: u32 = 0xE0100;
/// Size of the invisible alphabet (one code point per nibble value).
const ALPHABET_LEN: u32 = 16;

/// Production annotation codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroWidthCodec;

impl ZeroWidthCodec {
    pub fn new() -> Self {
        Self
    }

    fn encode_nibble(nibble: u8) -> char {
        // Nibbles are 0..=15 by construction, so the arithmetic stays inside
        // the alphabet and the conversion cannot fail.
        char::from_u32(ALPHABET_BASE + u32::from(nibble)).unwrap_or('\u{E0100}')
    }

    fn decode_alphabet_char(c: char) -> Option<u8> {
        let cp = c as u32;
        if (ALPHABET_BASE..ALPHABET_BASE + ALPHABET_LEN).contains(&cp) {
            Some((cp - ALPHABET_BASE) as u8)
        } else {
            None
        }
    }
}

impl AnnotationCodec for ZeroWidthCodec {
    fn combine(&self, value: &str, metadata: &AnnotationMetadata) -> String {
        let payload = match serde_json::to_string(metadata) {
            Ok(json) => json,
            // Metadata is two plain string fields; serialization cannot fail
            // in practice. Leave the value unannotated rather than panic.
            Err(_) => return value.to_owned(),
        };

        let mut annotated = String::with_capacity(value.len() + payload.len() * 8);
        annotated.push_str(value);
        for &byte in payload.as_bytes() {
            annotated.push(Self::encode_nibble(byte >> 4));
            annotated.push(Self::encode_nibble(byte & 0x0F));
        }
        annotated
    }

    fn split(&self, input: &str) -> SplitOutcome {
        let mut cleaned = String::with_capacity(input.len());
        let mut nibbles = Vec::new();

        for c in input.chars() {
            match Self::decode_alphabet_char(c) {
                Some(nibble) => nibbles.push(nibble),
                None => cleaned.push(c),
            }
        }

        let bytes: Vec<u8> = nibbles
            .chunks_exact(2)
            .map(|pair| (pair[0] << 4) | pair[1])
            .collect();

        let metadata = serde_json::from_slice(&bytes).ok();

        SplitOutcome { cleaned, metadata }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata() -> AnnotationMetadata {
        AnnotationMetadata::new("33", "title")
    }

    #[test]
    fn combine_then_split_recovers_value_and_metadata() {
        let codec = ZeroWidthCodec::new();
        let annotated = codec.combine("Chapter 1", &metadata());

        let outcome = codec.split(&annotated);
        assert_eq!(outcome.cleaned, "Chapter 1");
        assert_eq!(outcome.metadata, Some(metadata()));
    }

    #[test]
    fn annotated_value_starts_with_visible_text() {
        let codec = ZeroWidthCodec::new();
        let annotated = codec.combine("hello", &metadata());

        assert!(annotated.starts_with("hello"));
        assert_ne!(annotated, "hello");
        // Everything past the visible text comes from the invisible block.
        assert!(annotated["hello".len()..]
            .chars()
            .all(|c| ZeroWidthCodec::decode_alphabet_char(c).is_some()));
    }

    #[test]
    fn split_of_plain_text_is_identity_with_no_metadata() {
        let codec = ZeroWidthCodec::new();
        let outcome = codec.split("plain text, no annotation");

        assert_eq!(outcome.cleaned, "plain text, no annotation");
        assert_eq!(outcome.metadata, None);
    }

    #[test]
    fn split_preserves_unicode_outside_the_alphabet() {
        let codec = ZeroWidthCodec::new();
        let value = "café ✓ 日本語";
        let outcome = codec.split(&codec.combine(value, &metadata()));

        assert_eq!(outcome.cleaned, value);
    }

    #[test]
    fn recombining_replaces_stale_metadata() {
        let codec = ZeroWidthCodec::new();
        let old = codec.combine("value", &AnnotationMetadata::new("old-project", "old-key"));

        let cleaned = codec.split(&old).cleaned;
        let fresh = codec.combine(&cleaned, &metadata());

        assert_eq!(codec.split(&fresh).metadata, Some(metadata()));
    }

    #[test]
    fn truncated_annotation_still_cleans() {
        let codec = ZeroWidthCodec::new();
        let mut annotated = codec.combine("value", &metadata());
        annotated.pop();

        let outcome = codec.split(&annotated);
        assert_eq!(outcome.cleaned, "value");
        assert_eq!(outcome.metadata, None);
    }

    #[test]
    fn empty_value_round_trips() {
        let codec = ZeroWidthCodec::new();
        let outcome = codec.split(&codec.combine("", &metadata()));

        assert_eq!(outcome.cleaned, "");
        assert_eq!(outcome.metadata, Some(metadata()));
    }
}
