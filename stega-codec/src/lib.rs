//! Steganographic annotation codec for StegaStore Engine
//!
//! Values returned by the config API carry an invisible, machine-extractable
//! annotation: metadata embedded in the text without altering its visible
//! content. This crate defines the codec seam consumed by the HTTP layer:
//!
//! - [`AnnotationCodec`] — the capability trait with exactly two operations,
//!   `combine` (read path) and `split` (write path)
//! - [`ZeroWidthCodec`] — the production codec, embedding metadata as
//!   invisible Unicode code points
//!
//! Handlers depend only on `Arc<dyn AnnotationCodec>`, so alternative or mock
//! codecs can be substituted in tests.

pub mod zero_width;

pub use zero_width::ZeroWidthCodec;

use serde::{Deserialize, Serialize};

/// Metadata embedded into an annotated value.
///
/// Carries the coordinates of the entry the value was read from, so tooling
/// that extracts the annotation can trace any pasted text back to its source
/// entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationMetadata {
    pub project_id: String,
    pub key: String,
}

impl AnnotationMetadata {
    pub fn new(project_id: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            key: key.into(),
        }
    }
}

/// Result of splitting a possibly-annotated input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOutcome {
    /// The input with any embedded annotation stripped.
    pub cleaned: String,
    /// Metadata recovered from the annotation, if one was present.
    pub metadata: Option<AnnotationMetadata>,
}

/// Codec capability for embedding and extracting invisible annotations.
///
/// `combine` is applied on the read path, immediately before a value is
/// returned to the caller, with the *current* request's metadata. `split` is
/// applied on the write path, before persistence, so stored values never
/// carry annotation noise pasted in from previously-annotated text.
pub trait AnnotationCodec: Send + Sync {
    /// Produce a string visually identical to `value` that carries
    /// `metadata` recoverably by [`AnnotationCodec::split`].
    fn combine(&self, value: &str, metadata: &AnnotationMetadata) -> String;

    /// Strip any embedded annotation from `input`, returning the visually
    /// equivalent text and whatever metadata was embedded.
    fn split(&self, input: &str) -> SplitOutcome;
}
