//! Lookup failure for unrecognized variant tags.

use thiserror::Error;

/// Error returned when a lookup tag falls outside a registry's supported set.
///
/// This is the single error kind of the whole dispatch layer: the registry
/// table is static, so the only way a lookup can fail is an unrecognized tag.
/// The error names the family and lists the supported tags so the message is
/// actionable on its own.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown {} variant `{}`, expected one of: {}", .family, .tag, .expected.join(", "))]
pub struct UnknownVariant {
    /// The product family whose registry rejected the tag.
    pub family: &'static str,
    /// The unrecognized tag, as given by the caller.
    pub tag: String,
    /// Supported tags, sorted.
    pub expected: Vec<&'static str>,
}

impl UnknownVariant {
    pub(crate) fn new(family: &'static str, tag: &str, expected: &[&'static str]) -> Self {
        UnknownVariant {
            family,
            tag: tag.to_owned(),
            expected: expected.to_vec(),
        }
    }
}
