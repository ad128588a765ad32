//! Parsed view of a fetched payload, as far as include resolution is concerned.

/// A configuration payload that may declare further sources to include.
pub trait Document {
    /// `true` when the payload carries no content; its includes are never followed.
    fn is_empty(&self) -> bool;

    /// Include references in declaration order, relative or absolute.
    fn includes(&self) -> &[String];
}
