//! Error types for target triple parsing.

/// Errors that can occur while parsing a target triple string.
#[derive(Debug, thiserror::Error)]
pub enum TripleError {
    /// The input string was empty.
    #[error("empty target triple")]
    Empty,

    /// Fewer than three dash-separated segments.
    #[error("target triple '{input}' has {count} segments, expected at least 3")]
    TooFewSegments {
        /// The offending input.
        input: String,
        /// Number of segments found.
        count: usize,
    },

    /// A segment between dashes was empty.
    #[error("target triple '{input}' has an empty segment at position {index}")]
    EmptySegment {
        /// The offending input.
        input: String,
        /// Zero-based index of the empty segment.
        index: usize,
    },
}

/// Result type for triple operations.
pub type Result<T> = std::result::Result<T, TripleError>;
