//! Error kinds surfaced by range parsing and the range handles.

use thiserror::Error;

/// Errors produced while parsing, validating or reading an IP address range.
///
/// All failures are deterministic functions of the input and are returned
/// synchronously; nothing is retried internally. Callers match on the kind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RangeError {
    /// The text does not match the family-specific address grammar.
    #[error("invalid IP address contained: {0}")]
    MalformedAddress(String),
    /// The range start address is greater than the end address.
    #[error("invalid IP address range specified: {start}-{end}")]
    InvertedRange {
        /// Formatted start address.
        start: String,
        /// Formatted end address.
        end: String,
    },
    /// An accessor was called before any range was successfully assigned.
    #[error("IP address range not set")]
    RangeNotSet,
}
