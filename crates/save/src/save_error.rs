// ---------------------------------------------------------------------------
// SaveError: typed errors for the ordinance state codec
// ---------------------------------------------------------------------------

use std::fmt;

/// Errors that can occur while decoding persisted ordinance state.
///
/// Encoding targets an in-memory buffer and cannot fail; every variant here
/// is a decode-side fault. Any error means the persisted state is unusable
/// and the caller keeps the record it already has.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveError {
    /// The stream ended before the field being read was complete.
    UnexpectedEof {
        /// Bytes the field still needed.
        needed: usize,
        /// Bytes left in the stream.
        remaining: usize,
    },
    /// The leading state version was not the supported version.
    VersionMismatch { expected: u16, found: u16 },
    /// A must-equal field of the exemplar block held the wrong value.
    ExemplarFieldMismatch {
        field: &'static str,
        expected: u32,
        found: u32,
    },
    /// A length-prefixed string was not valid UTF-8.
    InvalidString,
}

impl fmt::Display for SaveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveError::UnexpectedEof { needed, remaining } => write!(
                f,
                "unexpected end of stream: needed {needed} more bytes, {remaining} remaining"
            ),
            SaveError::VersionMismatch { expected, found } => write!(
                f,
                "ordinance state version mismatch: expected {expected}, found {found}"
            ),
            SaveError::ExemplarFieldMismatch {
                field,
                expected,
                found,
            } => write!(
                f,
                "exemplar block field {field}: expected {expected:#010x}, found {found:#010x}"
            ),
            SaveError::InvalidString => write!(f, "string field is not valid UTF-8"),
        }
    }
}

impl std::error::Error for SaveError {}
