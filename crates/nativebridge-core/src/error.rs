//! Error types for decoding the bridge's textual formats.
//!
//! Every format the bridge emits (type descriptors, method signatures and the
//! encoded signature set) has a decoder, and all of them report failures
//! through [`DecodeError`]. Offsets are byte offsets into the input string.

use thiserror::Error;

/// Errors produced while decoding descriptors, signatures or signature sets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Input ended where more data was required.
    #[error("unexpected end of input at offset {offset}")]
    UnexpectedEnd { offset: usize },

    /// A type descriptor started with a code that is not part of the grammar.
    #[error("unknown type code '{code}' at offset {offset}")]
    UnknownTypeCode { code: char, offset: usize },

    /// A specific character was required but something else was found.
    #[error("expected '{expected}' at offset {offset}, found '{found}'")]
    Expected {
        expected: char,
        found: char,
        offset: usize,
    },

    /// A backslash was the last character of the input.
    #[error("dangling escape at offset {offset}")]
    DanglingEscape { offset: usize },

    /// Input continued after a complete value was decoded.
    #[error("trailing input at offset {offset}")]
    TrailingInput { offset: usize },

    /// Arrays and optionals were nested deeper than the decoder allows.
    #[error("type nesting too deep at offset {offset}")]
    TooDeep { offset: usize },

    /// A name that must be non-empty was empty.
    #[error("empty name at offset {offset}")]
    EmptyName { offset: usize },
}

impl DecodeError {
    /// Byte offset in the input where the error was detected.
    pub fn offset(&self) -> usize {
        match self {
            DecodeError::UnexpectedEnd { offset }
            | DecodeError::UnknownTypeCode { offset, .. }
            | DecodeError::Expected { offset, .. }
            | DecodeError::DanglingEscape { offset }
            | DecodeError::TrailingInput { offset }
            | DecodeError::TooDeep { offset }
            | DecodeError::EmptyName { offset } => *offset,
        }
    }
}

/// Result alias for decoding operations.
pub type DecodeResult<T> = Result<T, DecodeError>;
