//! Error types for hanzi58 encoding and decoding operations.

use thiserror::Error;

/// Errors that can occur while encoding, decoding, or batching.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The input had the wrong shape, e.g. a scalar string handed to a batch
    /// operation through one of the dynamic-language bindings.
    #[error("Type mismatch: expected {expected}")]
    TypeMismatch { expected: &'static str },

    /// Encoding hit a character outside the base58ext alphabet.
    #[error("Unsupported character: {0:?}")]
    UnsupportedCharacter(char),

    /// Decoding hit a CJK character that is not one of the table's glyphs.
    #[error("Unrecognized glyph: {0:?}")]
    UnrecognizedGlyph(char),
}

/// Convenience alias used throughout hanzi58.
pub type Result<T> = std::result::Result<T, CodecError>;
