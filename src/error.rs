//! Error types for lzw-codec

use thiserror::Error;

use crate::codes::Code;

/// Main error type for LZW operations.
///
/// Every variant describes a malformed stream or an invalid configuration.
/// Misuse of the bit-level primitives (a bit count outside `1..=32`) is a
/// programming error and panics instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LzwError {
    /// The stream does not begin with a CLEAR code
    #[error("Missing CLEAR at start of stream: found code {found}")]
    MissingClear { found: Code },

    /// Input ran out while a code was still expected
    #[error("Unexpected end of input while reading a {expected_bits}-bit code")]
    UnexpectedEof { expected_bits: u8 },

    /// A code outside the dictionary was referenced before any previous code
    #[error("Code {code} referenced before any previous code was decoded")]
    MissingPrevious { code: Code },

    /// A code beyond the next assignable dictionary slot
    #[error("Invalid code {code}: next assignable code is {next_code}")]
    InvalidCode { code: Code, next_code: Code },

    /// Maximum code width outside the supported range
    #[error("Invalid maximum code width: {0} (expected 9..=16)")]
    InvalidMaxBits(u8),
}

/// Result type alias for lzw-codec operations
pub type Result<T> = std::result::Result<T, LzwError>;
