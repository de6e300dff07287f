//! Codec configuration.

use crate::codes::{Code, DEFAULT_MAX_BITS, MAX_CODE_SIZE, MIN_CODE_SIZE};
use crate::error::{LzwError, Result};

/// Options shared by [`LzwEncoder`](crate::LzwEncoder) and
/// [`LzwDecoder`](crate::LzwDecoder).
///
/// Both sides of a stream must use the same `max_bits`; the value is not
/// recorded in the stream itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LzwOptions {
    /// Ceiling on the code width, in bits.
    ///
    /// Default: `12`. Valid range: `9..=16`.
    max_bits: u8,
}

impl Default for LzwOptions {
    fn default() -> Self {
        Self {
            max_bits: DEFAULT_MAX_BITS,
        }
    }
}

impl LzwOptions {
    /// Create options with the given code width ceiling.
    pub fn new(max_bits: u8) -> Result<Self> {
        if !(MIN_CODE_SIZE..=MAX_CODE_SIZE).contains(&max_bits) {
            return Err(LzwError::InvalidMaxBits(max_bits));
        }
        Ok(Self { max_bits })
    }

    /// Code width ceiling.
    pub fn max_bits(&self) -> u8 {
        self.max_bits
    }

    /// Number of codes a full dictionary holds (`2^max_bits`).
    pub fn max_code_count(&self) -> Code {
        1 << self.max_bits
    }
}
