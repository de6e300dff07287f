//! Code values and width limits shared by the encoder and decoder.

/// A dictionary code. Wide enough to hold `2^16`, the first value past a
/// full 16-bit table.
pub type Code = u32;

/// Resets the dictionary.
pub const CLEAR_CODE: Code = 256;

/// Terminates the stream.
pub const EOI_CODE: Code = 257;

/// First code assigned to a multi-byte sequence after each reset.
pub const FIRST_CODE: Code = 258;

/// Number of single-byte literal codes (`0..=255`).
pub const LITERAL_COUNT: Code = 256;

/// Code width at the start of every dictionary epoch.
pub const MIN_CODE_SIZE: u8 = 9;

/// Default code width ceiling.
pub const DEFAULT_MAX_BITS: u8 = 12;

/// Largest supported code width ceiling.
pub const MAX_CODE_SIZE: u8 = 16;
