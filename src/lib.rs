//! # lzw-codec
//!
//! A pure Rust implementation of Lempel-Ziv-Welch compression.
//!
//! Streams use variable-width codes packed most-significant bit first,
//! starting at 9 bits and growing up to a configurable ceiling (12 bits by
//! default, 16 at most). Two codes are reserved:
//!
//! - `256` **CLEAR**: opens every stream and marks each dictionary reset
//! - `257` **EOI**: ends the stream
//!
//! ## Quick Start
//!
//! ```rust
//! use lzw_codec::{compress, decompress};
//!
//! let packed = compress(b"TOBEORNOTTOBEORTOBEORNOT");
//! let unpacked = decompress(&packed)?;
//! assert_eq!(unpacked, b"TOBEORNOTTOBEORTOBEORNOT");
//! # Ok::<(), lzw_codec::LzwError>(())
//! ```
//!
//! ## Architecture
//!
//! - [`bits`] - MSB-first bit packer and unpacker
//! - [`dictionary`] - forward (encoder) and inverse (decoder) dictionaries
//! - [`compression`] - the encode/decode loops and code-width state
//!
//! Every call owns its dictionary and bit state; nothing is shared between
//! calls.

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod bits;
pub mod codes;
pub mod compression;
pub mod config;
pub mod dictionary;
pub mod error;

// Re-export commonly used types
pub use codes::{Code, CLEAR_CODE, DEFAULT_MAX_BITS, EOI_CODE};
pub use compression::{Compressor, Decompressor, EncodeSummary, LzwDecoder, LzwEncoder};
pub use config::LzwOptions;
pub use error::{LzwError, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compress `data` with the default 12-bit code ceiling.
pub fn compress(data: &[u8]) -> Vec<u8> {
    LzwEncoder::default().encode(data)
}

/// Compress `data` with codes of at most `max_bits` bits (`9..=16`).
pub fn compress_with(data: &[u8], max_bits: u8) -> Result<Vec<u8>> {
    Ok(LzwEncoder::with_max_bits(max_bits)?.encode(data))
}

/// Decompress a stream produced with the default 12-bit code ceiling.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    LzwDecoder::default().decode(data)
}

/// Decompress a stream produced with `max_bits`.
///
/// Passing a different ceiling than the one used to compress yields
/// garbage or an error; the stream cannot detect the mismatch.
pub fn decompress_with(data: &[u8], max_bits: u8) -> Result<Vec<u8>> {
    LzwDecoder::with_max_bits(max_bits)?.decode(data)
}
