//! LZW compression and decompression.
//!
//! A stream is a sequence of variable-width codes packed MSB-first:
//! - **CLEAR** (256) opens the stream and marks every dictionary reset
//! - **EOI** (257) terminates it
//! - codes `0..=255` are literal bytes, `258..` are dictionary sequences
//!
//! Code width starts at 9 bits in every dictionary epoch and grows by one
//! bit as the dictionary fills, up to the configured ceiling.

pub mod decoder;
pub mod encoder;
pub mod state;

pub use decoder::LzwDecoder;
pub use encoder::{EncodeSummary, LzwEncoder};
pub use state::CodeState;

use crate::error::Result;

/// Trait for compressing data.
pub trait Compressor {
    /// Compress the whole of `source`.
    fn compress(&self, source: &[u8]) -> Result<Vec<u8>>;
}

/// Trait for decompressing data.
pub trait Decompressor {
    /// Decompress the whole of `source`.
    fn decompress(&self, source: &[u8]) -> Result<Vec<u8>>;
}
