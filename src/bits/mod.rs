//! Bit-level I/O for variable-width codes.
//!
//! Codes are packed most-significant bit first: the first bit written
//! lands in bit 7 of the first output byte. A trailing partial byte is
//! padded with zero bits on its low end.

pub mod reader;
pub mod writer;

pub use reader::BitReader;
pub use writer::BitWriter;

/// Widest value a single read or write may carry.
pub const MAX_BIT_COUNT: u8 = 32;

#[inline]
pub(crate) fn check_bit_count(bit_count: u8) {
    assert!(
        bit_count > 0 && bit_count <= MAX_BIT_COUNT,
        "bit count must be in 1..=32, got {}",
        bit_count
    );
}
