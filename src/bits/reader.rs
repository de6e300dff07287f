//! MSB-first bit unpacker.

use super::check_bit_count;

/// Reads variable-width values from a byte slice, most significant bit
/// first. Bytes are pulled from the input only as they are needed.
#[derive(Debug)]
pub struct BitReader<'a> {
    source: &'a [u8],
    position: usize,
    bit_buffer: u64,
    /// Number of valid bits held in the low end of `bit_buffer`.
    bit_count: u8,
}

impl<'a> BitReader<'a> {
    /// Create a reader over `source`.
    pub fn new(source: &'a [u8]) -> Self {
        Self {
            source,
            position: 0,
            bit_buffer: 0,
            bit_count: 0,
        }
    }

    /// Total number of bits consumed by successful reads.
    pub fn position_in_bits(&self) -> u64 {
        self.position as u64 * 8 - self.bit_count as u64
    }

    /// Read the next `bit_count` bits as an unsigned value.
    ///
    /// Returns `None` when the input holds fewer than `bit_count` bits;
    /// whether that is an error is up to the caller.
    ///
    /// # Panics
    ///
    /// Panics if `bit_count` is 0 or greater than 32.
    pub fn read(&mut self, bit_count: u8) -> Option<u32> {
        check_bit_count(bit_count);

        while self.bit_count < bit_count {
            let byte = *self.source.get(self.position)?;
            self.bit_buffer = (self.bit_buffer << 8) | byte as u64;
            self.bit_count += 8;
            self.position += 1;
        }

        let shift = self.bit_count - bit_count;
        let value = (self.bit_buffer >> shift) & ((1u64 << bit_count) - 1);
        self.bit_count = shift;
        self.bit_buffer &= (1u64 << shift) - 1;
        Some(value as u32)
    }
}
