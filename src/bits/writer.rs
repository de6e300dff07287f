//! MSB-first bit packer.

use super::check_bit_count;

/// Accumulates variable-width values into a byte buffer, most significant
/// bit first.
#[derive(Debug, Default)]
pub struct BitWriter {
    buffer: Vec<u8>,
    /// Number of bits already filled in `last_byte` (0..=7).
    bit_shift: u8,
    last_byte: u8,
}

impl BitWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty writer with room for `capacity` output bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            bit_shift: 0,
            last_byte: 0,
        }
    }

    /// Total number of bits written so far.
    pub fn position_in_bits(&self) -> u64 {
        self.buffer.len() as u64 * 8 + self.bit_shift as u64
    }

    /// Append the low `bit_count` bits of `value`, most significant first.
    ///
    /// # Panics
    ///
    /// Panics if `bit_count` is 0 or greater than 32.
    pub fn write(&mut self, value: u32, bit_count: u8) {
        check_bit_count(bit_count);

        let mut remaining = bit_count;
        while remaining > 0 {
            let free = 8 - self.bit_shift;
            let take = remaining.min(free);
            let shift = remaining - take;
            let chunk = ((value >> shift) & ((1u32 << take) - 1)) as u8;

            self.last_byte |= chunk << (free - take);
            self.bit_shift += take;
            remaining -= take;

            if self.bit_shift == 8 {
                self.buffer.push(self.last_byte);
                self.bit_shift = 0;
                self.last_byte = 0;
            }
        }
    }

    /// Flush the partial byte (zero-padded on the right) and return the
    /// packed buffer.
    pub fn finish(mut self) -> Vec<u8> {
        if self.bit_shift > 0 {
            self.buffer.push(self.last_byte);
        }
        self.buffer
    }
}
