//! Code width and next-code bookkeeping.
//!
//! The encoder widens codes once `next_code` reaches `2^code_size`. The
//! decoder assigns each entry one code later than the encoder does, so it
//! widens one step earlier, at `2^code_size - 1`. Both rules describe the
//! same point in the stream.

use tracing::trace;

use crate::codes::{Code, FIRST_CODE, MIN_CODE_SIZE};
use crate::config::LzwOptions;

/// Width and allocation state for one side of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeState {
    code_size: u8,
    next_code: Code,
    max_bits: u8,
}

impl CodeState {
    /// Create the state at the start of a dictionary epoch.
    pub fn new(options: LzwOptions) -> Self {
        Self {
            code_size: MIN_CODE_SIZE,
            next_code: FIRST_CODE,
            max_bits: options.max_bits(),
        }
    }

    /// Return to the start of a dictionary epoch.
    pub fn reset(&mut self) {
        self.code_size = MIN_CODE_SIZE;
        self.next_code = FIRST_CODE;
    }

    /// Width of the next code read or written.
    pub fn code_size(&self) -> u8 {
        self.code_size
    }

    /// Next code to be assigned.
    pub fn next_code(&self) -> Code {
        self.next_code
    }

    /// `true` once every code below `2^max_bits` is assigned.
    pub fn is_full(&self) -> bool {
        self.next_code >= 1 << self.max_bits
    }

    /// Record an encoder-side assignment.
    pub fn advance_encoder(&mut self) {
        self.next_code += 1;
        if self.next_code == 1 << self.code_size {
            self.grow();
        }
    }

    /// Record a decoder-side assignment.
    pub fn advance_decoder(&mut self) {
        self.next_code += 1;
        if self.next_code == (1 << self.code_size) - 1 {
            self.grow();
        }
    }

    fn grow(&mut self) {
        if self.code_size < self.max_bits {
            self.code_size += 1;
            trace!(code_size = self.code_size, next_code = self.next_code, "code width grew");
        }
    }
}
