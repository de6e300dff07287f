//! LZW encoder.

use tracing::debug;

use crate::bits::BitWriter;
use crate::codes::{Code, CLEAR_CODE, EOI_CODE};
use crate::config::LzwOptions;
use crate::dictionary::EncodeDictionary;
use crate::error::Result;

use super::state::CodeState;

/// Counters collected while encoding one buffer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeSummary {
    /// Codes written, CLEAR and EOI included.
    pub codes_written: usize,
    /// CLEAR codes written after the leading one.
    pub dictionary_resets: usize,
    /// Width of the final EOI code.
    pub final_code_size: u8,
}

/// LZW compressor.
///
/// Holds only configuration; every call builds and drops its own
/// dictionary and bit state.
#[derive(Debug, Clone, Copy, Default)]
pub struct LzwEncoder {
    options: LzwOptions,
}

impl LzwEncoder {
    pub fn new(options: LzwOptions) -> Self {
        Self { options }
    }

    /// Encoder with the given code width ceiling (`9..=16`).
    pub fn with_max_bits(max_bits: u8) -> Result<Self> {
        Ok(Self::new(LzwOptions::new(max_bits)?))
    }

    pub fn options(&self) -> LzwOptions {
        self.options
    }

    /// Compress `data` into a CLEAR-prefixed, EOI-terminated stream.
    pub fn encode(&self, data: &[u8]) -> Vec<u8> {
        self.encode_with_summary(data).0
    }

    /// Like [`encode`](Self::encode), also returning stream counters.
    pub fn encode_with_summary(&self, data: &[u8]) -> (Vec<u8>, EncodeSummary) {
        let mut session = EncodeSession::new(self.options, data.len());
        session.run(data);
        let (output, summary) = session.finish();
        debug!(
            input_len = data.len(),
            output_len = output.len(),
            codes = summary.codes_written,
            resets = summary.dictionary_resets,
            "lzw encode finished"
        );
        (output, summary)
    }
}

impl super::Compressor for LzwEncoder {
    fn compress(&self, source: &[u8]) -> Result<Vec<u8>> {
        Ok(self.encode(source))
    }
}

struct EncodeSession {
    dictionary: EncodeDictionary,
    state: CodeState,
    writer: BitWriter,
    summary: EncodeSummary,
}

impl EncodeSession {
    fn new(options: LzwOptions, input_len: usize) -> Self {
        Self {
            dictionary: EncodeDictionary::new(),
            state: CodeState::new(options),
            writer: BitWriter::with_capacity(input_len / 2 + 4),
            summary: EncodeSummary::default(),
        }
    }

    fn emit(&mut self, code: Code) {
        self.writer.write(code, self.state.code_size());
        self.summary.codes_written += 1;
    }

    fn run(&mut self, data: &[u8]) {
        self.emit(CLEAR_CODE);

        let mut bytes = data.iter();
        // An empty match extended by any byte is that byte's literal code,
        // so the first byte always opens the match.
        let Some(&first) = bytes.next() else {
            self.emit(EOI_CODE);
            return;
        };
        let mut omega = first as Code;

        for &byte in bytes {
            if let Some(code) = self.dictionary.child(omega, byte) {
                omega = code;
                continue;
            }

            self.emit(omega);
            if !self.state.is_full() {
                self.dictionary
                    .insert_child(omega, byte, self.state.next_code());
                self.state.advance_encoder();
            } else {
                self.emit(CLEAR_CODE);
                self.dictionary.reset();
                self.state.reset();
                self.summary.dictionary_resets += 1;
                debug!(codes_written = self.summary.codes_written, "dictionary full, emitted CLEAR");
            }
            omega = byte as Code;
        }

        self.emit(omega);
        self.emit(EOI_CODE);
    }

    fn finish(mut self) -> (Vec<u8>, EncodeSummary) {
        self.summary.final_code_size = self.state.code_size();
        (self.writer.finish(), self.summary)
    }
}
