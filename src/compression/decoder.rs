//! LZW decoder.

use tracing::debug;

use crate::bits::BitReader;
use crate::codes::{Code, CLEAR_CODE, EOI_CODE};
use crate::config::LzwOptions;
use crate::dictionary::DecodeDictionary;
use crate::error::{LzwError, Result};

use super::state::CodeState;

/// LZW decompressor.
///
/// `max_bits` must match the value the stream was encoded with; the
/// stream does not record it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LzwDecoder {
    options: LzwOptions,
}

impl LzwDecoder {
    pub fn new(options: LzwOptions) -> Self {
        Self { options }
    }

    /// Decoder with the given code width ceiling (`9..=16`).
    pub fn with_max_bits(max_bits: u8) -> Result<Self> {
        Ok(Self::new(LzwOptions::new(max_bits)?))
    }

    pub fn options(&self) -> LzwOptions {
        self.options
    }

    /// Decompress a complete stream.
    ///
    /// Nothing is returned on failure; a stream is either decoded up to its
    /// EOI or rejected.
    pub fn decode(&self, data: &[u8]) -> Result<Vec<u8>> {
        let mut session = DecodeSession::new(self.options, data);
        let output = session.run()?;
        debug!(
            input_len = data.len(),
            output_len = output.len(),
            "lzw decode finished"
        );
        Ok(output)
    }
}

impl super::Decompressor for LzwDecoder {
    fn decompress(&self, source: &[u8]) -> Result<Vec<u8>> {
        self.decode(source)
    }
}

struct DecodeSession<'a> {
    reader: BitReader<'a>,
    dictionary: DecodeDictionary,
    state: CodeState,
    output: Vec<u8>,
    old_code: Option<Code>,
}

impl<'a> DecodeSession<'a> {
    fn new(options: LzwOptions, data: &'a [u8]) -> Self {
        Self {
            reader: BitReader::new(data),
            dictionary: DecodeDictionary::new(),
            state: CodeState::new(options),
            output: Vec::with_capacity(data.len() * 2),
            old_code: None,
        }
    }

    fn read_code(&mut self) -> Result<Code> {
        let code_size = self.state.code_size();
        self.reader.read(code_size).ok_or(LzwError::UnexpectedEof {
            expected_bits: code_size,
        })
    }

    fn run(&mut self) -> Result<Vec<u8>> {
        let first = self.read_code()?;
        if first != CLEAR_CODE {
            return Err(LzwError::MissingClear { found: first });
        }

        let mut code = first;
        loop {
            match code {
                CLEAR_CODE => {
                    if !self.restart()? {
                        break;
                    }
                }
                EOI_CODE => break,
                _ if self.dictionary.contains(code) => self.known_code(code)?,
                _ => self.deferred_code(code)?,
            }
            code = self.read_code()?;
        }

        Ok(std::mem::take(&mut self.output))
    }

    /// Reset after a CLEAR and decode the code that opens the new epoch.
    /// Returns `false` if that code is EOI.
    fn restart(&mut self) -> Result<bool> {
        if self.old_code.is_some() {
            debug!(output_len = self.output.len(), "CLEAR received, dictionary reset");
        }
        self.dictionary.reset();
        self.state.reset();
        self.old_code = None;

        let code = self.read_code()?;
        if code == EOI_CODE {
            return Ok(false);
        }
        self.dictionary
            .append_to(code, &mut self.output)
            .ok_or(LzwError::MissingPrevious { code })?;
        self.old_code = Some(code);
        Ok(true)
    }

    /// `code` is already in the dictionary.
    fn known_code(&mut self, code: Code) -> Result<()> {
        let old_code = self.old_code.ok_or(LzwError::MissingPrevious { code })?;
        let first = self.sequence_head(code)?;
        self.dictionary.append_to(code, &mut self.output);

        self.add_entry(old_code, first);
        self.old_code = Some(code);
        Ok(())
    }

    /// `code` is the entry about to be assigned: its sequence is the
    /// previous sequence followed by that sequence's own first byte.
    fn deferred_code(&mut self, code: Code) -> Result<()> {
        let old_code = self.old_code.ok_or(LzwError::MissingPrevious { code })?;
        let next_code = self.state.next_code();
        if code != next_code {
            return Err(LzwError::InvalidCode { code, next_code });
        }

        let first = self.sequence_head(old_code)?;
        self.dictionary.append_to(old_code, &mut self.output);
        self.output.push(first);

        self.add_entry(old_code, first);
        self.old_code = Some(code);
        Ok(())
    }

    fn sequence_head(&self, code: Code) -> Result<u8> {
        self.dictionary
            .first_byte(code)
            .ok_or(LzwError::InvalidCode {
                code,
                next_code: self.state.next_code(),
            })
    }

    fn add_entry(&mut self, prefix: Code, byte: u8) {
        if self.state.is_full() {
            return;
        }
        self.dictionary.insert(self.state.next_code(), prefix, byte);
        self.state.advance_decoder();
    }
}
