//! Code-to-sequence dictionary used by the decoder.

use crate::codes::{Code, FIRST_CODE, LITERAL_COUNT};

#[derive(Debug, Clone, Copy)]
struct Entry {
    prefix: Code,
    last: u8,
    first: u8,
    /// Sequence length; 0 marks the reserved control slots.
    len: u32,
}

impl Entry {
    const RESERVED: Entry = Entry {
        prefix: 0,
        last: 0,
        first: 0,
        len: 0,
    };

    fn literal(byte: u8) -> Self {
        Self {
            prefix: 0,
            last: byte,
            first: byte,
            len: 1,
        }
    }
}

/// Inverse LZW dictionary.
///
/// Entries are stored densely by code. A multi-byte entry links to its
/// prefix code; sequences are materialized on demand, back to front.
#[derive(Debug)]
pub struct DecodeDictionary {
    entries: Vec<Entry>,
}

impl Default for DecodeDictionary {
    fn default() -> Self {
        Self::new()
    }
}

impl DecodeDictionary {
    /// Create a dictionary holding codes `0..=255`.
    pub fn new() -> Self {
        let mut dict = Self {
            entries: Vec::with_capacity(1 << 12),
        };
        dict.reset();
        dict
    }

    /// Drop every multi-byte entry, leaving only the literals.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.entries
            .extend((0..LITERAL_COUNT).map(|b| Entry::literal(b as u8)));
        // CLEAR and EOI
        self.entries.push(Entry::RESERVED);
        self.entries.push(Entry::RESERVED);
    }

    /// Code the next [`insert`](Self::insert) will occupy.
    pub fn next_code(&self) -> Code {
        self.entries.len() as Code
    }

    fn entry(&self, code: Code) -> Option<&Entry> {
        self.entries.get(code as usize).filter(|e| e.len > 0)
    }

    /// Whether `code` maps to a sequence.
    pub fn contains(&self, code: Code) -> bool {
        self.entry(code).is_some()
    }

    /// First byte of the sequence for `code`.
    pub fn first_byte(&self, code: Code) -> Option<u8> {
        self.entry(code).map(|e| e.first)
    }

    /// Sequence for `code`, if present.
    pub fn lookup(&self, code: Code) -> Option<Vec<u8>> {
        let mut out = Vec::new();
        self.append_to(code, &mut out)?;
        Some(out)
    }

    /// Append the sequence for `code` to `out`. Returns `None`, leaving
    /// `out` untouched, when `code` is absent.
    pub fn append_to(&self, code: Code, out: &mut Vec<u8>) -> Option<()> {
        let entry = self.entry(code)?;
        let start = out.len();
        out.resize(start + entry.len as usize, 0);

        let mut cursor = *entry;
        for slot in out[start..].iter_mut().rev() {
            *slot = cursor.last;
            cursor = self.entries[cursor.prefix as usize];
        }
        Some(())
    }

    /// Add `code` as the sequence for `prefix` followed by `byte`.
    ///
    /// `code` must equal [`next_code`](Self::next_code) and `prefix` must
    /// be present.
    pub fn insert(&mut self, code: Code, prefix: Code, byte: u8) {
        debug_assert_eq!(code, self.next_code(), "codes must be inserted in order");
        debug_assert!(code >= FIRST_CODE);
        let head = self.entries[prefix as usize];
        debug_assert!(head.len > 0, "prefix {} is not in the dictionary", prefix);
        self.entries.push(Entry {
            prefix,
            last: byte,
            first: head.first,
            len: head.len + 1,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codes::{CLEAR_CODE, EOI_CODE};

    #[test]
    fn test_literals_present_after_creation() {
        let dict = DecodeDictionary::new();
        assert_eq!(dict.next_code(), FIRST_CODE);
        assert_eq!(dict.lookup(0), Some(vec![0]));
        assert_eq!(dict.lookup(255), Some(vec![255]));
        assert_eq!(dict.first_byte(b'q' as Code), Some(b'q'));
    }

    #[test]
    fn test_control_codes_have_no_sequence() {
        let dict = DecodeDictionary::new();
        assert!(!dict.contains(CLEAR_CODE));
        assert!(!dict.contains(EOI_CODE));
        assert_eq!(dict.lookup(FIRST_CODE), None);
    }

    #[test]
    fn test_insert_chains_prefixes() {
        let mut dict = DecodeDictionary::new();
        dict.insert(258, b'A' as Code, b'B');
        dict.insert(259, 258, b'C');
        assert_eq!(dict.lookup(258), Some(b"AB".to_vec()));
        assert_eq!(dict.lookup(259), Some(b"ABC".to_vec()));
        assert_eq!(dict.first_byte(259), Some(b'A'));
        assert_eq!(dict.next_code(), 260);
    }

    #[test]
    fn test_append_to_preserves_existing_output() {
        let mut dict = DecodeDictionary::new();
        dict.insert(258, b'x' as Code, b'y');
        let mut out = b"--".to_vec();
        assert_eq!(dict.append_to(258, &mut out), Some(()));
        assert_eq!(out, b"--xy");
        assert_eq!(dict.append_to(300, &mut out), None);
        assert_eq!(out, b"--xy");
    }

    #[test]
    fn test_reset_drops_sequences() {
        let mut dict = DecodeDictionary::new();
        dict.insert(258, 1, 2);
        dict.reset();
        assert!(!dict.contains(258));
        assert_eq!(dict.next_code(), FIRST_CODE);
    }
}
