//! Sequence-to-code dictionary used by the encoder.

use ahash::AHashMap;

use crate::codes::{Code, FIRST_CODE, LITERAL_COUNT};

/// Forward LZW dictionary.
///
/// Single-byte sequences are implicit: byte `b` always maps to code `b`.
/// Longer sequences are keyed by `(prefix code, last byte)`, which makes
/// the map a trie flattened into one hash table.
#[derive(Debug, Default)]
pub struct EncodeDictionary {
    children: AHashMap<(Code, u8), Code>,
}

impl EncodeDictionary {
    /// Create a dictionary holding the 256 single-byte sequences.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every multi-byte sequence, leaving only the literals.
    pub fn reset(&mut self) {
        self.children.clear();
    }

    /// Number of sequences present, literals included.
    pub fn len(&self) -> usize {
        LITERAL_COUNT as usize + self.children.len()
    }

    /// Always `false`: the literals are never removed.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Code for `prefix` extended by `byte`, if present.
    #[inline]
    pub fn child(&self, prefix: Code, byte: u8) -> Option<Code> {
        self.children.get(&(prefix, byte)).copied()
    }

    /// Add `prefix` extended by `byte` as `code`.
    ///
    /// The extension must not already be present.
    #[inline]
    pub fn insert_child(&mut self, prefix: Code, byte: u8, code: Code) {
        debug_assert!(code >= FIRST_CODE, "code {} collides with reserved range", code);
        let previous = self.children.insert((prefix, byte), code);
        debug_assert!(previous.is_none(), "sequence inserted twice");
    }

    /// Code for an exact byte sequence.
    pub fn lookup(&self, sequence: &[u8]) -> Option<Code> {
        let (&first, rest) = sequence.split_first()?;
        rest.iter()
            .try_fold(first as Code, |prefix, &byte| self.child(prefix, byte))
    }

    /// Add `sequence` as `code`. Every proper prefix of `sequence` must
    /// already be present; returns `false` and leaves the dictionary
    /// unchanged otherwise.
    pub fn insert(&mut self, sequence: &[u8], code: Code) -> bool {
        let Some((&last, prefix)) = sequence.split_last() else {
            return false;
        };
        match self.lookup(prefix) {
            Some(prefix_code) => {
                self.insert_child(prefix_code, last, code);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literals_present_after_creation() {
        let dict = EncodeDictionary::new();
        assert_eq!(dict.len(), 256);
        for b in 0..=255u8 {
            assert_eq!(dict.lookup(&[b]), Some(b as Code));
        }
        assert_eq!(dict.lookup(&[]), None);
    }

    #[test]
    fn test_insert_and_lookup() {
        let mut dict = EncodeDictionary::new();
        assert!(dict.insert(b"AB", 258));
        assert!(dict.insert(b"ABC", 259));
        assert_eq!(dict.lookup(b"AB"), Some(258));
        assert_eq!(dict.lookup(b"ABC"), Some(259));
        assert_eq!(dict.child(258, b'C'), Some(259));
        assert_eq!(dict.lookup(b"ABD"), None);
        assert_eq!(dict.lookup(b"BC"), None);
        assert_eq!(dict.len(), 258);
    }

    #[test]
    fn test_insert_requires_prefix() {
        let mut dict = EncodeDictionary::new();
        assert!(!dict.insert(b"XYZ", 258));
        assert!(!dict.insert(b"", 258));
        assert_eq!(dict.len(), 256);
    }

    #[test]
    fn test_reset_keeps_only_literals() {
        let mut dict = EncodeDictionary::new();
        dict.insert_child(b'a' as Code, b'b', 258);
        dict.reset();
        assert_eq!(dict.len(), 256);
        assert_eq!(dict.lookup(b"ab"), None);
        assert_eq!(dict.lookup(b"a"), Some(b'a' as Code));
    }
}
