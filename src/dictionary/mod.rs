//! Adaptive LZW dictionaries.
//!
//! The encoder maps byte sequences to codes ([`EncodeDictionary`]) and the
//! decoder maps codes back to byte sequences ([`DecodeDictionary`]). Both
//! store each multi-byte sequence as a link to its prefix code plus one
//! trailing byte, so an entry costs constant space regardless of length.

pub mod forward;
pub mod inverse;

pub use forward::EncodeDictionary;
pub use inverse::DecodeDictionary;
