//! This module defines the canonical, type-safe representation of a symbol in
//! the coding alphabet.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The wire code of the END_OF_DATA sentinel: one past the largest byte value.
pub const END_OF_DATA_CODE: u16 = 256;

/// A leaf-identifying value in the coding alphabet.
///
/// The alphabet is every byte value plus a single END_OF_DATA marker that
/// terminates the encoded payload. Interior tree nodes carry no symbol at all
/// (see `HuffmanNode::Internal`), so a sentinel can never collide with data.
///
/// The derived ordering places every `Byte` before `EndOfData`, which is the
/// order used for tie-breaking during tree construction and for header layout.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    Byte(u8),
    EndOfData,
}

impl Symbol {
    /// Returns the wire code: the byte value, or `256` for END_OF_DATA.
    pub fn code(self) -> u16 {
        match self {
            Symbol::Byte(b) => b as u16,
            Symbol::EndOfData => END_OF_DATA_CODE,
        }
    }

    /// Inverse of `code`. Returns `None` for codes outside the alphabet.
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            0..=255 => Some(Symbol::Byte(code as u8)),
            END_OF_DATA_CODE => Some(Symbol::EndOfData),
            _ => None,
        }
    }

    pub fn is_end_of_data(self) -> bool {
        matches!(self, Symbol::EndOfData)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Byte(b) if b.is_ascii_graphic() => write!(f, "'{}' (0x{:02X})", *b as char, b),
            Symbol::Byte(b) => write!(f, "0x{:02X}", b),
            Symbol::EndOfData => write!(f, "END_OF_DATA"),
        }
    }
}
