//! The symbol-to-bit-sequence mapping derived from a tree.

use std::collections::BTreeMap;

use bitvec::prelude::*;

use crate::types::Symbol;

/// One code: the root-to-leaf path, first edge in the first (most significant) bit.
pub type Code = BitVec<u8, Msb0>;

/// Codes for every leaf of a tree. Built once by `derive_code_table` and never
/// mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<Symbol, Code>,
}

impl CodeTable {
    pub(crate) fn insert(&mut self, symbol: Symbol, code: Code) {
        self.codes.insert(symbol, code);
    }

    pub fn get(&self, symbol: Symbol) -> Option<&BitSlice<u8, Msb0>> {
        self.codes.get(&symbol).map(|code| code.as_bitslice())
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &BitSlice<u8, Msb0>)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code.as_bitslice()))
    }

    /// Renders a code as a string of `'0'` and `'1'` characters.
    pub fn code_string(&self, symbol: Symbol) -> Option<String> {
        self.get(symbol)
            .map(|code| code.iter().by_vals().map(|bit| if bit { '1' } else { '0' }).collect())
    }

    /// True when no code is a prefix of another (and no code is empty).
    pub fn is_prefix_free(&self) -> bool {
        let codes: Vec<&BitSlice<u8, Msb0>> = self.codes.values().map(|c| c.as_bitslice()).collect();
        if codes.iter().any(|code| code.is_empty()) {
            return false;
        }
        for (i, a) in codes.iter().enumerate() {
            for b in codes.iter().skip(i + 1) {
                if a.starts_with(*b) || b.starts_with(*a) {
                    return false;
                }
            }
        }
        true
    }

    /// Expected payload length in bits for the given counts.
    pub fn encoded_bits<I>(&self, counts: I) -> Option<u64>
    where
        I: IntoIterator<Item = (Symbol, u64)>,
    {
        counts.into_iter().try_fold(0u64, |acc, (symbol, count)| {
            let len = self.get(symbol)?.len() as u64;
            acc.checked_add(len.checked_mul(count)?)
        })
    }
}
