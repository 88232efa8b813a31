//! The symbol-to-count mapping produced by the frequency counter.
//!
//! This is also the persisted header: the decompressor rebuilds the tree from
//! nothing but this table, so it is kept in a `BTreeMap` to give every
//! consumer the same ascending symbol order.

use std::collections::BTreeMap;

use crate::error::HuffmanError;
use crate::types::Symbol;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<Symbol, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one occurrence of `byte`, inserting it with count 1 on first sight.
    pub fn record(&mut self, byte: u8) {
        *self.counts.entry(Symbol::Byte(byte)).or_insert(0) += 1;
    }

    /// Sets the count for `symbol`, replacing any previous value.
    pub fn insert(&mut self, symbol: Symbol, count: u64) -> Option<u64> {
        self.counts.insert(symbol, count)
    }

    /// Sets END_OF_DATA to exactly one occurrence.
    pub fn mark_end_of_data(&mut self) {
        self.counts.insert(Symbol::EndOfData, 1);
    }

    pub fn get(&self, symbol: Symbol) -> Option<u64> {
        self.counts.get(&symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterates entries in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }

    /// Sum of all counts, END_OF_DATA included. Saturates rather than wrapping.
    pub fn total_weight(&self) -> u64 {
        self.counts
            .values()
            .fold(0u64, |acc, &count| acc.saturating_add(count))
    }

    /// Number of distinct literal byte values.
    pub fn distinct_bytes(&self) -> usize {
        self.counts
            .keys()
            .filter(|symbol| !symbol.is_end_of_data())
            .count()
    }

    /// Length of the original input, i.e. the sum of the literal byte counts.
    pub fn original_len(&self) -> u64 {
        self.iter()
            .filter(|(symbol, _)| !symbol.is_end_of_data())
            .fold(0u64, |acc, (_, count)| acc.saturating_add(count))
    }

    /// Checks the invariants a table read from an untrusted header must hold:
    /// every count is positive, the counts sum without overflowing `u64`, and
    /// END_OF_DATA is present with count exactly 1.
    pub fn validate(&self) -> Result<(), HuffmanError> {
        if let Some((symbol, _)) = self.iter().find(|&(_, count)| count == 0) {
            return Err(HuffmanError::MalformedHeader(format!(
                "symbol {} has a zero count",
                symbol
            )));
        }
        if self
            .iter()
            .try_fold(0u64, |acc, (_, count)| acc.checked_add(count))
            .is_none()
        {
            return Err(HuffmanError::MalformedHeader(
                "symbol counts sum past u64::MAX".to_string(),
            ));
        }
        match self.get(Symbol::EndOfData) {
            Some(1) => Ok(()),
            Some(count) => Err(HuffmanError::MalformedHeader(format!(
                "END_OF_DATA must have count 1, found {}",
                count
            ))),
            None => Err(HuffmanError::MalformedHeader(
                "table has no END_OF_DATA entry".to_string(),
            )),
        }
    }
}

impl FromIterator<(Symbol, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (Symbol, u64)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_mark_end_of_data() {
        let mut table = FrequencyTable::new();
        for &b in b"abca" {
            table.record(b);
        }
        table.mark_end_of_data();

        assert_eq!(table.get(Symbol::Byte(b'a')), Some(2));
        assert_eq!(table.get(Symbol::Byte(b'b')), Some(1));
        assert_eq!(table.get(Symbol::EndOfData), Some(1));
        assert_eq!(table.len(), 4);
        assert_eq!(table.total_weight(), 5);
        assert_eq!(table.original_len(), 4);
        assert_eq!(table.distinct_bytes(), 3);
        table.validate().unwrap();
    }

    #[test]
    fn test_iter_is_ascending_with_end_of_data_last() {
        let table: FrequencyTable = [
            (Symbol::EndOfData, 1),
            (Symbol::Byte(200), 4),
            (Symbol::Byte(3), 9),
        ]
        .into_iter()
        .collect();
        let symbols: Vec<Symbol> = table.iter().map(|(s, _)| s).collect();
        assert_eq!(
            symbols,
            vec![Symbol::Byte(3), Symbol::Byte(200), Symbol::EndOfData]
        );
    }

    #[test]
    fn test_validate_rejects_bad_tables() {
        let missing_eod: FrequencyTable = [(Symbol::Byte(1), 2)].into_iter().collect();
        assert!(matches!(
            missing_eod.validate(),
            Err(HuffmanError::MalformedHeader(_))
        ));

        let heavy_eod: FrequencyTable = [(Symbol::EndOfData, 2)].into_iter().collect();
        assert!(heavy_eod.validate().is_err());

        let zero_count: FrequencyTable = [(Symbol::Byte(9), 0), (Symbol::EndOfData, 1)]
            .into_iter()
            .collect();
        let err = zero_count.validate().unwrap_err();
        assert!(err.to_string().contains("zero count"));
    }

    #[test]
    fn test_validate_rejects_overflowing_total() {
        let table: FrequencyTable = [(Symbol::Byte(1), u64::MAX), (Symbol::EndOfData, 1)]
            .into_iter()
            .collect();
        let err = table.validate().unwrap_err();
        assert!(matches!(err, HuffmanError::MalformedHeader(_)));
        assert!(err.to_string().contains("u64::MAX"));
    }
}
