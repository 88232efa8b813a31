//! Builds the optimal prefix tree from a frequency table (Huffman's algorithm).
//!
//! The decompressor rebuilds the tree from the header alone, so construction
//! must be a deterministic function of the table. Ties are broken by a
//! sequence number: leaves are numbered in ascending symbol order, and every
//! merged node takes the next number after all previous ones. Of two entries
//! with equal weight the lower sequence number is removed first.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::HuffmanError;
use crate::types::{FrequencyTable, HuffmanNode, HuffmanTree};

/// A node waiting in the priority queue together with its ordering key.
#[derive(Debug)]
struct QueueEntry {
    weight: u64,
    sequence: u64,
    node: HuffmanNode,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.sequence == other.sequence
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so `BinaryHeap` pops the smallest (weight, sequence) first.
        (other.weight, other.sequence).cmp(&(self.weight, self.sequence))
    }
}

/// Builds the prefix tree for `table`.
///
/// The first node removed in each merge becomes the `zero` child and the
/// second the `one` child. A table with a single entry yields an internal root
/// whose `zero` child is that entry, so every symbol has a code at least one
/// bit long.
///
/// # Errors
/// `InvalidInput` if the table is empty, holds a zero count, or its weights
/// overflow `u64`.
pub fn build_tree(table: &FrequencyTable) -> Result<HuffmanTree, HuffmanError> {
    if table.is_empty() {
        return Err(HuffmanError::InvalidInput(
            "cannot build a prefix tree from an empty frequency table".to_string(),
        ));
    }

    let mut queue = BinaryHeap::with_capacity(table.len());
    for (sequence, (symbol, count)) in table.iter().enumerate() {
        if count == 0 {
            return Err(HuffmanError::InvalidInput(format!(
                "symbol {} has a zero count",
                symbol
            )));
        }
        queue.push(QueueEntry {
            weight: count,
            sequence: sequence as u64,
            node: HuffmanNode::leaf(symbol, count),
        });
    }

    if queue.len() == 1 {
        let only = pop(&mut queue)?;
        log_metric!("event" = "build_tree", "leaves" = 1, "degenerate" = true);
        return Ok(HuffmanTree::from_root(HuffmanNode::Internal {
            weight: only.weight,
            zero: Box::new(only.node),
            one: None,
        }));
    }

    let mut next_sequence = table.len() as u64;
    while queue.len() > 1 {
        let first = pop(&mut queue)?;
        let second = pop(&mut queue)?;
        let weight = first.weight.checked_add(second.weight).ok_or_else(|| {
            HuffmanError::InvalidInput("total symbol weight overflows u64".to_string())
        })?;

        queue.push(QueueEntry {
            weight,
            sequence: next_sequence,
            node: HuffmanNode::Internal {
                weight,
                zero: Box::new(first.node),
                one: Some(Box::new(second.node)),
            },
        });
        next_sequence += 1;
    }

    let root = pop(&mut queue)?;
    log_metric!(
        "event" = "build_tree",
        "leaves" = table.len(),
        "root_weight" = root.weight
    );
    Ok(HuffmanTree::from_root(root.node))
}

fn pop(queue: &mut BinaryHeap<QueueEntry>) -> Result<QueueEntry, HuffmanError> {
    queue
        .pop()
        .ok_or_else(|| HuffmanError::InternalError("priority queue underflow".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Symbol;

    fn table_of(entries: &[(Symbol, u64)]) -> FrequencyTable {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_worked_example_codes() {
        // C+EOF merge first (1+1), then B with that (2+2), then A (3+4).
        let table = table_of(&[
            (Symbol::Byte(b'A'), 3),
            (Symbol::Byte(b'B'), 2),
            (Symbol::Byte(b'C'), 1),
            (Symbol::EndOfData, 1),
        ]);
        let tree = build_tree(&table).unwrap();
        assert_eq!(tree.weight(), 7);
        assert_eq!(tree.leaf_count(), 4);

        let codes = tree.code_table();
        assert_eq!(codes.code_string(Symbol::Byte(b'A')).as_deref(), Some("0"));
        assert_eq!(codes.code_string(Symbol::Byte(b'B')).as_deref(), Some("10"));
        assert_eq!(codes.code_string(Symbol::Byte(b'C')).as_deref(), Some("110"));
        assert_eq!(codes.code_string(Symbol::EndOfData).as_deref(), Some("111"));
        assert!(codes.is_prefix_free());
    }

    #[test]
    fn test_root_weight_is_total_and_codes_are_prefix_free() {
        let table: FrequencyTable = (0..=255u8)
            .map(|b| (Symbol::Byte(b), (b as u64 % 17) + 1))
            .chain(std::iter::once((Symbol::EndOfData, 1)))
            .collect();
        let tree = build_tree(&table).unwrap();
        assert_eq!(tree.weight(), table.total_weight());

        let codes = tree.code_table();
        assert_eq!(codes.len(), 257);
        assert!(codes.is_prefix_free());
    }

    #[test]
    fn test_build_is_deterministic() {
        let table = table_of(&[
            (Symbol::Byte(1), 5),
            (Symbol::Byte(2), 5),
            (Symbol::Byte(3), 5),
            (Symbol::Byte(4), 5),
            (Symbol::EndOfData, 1),
        ]);
        let first = build_tree(&table).unwrap().code_table();
        for _ in 0..10 {
            assert_eq!(build_tree(&table).unwrap().code_table(), first);
        }
    }

    #[test]
    fn test_single_entry_table_gets_internal_root() {
        let table = table_of(&[(Symbol::EndOfData, 1)]);
        let tree = build_tree(&table).unwrap();
        let root = tree.root().unwrap();
        assert!(!root.is_leaf());
        assert_eq!(root.weight(), 1);
        assert!(root.child(true).is_none());

        let codes = tree.code_table();
        assert_eq!(codes.code_string(Symbol::EndOfData).as_deref(), Some("0"));
    }

    #[test]
    fn test_empty_table_is_invalid_input() {
        let result = build_tree(&FrequencyTable::new());
        assert!(matches!(result, Err(HuffmanError::InvalidInput(_))));
    }

    #[test]
    fn test_zero_count_is_invalid_input() {
        let table = table_of(&[(Symbol::Byte(0), 0), (Symbol::EndOfData, 1)]);
        assert!(matches!(build_tree(&table), Err(HuffmanError::InvalidInput(_))));
    }

    #[test]
    fn test_weight_overflow_is_invalid_input() {
        let table = table_of(&[(Symbol::Byte(0), u64::MAX), (Symbol::EndOfData, 1)]);
        assert!(matches!(build_tree(&table), Err(HuffmanError::InvalidInput(_))));
    }

    #[test]
    fn test_fibonacci_weights_produce_deep_tree() {
        // Fibonacci counts force a maximally skewed tree: depth = leaves - 1.
        let mut fib = vec![1u64, 1];
        while fib.len() < 40 {
            let n = fib[fib.len() - 1] + fib[fib.len() - 2];
            fib.push(n);
        }
        let table: FrequencyTable = fib
            .iter()
            .enumerate()
            .map(|(i, &count)| (Symbol::Byte(i as u8), count))
            .collect();
        let tree = build_tree(&table).unwrap();
        assert_eq!(tree.leaf_count(), 40);
        assert_eq!(tree.depth(), 39);
        assert!(tree.code_table().is_prefix_free());
    }
}
