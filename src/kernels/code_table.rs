//! Derives the code table from a prefix tree.

use bitvec::prelude::*;

use crate::types::code_table::Code;
use crate::types::{CodeTable, HuffmanNode};

/// Walks the tree depth-first, recording each leaf's root-to-leaf path.
///
/// The walk uses an explicit stack, so deep trees cannot exhaust the call
/// stack. `None` (no tree) yields an empty table.
pub fn derive_code_table(root: Option<&HuffmanNode>) -> CodeTable {
    let mut table = CodeTable::default();
    let mut stack: Vec<(&HuffmanNode, Code)> = Vec::new();
    if let Some(root) = root {
        stack.push((root, BitVec::new()));
    }

    while let Some((node, path)) = stack.pop() {
        match node {
            HuffmanNode::Leaf { symbol, .. } => {
                table.insert(*symbol, path);
            }
            HuffmanNode::Internal { zero, one, .. } => {
                if let Some(one) = one {
                    let mut one_path = path.clone();
                    one_path.push(true);
                    stack.push((&**one, one_path));
                }
                let mut zero_path = path;
                zero_path.push(false);
                stack.push((&**zero, zero_path));
            }
        }
    }

    table
}
