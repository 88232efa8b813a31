//! The owned Huffman prefix tree.
//!
//! Every node is exclusively owned by its parent through a `Box`, and the root
//! is exclusively owned by `HuffmanTree`. Dropping the tree releases every node
//! with an explicit stack, so teardown never recurses however deep the tree is.

use crate::kernels::code_table::derive_code_table;
use crate::types::{CodeTable, Symbol};

/// A node of the prefix tree.
///
/// Edges are named after the bit they consume: `zero` is followed on a `0`
/// bit, `one` on a `1` bit. `one` is `None` only on the root of a tree built
/// from a single-entry table, where the sole leaf hangs off `zero`.
#[derive(Debug, PartialEq, Eq)]
pub enum HuffmanNode {
    Leaf {
        symbol: Symbol,
        weight: u64,
    },
    Internal {
        weight: u64,
        zero: Box<HuffmanNode>,
        one: Option<Box<HuffmanNode>>,
    },
}

impl HuffmanNode {
    pub fn leaf(symbol: Symbol, weight: u64) -> Self {
        HuffmanNode::Leaf { symbol, weight }
    }

    pub fn weight(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { weight, .. } | HuffmanNode::Internal { weight, .. } => *weight,
        }
    }

    /// The leaf's symbol, or `None` for an internal node.
    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            HuffmanNode::Leaf { symbol, .. } => Some(*symbol),
            HuffmanNode::Internal { .. } => None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    /// Follows the edge for `bit`. Leaves and absent `one` edges give `None`.
    pub fn child(&self, bit: bool) -> Option<&HuffmanNode> {
        match self {
            HuffmanNode::Leaf { .. } => None,
            HuffmanNode::Internal { zero, one, .. } => {
                if bit {
                    one.as_deref()
                } else {
                    Some(zero)
                }
            }
        }
    }
}

/// Single-owner handle on a complete prefix tree.
#[derive(Debug)]
pub struct HuffmanTree {
    root: Option<Box<HuffmanNode>>,
}

impl HuffmanTree {
    pub(crate) fn from_root(root: HuffmanNode) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }

    pub fn root(&self) -> Option<&HuffmanNode> {
        self.root.as_deref()
    }

    /// Weight of the root, i.e. the total of all counts the tree was built from.
    pub fn weight(&self) -> u64 {
        self.root().map_or(0, HuffmanNode::weight)
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes_with_depth()
            .filter(|(node, _)| node.is_leaf())
            .count()
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.nodes_with_depth()
            .map(|(_, depth)| depth)
            .max()
            .unwrap_or(0)
    }

    pub fn code_table(&self) -> CodeTable {
        derive_code_table(self.root())
    }

    fn nodes_with_depth(&self) -> impl Iterator<Item = (&HuffmanNode, usize)> {
        let mut stack: Vec<(&HuffmanNode, usize)> = self.root().map(|r| (r, 0)).into_iter().collect();
        std::iter::from_fn(move || {
            let (node, depth) = stack.pop()?;
            if let HuffmanNode::Internal { zero, one, .. } = node {
                stack.push((&**zero, depth + 1));
                if let Some(one) = one {
                    stack.push((&**one, depth + 1));
                }
            }
            Some((node, depth))
        })
    }
}

impl Drop for HuffmanTree {
    fn drop(&mut self) {
        let mut stack: Vec<Box<HuffmanNode>> = self.root.take().into_iter().collect();
        while let Some(node) = stack.pop() {
            if let HuffmanNode::Internal { zero, one, .. } = *node {
                stack.push(zero);
                stack.extend(one);
            }
        }
    }
}
