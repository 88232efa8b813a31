//! This module defines the core, strongly-typed data representations shared by
//! the kernels and the orchestrator.
//!
//! It includes the `Symbol` alphabet, the `FrequencyTable` that doubles as the
//! persisted header, the owned `HuffmanTree`, and the `CodeTable` derived from it.

pub mod code_table;
pub mod frequency_table;
pub mod symbol;
pub mod tree;

// Re-export the main type(s) for easier access.
pub use code_table::CodeTable;
pub use frequency_table::FrequencyTable;
pub use symbol::Symbol;
pub use tree::{HuffmanNode, HuffmanTree};
