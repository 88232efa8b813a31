//! This module declares the pure, single-purpose kernels that make up the codec.
//!
//! Each kernel implements one stage of the pipeline and is wired together by
//! `pipeline::orchestrator`:
//!
//!   compress:   frequency -> tree_builder -> code_table -> encoder
//!   decompress: (header) -> tree_builder -> decoder

//==================================================================================
// 1. Module Declarations
//==================================================================================

/// Stage 1: Frequency analysis
pub mod frequency;

/// Stage 2: Tree construction and code derivation
pub mod code_table;
pub mod tree_builder;

/// Stage 3: Bit-level coding
pub mod decoder;
pub mod encoder;

/// Header support: variable-length integers
pub mod leb128;
