//! This module defines the end-to-end processing pipeline. It sequences the
//! `kernels` into the two directions of the codec and owns the per-call
//! frequency table, tree and code table.

//==================================================================================
// 1. Module Declarations
//==================================================================================

pub mod orchestrator;


//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use self::orchestrator::{compress, decompress};
