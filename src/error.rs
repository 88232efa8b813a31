// In: src/error.rs

//! This module defines the single, unified error type for the entire huffman library.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.

use thiserror::Error;

use crate::types::Symbol;

#[derive(Error, Debug)]
pub enum HuffmanError {
    // =========================================================================
    // === High-Level, Semantic Errors (Specific to the codec's logic)
    // =========================================================================
    /// A frequency table or configuration that cannot produce a code.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The encoder met a symbol the code table has no entry for.
    #[error("No code for symbol {0} in the derived code table")]
    MissingCode(Symbol),

    #[error("Malformed frequency table header: {0}")]
    MalformedHeader(String),

    #[error("Malformed encoded payload: {0}")]
    MalformedPayload(String),

    #[error("Internal logic error (this is a bug): {0}")]
    InternalError(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem (e.g., file not found, broken pipe).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, typically while loading a `CodecConfig`.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
