//! This file is the root of the `huffman_core` Rust crate.
//!
//! The crate implements a lossless, byte-oriented Huffman codec. A compressed
//! stream is a self-describing header carrying the frequency table, followed by
//! the packed, MSB-first bit payload terminated by an END_OF_DATA code.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`pipeline`, `kernels`, etc.)
//!     so the Rust compiler knows they exist.
//! 2.  Re-exporting the public entry points so callers can simply
//!     `use huffman_core::{compress_bytes, decompress_bytes}`.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
//==================================================================================
// 1. Module Declarations
//==================================================================================
#[macro_use]
mod observability; // Make macros available throughout the crate

pub mod bridge;
pub mod config;
pub mod error;
pub mod io_adapters;
pub mod kernels;
pub mod pipeline;
pub mod traits;
pub mod types;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use bridge::{
    analyze, compress_bytes, compress_bytes_with_config, compress_file, decompress_bytes,
    decompress_bytes_with_config, decompress_file, CompressionReport, CompressionStats,
    DecompressionReport,
};
pub use config::{CodecConfig, HeaderFormat};
pub use error::HuffmanError;
pub use observability::enable_verbose_logging;
pub use pipeline::{compress, decompress};
pub use types::{CodeTable, FrequencyTable, HuffmanNode, HuffmanTree, Symbol};
