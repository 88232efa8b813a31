// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the public-facing API of the huffman library. It wraps the
// streaming `pipeline` engine in convenient in-memory and file-path helpers and
// owns the on-disk header format.
//
// Data Flow (Compression):
//
//   1. [Stateless API (compress_bytes / compress_file)] -> Receives bytes or a path
//         |
//         `-> wraps them in `Read + Seek` / `Write` streams
//
//   2. [Pipeline Engine (pipeline::orchestrator::compress)]
//         |
//         `-> a. kernels: frequency -> tree_builder -> code_table
//         `-> b. `header::write_header` writes the frequency table
//         `-> c. kernels: encoder -> packed payload
//
// Data Flow (Decompression):
//
//   1. [Pipeline Engine (pipeline::orchestrator::decompress)]
//         |
//         `-> a. `header::read_header_info` recovers the frequency table
//         `-> b. kernels: tree_builder -> decoder
//
//   2. [Stateless API (decompress_bytes / decompress_file)] -> Returns bytes
//
// ====================================================================================
pub mod format;
pub mod header;
pub mod stateless_api;

// --- Low-Level Stateless API ---
pub use stateless_api::{
    analyze, compress_bytes, compress_bytes_with_config, compress_file, decompress_bytes,
    decompress_bytes_with_config, decompress_file,
};

// --- Format Constants and Structs ---
pub use format::{CompressionReport, CompressionStats, DecompressionReport};

#[cfg(test)]
mod tests;
