// In: src/config.rs

//! The single source of truth for all codec configuration.
//!
//! `CodecConfig` is created once at the application boundary (e.g., from a JSON
//! settings file) and then passed by reference into `compress` / `decompress`.
//! Nothing in it changes the shape of the Huffman tree: the tree is always a
//! pure function of the frequency table, so any two configs can decode each
//! other's output as long as the header format is understood.

use serde::{Deserialize, Serialize};

use crate::error::HuffmanError;

//==================================================================================
// I. Core Configuration Enums
//==================================================================================

/// Selects how the frequency table header body is laid out on disk.
///
/// The choice is recorded in the header itself, so the decompressor never needs
/// to be told which one was used.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum HeaderFormat {
    /// **Default:** LEB128-packed `(symbol, count)` pairs. Smallest on disk.
    #[default]
    Binary,

    /// A human-readable JSON array of `{symbol, count}` objects. Useful when
    /// inspecting compressed files by hand.
    Json,
}

impl HeaderFormat {
    /// The tag byte written into the fixed-size part of the header.
    pub fn tag(self) -> u8 {
        match self {
            HeaderFormat::Binary => 0,
            HeaderFormat::Json => 1,
        }
    }

    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(HeaderFormat::Binary),
            1 => Some(HeaderFormat::Json),
            _ => None,
        }
    }
}

//==================================================================================
// II. The Unified CodecConfig
//==================================================================================

/// The single, unified configuration for one compress or decompress call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct CodecConfig {
    /// Layout of the frequency table header written by `compress`.
    #[serde(default)]
    pub header_format: HeaderFormat,

    /// Capacity, in bytes, of the buffered readers and writers wrapped around
    /// the caller's streams.
    #[serde(default = "default_buffer_capacity")]
    pub buffer_capacity: usize,

    /// If true, `decompress` fails when the number of decoded bytes differs
    /// from the length implied by the header. Off by default: a truncated
    /// payload is decoded as far as it goes.
    #[serde(default)]
    pub strict_length: bool,

    /// If true, each call logs a summary (sizes, symbol counts) at `info`
    /// and the full code table at `debug`.
    #[serde(default)]
    pub enable_stats_collection: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            header_format: HeaderFormat::default(),
            buffer_capacity: default_buffer_capacity(),
            strict_length: false,
            enable_stats_collection: false,
        }
    }
}

impl CodecConfig {
    /// Parses a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, HuffmanError> {
        let config: CodecConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), HuffmanError> {
        if self.buffer_capacity == 0 {
            return Err(HuffmanError::InvalidInput(
                "buffer_capacity must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Helper for `serde` to provide a default for `buffer_capacity`.
fn default_buffer_capacity() -> usize {
    64 * 1024
}
