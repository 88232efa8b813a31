//! The bit decoder: walks the tree once per symbol until END_OF_DATA.

use std::io::Write;

use crate::error::HuffmanError;
use crate::traits::BitSource;
use crate::types::{HuffmanNode, HuffmanTree, Symbol};

/// What a call to `decode` consumed and produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecodeSummary {
    pub bytes_written: u64,
    pub bits_read: u64,
    /// `false` when the bit source ran dry before the END_OF_DATA code.
    pub reached_end_marker: bool,
}

/// Decodes bits from `source` into bytes written to `output`.
///
/// Each symbol is decoded by walking from the root, one bit per edge, until a
/// leaf is reached. A byte leaf is written out and the walk restarts at the
/// root; the END_OF_DATA leaf ends decoding. Running out of bits is a clean
/// stop, not an error: whatever was decoded so far stands.
///
/// # Errors
/// `MalformedPayload` if a bit selects an edge the tree does not have (only
/// possible on the single-symbol root). I/O failures from either side are
/// propagated.
pub fn decode<S, W>(
    source: &mut S,
    tree: &HuffmanTree,
    output: &mut W,
) -> Result<DecodeSummary, HuffmanError>
where
    S: BitSource + ?Sized,
    W: Write + ?Sized,
{
    let root = tree
        .root()
        .ok_or_else(|| HuffmanError::InternalError("cannot decode with an empty tree".to_string()))?;
    if root.is_leaf() {
        return Err(HuffmanError::InternalError(
            "prefix tree root must be an internal node".to_string(),
        ));
    }

    let mut summary = DecodeSummary::default();
    let mut node = root;
    loop {
        match node {
            HuffmanNode::Leaf {
                symbol: Symbol::EndOfData,
                ..
            } => {
                summary.reached_end_marker = true;
                break;
            }
            HuffmanNode::Leaf {
                symbol: Symbol::Byte(byte),
                ..
            } => {
                output.write_all(&[*byte])?;
                summary.bytes_written += 1;
                node = root;
            }
            HuffmanNode::Internal { .. } => {
                let Some(bit) = source.read_bit()? else {
                    log::warn!(
                        "Bit stream ended before END_OF_DATA after {} bytes; stopping.",
                        summary.bytes_written
                    );
                    break;
                };
                summary.bits_read += 1;
                node = node.child(bit).ok_or_else(|| {
                    HuffmanError::MalformedPayload(format!(
                        "bit {} at position {} selects a missing tree edge",
                        bit as u8,
                        summary.bits_read - 1
                    ))
                })?;
            }
        }
    }

    log_metric!(
        "event" = "decode",
        "bytes_written" = summary.bytes_written,
        "bits_read" = summary.bits_read,
        "reached_end_marker" = summary.reached_end_marker
    );
    Ok(summary)
}
