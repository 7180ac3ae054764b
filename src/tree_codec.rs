//! Tree header wire format.
//!
//! The tree is written as a post-order walk, one tagged node at a time,
//! most significant bit first within every field:
//!
//! ```text
//! Header   := TreeNode TerminatorBit(0)
//! TreeNode := LeafBit(1) SymbolByte(8)
//!           | TreeNode TreeNode InternalBit(0)   // left, right, then self
//! ```
//!
//! The reader rebuilds the tree with a working stack: a 1 bit pushes a
//! leaf, a 0 bit folds the top two entries into an internal node. Once a
//! single node remains, the next 0 bit is the terminator and ends the
//! header instead of folding again. There is no length prefix, checksum,
//! magic number, or version tag.

use std::io::{Read, Write};

use crate::bit_stream::{BitReader, BitWriter};
use crate::error::HuffmanError;
use crate::hufftree::{HuffNode, HuffTree};

/// Writes `tree` to `out` in the post-order format, including the
/// trailing terminator bit. Leaves the writer on whatever bit position
/// the header ends at; payload bits follow with no padding between.
pub fn serialize<W: Write>(tree: &HuffTree, out: &mut BitWriter<W>) -> Result<(), HuffmanError> {
    write_node(tree.root(), out)?;
    out.write_bit(false)?;
    Ok(())
}

// recursion depth is bounded by tree height, at most 255 for a byte
// alphabet
fn write_node<W: Write>(node: &HuffNode, out: &mut BitWriter<W>) -> Result<(), HuffmanError> {
    match node {
        HuffNode::Leaf { symbol, .. } => {
            out.write_bit(true)?;
            out.write_bits(u64::from(*symbol), 8)?;
        }
        HuffNode::Internal { left, right, .. } => {
            write_node(left, out)?;
            write_node(right, out)?;
            out.write_bit(false)?;
        }
    }
    Ok(())
}

/// Reads one tree from `src`. Weights are not transmitted, so rebuilt
/// nodes carry weight zero; only the shape and the leaf symbols matter on
/// the decode side. Fails with [`HuffmanError::TruncatedHeader`] if the
/// source ends, or folds on an empty stack, before a root is produced.
pub fn deserialize<R: Read>(src: &mut BitReader<R>) -> Result<HuffTree, HuffmanError> {
    let mut stack: Vec<HuffNode> = Vec::new();
    loop {
        match src.read_bit()? {
            None => return Err(HuffmanError::TruncatedHeader),
            Some(true) => {
                let symbol = src
                    .read_bits(8)?
                    .ok_or(HuffmanError::TruncatedHeader)?;
                stack.push(HuffNode::leaf(symbol as u8, 0));
            }
            Some(false) => match (stack.pop(), stack.pop()) {
                (Some(right), Some(left)) => stack.push(HuffNode::merge(left, right)),
                (Some(root), None) => return Ok(HuffTree::from_root(root)),
                (None, _) => return Err(HuffmanError::TruncatedHeader),
            },
        }
    }
}
