use std::io::Write;

use crate::bit_stream::BitWriter;
use crate::code_table::CodeTable;
use crate::error::HuffmanError;
use crate::hufftree::HuffTree;
use crate::tree_codec;

/// A streaming encode session. Owns its tree and code table; borrows the
/// byte sink, whose lifecycle stays with the caller.
///
/// Call order is `write_header` exactly once, then any number of
/// `write` calls, then `flush` once. Writes after `flush` are undefined.
pub struct HuffmanEncoder<W> {
    tree: HuffTree,
    table: CodeTable,
    writer: BitWriter<W>,
}

impl<W: Write> HuffmanEncoder<W> {
    /// Builds a session from raw data: one scan for byte frequencies,
    /// then the tree and table. The data itself is not retained; pass it
    /// again through [`write`](Self::write).
    pub fn from_data(data: &[u8], sink: W) -> Result<Self, HuffmanError> {
        let tree = HuffTree::from_bytes(data)?;
        Ok(Self::with_tree(tree, sink))
    }

    /// Builds a session from an explicit priority ranking with no data
    /// scan. Earliest entry ranks highest. Bytes absent from the list are
    /// outside the session alphabet and will fail `write`.
    pub fn from_ranked_alphabet(alphabet: &[u8], sink: W) -> Result<Self, HuffmanError> {
        let tree = HuffTree::from_ranked_alphabet(alphabet)?;
        Ok(Self::with_tree(tree, sink))
    }

    fn with_tree(tree: HuffTree, sink: W) -> Self {
        let table = CodeTable::derive(&tree);
        log::debug!("encode session ready, {} symbols in alphabet", table.len());
        HuffmanEncoder {
            tree,
            table,
            writer: BitWriter::new(sink),
        }
    }

    /// Serializes the tree into the stream so the decode side can rebuild
    /// it. Call exactly once, before any payload write.
    pub fn write_header(&mut self) -> Result<(), HuffmanError> {
        tree_codec::serialize(&self.tree, &mut self.writer)?;
        log::debug!("tree header written");
        Ok(())
    }

    /// Encodes `bytes` into the stream, returning how many were written.
    /// A byte outside the session alphabet fails with
    /// [`HuffmanError::UnknownSymbol`]; bits for earlier bytes of the
    /// same call are already in the stream and are not rolled back.
    pub fn write(&mut self, bytes: &[u8]) -> Result<usize, HuffmanError> {
        for &byte in bytes {
            let code = self
                .table
                .get(byte)
                .ok_or(HuffmanError::UnknownSymbol(byte))?;
            for &bit in code.bits() {
                self.writer.write_bit(bit)?;
            }
        }
        Ok(bytes.len())
    }

    /// Pads any incomplete trailing byte with 0 bits and forces it out.
    pub fn flush(&mut self) -> Result<(), HuffmanError> {
        self.writer.flush(false)?;
        log::debug!("encode session flushed");
        Ok(())
    }

    /// Debug dump of `(weight, symbol, code string)` per leaf, in leaf
    /// order.
    pub fn leaf_codes(&self) -> Vec<(usize, u8, String)> {
        self.tree.leaf_codes()
    }
}
