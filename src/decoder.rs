use std::io::Read;

use crate::bit_stream::BitReader;
use crate::error::HuffmanError;
use crate::hufftree::{HuffNode, HuffTree};
use crate::tree_codec;

/// A streaming decode session. Wraps a borrowed bit source and holds no
/// tree until [`read_header`](Self::read_header) rebuilds one from the
/// stream.
pub struct HuffmanDecoder<R> {
    reader: BitReader<R>,
    tree: Option<HuffTree>,
}

impl<R: Read> HuffmanDecoder<R> {
    pub fn new(source: R) -> Self {
        HuffmanDecoder {
            reader: BitReader::new(source),
            tree: None,
        }
    }

    /// Rebuilds the tree from the header at the front of the stream.
    /// Call exactly once, before any `read`.
    pub fn read_header(&mut self) -> Result<(), HuffmanError> {
        let tree = tree_codec::deserialize(&mut self.reader)?;
        log::debug!(
            "tree header read, {} symbols in alphabet",
            tree.leaf_codes().len()
        );
        self.tree = Some(tree);
        Ok(())
    }

    /// Decodes up to `buf.len()` bytes into `buf`, returning how many
    /// were produced. The stream ending exactly between two code words is
    /// the expected termination for a format with no length field and
    /// returns the count so far; ending in the middle of a code word
    /// fails with [`HuffmanError::TruncatedPayload`].
    ///
    /// The format cannot tell true payload end from the pad bits that
    /// complete the final byte, so callers bound the read with the
    /// framing they impose on the transport.
    ///
    /// # Panics
    ///
    /// Panics if called before `read_header`.
    pub fn read(&mut self, buf: &mut [u8]) -> Result<usize, HuffmanError> {
        let tree = self
            .tree
            .as_ref()
            .expect("read_header must be called before read");
        let mut produced = 0;
        while produced < buf.len() {
            match next_symbol(tree.root(), &mut self.reader)? {
                Some(symbol) => {
                    buf[produced] = symbol;
                    produced += 1;
                }
                None => break,
            }
        }
        Ok(produced)
    }

    /// Debug dump of `(weight, symbol, code string)` per leaf, in leaf
    /// order. Weights are zero on the decode side; the header does not
    /// carry them. Empty before `read_header`.
    pub fn leaf_codes(&self) -> Vec<(usize, u8, String)> {
        self.tree
            .as_ref()
            .map(HuffTree::leaf_codes)
            .unwrap_or_default()
    }
}

/// Walks from the root one bit at a time (0 left, 1 right) until a leaf.
/// `Ok(None)` is a clean end of data before the walk starts.
fn next_symbol<R: Read>(
    root: &HuffNode,
    reader: &mut BitReader<R>,
) -> Result<Option<u8>, HuffmanError> {
    // a one-leaf tree has no edges to follow, but each symbol still
    // spends its one-bit code
    if let HuffNode::Leaf { symbol, .. } = root {
        return Ok(reader.read_bit()?.map(|_| *symbol));
    }
    let mut node = root;
    let mut mid_walk = false;
    loop {
        match node {
            HuffNode::Leaf { symbol, .. } => return Ok(Some(*symbol)),
            HuffNode::Internal { left, right, .. } => match reader.read_bit()? {
                Some(bit) => {
                    node = if bit { right } else { left };
                    mid_walk = true;
                }
                None if mid_walk => return Err(HuffmanError::TruncatedPayload),
                None => return Ok(None),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::HuffmanEncoder;

    fn encode(alphabet: &[u8], payload: &[u8]) -> Vec<u8> {
        let mut bytes = Vec::new();
        let mut encoder = HuffmanEncoder::from_ranked_alphabet(alphabet, &mut bytes).unwrap();
        encoder.write_header().unwrap();
        encoder.write(payload).unwrap();
        encoder.flush().unwrap();
        bytes
    }

    #[test]
    fn stops_cleanly_on_a_code_word_boundary() {
        // header is 30 bits; payload "a" is the two bits 00; the stream
        // ends on a byte boundary with no pad at all
        let bytes = encode(b"abc", b"a");
        let mut decoder = HuffmanDecoder::new(bytes.as_slice());
        decoder.read_header().unwrap();

        let mut buf = [0u8; 8];
        assert_eq!(decoder.read(&mut buf).unwrap(), 1);
        assert_eq!(buf[0], b'a');
    }

    #[test]
    fn pad_bits_cut_mid_code_word_fail() {
        // header 30 bits + payload 100 00 leaves five pad zeros; greedy
        // reading takes two more 'a' symbols off the pads, then dies one
        // bit into a third walk
        let bytes = encode(b"abc", b"caa");
        let mut decoder = HuffmanDecoder::new(bytes.as_slice());
        decoder.read_header().unwrap();

        let mut buf = [0u8; 16];
        let err = decoder.read(&mut buf).unwrap_err();
        assert!(matches!(err, HuffmanError::TruncatedPayload));
    }

    #[test]
    fn bounded_reads_never_touch_the_pads() {
        let bytes = encode(b"abc", b"caa");
        let mut decoder = HuffmanDecoder::new(bytes.as_slice());
        decoder.read_header().unwrap();

        let mut buf = [0u8; 3];
        assert_eq!(decoder.read(&mut buf).unwrap(), 3);
        assert_eq!(&buf, b"caa");
    }

    #[test]
    fn rebuilt_codes_match_the_encode_side() {
        let mut sink = Vec::new();
        let mut encoder = HuffmanEncoder::from_ranked_alphabet(b"abc", &mut sink).unwrap();
        encoder.write_header().unwrap();
        encoder.flush().unwrap();
        let sent: Vec<(u8, String)> = encoder
            .leaf_codes()
            .into_iter()
            .map(|(_, s, c)| (s, c))
            .collect();

        let mut decoder = HuffmanDecoder::new(sink.as_slice());
        assert!(decoder.leaf_codes().is_empty());
        decoder.read_header().unwrap();
        let got: Vec<(u8, String)> = decoder
            .leaf_codes()
            .into_iter()
            .map(|(_, s, c)| (s, c))
            .collect();
        assert_eq!(sent, got);
    }
}
