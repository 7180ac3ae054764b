//! # huffstream
//!
//! A static Huffman byte-stream codec. An encode session measures byte
//! frequencies (or takes an explicit priority ranking), builds a
//! prefix-code tree, transmits the tree as a compact bit-level header,
//! and streams code words with no padding between them. A decode session
//! rebuilds the tree from the header and walks it bit by bit.
//!
//! The stream carries no length field, checksum, or magic number; the
//! caller's framing decides where the payload ends.
//!
//! ## Quick Start
//!
//! ```rust
//! use huffstream::{HuffmanDecoder, HuffmanEncoder};
//!
//! let data: &[u8] = b"how now brown cow";
//!
//! let mut compressed = Vec::new();
//! let mut encoder = HuffmanEncoder::from_data(data, &mut compressed)?;
//! encoder.write_header()?;
//! encoder.write(data)?;
//! encoder.flush()?;
//! drop(encoder);
//!
//! let mut decoder = HuffmanDecoder::new(compressed.as_slice());
//! decoder.read_header()?;
//! let mut restored = vec![0u8; data.len()];
//! decoder.read(&mut restored)?;
//! assert_eq!(restored, data);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod bit_stream;
pub mod code_table;
pub mod decoder;
pub mod encoder;
pub mod hufftree;
pub mod max_heap;
pub mod tree_codec;

mod error;

// Re-export the session types and the error for convenience
pub use code_table::{Code, CodeTable};
pub use decoder::HuffmanDecoder;
pub use encoder::HuffmanEncoder;
pub use error::HuffmanError;
pub use hufftree::{HuffNode, HuffTree};

/// One-shot convenience: header, payload, and padded flush into a fresh
/// buffer.
pub fn encode_to_vec(data: &[u8]) -> Result<Vec<u8>, HuffmanError> {
    let mut out = Vec::new();
    let mut encoder = HuffmanEncoder::from_data(data, &mut out)?;
    encoder.write_header()?;
    encoder.write(data)?;
    encoder.flush()?;
    drop(encoder);
    Ok(out)
}

/// One-shot convenience: reads the header then exactly `count` symbols.
/// `count` is the caller's framing; the stream itself does not know how
/// long the payload is.
pub fn decode_from_slice(bytes: &[u8], count: usize) -> Result<Vec<u8>, HuffmanError> {
    let mut decoder = HuffmanDecoder::new(bytes);
    decoder.read_header()?;
    let mut out = vec![0u8; count];
    let produced = decoder.read(&mut out)?;
    out.truncate(produced);
    Ok(out)
}
