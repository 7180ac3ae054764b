use thiserror::Error;

/// Everything that can go wrong while building a code tree or moving
/// bytes through an encode or decode session.
#[derive(Debug, Error)]
pub enum HuffmanError {
    /// No symbols to build a tree from: empty input data or an empty
    /// ranked alphabet.
    #[error("no symbols to encode")]
    EmptyAlphabet,

    /// A payload byte was never part of the session's alphabet. Possible
    /// when a ranked alphabet omits a byte that occurs in the data.
    #[error("byte {0:#04x} is not in the session alphabet")]
    UnknownSymbol(u8),

    /// The bit source ran out (or produced a malformed prefix) before a
    /// complete tree header was read.
    #[error("bit source ended before the tree header was complete")]
    TruncatedHeader,

    /// The bit source ran out in the middle of a code word. Running out
    /// exactly between two code words is a clean end of stream, not this.
    #[error("bit source ended in the middle of a code word")]
    TruncatedPayload,

    /// Failure reported by the underlying transport, passed through.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
