//! Error types for Huffman coding.

use thiserror::Error;

/// Error variants for compression and decompression.
#[derive(Debug, Error)]
pub enum Error {
    /// A code tree was requested for input containing no symbols.
    #[error("cannot build a code for an empty alphabet")]
    EmptyAlphabet,

    /// A byte showed up at encode time with no entry in the code table.
    #[error("no code for symbol {0:#04x}")]
    UnknownSymbol(u8),

    /// The bit stream ended in the middle of a code path.
    #[error("bit stream truncated mid-code")]
    TruncatedStream,

    /// The persisted frequency table cannot describe a valid tree.
    #[error("corrupt frequency table: {0}")]
    CorruptFrequencyMap(&'static str),

    /// An I/O error occurred while reading or writing files.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
