//! Error type for the codec and its storage collaborator.

use std::path::PathBuf;

/// Errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There were no symbols to build a tree from.
    #[error("cannot build a huffman tree from empty input")]
    EmptyInput,
    /// A symbol was handed to the encoder that the code table has no code for.
    #[error("no code for symbol {0}")]
    UnknownSymbol(String),
    /// The packed bytes are too short or their header is inconsistent.
    #[error("truncated packed data: {0}")]
    TruncatedData(#[from] Truncated),
    /// The bit sequence could not be walked back into symbols.
    #[error("malformed bit stream: {0}")]
    MalformedStream(#[from] Malformed),
    /// A tree or code table document could not be parsed or rendered.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// Reading or writing one of the codec artifacts failed.
    #[error("i/o error on {1}: {0}")]
    Io(#[source] std::io::Error, PathBuf),
}

/// Ways a packed byte sequence can fail to describe a bit sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Truncated {
    #[error("missing padding header byte")]
    MissingHeader,
    #[error("padding header {0} is not below 8")]
    InvalidPadding(u8),
    #[error("padding of {pad} bits exceeds the {available} payload bits")]
    PaddingOverflow { pad: u8, available: usize },
}

/// Ways a bit sequence can fail to decode against a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Malformed {
    /// The bits ran out while the walk was still at an internal node.
    #[error("stream ends {dangling} bits into an unfinished code")]
    IncompleteCode { dangling: usize },
    /// The bit at `offset` selects a child the current node does not have.
    #[error("bit {offset} selects a branch that does not exist")]
    MissingBranch { offset: usize },
}
