//! # huffman_codec
//!
//! Huffman coding of text: symbol frequencies, a deterministic code tree,
//! bit-packed output and a JSON tree document to decode it with.
//!
//! ```rust
//! use huffman_codec::{compress, decompress, TreeRepr};
//!
//! let c = compress("abracadabra")?;
//! let tree: TreeRepr<char> = TreeRepr::from_json(&c.tree_json()?)?;
//! assert_eq!(decompress(&c.packed, &tree)?, "abracadabra");
//! # Ok::<(), huffman_codec::Error>(())
//! ```

pub mod bitstream;
pub mod codec;
pub mod error;
pub mod frequency;
pub mod logging;
pub mod repr;
pub mod storage;
pub mod table;
pub mod tree;

pub use bitstream::CodeTree;
pub use codec::{compress, decompress, Compressed};
pub use error::{Error, Malformed, Truncated};
pub use frequency::FrequencyTable;
pub use repr::TreeRepr;
pub use table::CodeTable;
pub use tree::{HuffmanTree, Node};
