use tracing::{debug, instrument};

use crate::bitstream;
use crate::error::Error;
use crate::frequency::FrequencyTable;
use crate::repr::TreeRepr;
use crate::table::CodeTable;
use crate::tree::HuffmanTree;

/// Output of [`compress`]: the packed bit stream and the tree that decodes it.
#[derive(Debug, Clone)]
pub struct Compressed {
    pub packed: Vec<u8>,
    pub tree: TreeRepr<char>,
    pub code_table: CodeTable<char>,
}

impl Compressed {
    pub fn tree_json(&self) -> Result<String, Error> {
        self.tree.to_json()
    }
}

#[instrument(skip_all, fields(len = text.len()))]
pub fn compress(text: &str) -> Result<Compressed, Error> {
    let frequencies = FrequencyTable::analyze(text.chars());
    debug!(symbols = frequencies.len(), total = frequencies.total(), "counted symbols");

    let tree = HuffmanTree::build(&frequencies)?;
    let code_table = CodeTable::from_tree(&tree);

    let bits = code_table.encode(text.chars())?;
    let packed = bitstream::pack(&bits);
    debug!(bits = bits.len(), bytes = packed.len(), "encoded text");

    Ok(Compressed {
        packed,
        tree: TreeRepr::from(&tree),
        code_table,
    })
}

#[instrument(skip_all, fields(bytes = packed.len()))]
pub fn decompress(packed: &[u8], tree: &TreeRepr<char>) -> Result<String, Error> {
    let bits = bitstream::unpack(packed)?;
    let text: String = bitstream::decode(&bits, tree)?.into_iter().collect();
    debug!(bits = bits.len(), len = text.len(), "decoded text");

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Malformed, Truncated};
    use test_case::test_case;

    #[test_case("ab" ; "two symbols")]
    #[test_case("aaab" ; "skewed")]
    #[test_case("This is a really long message, I sure do hope it encodes and decodes properly." ; "sentence")]
    #[test_case("line one\nline two\r\n\ttabbed\0nul" ; "control characters")]
    #[test_case("naïve café, 東京, 🦀🦀" ; "multibyte")]
    #[test_case("zzzzzzz" ; "single symbol")]
    fn round_trip(text: &str) {
        let c = compress(text).unwrap();
        assert_eq!(decompress(&c.packed, &c.tree).unwrap(), text);
    }

    #[test]
    fn round_trip_through_json() {
        let text = "It was the best of times, it was the worst of times";
        let c = compress(text).unwrap();
        let tree = TreeRepr::from_json(&c.tree_json().unwrap()).unwrap();

        assert_eq!(decompress(&c.packed, &tree).unwrap(), text);
    }

    #[test]
    fn aaab_scenario() {
        let c = compress("aaab").unwrap();

        assert_eq!(c.code_table.len(), 2);
        assert_eq!(c.code_table.get(&'a').unwrap().len(), 1);
        assert_ne!(c.code_table.get(&'a'), c.code_table.get(&'b'));
        assert_eq!(c.packed, vec![4, 0b1110_0000]);
        assert_eq!(decompress(&c.packed, &c.tree).unwrap(), "aaab");
    }

    #[test]
    fn single_symbol_scenario() {
        let c = compress("aaaa").unwrap();

        assert_eq!(c.tree, TreeRepr::Leaf { symbol: 'a' });
        assert_eq!(c.code_table.get(&'a').map(|code| code.len()), Some(1));
        assert_eq!(c.packed, vec![4, 0]);
        assert_eq!(decompress(&c.packed, &c.tree).unwrap(), "aaaa");
    }

    #[test]
    fn empty_input() {
        assert!(matches!(compress(""), Err(Error::EmptyInput)));
    }

    #[test]
    fn decompress_empty_payload() {
        let tree = compress("ab").unwrap().tree;
        assert_eq!(decompress(&[0], &tree).unwrap(), "");
    }

    #[test]
    fn decompress_truncated() {
        let tree = compress("ab").unwrap().tree;
        let res = decompress(&[], &tree);

        assert!(matches!(res, Err(Error::TruncatedData(Truncated::MissingHeader))));
    }

    #[test]
    fn decompress_with_wrong_tree() {
        // every bit of "ab" is a full code, but only the first of "abcc" is
        let c = compress("ab").unwrap();
        let other = compress("abcc").unwrap().tree;
        let res = decompress(&c.packed, &other);

        assert!(matches!(
            res,
            Err(Error::MalformedStream(Malformed::IncompleteCode { .. }))
        ));
    }
}
