//! Bit-level packing of encoded symbols and the tree walk that decodes them.
//!
//! A packed stream is one header byte holding the number of padding bits
//! (0 to 7) followed by the payload, eight bits per byte, most significant bit
//! first. The padding bits are zeros appended to the end of the payload.

use bitvec::prelude::*;
use tracing::trace;

use crate::error::{Error, Malformed, Truncated};

/// A binary tree that can be walked bit by bit to recover symbols.
pub trait CodeTree<Symbol> {
    /// The symbol held by this node if it is a leaf.
    fn symbol(&self) -> Option<&Symbol>;

    /// The child reached by following `bit` from this node. Leaves have none.
    fn child(&self, bit: bool) -> Option<&Self>;
}

pub fn pack(bits: &BitSlice<u8, Msb0>) -> Vec<u8> {
    let pad = (8 - bits.len() % 8) % 8;

    let mut payload: BitVec<u8, Msb0> = BitVec::with_capacity(bits.len() + pad);
    payload.extend_from_bitslice(bits);
    payload.resize(bits.len() + pad, false);

    let mut out = Vec::with_capacity(1 + payload.len() / 8);
    out.push(pad as u8);
    out.extend(payload.into_vec());

    trace!(bits = bits.len(), pad, bytes = out.len(), "packed bit stream");
    out
}

pub fn unpack(bytes: &[u8]) -> Result<BitVec<u8, Msb0>, Error> {
    let (&pad, payload) = bytes.split_first().ok_or(Truncated::MissingHeader)?;
    if pad >= 8 {
        return Err(Truncated::InvalidPadding(pad).into());
    }

    let available = payload.len() * 8;
    let len = available
        .checked_sub(pad as usize)
        .ok_or(Truncated::PaddingOverflow { pad, available })?;

    let mut bits = BitVec::from_slice(payload);
    bits.truncate(len);

    trace!(bits = bits.len(), pad, "unpacked bit stream");
    Ok(bits)
}

/// Walks `root` one bit at a time, emitting a symbol and starting over from
/// the root every time a leaf is reached. The stream must end exactly on a
/// leaf.
pub fn decode<Symbol, T>(bits: &BitSlice<u8, Msb0>, root: &T) -> Result<Vec<Symbol>, Error>
where
    Symbol: Clone,
    T: CodeTree<Symbol>,
{
    // a lone leaf codes each occurrence as a single 0 bit
    if let Some(sym) = root.symbol() {
        return match bits.first_one() {
            Some(offset) => Err(Malformed::MissingBranch { offset }.into()),
            None => Ok(vec![sym.clone(); bits.len()]),
        };
    }

    let mut out = Vec::new();
    let mut cursor = root;
    let mut depth = 0;
    for (offset, bit) in bits.iter().by_vals().enumerate() {
        cursor = cursor.child(bit).ok_or(Malformed::MissingBranch { offset })?;
        depth += 1;

        if let Some(sym) = cursor.symbol() {
            out.push(sym.clone());
            cursor = root;
            depth = 0;
        }
    }

    if depth > 0 {
        return Err(Malformed::IncompleteCode { dangling: depth }.into());
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;
    use crate::table::CodeTable;
    use crate::tree::{HuffmanTree, Node};
    use test_case::test_case;

    fn tree_of(s: &str) -> HuffmanTree<char> {
        HuffmanTree::build(&FrequencyTable::analyze(s.chars())).unwrap()
    }

    #[test_case(BitSlice::empty() => vec![0] ; "empty")]
    #[test_case(bits![u8, Msb0; 1, 1, 1, 0] => vec![4, 0b1110_0000] ; "half byte")]
    #[test_case(bits![u8, Msb0; 1, 0, 1, 0, 1, 0, 1, 0] => vec![0, 0b1010_1010] ; "full byte")]
    #[test_case(bits![u8, Msb0; 0, 0, 0, 0, 0, 0, 0, 0, 1] => vec![7, 0, 0b1000_0000] ; "one bit over")]
    fn pack_layout(bits: &BitSlice<u8, Msb0>) -> Vec<u8> {
        pack(bits)
    }

    #[test]
    fn pack_unaligned_slice() {
        let raw = [0b0000_1111u8, 0b1100_0000];
        let bits = &raw.view_bits::<Msb0>()[4..10];

        assert_eq!(pack(bits), vec![2, 0b1111_1100]);
    }

    #[test]
    fn padding_bound_and_inverse() {
        let source = [0xA5u8, 0x3C, 0xFF, 0x01];
        for len in 1..=source.len() * 8 {
            let bits = &source.view_bits::<Msb0>()[..len];
            let packed = pack(bits);

            assert!(packed[0] < 8);
            assert_eq!(packed.len(), 1 + len.div_ceil(8));
            assert_eq!(unpack(&packed).unwrap().as_bitslice(), bits);
        }
    }

    #[test_case(&[] => Truncated::MissingHeader ; "no header")]
    #[test_case(&[3] => Truncated::PaddingOverflow { pad: 3, available: 0 } ; "padding without payload")]
    #[test_case(&[8, 0] => Truncated::InvalidPadding(8) ; "padding of a whole byte")]
    fn unpack_rejects(bytes: &[u8]) -> Truncated {
        match unpack(bytes) {
            Err(Error::TruncatedData(t)) => t,
            other => panic!("expected truncated data, got {other:?}"),
        }
    }

    #[test]
    fn unpack_header_only() {
        assert!(unpack(&[0]).unwrap().is_empty());
    }

    #[test]
    fn decode_walks_tree() {
        let tree = tree_of("aaab");
        let out = decode(bits![u8, Msb0; 1, 1, 1, 0], tree.root()).unwrap();

        assert_eq!(out, vec!['a', 'a', 'a', 'b']);
    }

    #[test]
    fn decode_empty_stream() {
        let tree = tree_of("aaab");
        let out: Vec<char> = decode(BitSlice::empty(), tree.root()).unwrap();

        assert!(out.is_empty());
    }

    #[test]
    fn decode_stops_mid_code() {
        // c = 0, a = 10, b = 11
        let tree = tree_of("abcc");
        let res = decode(bits![u8, Msb0; 0, 1, 0, 1], tree.root());

        assert!(matches!(
            res,
            Err(Error::MalformedStream(Malformed::IncompleteCode { dangling: 1 }))
        ));
    }

    #[test]
    fn decode_lone_leaf() {
        let tree = tree_of("aaaa");
        assert_eq!(tree.root(), &Node::Leaf { symbol: 'a', weight: 4 });

        let out = decode(bits![u8, Msb0; 0, 0, 0], tree.root()).unwrap();
        assert_eq!(out, vec!['a'; 3]);

        let res = decode(bits![u8, Msb0; 0, 1, 0], tree.root());
        assert!(matches!(
            res,
            Err(Error::MalformedStream(Malformed::MissingBranch { offset: 1 }))
        ));
    }

    #[test]
    fn encode_pack_unpack_decode() {
        let s = "This is a really long message, I sure do hope it encodes and decodes properly.";
        let tree = tree_of(s);
        let table = CodeTable::from_tree(&tree);

        let packed = pack(&table.encode(s.chars()).unwrap());
        let bits = unpack(&packed).unwrap();
        let dec: String = decode(&bits, tree.root()).unwrap().into_iter().collect();

        assert_eq!(dec, s);
    }
}
