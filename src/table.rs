use bitvec::prelude::*;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt::Debug;

use crate::error::Error;
use crate::tree::{HuffmanTree, Node};

/// Maps every symbol of a tree to the bits on the path from the root to its
/// leaf. No code is a prefix of another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<Symbol> {
    codes: BTreeMap<Symbol, BitVec<u8, Msb0>>,
}

impl<Symbol: Ord + Clone> CodeTable<Symbol> {
    pub fn from_tree(tree: &HuffmanTree<Symbol>) -> Self {
        fn extended(path: &BitSlice<u8, Msb0>, bit: bool) -> BitVec<u8, Msb0> {
            let mut path = path.to_bitvec();
            path.push(bit);
            path
        }

        fn traverse<Symbol: Ord + Clone>(
            node: &Node<Symbol>,
            path: &BitSlice<u8, Msb0>,
        ) -> BTreeMap<Symbol, BitVec<u8, Msb0>> {
            match node {
                Node::Leaf { symbol, .. } => BTreeMap::from([(symbol.clone(), path.to_bitvec())]),
                Node::Internal { zero, one, .. } => {
                    let mut codes = traverse(zero, &extended(path, false));
                    codes.extend(traverse(one, &extended(path, true)));
                    codes
                }
            }
        }

        let codes = match tree.root() {
            // a lone leaf has no path, give it a single 0 bit so every
            // occurrence still costs one bit
            Node::Leaf { symbol, .. } => BTreeMap::from([(symbol.clone(), bitvec![u8, Msb0; 0])]),
            root => traverse(root, BitSlice::empty()),
        };

        Self { codes }
    }
}

impl<Symbol: Ord> CodeTable<Symbol> {
    pub fn get(&self, symbol: &Symbol) -> Option<&BitSlice<u8, Msb0>> {
        self.codes.get(symbol).map(|code| code.as_bitslice())
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Symbol, &BitSlice<u8, Msb0>)> {
        self.codes.iter().map(|(s, code)| (s, code.as_bitslice()))
    }
}

impl<Symbol: Ord + Debug> CodeTable<Symbol> {
    /// Concatenates the code of every symbol of `stream`, in order.
    pub fn encode(
        &self,
        stream: impl IntoIterator<Item = Symbol>,
    ) -> Result<BitVec<u8, Msb0>, Error> {
        let mut out = BitVec::new();
        for s in stream {
            let code = self
                .codes
                .get(&s)
                .ok_or_else(|| Error::UnknownSymbol(format!("{s:?}")))?;
            out.extend_from_bitslice(code);
        }

        Ok(out)
    }
}

/// Renders bits as a string of `0` and `1` characters.
pub fn to_bit_string(bits: &BitSlice<u8, Msb0>) -> String {
    bits.iter()
        .by_vals()
        .map(|b| if b { '1' } else { '0' })
        .collect()
}

// serialized as { symbol: "0101", ... }, the code strings being easier to read
// than packed words
impl<Symbol: Serialize> Serialize for CodeTable<Symbol> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.codes.len()))?;
        for (symbol, code) in &self.codes {
            map.serialize_entry(symbol, &to_bit_string(code))?;
        }
        map.end()
    }
}
