use serde::de::{self, DeserializeOwned, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::marker::PhantomData;

use crate::bitstream::CodeTree;
use crate::error::Error;
use crate::tree::{HuffmanTree, Node};

/// Weightless form of a huffman tree, the shape that is persisted next to the
/// packed bytes and needed to decode them.
///
/// A leaf is `{"char": <symbol>}`, an internal node is
/// `{"0": <zero child>, "1": <one child>}`. A record holding `"char"` is a
/// leaf even if it also has `"0"` or `"1"`; other keys are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TreeRepr<Symbol> {
    Leaf {
        #[serde(rename = "char")]
        symbol: Symbol,
    },
    Internal {
        #[serde(rename = "0")]
        zero: Box<TreeRepr<Symbol>>,
        #[serde(rename = "1")]
        one: Box<TreeRepr<Symbol>>,
    },
}

impl<Symbol: Serialize> TreeRepr<Symbol> {
    pub fn to_json(&self) -> Result<String, Error> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl<Symbol: DeserializeOwned> TreeRepr<Symbol> {
    pub fn from_json(s: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(s)?)
    }
}

// hand written so that a bad record fails inside the map visitor, where the
// json deserializer still knows the line and column
impl<'de, Symbol: Deserialize<'de>> Deserialize<'de> for TreeRepr<Symbol> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RecordVisitor(PhantomData))
    }
}

struct RecordVisitor<Symbol>(PhantomData<Symbol>);

impl<'de, Symbol: Deserialize<'de>> Visitor<'de> for RecordVisitor<Symbol> {
    type Value = TreeRepr<Symbol>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(r#"a leaf {"char": ..} or an internal node {"0": .., "1": ..}"#)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        let mut symbol = None;
        let mut zero = None;
        let mut one = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.as_str() {
                "char" => symbol = Some(map.next_value()?),
                "0" => zero = Some(map.next_value::<TreeRepr<Symbol>>()?),
                "1" => one = Some(map.next_value::<TreeRepr<Symbol>>()?),
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        match (symbol, zero, one) {
            (Some(symbol), _, _) => Ok(TreeRepr::Leaf { symbol }),
            (None, Some(zero), Some(one)) => Ok(TreeRepr::Internal {
                zero: Box::new(zero),
                one: Box::new(one),
            }),
            (None, Some(_), None) => Err(de::Error::missing_field("1")),
            (None, None, Some(_)) => Err(de::Error::missing_field("0")),
            (None, None, None) => Err(de::Error::missing_field("char")),
        }
    }
}

impl<'a, Symbol: Clone> From<&'a Node<Symbol>> for TreeRepr<Symbol> {
    fn from(node: &'a Node<Symbol>) -> Self {
        match node {
            Node::Leaf { symbol, .. } => TreeRepr::Leaf {
                symbol: symbol.clone(),
            },
            Node::Internal { zero, one, .. } => TreeRepr::Internal {
                zero: Box::new(TreeRepr::from(&**zero)),
                one: Box::new(TreeRepr::from(&**one)),
            },
        }
    }
}

impl<'a, Symbol: Clone> From<&'a HuffmanTree<Symbol>> for TreeRepr<Symbol> {
    fn from(tree: &'a HuffmanTree<Symbol>) -> Self {
        tree.root().into()
    }
}

impl<Symbol> CodeTree<Symbol> for TreeRepr<Symbol> {
    fn symbol(&self) -> Option<&Symbol> {
        match self {
            TreeRepr::Leaf { symbol } => Some(symbol),
            TreeRepr::Internal { .. } => None,
        }
    }

    fn child(&self, bit: bool) -> Option<&Self> {
        match self {
            TreeRepr::Leaf { .. } => None,
            TreeRepr::Internal { zero, one } => Some(if bit { &**one } else { &**zero }),
        }
    }
}
