use derivative::Derivative;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tracing::debug;

use crate::bitstream::CodeTree;
use crate::error::Error;
use crate::frequency::FrequencyTable;

/// A node of a huffman tree. Internal nodes own both of their children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<Symbol> {
    Leaf {
        symbol: Symbol,
        weight: u64,
    },
    Internal {
        weight: u64,
        zero: Box<Node<Symbol>>,
        one: Box<Node<Symbol>>,
    },
}

impl<Symbol> Node<Symbol> {
    fn from_children(zero: Node<Symbol>, one: Node<Symbol>) -> Self {
        Self::Internal {
            weight: zero.weight() + one.weight(),
            zero: Box::new(zero),
            one: Box::new(one),
        }
    }

    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

impl<Symbol> CodeTree<Symbol> for Node<Symbol> {
    fn symbol(&self) -> Option<&Symbol> {
        match self {
            Node::Leaf { symbol, .. } => Some(symbol),
            Node::Internal { .. } => None,
        }
    }

    fn child(&self, bit: bool) -> Option<&Self> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { zero, one, .. } => Some(if bit { &**one } else { &**zero }),
        }
    }
}

/// Queue entry for the greedy merge. Ordered by weight, then by the order it
/// was pushed, so equal weights pop first-in first-out.
#[derive(Debug, Derivative)]
#[derivative(PartialEq, Eq, PartialOrd, Ord)]
struct Pending<Symbol> {
    weight: u64,
    order: usize,

    #[derivative(PartialEq = "ignore")]
    #[derivative(PartialOrd = "ignore")]
    #[derivative(Ord = "ignore")]
    node: Node<Symbol>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<Symbol> {
    root: Node<Symbol>,
}

impl<Symbol: Ord + Clone> HuffmanTree<Symbol> {
    /// Builds the tree by repeatedly merging the two lightest nodes. The first
    /// node popped becomes the `0` child of the merged node.
    ///
    /// Leaves are queued in ascending symbol order and every merged node is
    /// queued behind everything already pushed, which fixes the shape of the
    /// tree when weights tie.
    pub fn build(frequencies: &FrequencyTable<Symbol>) -> Result<Self, Error> {
        let mut pq: BinaryHeap<_> = frequencies
            .iter()
            .enumerate()
            .map(|(order, (s, count))| {
                Reverse(Pending {
                    weight: count,
                    order,
                    node: Node::Leaf {
                        symbol: s.clone(),
                        weight: count,
                    },
                })
            })
            .collect();
        let mut pushed = pq.len();

        debug!(leaves = pq.len(), "building huffman tree");

        loop {
            let Some(Reverse(zero)) = pq.pop() else {
                return Err(Error::EmptyInput);
            };
            let Some(Reverse(one)) = pq.pop() else {
                return Ok(Self { root: zero.node });
            };

            let node = Node::from_children(zero.node, one.node);
            pq.push(Reverse(Pending {
                weight: node.weight(),
                order: pushed,
                node,
            }));
            pushed += 1;
        }
    }
}

impl<Symbol> HuffmanTree<Symbol> {
    pub fn root(&self) -> &Node<Symbol> {
        &self.root
    }

    /// Sum of all leaf weights, the length of the input the tree was built from.
    pub fn weight(&self) -> u64 {
        self.root.weight()
    }
}
