//! Huffman tree construction.
//!
//! The classic greedy merge: seed a min-priority queue with one leaf per
//! distinct symbol, then repeatedly pull the two lightest nodes and fuse them
//! under a fresh internal node until a single root remains. Each internal
//! node exclusively owns its children, so the tree is a plain owned
//! structure with no sharing and no back references.
//!
//! Tie-break: `BinaryHeap` leaves the order of equal elements unspecified, so
//! every heap entry carries a creation sequence number. Leaves are seeded in
//! ascending symbol order and merged nodes are numbered after them; among
//! equal weights the oldest entry wins. The resulting tree is fully
//! deterministic for a given frequency map.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};
use crate::freq::FrequencyMap;

/// A node in the Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A symbol and its aggregated frequency.
    Leaf {
        /// The byte value this leaf encodes.
        symbol: u8,
        /// How often the symbol occurs.
        weight: u64,
    },
    /// An interior node whose weight is the sum of its children's.
    Internal {
        /// Combined weight of both subtrees.
        weight: u64,
        /// Subtree reached on a 0 bit.
        left: Box<Node>,
        /// Subtree reached on a 1 bit.
        right: Box<Node>,
    },
}

impl Node {
    /// Aggregated frequency of this subtree.
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    /// True for a leaf node.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

/// Heap entry: a node plus its creation rank for deterministic ties.
struct Ranked {
    node: Node,
    order: u32,
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want the lightest (and on
        // ties the oldest) entry on top.
        other
            .node
            .weight()
            .cmp(&self.node.weight())
            .then_with(|| other.order.cmp(&self.order))
    }
}

/// Build the Huffman tree for `freq`.
///
/// A map with a single distinct symbol yields a degenerate tree whose root
/// is that leaf.
///
/// # Errors
/// Returns `Error::EmptyAlphabet` if the map has no counted symbols; callers
/// compressing a zero-length buffer must special-case it before reaching
/// here.
pub fn build_tree(freq: &FrequencyMap) -> Result<Node> {
    let mut order = 0u32;
    let mut pq = BinaryHeap::new();
    for (symbol, weight) in freq.symbols() {
        pq.push(Ranked {
            node: Node::Leaf { symbol, weight },
            order,
        });
        order += 1;
    }

    if pq.is_empty() {
        return Err(Error::EmptyAlphabet);
    }

    while pq.len() > 1 {
        let left = pq.pop().map(|r| r.node).ok_or(Error::EmptyAlphabet)?;
        let right = pq.pop().map(|r| r.node).ok_or(Error::EmptyAlphabet)?;
        let weight = left.weight() + right.weight();
        pq.push(Ranked {
            node: Node::Internal {
                weight,
                left: Box::new(left),
                right: Box::new(right),
            },
            order,
        });
        order += 1;
    }

    pq.pop().map(|r| r.node).ok_or(Error::EmptyAlphabet)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf_count(node: &Node) -> usize {
        match node {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => leaf_count(left) + leaf_count(right),
        }
    }

    #[test]
    fn empty_map_is_rejected() {
        let err = build_tree(&FrequencyMap::new()).unwrap_err();
        assert!(matches!(err, Error::EmptyAlphabet));
    }

    #[test]
    fn single_symbol_gives_degenerate_root() {
        let freq = FrequencyMap::from_bytes(&[0x41; 1000]);
        let root = build_tree(&freq).unwrap();
        assert!(root.is_leaf());
        assert_eq!(root.weight(), 1000);
    }

    #[test]
    fn root_weight_is_input_length() {
        let data = b"abracadabra";
        let root = build_tree(&FrequencyMap::from_bytes(data)).unwrap();
        assert_eq!(root.weight(), data.len() as u64);
        assert!(!root.is_leaf());
    }

    #[test]
    fn two_symbols_give_one_internal_node() {
        let root = build_tree(&FrequencyMap::from_bytes(b"AAAAB")).unwrap();
        match &root {
            Node::Internal { left, right, .. } => {
                assert!(left.is_leaf());
                assert!(right.is_leaf());
            }
            Node::Leaf { .. } => panic!("expected internal root"),
        }
        assert_eq!(leaf_count(&root), 2);
    }

    #[test]
    fn all_256_values_give_256_leaves() {
        let data: Vec<u8> = (0..=255).collect();
        let root = build_tree(&FrequencyMap::from_bytes(&data)).unwrap();
        assert_eq!(leaf_count(&root), 256);
    }

    #[test]
    fn construction_is_deterministic() {
        // All weights equal, so every merge is a tie.
        let data: Vec<u8> = (0..32).collect();
        let freq = FrequencyMap::from_bytes(&data);
        let a = build_tree(&freq).unwrap();
        let b = build_tree(&freq).unwrap();
        assert_eq!(a, b);
    }
}
