//! Date-ordered index.
//!
//! A plain (unbalanced) binary search tree keyed by the record's date string.
//! Nodes live in an arena and link to each other by position, so insertion,
//! traversal and drop stay iterative even when the tree degenerates into a
//! list under sorted input.

use crate::index::types::RecordId;

/// Position of a node in the arena
type NodeRef = usize;

#[derive(Debug)]
struct Node {
    date: String,
    id: RecordId,
    left: Option<NodeRef>,
    right: Option<NodeRef>,
}

/// Binary search tree ordering records by date.
///
/// Invariant: everything under `left` has a strictly smaller date, everything
/// under `right` has a greater or equal date. Equal dates therefore always
/// descend to the right of the earlier node, and in-order traversal yields
/// ties in insertion order.
#[derive(Debug, Default)]
pub struct DateTree {
    nodes: Vec<Node>,
    root: Option<NodeRef>,
    height: usize,
}

impl DateTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record under its date. Never fails and never rebalances.
    pub fn insert(&mut self, date: &str, id: RecordId) {
        let new_ref = self.nodes.len();
        self.nodes.push(Node {
            date: date.to_string(),
            id,
            left: None,
            right: None,
        });

        let Some(mut current) = self.root else {
            self.root = Some(new_ref);
            self.height = 1;
            return;
        };

        let mut depth = 1;
        loop {
            depth += 1;
            let node = &mut self.nodes[current];
            let slot = if date < node.date.as_str() {
                &mut node.left
            } else {
                &mut node.right
            };

            match *slot {
                Some(next) => current = next,
                None => {
                    *slot = Some(new_ref);
                    break;
                }
            }
        }

        self.height = self.height.max(depth);
    }

    /// In-order traversal: every identifier, ascending by date.
    ///
    /// The whole sequence is materialized; calling it again walks the tree
    /// from scratch.
    pub fn sorted_ids(&self) -> Vec<RecordId> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<NodeRef> = Vec::with_capacity(self.height);
        let mut current = self.root;

        while current.is_some() || !stack.is_empty() {
            while let Some(node_ref) = current {
                stack.push(node_ref);
                current = self.nodes[node_ref].left;
            }

            if let Some(node_ref) = stack.pop() {
                let node = &self.nodes[node_ref];
                out.push(node.id);
                current = node.right;
            }
        }

        out
    }

    /// Smallest date in the tree
    pub fn earliest(&self) -> Option<&str> {
        let mut current = self.root?;
        while let Some(left) = self.nodes[current].left {
            current = left;
        }
        Some(&self.nodes[current].date)
    }

    /// Largest date in the tree (the last of any ties)
    pub fn latest(&self) -> Option<&str> {
        let mut current = self.root?;
        while let Some(right) = self.nodes[current].right {
            current = right;
        }
        Some(&self.nodes[current].date)
    }

    /// Number of nodes on the longest root-to-leaf path
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
