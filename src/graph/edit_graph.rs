//! The edit graph
//!
//! Nodes are words, directed edges are single-character edit relations.
//! Both directions of every relation are stored, so traversal never needs
//! to consult reverse adjacency. The graph is mutated only by the builder;
//! after `build` returns the structure is read-only.

use crate::core::{EditRelation, Word};
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// A word graph with typed single-edit edges
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditGraph {
    adjacency: FxHashMap<Word, Vec<(Word, EditRelation)>>,
}

impl EditGraph {
    /// Add `word` as a node if not already present
    pub(crate) fn add_node(&mut self, word: Word) {
        self.adjacency.entry(word).or_default();
    }

    /// Add a directed edge `from -> to` annotated with `relation`
    ///
    /// At most one stored relation per ordered pair: a later discovery of
    /// the same pair overwrites the annotation, matching the
    /// one-edge-per-pair graph model of the construction algorithm.
    pub(crate) fn add_relation(&mut self, from: Word, to: Word, relation: EditRelation) {
        self.add_node(to.clone());

        let edges = self.adjacency.entry(from).or_default();
        if let Some(existing) = edges.iter_mut().find(|(target, _)| *target == to) {
            existing.1 = relation;
        } else {
            edges.push((to, relation));
        }
    }

    /// True if `word` is a node
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.adjacency.contains_key(word)
    }

    /// The stored node equal to `word`, if present
    #[inline]
    #[must_use]
    pub fn node(&self, word: &str) -> Option<&Word> {
        self.adjacency.get_key_value(word).map(|(node, _)| node)
    }

    /// Number of nodes
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of directed edges (each symmetric relation counts twice)
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    /// Outgoing edges of `word`, or None if it is not a node
    #[must_use]
    pub fn edges_of(&self, word: &str) -> Option<&[(Word, EditRelation)]> {
        self.adjacency.get(word).map(Vec::as_slice)
    }

    /// Iterate over all nodes in unspecified order
    pub fn nodes(&self) -> impl Iterator<Item = &Word> {
        self.adjacency.keys()
    }

    /// The full directed edge set, for order-insensitive comparison
    #[must_use]
    pub fn edge_set(&self) -> FxHashSet<(Word, Word, EditRelation)> {
        self.adjacency
            .iter()
            .flat_map(|(from, edges)| {
                edges
                    .iter()
                    .map(|(to, relation)| (from.clone(), to.clone(), *relation))
            })
            .collect()
    }

    /// The node set, for order-insensitive comparison
    #[must_use]
    pub fn node_set(&self) -> FxHashSet<Word> {
        self.adjacency.keys().cloned().collect()
    }
}
