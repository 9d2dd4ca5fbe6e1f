//! Neighborhood extraction for rendering
//!
//! The visualization layer is an external consumer: it takes a node list,
//! an undirected edge list, and a highlighted subset, and produces an
//! image. This module builds that handoff structure for the words within a
//! fixed number of edit steps of a center word.

use crate::core::Word;
use crate::graph::EditGraph;
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// A renderable slice of the edit graph
///
/// Edges are undirected and each unordered pair appears once. Nodes and
/// edges are sorted for deterministic output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subgraph {
    pub nodes: Vec<Word>,
    pub edges: Vec<(Word, Word)>,
    pub highlighted: Vec<Word>,
}

/// Extract the subgraph within `depth` edit steps of `center`
///
/// Returns `None` if `center` is not a node. Depth 0 yields just the
/// center. Edges are included only between nodes inside the neighborhood.
///
/// # Examples
/// ```
/// use word_network::corpus::Corpus;
/// use word_network::graph::build;
/// use word_network::query::subgraph_within;
///
/// let graph = build(&Corpus::from_lines(["cat", "cot", "cog"]));
/// let subgraph = subgraph_within(&graph, "cat", 1).unwrap();
/// assert_eq!(subgraph.nodes.len(), 2); // cat, cot; cog is 2 steps away
/// ```
#[must_use]
pub fn subgraph_within(graph: &EditGraph, center: &str, depth: usize) -> Option<Subgraph> {
    let center = graph.node(center)?;

    let mut reached: FxHashSet<&Word> = FxHashSet::default();
    let mut queue: VecDeque<(&Word, usize)> = VecDeque::from([(center, 0)]);
    reached.insert(center);

    while let Some((current, d)) = queue.pop_front() {
        if d == depth {
            continue;
        }
        for (next, _) in graph.edges_of(current.text()).unwrap_or(&[]) {
            if reached.insert(next) {
                queue.push_back((next, d + 1));
            }
        }
    }

    let mut nodes: Vec<Word> = reached.iter().map(|&w| w.clone()).collect();
    nodes.sort();

    let mut edges = Vec::new();
    for node in &reached {
        for (next, _) in graph.edges_of(node.text()).unwrap_or(&[]) {
            // Undirected: keep each pair once, smaller endpoint first
            if *node < next && reached.contains(next) {
                edges.push(((*node).clone(), next.clone()));
            }
        }
    }
    edges.sort();

    Some(Subgraph {
        nodes,
        edges,
        highlighted: vec![center.clone()],
    })
}
