//! Neighborhood extraction command
//!
//! Produces the node/edge handoff the external renderer consumes, for the
//! words within a given number of edit steps of a center word.

use crate::graph::EditGraph;
use crate::query::{Subgraph, subgraph_within};

/// Result of a neighborhood extraction
pub enum NeighborhoodReport {
    NotFound { word: String },
    Found { word: String, depth: usize, subgraph: Subgraph },
}

/// Extract the renderable subgraph around a word
#[must_use]
pub fn extract_neighborhood(graph: &EditGraph, word: &str, depth: usize) -> NeighborhoodReport {
    match subgraph_within(graph, word, depth) {
        None => NeighborhoodReport::NotFound {
            word: word.to_string(),
        },
        Some(subgraph) => NeighborhoodReport::Found {
            word: word.to_string(),
            depth,
            subgraph,
        },
    }
}
