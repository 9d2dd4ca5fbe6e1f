//! Neighbor listing command

use crate::core::{EditRelation, Word};
use crate::graph::EditGraph;
use crate::query::{NeighborsOutcome, QueryService};

/// Result of a neighbor listing
///
/// `NotFound` is distinct from a found word with no neighbors.
pub enum NeighborsReport {
    NotFound {
        word: String,
    },
    Found {
        word: String,
        /// Neighbors with their edit annotations, sorted by word
        neighbors: Vec<(Word, EditRelation)>,
    },
}

/// List the direct neighbors of a word with their edit relations
#[must_use]
pub fn list_neighbors(graph: &EditGraph, word: &str) -> NeighborsReport {
    let service = QueryService::new(graph);

    match service.neighbors(word) {
        NeighborsOutcome::NotFound => NeighborsReport::NotFound {
            word: word.to_string(),
        },
        NeighborsOutcome::Found(_) => {
            let mut neighbors = graph.edges_of(word).unwrap_or_default().to_vec();
            neighbors.sort_by(|a, b| a.0.cmp(&b.0));

            NeighborsReport::Found {
                word: word.to_string(),
                neighbors,
            }
        }
    }
}
