//! Graph statistics command

use crate::corpus::Corpus;
use crate::graph::EditGraph;
use crate::query::QueryService;

/// Corpus and graph summary statistics
pub struct StatsReport {
    pub word_count: usize,
    /// (word length, bucket size) sorted by length
    pub bucket_sizes: Vec<(usize, usize)>,
    pub node_count: usize,
    pub edge_count: usize,
    pub component_count: usize,
    pub largest_component: usize,
}

/// Summarize a corpus and its built graph
#[must_use]
pub fn graph_stats(corpus: &Corpus, graph: &EditGraph) -> StatsReport {
    let bucket_sizes = corpus
        .lengths()
        .into_iter()
        .map(|len| (len, corpus.bucket(len).map_or(0, rustc_hash::FxHashSet::len)))
        .collect();

    let components = QueryService::new(graph).connected_components();
    let largest_component = components.first().map_or(0, Vec::len);

    StatsReport {
        word_count: corpus.word_count(),
        bucket_sizes,
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        component_count: components.len(),
        largest_component,
    }
}
