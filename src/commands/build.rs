//! Graph build command
//!
//! Loads or builds the graph for a corpus and reports its size.

use crate::corpus::Corpus;
use crate::graph::EditGraph;
use crate::store::load_graph;
use std::path::Path;
use std::time::{Duration, Instant};

/// Result of building (or loading) the graph
pub struct BuildReport {
    pub word_count: usize,
    pub node_count: usize,
    pub edge_count: usize,
    pub duration: Duration,
}

/// Build the graph for a corpus, using the cache when available
///
/// Returns the graph together with a report; an unavailable cache degrades
/// to an uncached in-memory build.
#[must_use]
pub fn run_build(corpus: &Corpus, cache_dir: Option<&Path>) -> (EditGraph, BuildReport) {
    let started = Instant::now();
    let graph = load_graph(cache_dir, corpus);
    let duration = started.elapsed();

    let report = BuildReport {
        word_count: corpus.word_count(),
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        duration,
    };

    (graph, report)
}
