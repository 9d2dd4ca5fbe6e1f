//! Graph queries
//!
//! Pure reads over an immutable [`EditGraph`]. Absence of a queried word
//! and absence of a path are ordinary result values, not errors: callers
//! must be able to tell "word not in graph" from "word present with no
//! neighbors" and "no path" from any failure.

use crate::core::Word;
use crate::graph::EditGraph;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::VecDeque;

/// Result of a neighbor lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NeighborsOutcome {
    /// The queried word is not a node in the graph
    NotFound,
    /// The word is a node; the set may be empty for isolated words
    Found(FxHashSet<Word>),
}

/// Result of a shortest-path query
///
/// `Found(empty)` means the endpoints are in different connected
/// components, which is a normal outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathsOutcome {
    /// At least one endpoint is not a node in the graph
    NotFound,
    /// All minimum-length paths, sorted lexicographically
    Found(Vec<Vec<Word>>),
}

/// Read-only query interface over a built edit graph
pub struct QueryService<'a> {
    graph: &'a EditGraph,
}

impl<'a> QueryService<'a> {
    /// Create a service borrowing the graph
    #[must_use]
    pub const fn new(graph: &'a EditGraph) -> Self {
        Self { graph }
    }

    /// Words directly connected to `word` by any single edit relation
    ///
    /// # Examples
    /// ```
    /// use word_network::corpus::Corpus;
    /// use word_network::graph::build;
    /// use word_network::query::{NeighborsOutcome, QueryService};
    ///
    /// let graph = build(&Corpus::from_lines(["cat", "cot"]));
    /// let service = QueryService::new(&graph);
    ///
    /// let NeighborsOutcome::Found(neighbors) = service.neighbors("cat") else {
    ///     panic!("cat is in the graph");
    /// };
    /// assert!(neighbors.contains("cot"));
    /// ```
    #[must_use]
    pub fn neighbors(&self, word: &str) -> NeighborsOutcome {
        match self.graph.edges_of(word) {
            None => NeighborsOutcome::NotFound,
            Some(edges) => {
                NeighborsOutcome::Found(edges.iter().map(|(target, _)| target.clone()).collect())
            }
        }
    }

    /// All paths of minimum edit-step count between two words
    ///
    /// Unweighted breadth-first search; every edge costs 1 regardless of
    /// edit kind. `from == to` yields the single zero-length path. The
    /// returned set of paths is complete and independent of storage
    /// iteration order; paths are sorted for deterministic output.
    #[must_use]
    pub fn shortest_paths(&self, from: &str, to: &str) -> PathsOutcome {
        let (Some(start), Some(goal)) = (self.graph.node(from), self.graph.node(to)) else {
            return PathsOutcome::NotFound;
        };

        if start == goal {
            return PathsOutcome::Found(vec![vec![start.clone()]]);
        }

        // BFS distance labelling, recording every predecessor that reaches
        // a node along some shortest path
        let mut dist: FxHashMap<&Word, usize> = FxHashMap::default();
        let mut parents: FxHashMap<&Word, Vec<&Word>> = FxHashMap::default();
        let mut queue: VecDeque<&Word> = VecDeque::new();

        dist.insert(start, 0);
        queue.push_back(start);
        let mut goal_dist: Option<usize> = None;

        while let Some(current) = queue.pop_front() {
            let d = dist[current];

            // Every shortest-path predecessor of the goal sits at distance
            // goal_dist - 1, so deeper nodes cannot contribute
            if goal_dist.is_some_and(|g| d + 1 > g) {
                break;
            }

            for (next, _) in self.graph.edges_of(current.text()).unwrap_or(&[]) {
                match dist.get(next) {
                    None => {
                        dist.insert(next, d + 1);
                        parents.entry(next).or_default().push(current);
                        if next == goal {
                            goal_dist = Some(d + 1);
                        }
                        queue.push_back(next);
                    }
                    Some(&seen) if seen == d + 1 => {
                        parents.entry(next).or_default().push(current);
                    }
                    Some(_) => {}
                }
            }
        }

        if goal_dist.is_none() {
            return PathsOutcome::Found(Vec::new());
        }

        let mut paths = Vec::new();
        let mut trail = vec![goal];
        collect_paths(goal, start, &parents, &mut trail, &mut paths);
        paths.sort();

        PathsOutcome::Found(paths)
    }

    /// Connected components of the graph, treating edges as undirected
    ///
    /// Components are sorted internally, then by descending size (first
    /// word as tie-break), so output is deterministic.
    #[must_use]
    pub fn connected_components(&self) -> Vec<Vec<Word>> {
        let mut visited: FxHashSet<&Word> = FxHashSet::default();
        let mut components = Vec::new();

        for node in self.graph.nodes() {
            if visited.contains(node) {
                continue;
            }

            let mut component = Vec::new();
            let mut queue = VecDeque::from([node]);
            visited.insert(node);

            while let Some(current) = queue.pop_front() {
                component.push(current.clone());
                for (next, _) in self.graph.edges_of(current.text()).unwrap_or(&[]) {
                    if visited.insert(next) {
                        queue.push_back(next);
                    }
                }
            }

            component.sort();
            components.push(component);
        }

        components.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a[0].cmp(&b[0])));
        components
    }
}

/// Walk the parent lists backwards from `node` to `start`, emitting every
/// completed path in forward order
fn collect_paths<'g>(
    node: &'g Word,
    start: &Word,
    parents: &FxHashMap<&'g Word, Vec<&'g Word>>,
    trail: &mut Vec<&'g Word>,
    paths: &mut Vec<Vec<Word>>,
) {
    if node == start {
        paths.push(trail.iter().rev().map(|&w| w.clone()).collect());
        return;
    }

    let Some(preds) = parents.get(node) else {
        return;
    };

    for &pred in preds {
        trail.push(pred);
        collect_paths(pred, start, parents, trail, paths);
        trail.pop();
    }
}
