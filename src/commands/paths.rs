//! Shortest path command

use crate::core::Word;
use crate::graph::EditGraph;
use crate::query::{PathsOutcome, QueryService};

/// Result of a shortest-path query between two words
pub enum PathsReport {
    /// One or both endpoints are not in the graph
    NotFound {
        from: String,
        to: String,
        missing: Vec<String>,
    },
    /// All minimum-length paths; empty means the endpoints are in
    /// different connected components
    Found {
        from: String,
        to: String,
        paths: Vec<Vec<Word>>,
    },
}

/// Find all shortest edit paths between two words
#[must_use]
pub fn find_paths(graph: &EditGraph, from: &str, to: &str) -> PathsReport {
    let service = QueryService::new(graph);

    match service.shortest_paths(from, to) {
        PathsOutcome::NotFound => {
            let missing = [from, to]
                .iter()
                .filter(|w| !graph.contains(w))
                .map(ToString::to_string)
                .collect();

            PathsReport::NotFound {
                from: from.to_string(),
                to: to.to_string(),
                missing,
            }
        }
        PathsOutcome::Found(paths) => PathsReport::Found {
            from: from.to_string(),
            to: to.to_string(),
            paths,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::Corpus;
    use crate::graph::build;

    #[test]
    fn find_paths_reports_routes() {
        let graph = build(&Corpus::from_lines(["cat", "cot", "cog"]));

        let PathsReport::Found { paths, .. } = find_paths(&graph, "cat", "cog") else {
            panic!("both endpoints exist");
        };

        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].len(), 3);
    }

    #[test]
    fn find_paths_names_the_missing_endpoint() {
        let graph = build(&Corpus::from_lines(["cat", "cot"]));

        let PathsReport::NotFound { missing, .. } = find_paths(&graph, "cat", "zzz") else {
            panic!("zzz is not in the graph");
        };
        assert_eq!(missing, vec!["zzz".to_string()]);

        let PathsReport::NotFound { missing, .. } = find_paths(&graph, "xxx", "zzz") else {
            panic!("neither endpoint is in the graph");
        };
        assert_eq!(missing.len(), 2);
    }

    #[test]
    fn find_paths_disconnected_is_found_and_empty() {
        let graph = build(&Corpus::from_lines(["cat", "dog"]));

        let PathsReport::Found { paths, .. } = find_paths(&graph, "cat", "dog") else {
            panic!("both endpoints exist");
        };
        assert!(paths.is_empty());
    }
}
