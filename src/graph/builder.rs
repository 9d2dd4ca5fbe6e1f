//! Edit graph construction
//!
//! Builds the graph without pairwise edit-distance comparison. Words of each
//! length are grouped by reduced form (the word with one character removed
//! at a fixed index): two length-L words share a `(reduced, index)` group
//! exactly when they differ by a single substitution at that index, and a
//! reduced form found in the length-(L-1) bucket is a deletion target. One
//! pass over every character position of every word, O(N*L) hashing per
//! bucket plus one insertion per actual edge.

use super::EditGraph;
use crate::core::{EditRelation, Word};
use crate::corpus::Corpus;
use rustc_hash::FxHashMap;

/// Words shorter than this never enter the graph
pub const MIN_WORD_LEN: usize = 3;

/// Build the edit graph for a corpus
///
/// Length buckets are processed independently; the resulting node and edge
/// sets do not depend on iteration order. Words with no neighbor still
/// become isolated nodes. Every relation is inserted in both directions.
///
/// Length-3 words get no deletion/insertion edges down to length-2 words
/// even when the character relation holds. This mirrors the original tool
/// exactly: length-2 words connect to almost everything and drown the
/// neighborhood structure, so the original prunes them as edge targets.
///
/// # Examples
/// ```
/// use word_network::corpus::Corpus;
/// use word_network::graph::build;
///
/// let corpus = Corpus::from_lines(["cat", "cot", "cast"]);
/// let graph = build(&corpus);
/// assert_eq!(graph.node_count(), 3);
/// ```
#[must_use]
pub fn build(corpus: &Corpus) -> EditGraph {
    let mut graph = EditGraph::default();

    for (length, bucket) in corpus.buckets() {
        if length < MIN_WORD_LEN {
            continue;
        }

        // (reduced form, index) -> words of this length seen so far that
        // reduce to it at that index
        let mut groups: FxHashMap<(String, usize), Vec<Word>> = FxHashMap::default();

        for word in bucket {
            graph.add_node(word.clone());

            for idx in 0..length {
                let reduced = word.reduced(idx);

                // Deletion target in the next-shorter bucket (length-3
                // exemption preserved from the original tool)
                if length != 3
                    && let Some(shorter) = corpus.bucket(length - 1)
                    && let Some(target) = shorter.get(reduced.as_str())
                {
                    let deletion = EditRelation::Deletion {
                        position: idx,
                        removed: word.char_at(idx),
                    };
                    graph.add_relation(word.clone(), target.clone(), deletion);
                    graph.add_relation(target.clone(), word.clone(), deletion.inverse());
                }

                // Same-length words differing only at idx
                let group = groups.entry((reduced, idx)).or_default();
                for other in group.iter() {
                    let substitution = EditRelation::Substitution {
                        position: idx,
                        source: word.char_at(idx),
                        dest: other.char_at(idx),
                    };
                    graph.add_relation(word.clone(), other.clone(), substitution);
                    graph.add_relation(other.clone(), word.clone(), substitution.inverse());
                }
                group.push(word.clone());
            }
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn relation_between(graph: &EditGraph, from: &str, to: &str) -> Option<EditRelation> {
        graph
            .edges_of(from)?
            .iter()
            .find(|(target, _)| target.text() == to)
            .map(|&(_, relation)| relation)
    }

    #[test]
    fn substitution_edges_with_metadata() {
        let corpus = Corpus::from_lines(["cat", "cot"]);
        let graph = build(&corpus);

        assert_eq!(
            relation_between(&graph, "cat", "cot"),
            Some(EditRelation::Substitution {
                position: 1,
                source: 'a',
                dest: 'o',
            })
        );
        assert_eq!(
            relation_between(&graph, "cot", "cat"),
            Some(EditRelation::Substitution {
                position: 1,
                source: 'o',
                dest: 'a',
            })
        );
    }

    #[test]
    fn deletion_and_insertion_edges_with_metadata() {
        let corpus = Corpus::from_lines(["cast", "cat"]);
        let graph = build(&corpus);

        assert_eq!(
            relation_between(&graph, "cast", "cat"),
            Some(EditRelation::Deletion {
                position: 2,
                removed: 's',
            })
        );
        assert_eq!(
            relation_between(&graph, "cat", "cast"),
            Some(EditRelation::Insertion {
                position: 2,
                inserted: 's',
            })
        );
    }

    #[test]
    fn length_three_words_get_no_deletion_edges() {
        // Removing 'c' from "cat" yields "at", but length-3 words are
        // exempt from deletion edges down to length 2.
        let corpus = Corpus::from_lines(["cat", "at"]);
        let graph = build(&corpus);

        assert!(graph.contains("cat"));
        assert!(!graph.contains("at"));
        assert_eq!(graph.edges_of("cat").unwrap().len(), 0);
    }

    #[test]
    fn length_four_boundary_does_get_deletion_edges() {
        // The exemption applies to length 3 only: 4 -> 3 edges exist.
        let corpus = Corpus::from_lines(["cast", "cat", "at"]);
        let graph = build(&corpus);

        assert!(relation_between(&graph, "cast", "cat").is_some());
        assert!(relation_between(&graph, "cat", "cast").is_some());
        // And still nothing from "cat" down to "at"
        assert!(relation_between(&graph, "cat", "at").is_none());
    }

    #[test]
    fn words_shorter_than_three_are_excluded() {
        let corpus = Corpus::from_lines(["at", "it", "a"]);
        let graph = build(&corpus);

        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn isolated_word_still_becomes_a_node() {
        let corpus = Corpus::from_lines(["cat", "dog", "zzzzzz"]);
        let graph = build(&corpus);

        assert!(graph.contains("zzzzzz"));
        assert_eq!(graph.edges_of("zzzzzz").unwrap().len(), 0);
    }

    #[test]
    fn mixed_length_corpus_edge_inventory() {
        let corpus = Corpus::from_lines(["cat", "cot", "cut", "at", "cast"]);
        let graph = build(&corpus);

        assert_eq!(
            relation_between(&graph, "cat", "cot"),
            Some(EditRelation::Substitution {
                position: 1,
                source: 'a',
                dest: 'o',
            })
        );
        assert_eq!(
            relation_between(&graph, "cat", "cut"),
            Some(EditRelation::Substitution {
                position: 1,
                source: 'a',
                dest: 'u',
            })
        );
        // Length-3 exemption: no deletion edge cat -> at
        assert!(relation_between(&graph, "cat", "at").is_none());
        assert!(!graph.contains("at"));
        // cast -> cat by removing 's' at index 2
        assert_eq!(
            relation_between(&graph, "cast", "cat"),
            Some(EditRelation::Deletion {
                position: 2,
                removed: 's',
            })
        );
    }

    #[test]
    fn every_edge_has_its_reverse() {
        let corpus = Corpus::from_lines(["cat", "cot", "cut", "cast", "cost", "coat"]);
        let graph = build(&corpus);

        let edges = graph.edge_set();
        for (from, to, relation) in &edges {
            assert!(
                edges.contains(&(to.clone(), from.clone(), relation.inverse())),
                "missing reverse of {from} -> {to}"
            );
        }
    }

    #[test]
    fn rebuild_yields_identical_sets() {
        let lines = ["cat", "cot", "cut", "cast", "cost", "dog", "dot"];
        let first = build(&Corpus::from_lines(lines));
        let second = build(&Corpus::from_lines(lines));

        assert_eq!(first.node_set(), second.node_set());
        assert_eq!(first.edge_set(), second.edge_set());
    }

    #[test]
    fn empty_corpus_builds_empty_graph() {
        let graph = build(&Corpus::from_lines(Vec::<String>::new()));
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
    }
}
