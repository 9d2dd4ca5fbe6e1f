//! Word Network
//!
//! Builds a graph over a dictionary whose edges connect words one character
//! insertion, deletion, or substitution apart, then answers neighbor and
//! all-shortest-paths queries against it. Construction groups words by
//! length and reduced form instead of comparing all pairs, and built graphs
//! are cached on disk keyed by a corpus fingerprint.
//!
//! # Quick Start
//!
//! ```rust
//! use word_network::corpus::Corpus;
//! use word_network::graph::build;
//! use word_network::query::{PathsOutcome, QueryService};
//!
//! let corpus = Corpus::from_lines(["cat", "cot", "cog"]);
//! let graph = build(&corpus);
//!
//! let service = QueryService::new(&graph);
//! if let PathsOutcome::Found(paths) = service.shortest_paths("cat", "cog") {
//!     assert_eq!(paths.len(), 1);
//! }
//! ```

// Core domain types
pub mod core;

// Word corpus loading and fingerprinting
pub mod corpus;

// Graph construction
pub mod graph;

// On-disk graph cache
pub mod store;

// Neighbor and shortest-path queries
pub mod query;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
