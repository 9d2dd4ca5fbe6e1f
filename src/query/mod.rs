//! Query layer over the built edit graph
//!
//! Neighbor lookup, all-shortest-paths enumeration, connected components,
//! and neighborhood extraction for the external renderer.

mod service;
mod subgraph;

pub use service::{NeighborsOutcome, PathsOutcome, QueryService};
pub use subgraph::{Subgraph, subgraph_within};
