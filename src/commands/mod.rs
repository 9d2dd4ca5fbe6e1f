//! Command implementations

pub mod build;
pub mod neighborhood;
pub mod neighbors;
pub mod paths;
pub mod stats;

pub use build::{BuildReport, run_build};
pub use neighborhood::{NeighborhoodReport, extract_neighborhood};
pub use neighbors::{NeighborsReport, list_neighbors};
pub use paths::{PathsReport, find_paths};
pub use stats::{StatsReport, graph_stats};
