//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;

pub use display::{
    print_build_report, print_neighborhood_report, print_neighbors_report, print_paths_report,
    print_stats_report,
};
