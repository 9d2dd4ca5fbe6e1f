//! Edit graph construction and representation

mod builder;
mod edit_graph;

pub use builder::{MIN_WORD_LEN, build};
pub use edit_graph::EditGraph;
