//! Core domain types for the word network
//!
//! Fundamental types shared by every layer: validated words and the typed
//! edit relations that annotate graph edges.

mod edit;
mod word;

pub use edit::EditRelation;
pub use word::{Word, WordError};
