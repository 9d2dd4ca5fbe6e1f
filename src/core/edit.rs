//! Single-character edit relations
//!
//! An edit relation annotates a directed graph edge with the operation that
//! transforms the source word into the target word. Each variant carries
//! exactly the fields that operation needs, so malformed annotations are
//! unrepresentable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single-character edit connecting two words
///
/// `position` is the character index at which the edit occurs, relative to
/// the longer word of the pair (for substitution, both words share the same
/// index).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EditRelation {
    /// A character inserted at `position` (target is one longer than source)
    Insertion { position: usize, inserted: char },

    /// A character removed at `position` (target is one shorter than source)
    Deletion { position: usize, removed: char },

    /// The character at `position` changed from `source` to `dest`
    Substitution {
        position: usize,
        source: char,
        dest: char,
    },
}

impl EditRelation {
    /// The relation annotating the reverse edge
    ///
    /// Deletion and insertion are inverses of each other; substitution
    /// inverts by swapping its source and destination characters.
    ///
    /// # Examples
    /// ```
    /// use word_network::core::EditRelation;
    ///
    /// let del = EditRelation::Deletion { position: 2, removed: 's' };
    /// let ins = EditRelation::Insertion { position: 2, inserted: 's' };
    /// assert_eq!(del.inverse(), ins);
    /// assert_eq!(ins.inverse(), del);
    /// ```
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Insertion { position, inserted } => Self::Deletion {
                position,
                removed: inserted,
            },
            Self::Deletion { position, removed } => Self::Insertion {
                position,
                inserted: removed,
            },
            Self::Substitution {
                position,
                source,
                dest,
            } => Self::Substitution {
                position,
                source: dest,
                dest: source,
            },
        }
    }

    /// Character index of the edit
    #[inline]
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Self::Insertion { position, .. }
            | Self::Deletion { position, .. }
            | Self::Substitution { position, .. } => position,
        }
    }

}

impl fmt::Display for EditRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insertion { position, inserted } => {
                write!(f, "ins '{inserted}' at {position}")
            }
            Self::Deletion { position, removed } => {
                write!(f, "del '{removed}' at {position}")
            }
            Self::Substitution {
                position,
                source,
                dest,
            } => write!(f, "sub '{source}'>'{dest}' at {position}"),
        }
    }
}
