//! Word list loading
//!
//! Reads a plain-text word list, one word per line, into a [`Corpus`].

use super::Corpus;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for corpus loading failures
///
/// An unreadable word list is fatal: no partial corpus is returned.
#[derive(Debug)]
pub enum CorpusError {
    Unreadable { path: PathBuf, source: io::Error },
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreadable { path, source } => {
                write!(f, "cannot read word list {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unreadable { source, .. } => Some(source),
        }
    }
}

/// Load a corpus from a word list file
///
/// One word per line; lines are trimmed and lowercased, blanks skipped.
/// An empty file yields an empty corpus.
///
/// # Errors
///
/// Returns `CorpusError::Unreadable` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use word_network::corpus::load_from_file;
///
/// let corpus = load_from_file("usa.txt").unwrap();
/// println!("Loaded {} words", corpus.word_count());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Corpus, CorpusError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| CorpusError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(Corpus::from_lines(content.lines()))
}
