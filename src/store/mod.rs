//! Graph persistence
//!
//! Built graphs are cached on disk keyed by the corpus fingerprint, so
//! repeated runs against the same word list skip construction. The cache is
//! an explicit handle with open/get/put operations; nothing here is a
//! process-wide singleton. Entries are written atomically (temp file, then
//! rename) and validated on read: a corrupt entry reads as a miss and the
//! graph is rebuilt.

use crate::corpus::Corpus;
use crate::graph::{EditGraph, build};
use std::fmt;
use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Error type for cache failures
///
/// Never fatal to the caller: the documented recovery is an in-memory build
/// with no persistence (see [`load_graph`]).
#[derive(Debug)]
pub enum CacheError {
    Unavailable { path: PathBuf, source: io::Error },
    WriteFailed { path: PathBuf, source: io::Error },
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable { path, source } => {
                write!(f, "cannot open graph cache {}: {source}", path.display())
            }
            Self::WriteFailed { path, source } => {
                write!(f, "cannot write cache entry {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for CacheError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unavailable { source, .. } | Self::WriteFailed { source, .. } => Some(source),
        }
    }
}

/// Handle to an on-disk graph cache directory
///
/// Closing the cache is dropping the handle; there is no persistent state
/// beyond the entry files themselves.
#[derive(Debug)]
pub struct GraphCache {
    dir: PathBuf,
}

impl GraphCache {
    /// Open (creating if necessary) a cache directory
    ///
    /// # Errors
    ///
    /// Returns `CacheError::Unavailable` if the directory cannot be created
    /// or is not usable as a directory.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, CacheError> {
        let dir = dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&dir).map_err(|source| CacheError::Unavailable {
            path: dir.clone(),
            source,
        })?;

        Ok(Self { dir })
    }

    fn entry_path(&self, fingerprint: u64) -> PathBuf {
        self.dir.join(format!("graph-{fingerprint:016x}.bin"))
    }

    /// Look up a cached graph by corpus fingerprint
    ///
    /// A missing entry and an entry that fails to deserialize both return
    /// `None`; a corrupt file is never surfaced as a graph.
    #[must_use]
    pub fn get(&self, fingerprint: u64) -> Option<EditGraph> {
        let file = File::open(self.entry_path(fingerprint)).ok()?;
        let reader = BufReader::new(file);
        bincode::deserialize_from(reader).ok()
    }

    /// Persist a graph under a corpus fingerprint
    ///
    /// The entry is written to a temporary file in the cache directory and
    /// renamed into place, so readers never observe a partial write.
    ///
    /// # Errors
    ///
    /// Returns `CacheError::WriteFailed` if the entry cannot be written.
    pub fn put(&self, fingerprint: u64, graph: &EditGraph) -> Result<(), CacheError> {
        let path = self.entry_path(fingerprint);
        let write_failed = |source: io::Error| CacheError::WriteFailed {
            path: path.clone(),
            source,
        };

        let temp = NamedTempFile::new_in(&self.dir).map_err(write_failed)?;
        let writer = BufWriter::new(&temp);
        bincode::serialize_into(writer, graph).map_err(|e| write_failed(io::Error::other(e)))?;

        temp.persist(&path)
            .map_err(|e| write_failed(e.error))
            .map(|_| ())
    }
}

/// Cache-backed graph construction
///
/// Owns an open [`GraphCache`] and consults it before building.
#[derive(Debug)]
pub struct GraphStore {
    cache: GraphCache,
}

impl GraphStore {
    /// Wrap an already-open cache
    #[must_use]
    pub const fn new(cache: GraphCache) -> Self {
        Self { cache }
    }

    /// Open the cache directory and wrap it
    ///
    /// # Errors
    ///
    /// Returns `CacheError::Unavailable` if the cache cannot be opened.
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self, CacheError> {
        GraphCache::open(dir).map(Self::new)
    }

    /// Return the cached graph for this corpus, building and persisting it
    /// on a miss
    ///
    /// A failed persist is reported on stderr but does not fail the call;
    /// the freshly built graph is returned either way.
    #[must_use]
    pub fn get_or_build(&self, corpus: &Corpus) -> EditGraph {
        let fingerprint = corpus.fingerprint();

        if let Some(graph) = self.cache.get(fingerprint) {
            return graph;
        }

        let graph = build(corpus);
        if let Err(e) = self.cache.put(fingerprint, &graph) {
            eprintln!("warning: {e}");
        }
        graph
    }
}

/// Build a graph with the cache when possible, in memory otherwise
///
/// This is the fallback policy for an unavailable cache: the error is
/// reported and construction proceeds without persistence. `None` disables
/// caching entirely.
#[must_use]
pub fn load_graph(cache_dir: Option<&Path>, corpus: &Corpus) -> EditGraph {
    match cache_dir {
        Some(dir) => match GraphStore::open(dir) {
            Ok(store) => store.get_or_build(corpus),
            Err(e) => {
                eprintln!("warning: {e}; building graph in memory");
                build(corpus)
            }
        },
        None => build(corpus),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn small_corpus() -> Corpus {
        Corpus::from_lines(["cat", "cot", "cut", "cast", "dog"])
    }

    #[test]
    fn cache_roundtrip_preserves_graph() {
        let dir = tempfile::tempdir().unwrap();
        let cache = GraphCache::open(dir.path()).unwrap();

        let corpus = small_corpus();
        let graph = build(&corpus);
        cache.put(corpus.fingerprint(), &graph).unwrap();

        let restored = cache.get(corpus.fingerprint()).unwrap();
        assert_eq!(restored.node_set(), graph.node_set());
        assert_eq!(restored.edge_set(), graph.edge_set());
    }

    #[test]
    fn cache_miss_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let cache = GraphCache::open(dir.path()).unwrap();

        assert!(cache.get(0xdead_beef).is_none());
    }

    #[test]
    fn corrupt_entry_reads_as_miss() {
        let dir = tempfile::tempdir().unwrap();
        let cache = GraphCache::open(dir.path()).unwrap();

        let mut file = File::create(cache.entry_path(42)).unwrap();
        file.write_all(b"not a graph").unwrap();

        assert!(cache.get(42).is_none());
    }

    #[test]
    fn open_fails_when_path_is_a_file() {
        let file = tempfile::NamedTempFile::new().unwrap();

        let result = GraphCache::open(file.path());
        assert!(matches!(result, Err(CacheError::Unavailable { .. })));
    }

    #[test]
    fn cold_then_warm_builds_are_identical() {
        let dir = tempfile::tempdir().unwrap();
        let store = GraphStore::open(dir.path()).unwrap();
        let corpus = small_corpus();

        let cold = store.get_or_build(&corpus);
        assert!(store.cache.get(corpus.fingerprint()).is_some());

        let warm = store.get_or_build(&corpus);
        assert_eq!(cold.node_set(), warm.node_set());
        assert_eq!(cold.edge_set(), warm.edge_set());
    }

    #[test]
    fn changed_corpus_gets_its_own_entry() {
        let dir = tempfile::tempdir().unwrap();
        let store = GraphStore::open(dir.path()).unwrap();

        let first = Corpus::from_lines(["cat", "cot"]);
        let second = Corpus::from_lines(["cat", "cut"]);
        store.get_or_build(&first);
        store.get_or_build(&second);

        assert!(store.cache.get(first.fingerprint()).is_some());
        assert!(store.cache.get(second.fingerprint()).is_some());
        assert_ne!(first.fingerprint(), second.fingerprint());
    }

    #[test]
    fn load_graph_falls_back_without_cache() {
        let corpus = small_corpus();

        let uncached = load_graph(None, &corpus);
        assert_eq!(uncached.node_set(), build(&corpus).node_set());
    }

    #[test]
    fn load_graph_falls_back_when_cache_unavailable() {
        // A file where the cache directory should be makes open fail
        let file = tempfile::NamedTempFile::new().unwrap();
        let corpus = small_corpus();

        let graph = load_graph(Some(file.path()), &corpus);
        assert_eq!(graph.node_set(), build(&corpus).node_set());
        assert_eq!(graph.edge_set(), build(&corpus).edge_set());
    }
}
