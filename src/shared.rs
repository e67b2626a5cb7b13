//! Shared handle for concurrent access
//!
//! The engine's two-map state is one unit of mutual exclusion: a register
//! or remove must never interleave with another operation in a way that
//! exposes a half-updated index. `SharedIndexStore` enforces that with a
//! single `RwLock` around the whole store — writers are exclusive, readers
//! observe a fully consistent snapshot.

use crate::stats::IndexStats;
use crate::store::IndexStore;
use parking_lot::RwLock;
use std::collections::HashSet;
use std::sync::Arc;

/// Cloneable, thread-safe handle to an [`IndexStore`].
///
/// All clones address the same store. Methods return owned values, never
/// lock guards, so no caller can hold the lock across unrelated work.
///
/// # Examples
///
/// ```
/// use docdex::SharedIndexStore;
///
/// let store = SharedIndexStore::new();
/// let handle = store.clone();
///
/// store.register("doc", "hello world");
/// assert!(handle.query("hello").contains("doc"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedIndexStore {
    inner: Arc<RwLock<IndexStore>>,
}

impl SharedIndexStore {
    /// Create a handle to a new empty store.
    pub fn new() -> Self {
        SharedIndexStore {
            inner: Arc::new(RwLock::new(IndexStore::new())),
        }
    }

    /// Create a handle sized for an expected number of documents.
    pub fn with_capacity(docs: usize) -> Self {
        SharedIndexStore {
            inner: Arc::new(RwLock::new(IndexStore::with_capacity(docs))),
        }
    }

    /// Register a document, replacing any previous content under the name.
    pub fn register(&self, name: impl Into<String>, content: impl Into<String>) {
        self.inner.write().register(name, content);
    }

    /// Remove a document. Unregistered names are a no-op.
    pub fn remove(&self, name: &str) {
        self.inner.write().remove(name);
    }

    /// Discard all documents and index entries.
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Names of documents whose current content contains the word.
    pub fn query(&self, word: &str) -> HashSet<String> {
        self.inner.read().query(word)
    }

    /// Number of documents whose content contains the word.
    pub fn doc_freq(&self, word: &str) -> usize {
        self.inner.read().doc_freq(word)
    }

    /// Number of registered documents.
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Check whether the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Check whether a name is currently registered.
    pub fn contains(&self, name: &str) -> bool {
        self.inner.read().contains(name)
    }

    /// Stored content for a name, if registered.
    pub fn content(&self, name: &str) -> Option<String> {
        self.inner.read().content(name).map(str::to_string)
    }

    /// Snapshot of registered document names.
    pub fn document_names(&self) -> Vec<String> {
        self.inner.read().document_names().map(str::to_string).collect()
    }

    /// Number of distinct indexed terms.
    pub fn term_count(&self) -> usize {
        self.inner.read().term_count()
    }

    /// Snapshot of all indexed terms.
    pub fn terms(&self) -> Vec<String> {
        self.inner.read().terms().map(str::to_string).collect()
    }

    /// Current mutation version.
    pub fn version(&self) -> u64 {
        self.inner.read().version()
    }

    /// Snapshot of document count, term count, and version.
    pub fn stats(&self) -> IndexStats {
        self.inner.read().stats()
    }
}

impl From<IndexStore> for SharedIndexStore {
    fn from(store: IndexStore) -> Self {
        SharedIndexStore {
            inner: Arc::new(RwLock::new(store)),
        }
    }
}
