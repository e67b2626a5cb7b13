//! The IndexStore engine
//!
//! Two coupled mappings behind one type: document name → stored content,
//! and normalized term → set of names of documents containing it. Every
//! operation updates both sides together, so the maps can never
//! desynchronize:
//!
//! - a registered document's current content tokenizes to exactly the set
//!   of terms whose posting set contains its name
//! - a posting set that becomes empty is deleted, never left dangling
//!
//! Single-threaded by design: mutators take `&mut self` and complete
//! synchronously. For shared access use
//! [`SharedIndexStore`](crate::SharedIndexStore), which guards the whole
//! store behind one lock.

use crate::stats::IndexStats;
use crate::tokenizer::{normalize, tokenize_unique};
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::HashSet;

/// In-memory full-text lookup over named documents.
///
/// Re-registering a name replaces its content and all derived index
/// entries; removal is idempotent; queries return snapshot copies.
///
/// # Examples
///
/// ```
/// use docdex::IndexStore;
///
/// let mut store = IndexStore::new();
/// store.register("notes", "meeting at noon");
/// assert!(store.query("Noon").contains("notes"));
/// assert!(store.query("midnight").is_empty());
/// ```
#[derive(Debug, Default)]
pub struct IndexStore {
    /// Document name → current content
    documents: FxHashMap<String, String>,
    /// Normalized term → names of documents containing it
    postings: FxHashMap<String, FxHashSet<String>>,
    /// Bumped by every call that changes state
    version: u64,
}

impl IndexStore {
    /// Create an empty store.
    pub fn new() -> Self {
        IndexStore {
            documents: FxHashMap::default(),
            postings: FxHashMap::default(),
            version: 0,
        }
    }

    /// Create a store sized for an expected number of documents.
    pub fn with_capacity(docs: usize) -> Self {
        IndexStore {
            documents: FxHashMap::with_capacity_and_hasher(docs, Default::default()),
            postings: FxHashMap::default(),
            version: 0,
        }
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Register a document, replacing any previous content under the name.
    ///
    /// Prior index contributions of the name are purged first, so terms
    /// only derivable from the old content stop matching it. Any string is
    /// a valid name or content, including the empty string. Never fails.
    pub fn register(&mut self, name: impl Into<String>, content: impl Into<String>) {
        let name = name.into();
        let content = content.into();

        self.unindex(&name);

        let terms = tokenize_unique(&content);
        for term in &terms {
            self.postings
                .entry(term.clone())
                .or_default()
                .insert(name.clone());
        }

        tracing::debug!(
            target: "docdex::store",
            doc = %name,
            terms = terms.len(),
            "registered document"
        );

        self.documents.insert(name, content);
        self.version += 1;
    }

    /// Remove a document. Unregistered names are a no-op, not an error.
    pub fn remove(&mut self, name: &str) {
        if self.unindex(name) {
            tracing::debug!(target: "docdex::store", doc = %name, "removed document");
            self.version += 1;
        }
    }

    /// Discard all documents and index entries.
    pub fn clear(&mut self) {
        self.documents.clear();
        self.postings.clear();
        self.version += 1;
        tracing::debug!(target: "docdex::store", "cleared store");
    }

    /// Strip a document's entry and index contributions, if present.
    ///
    /// Re-tokenizes the stored content to recover exactly the terms it was
    /// contributing, touching only those posting sets.
    fn unindex(&mut self, name: &str) -> bool {
        let content = match self.documents.remove(name) {
            Some(content) => content,
            None => return false,
        };

        for term in tokenize_unique(&content) {
            if let Some(names) = self.postings.get_mut(&term) {
                names.remove(name);
                if names.is_empty() {
                    self.postings.remove(&term);
                }
            }
        }
        true
    }

    // ========================================================================
    // Query
    // ========================================================================

    /// Names of documents whose current content contains the word.
    ///
    /// The input is normalized with the same rule applied at indexing time,
    /// so case variants match. Unknown words, the empty string, and inputs
    /// that are all separator characters return an empty set. The returned
    /// set is a snapshot copy: later mutations never change it.
    pub fn query(&self, word: &str) -> HashSet<String> {
        match self.postings.get(&normalize(word)) {
            Some(names) => names.iter().cloned().collect(),
            None => HashSet::new(),
        }
    }

    /// Number of documents whose content contains the word (0 if none).
    pub fn doc_freq(&self, word: &str) -> usize {
        self.postings
            .get(&normalize(word))
            .map(|names| names.len())
            .unwrap_or(0)
    }

    // ========================================================================
    // Introspection
    // ========================================================================

    /// Number of registered documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Check whether the store holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Check whether a name is currently registered.
    pub fn contains(&self, name: &str) -> bool {
        self.documents.contains_key(name)
    }

    /// Stored content for a name, if registered.
    pub fn content(&self, name: &str) -> Option<&str> {
        self.documents.get(name).map(String::as_str)
    }

    /// Iterate over registered document names.
    pub fn document_names(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    /// Number of distinct indexed terms.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// Iterate over all indexed terms.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    /// Current mutation version.
    ///
    /// Bumped by every state-changing call: register and clear always,
    /// remove only when the name was present.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Snapshot of document count, term count, and version.
    pub fn stats(&self) -> IndexStats {
        IndexStats {
            documents: self.documents.len(),
            terms: self.postings.len(),
            version: self.version,
        }
    }
}
