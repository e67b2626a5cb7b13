//! docdex — embeddable in-memory full-text lookup over named documents
//!
//! This crate contains:
//! - `store`: the [`IndexStore`] engine — register, remove, query, clear
//! - `tokenizer`: shared tokenization and normalization rules
//! - `shared`: [`SharedIndexStore`], a single-lock handle for threads
//! - `stats`: the [`IndexStats`] snapshot type
//!
//! The store owns two coupled mappings — document name → content, and
//! normalized term → set of containing document names — and keeps them
//! consistent through every register, replace, and remove. It holds no
//! ambient state: construct as many independent stores as you need.
//!
//! # Example
//!
//! ```
//! use docdex::IndexStore;
//!
//! let mut store = IndexStore::new();
//! store.register("doc1", "hello world");
//! store.register("doc2", "Hello again");
//!
//! assert_eq!(store.query("HELLO").len(), 2);
//! assert!(store.query("world").contains("doc1"));
//!
//! store.remove("doc1");
//! assert!(store.query("world").is_empty());
//! ```

pub mod shared;
pub mod stats;
pub mod store;
pub mod tokenizer;

pub use shared::SharedIndexStore;
pub use stats::IndexStats;
pub use store::IndexStore;
pub use tokenizer::{normalize, tokenize, tokenize_unique};
