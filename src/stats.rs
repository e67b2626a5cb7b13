//! Point-in-time statistics snapshots

use serde::{Deserialize, Serialize};

/// Snapshot of index state at a moment in time.
///
/// Returned by [`IndexStore::stats`](crate::IndexStore::stats); values do
/// not track later mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Number of registered documents
    pub documents: usize,
    /// Number of distinct indexed terms
    pub terms: usize,
    /// Mutation version at snapshot time
    pub version: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_serialization_shape() {
        let stats = IndexStats {
            documents: 2,
            terms: 7,
            version: 3,
        };
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["documents"], 2);
        assert_eq!(json["terms"], 7);
        assert_eq!(json["version"], 3);

        let back: IndexStats = serde_json::from_value(json).unwrap();
        assert_eq!(back, stats);
    }
}
