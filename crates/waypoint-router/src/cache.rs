//! Route table cache
//!
//! Memoizes one built table per distinct handler-set key so repeated
//! resolutions (one per navigation, typically) skip the quadratic build.
//! Populated lazily, cleared wholesale when the host reloads its handler
//! set, never partially evicted.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use blake3::Hasher;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::BuildError;
use crate::table::RouteTable;

/// Identity of one handler source (e.g. an application assembly)
pub type SourceId = String;

/// Cache key describing the handler set a table was built from
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteKey {
    /// Main application source
    app: SourceId,

    /// Additional sources, sorted and deduplicated
    additional: Vec<SourceId>,
}

impl RouteKey {
    /// Create a key for the main application source
    pub fn new(app: impl Into<SourceId>) -> Self {
        Self {
            app: app.into(),
            additional: Vec::new(),
        }
    }

    /// Add additional handler sources; order and repetition do not matter
    pub fn with_additional<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SourceId>,
    {
        self.additional
            .extend(sources.into_iter().map(Into::into));
        self.additional.sort();
        self.additional.dedup();
        self
    }

    /// Stable fingerprint of the key, for logging
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = Hasher::new();
        hasher.update(self.app.as_bytes());
        for source in &self.additional {
            hasher.update(b"/");
            hasher.update(source.as_bytes());
        }
        let hash = hasher.finalize();
        let bytes = hash.as_bytes();
        u64::from_le_bytes([
            bytes[0], bytes[1], bytes[2], bytes[3],
            bytes[4], bytes[5], bytes[6], bytes[7],
        ])
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}+{} ({:016x})",
            self.app,
            self.additional.len(),
            self.fingerprint()
        )
    }
}

/// Process-wide cache of built route tables
#[derive(Default)]
pub struct RouteTableCache {
    tables: RwLock<HashMap<RouteKey, Arc<RouteTable>>>,
}

impl RouteTableCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(HashMap::new()),
        }
    }

    /// Return the cached table for `key`, building it on first request.
    ///
    /// The build runs outside the lock, so concurrent callers for the same
    /// unseen key may build redundantly; the first table inserted wins and
    /// later builders adopt it. Build failures propagate and are never
    /// cached.
    pub fn get_or_build<F>(&self, key: &RouteKey, build: F) -> Result<Arc<RouteTable>, BuildError>
    where
        F: FnOnce() -> Result<RouteTable, BuildError>,
    {
        if let Some(table) = self.tables.read().get(key) {
            debug!(key = %key, "Route table cache hit");
            return Ok(table.clone());
        }

        let table = Arc::new(build()?);

        let mut tables = self.tables.write();
        let cached = tables.entry(key.clone()).or_insert(table);
        debug!(key = %key, entries = cached.len(), "Route table cached");
        Ok(cached.clone())
    }

    /// Drop every cached table; called when the handler set changes
    pub fn clear(&self) {
        let mut tables = self.tables.write();
        let dropped = tables.len();
        tables.clear();
        info!(dropped = dropped, "Route table cache cleared");
    }

    /// Number of cached tables
    pub fn len(&self) -> usize {
        self.tables.read().len()
    }

    /// True when nothing is cached
    pub fn is_empty(&self) -> bool {
        self.tables.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::RouteTableBuilder;

    fn build_sample() -> Result<RouteTable, BuildError> {
        RouteTableBuilder::new()
            .add_handler("Home", ["/"])
            .add_handler("Orders", ["/orders/{id:int}"])
            .build()
    }

    #[test]
    fn test_key_normalizes_additional_sources() {
        let a = RouteKey::new("app").with_additional(["lib-b", "lib-a", "lib-b"]);
        let b = RouteKey::new("app").with_additional(["lib-a", "lib-b"]);
        assert_eq!(a, b);
        assert_eq!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_distinct_keys_have_distinct_fingerprints() {
        let a = RouteKey::new("app");
        let b = RouteKey::new("app").with_additional(["lib-a"]);
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn test_get_or_build_is_idempotent() {
        let cache = RouteTableCache::new();
        let key = RouteKey::new("app");

        let first = cache.get_or_build(&key, build_sample).unwrap();
        let second = cache
            .get_or_build(&key, || panic!("must not rebuild"))
            .unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear_forces_rebuild() {
        let cache = RouteTableCache::new();
        let key = RouteKey::new("app");

        let before = cache.get_or_build(&key, build_sample).unwrap();
        cache.clear();
        assert!(cache.is_empty());

        // Rebuild reflects an updated declaration set after invalidation.
        let after = cache
            .get_or_build(&key, || {
                RouteTableBuilder::new()
                    .add_handler("Home", ["/"])
                    .build()
            })
            .unwrap();

        assert!(!Arc::ptr_eq(&before, &after));
        assert_eq!(after.len(), 1);
    }

    #[test]
    fn test_failed_build_is_not_cached() {
        let cache = RouteTableCache::new();
        let key = RouteKey::new("app");

        let err = cache.get_or_build(&key, || {
            RouteTableBuilder::new()
                .add_handler("A", ["/x"])
                .add_handler("B", ["/x"])
                .build()
        });
        assert!(err.is_err());
        assert!(cache.is_empty());

        let ok = cache.get_or_build(&key, build_sample);
        assert!(ok.is_ok());
    }

    #[test]
    fn test_concurrent_callers_share_one_table() {
        let cache = Arc::new(RouteTableCache::new());
        let key = RouteKey::new("app");

        let tables: Vec<Arc<RouteTable>> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| {
                    let cache = Arc::clone(&cache);
                    let key = key.clone();
                    scope.spawn(move || cache.get_or_build(&key, build_sample).unwrap())
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(cache.len(), 1);
        // Racing builders may have built redundantly, but everyone ends up
        // holding the one table that won the insert.
        let winner = cache
            .get_or_build(&key, || panic!("must not rebuild"))
            .unwrap();
        for table in tables {
            assert!(Arc::ptr_eq(&table, &winner));
        }
    }
}
