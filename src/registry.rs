// src/registry.rs

// identity -> bucket map with exactly-once lazy creation

// dependencies
use crate::bucket::{Bucket, Decision};
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;

/// Maps each identity to its own bucket.
///
/// The map is a sharded `DashMap`, so lookups for unrelated identities do not
/// queue behind one global lock. A bucket is created on the first check for
/// an identity and lives as long as the registry; entries are never removed.
///
/// Buckets are stored behind `Arc` so the shard guard can be released before
/// the bucket's own lock is taken.
#[derive(Debug)]
pub struct KeyedRegistry<K, B>
where
    K: Hash + Eq + Clone,
    B: Bucket,
{
    config: B::Config,
    buckets: DashMap<K, Arc<B>>,
}

impl<K, B> KeyedRegistry<K, B>
where
    K: Hash + Eq + Clone + Debug,
    B: Bucket,
{
    /// Create an empty registry. Every bucket it creates uses `config`.
    pub fn new(config: B::Config) -> Self {
        Self {
            config,
            buckets: DashMap::new(),
        }
    }

    /// Run one admission check for `identity` at time `now`.
    pub fn acquire(&self, identity: &K, now: u64) -> Decision {
        self.bucket(identity, now).try_acquire_at(now)
    }

    /// Fetch the bucket for `identity`, creating it if this is its first use.
    ///
    /// Concurrent first accesses race on the shard's entry lock; exactly one
    /// bucket is inserted and every caller gets that same instance.
    pub fn bucket(&self, identity: &K, now: u64) -> Arc<B> {
        if let Some(existing) = self.get(identity) {
            return existing;
        }

        match self.buckets.entry(identity.clone()) {
            Entry::Occupied(occupied) => Arc::clone(occupied.get()),
            Entry::Vacant(vacant) => {
                tracing::debug!(identity = ?vacant.key(), "creating bucket for new identity");
                let bucket = Arc::new(B::new(&self.config, now));
                vacant.insert(Arc::clone(&bucket));
                bucket
            }
        }
    }

    /// Existing bucket for `identity`, without creating one.
    pub fn get(&self, identity: &K) -> Option<Arc<B>> {
        self.buckets
            .get(identity)
            .map(|entry| Arc::clone(entry.value()))
    }

    pub fn config(&self) -> &B::Config {
        &self.config
    }

    pub fn contains(&self, identity: &K) -> bool {
        self.buckets.contains_key(identity)
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
