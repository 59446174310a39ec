use serde::Serialize;

use super::error::{MetricsError, Result};
use super::rank::Ranked;
use super::usage::UsageSnapshot;

/// Disk usage for one mount point during the current sampling pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FsEntry {
    pub mount_path: String,
    pub usage: UsageSnapshot,
}

/// Chained hash table keyed by mount path.
///
/// Buckets are fixed at construction; each bucket is a newest-first chain.
/// Chain order is a placement artifact. Display ordering is the ranker's
/// job, never the table's.
pub struct FsTable {
    buckets: Vec<Vec<FsEntry>>,
    len: usize,
}

impl FsTable {
    pub fn with_buckets(bucket_count: usize) -> Self {
        FsTable {
            buckets: vec![Vec::new(); bucket_count.max(1)],
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn bucket_of(&self, path: &str) -> usize {
        (djb2(path) % self.buckets.len() as u64) as usize
    }

    /// Insert one mount's usage. An entry already chained under the same
    /// path is overwritten in place; new paths are prepended.
    pub fn insert(&mut self, entry: FsEntry) {
        let bucket = self.bucket_of(&entry.mount_path);
        let chain = &mut self.buckets[bucket];
        if let Some(existing) = chain.iter_mut().find(|e| e.mount_path == entry.mount_path) {
            *existing = entry;
            return;
        }
        chain.insert(0, entry);
        self.len += 1;
    }

    /// Exact-match scan of the path's chain.
    pub fn lookup(&self, path: &str) -> Result<&FsEntry> {
        let bucket = self.bucket_of(path);
        self.buckets[bucket]
            .iter()
            .find(|entry| entry.mount_path == path)
            .ok_or(MetricsError::KeyNotFound)
    }

    /// Entries in bucket-then-chain order, the ranker's tie-break order.
    pub fn into_entries(self) -> Vec<FsEntry> {
        self.buckets.into_iter().flatten().collect()
    }
}

/// djb2 over the path's bytes: `h = 5381; h = h * 33 + byte`, wrapping.
///
/// The recurrence is kept bit-exact on 64 bits; truncation to a bucket
/// happens only at placement time.
pub fn djb2(input: &str) -> u64 {
    let mut hash: u64 = 5381;
    for &byte in input.as_bytes() {
        hash = hash.wrapping_mul(33).wrapping_add(u64::from(byte));
    }
    hash
}

impl Ranked for FsEntry {
    fn usage(&self) -> u64 {
        self.usage.used_bytes
    }
}
