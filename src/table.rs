//! Chained hash table over `i32` keys with per-key occurrence counts.
//!
//! The bucket count is fixed at creation and never changes; collisions are
//! resolved by per-bucket chains. Entries live in a single `Vec` arena and
//! chain links are indices into it, so the whole table is released in one
//! shot when it drops:
//!
//! ```text
//!  heads (Box<[Option<usize>]>)        entries (Vec<Entry>)
//! ┌──────────────┐                    ┌──────────────────────────┐
//! │ bucket 0: 2  │───────────────────►│ 0: {key, count, next: ─┐ │
//! │ bucket 1: ∅  │                    │ 1: {key, count, next}  │ │
//! │ bucket 2: 1  │                    │ 2: {key, count, next: 0} │
//! └──────────────┘                    └──────────────────────────┘
//! ```
//!
//! All storage is reserved fallibly; an allocation that cannot be satisfied
//! surfaces as [`Error::Alloc`] instead of aborting the process.

use crate::error::Error;

/// One distinct key and how many times it has been inserted.
struct Entry {
    key: i32,
    count: u32,
    /// Index of the next entry in the same bucket chain.
    next: Option<usize>,
}

/// Fixed-bucket-count multiset of `i32` keys.
///
/// Each distinct key occupies exactly one entry; repeated inserts increment
/// its count. There is no removal and no rehashing.
pub struct CountingSet {
    heads: Box<[Option<usize>]>,
    entries: Vec<Entry>,
}

impl CountingSet {
    const DEFAULT_BUCKETS: usize = 16;

    /// Creates a set with `capacity_hint` buckets; a hint of `0` falls back
    /// to 16. Fails only if the bucket array cannot be allocated.
    pub fn with_buckets(capacity_hint: usize) -> Result<Self, Error> {
        let bucket_count = if capacity_hint == 0 {
            Self::DEFAULT_BUCKETS
        } else {
            capacity_hint
        };

        let mut heads = Vec::new();
        heads.try_reserve_exact(bucket_count)?;
        heads.resize(bucket_count, None);

        Ok(Self {
            heads: heads.into_boxed_slice(),
            entries: Vec::new(),
        })
    }

    /// Bucket index for `key`. The absolute value is taken in 64-bit so
    /// `i32::MIN` does not overflow on negation.
    fn bucket_of(&self, key: i32) -> usize {
        let widened = i64::from(key).unsigned_abs();
        (widened % self.heads.len() as u64) as usize
    }

    /// Walks one bucket chain looking for `key`.
    fn find(&self, key: i32) -> Option<usize> {
        let mut cursor = self.heads[self.bucket_of(key)];
        while let Some(index) = cursor {
            let entry = &self.entries[index];
            if entry.key == key {
                return Some(index);
            }
            cursor = entry.next;
        }
        None
    }

    pub fn contains(&self, key: i32) -> bool {
        self.find(key).is_some()
    }

    /// Number of times `key` has been inserted (0 if absent).
    pub fn count(&self, key: i32) -> u32 {
        self.find(key).map_or(0, |index| self.entries[index].count)
    }

    /// Inserts `key`: increments the count of an existing entry, otherwise
    /// prepends a fresh entry (count 1) to its bucket chain.
    pub fn insert(&mut self, key: i32) -> Result<(), Error> {
        if let Some(index) = self.find(key) {
            // Saturate rather than wrap: counts only ever feed >= 2 checks,
            // and wrapping would let a count revisit 0.
            let count = &mut self.entries[index].count;
            *count = count.saturating_add(1);
            return Ok(());
        }

        let bucket = self.bucket_of(key);
        self.entries.try_reserve(1)?;
        let index = self.entries.len();
        self.entries.push(Entry {
            key,
            count: 1,
            next: self.heads[bucket],
        });
        self.heads[bucket] = Some(index);
        Ok(())
    }

    /// Iterates over every distinct key with its occurrence count, in
    /// insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, u32)> + '_ {
        self.entries.iter().map(|entry| (entry.key, entry.count))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn bucket_count(&self) -> usize {
        self.heads.len()
    }
}
