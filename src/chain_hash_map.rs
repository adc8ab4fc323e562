//! ChainHashMap: the chained-bucket table engine.

use core::fmt;
use std::slice;

use thiserror::Error;

use crate::hash;

pub const DEFAULT_LOAD_FACTOR: f64 = 0.75;
pub const DEFAULT_CAPACITY: usize = 16;

/// One stored pair. Owned by its bucket; the value is overwritten in place
/// on update and the whole entry is excised on removal.
#[derive(Clone, Debug)]
struct Entry<V> {
    key: String,
    value: V,
}

/// All entries whose keys hash to one slot, in insertion order.
type Bucket<V> = Vec<Entry<V>>;

/// Constructor options the table refuses to run with.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum OptionsError {
    #[error("capacity must be at least 1")]
    ZeroCapacity,
    #[error("load factor must be finite and positive, got {0}")]
    InvalidLoadFactor(f64),
}

/// A string-keyed map over a fixed-length slot array with separate
/// chaining. Slots start unmaterialized (`None`) and become entry vectors
/// on first use; crossing `round(capacity * load_factor)` occupancy
/// doubles the slot array and rehashes every entry.
#[derive(Clone)]
pub struct ChainHashMap<V> {
    load_factor: f64,
    slots: Vec<Option<Bucket<V>>>,
}

fn empty_slots<V>(capacity: usize) -> Vec<Option<Bucket<V>>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots
}

impl<V> ChainHashMap<V> {
    /// An empty table with the default load factor (0.75) and capacity (16).
    pub fn new() -> Self {
        Self {
            load_factor: DEFAULT_LOAD_FACTOR,
            slots: empty_slots(DEFAULT_CAPACITY),
        }
    }

    /// An empty table with explicit options. Zero capacity and non-finite
    /// or non-positive load factors are rejected rather than hashed over.
    pub fn with_options(load_factor: f64, capacity: usize) -> Result<Self, OptionsError> {
        if capacity == 0 {
            return Err(OptionsError::ZeroCapacity);
        }
        if !load_factor.is_finite() || load_factor <= 0.0 {
            return Err(OptionsError::InvalidLoadFactor(load_factor));
        }
        Ok(Self {
            load_factor,
            slots: empty_slots(capacity),
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Entry count, recomputed by summing bucket sizes. O(capacity): the
    /// table keeps no running counter.
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Occupancy at which the next `set` doubles the table.
    fn grow_threshold(&self) -> usize {
        (self.capacity() as f64 * self.load_factor).round() as usize
    }

    /// Inserts `key`, or overwrites its value in place.
    ///
    /// The growth check runs first, against current occupancy, before the
    /// key is even hashed — an update-only call can therefore still double
    /// the table.
    pub fn set(&mut self, key: String, value: V) {
        if self.len() >= self.grow_threshold() {
            self.grow();
        }
        self.place(key, value);
    }

    /// Bucket placement shared by `set` and the rehash loop: materialize
    /// the slot if needed, overwrite on key match (bucket position and
    /// count unchanged), append otherwise. Never grows, so rehashing
    /// cannot re-enter the growth path.
    fn place(&mut self, key: String, value: V) {
        let capacity = self.capacity();
        let slot = &mut self.slots[hash::slot_index(hash::poly31(&key), capacity)];
        let bucket = slot.get_or_insert_with(Bucket::new);
        for entry in bucket.iter_mut() {
            if entry.key == key {
                entry.value = value;
                return;
            }
        }
        bucket.push(Entry { key, value });
    }

    /// Doubles capacity and re-places every entry against the new slot
    /// count, in old slot order then in-bucket order. Full rehash, not an
    /// incremental split.
    fn grow(&mut self) {
        let doubled = self.capacity() * 2;
        let old_slots = std::mem::replace(&mut self.slots, empty_slots(doubled));
        for bucket in old_slots.into_iter().flatten() {
            for Entry { key, value } in bucket {
                self.place(key, value);
            }
        }
    }

    /// Looks up `key`; `None` is the not-found marker.
    pub fn get(&self, key: &str) -> Option<&V> {
        let bucket = self.slots[hash::slot_index(hash::poly31(key), self.capacity())].as_ref()?;
        bucket
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes `key`'s entry, preserving the order of the rest of its
    /// bucket, and returns the evicted value (`None` when absent). The
    /// bucket stays materialized even when this empties it, and capacity
    /// never shrinks.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let capacity = self.capacity();
        let bucket = self.slots[hash::slot_index(hash::poly31(key), capacity)].as_mut()?;
        let at = bucket.iter().position(|entry| entry.key == key)?;
        Some(bucket.remove(at).value)
    }

    /// Resets every slot to unmaterialized. Capacity and load factor are
    /// kept.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
    }

    /// Walks entries in slot order, then in-bucket insertion order. The
    /// order is stable across calls only while no mutation (growth
    /// included) happens in between.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            slots: self.slots.iter(),
            bucket: None,
        }
    }

    /// Freshly allocated key list in enumeration order.
    pub fn keys(&self) -> Vec<&str> {
        self.iter().map(|(key, _)| key).collect()
    }

    /// Freshly allocated value list in enumeration order.
    pub fn values(&self) -> Vec<&V> {
        self.iter().map(|(_, value)| value).collect()
    }

    /// Freshly allocated `(key, value)` list in enumeration order.
    pub fn entries(&self) -> Vec<(&str, &V)> {
        self.iter().collect()
    }

    /// Per-slot view for the diagnostics renderer: `None` for slots that
    /// never materialized, the entry pairs otherwise.
    pub(crate) fn slot_entries(&self) -> impl Iterator<Item = Option<Vec<(&str, &V)>>> + '_ {
        self.slots.iter().map(|slot| {
            slot.as_ref().map(|bucket| {
                bucket
                    .iter()
                    .map(|entry| (entry.key.as_str(), &entry.value))
                    .collect()
            })
        })
    }
}

impl<V> Default for ChainHashMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for ChainHashMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<V> Extend<(String, V)> for ChainHashMap<V> {
    fn extend<I: IntoIterator<Item = (String, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl<V> FromIterator<(String, V)> for ChainHashMap<V> {
    fn from_iter<I: IntoIterator<Item = (String, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<'a, V> IntoIterator for &'a ChainHashMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over `(key, value)` pairs in enumeration order.
pub struct Iter<'a, V> {
    slots: slice::Iter<'a, Option<Bucket<V>>>,
    bucket: Option<slice::Iter<'a, Entry<V>>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.bucket.as_mut().and_then(Iterator::next) {
                return Some((entry.key.as_str(), &entry.value));
            }
            self.bucket = self.slots.next()?.as_ref().map(|bucket| bucket.iter());
        }
    }
}
