//! A map implemented as a `Vec` of pairs, kept in insertion order.
//!
//! The wire format preserves the order map entries were encoded in, so the
//! in-memory map must too; a hash map's unspecified iteration order would
//! break round-trips. Keys are expected to be unique but nothing here
//! enforces it — the decoder keeps duplicates in order and leaves
//! de-duplication to the caller.

use hashbrown::HashMap;
use std::{
    collections::BTreeMap,
    hash::{BuildHasher, Hash},
    iter::FromIterator,
    slice::Iter,
    vec::IntoIter,
};

#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Hash, Debug, Default)]
/// An insertion-ordered map backed by a `Vec` of pairs.
pub struct VecMap<K, V>(Vec<(K, V)>);

impl<K, V> VecMap<K, V> {
    /// Creates an empty `VecMap`.
    pub fn new() -> VecMap<K, V> { VecMap(Vec::new()) }

    /// Creates an empty `VecMap` with preallocated capacity.
    pub fn with_capacity(cap: usize) -> VecMap<K, V> { VecMap(Vec::with_capacity(cap)) }

    /// Wraps a `Vec` of pairs, keeping the order given.
    pub fn from_entries(v: Vec<(K, V)>) -> Self { VecMap(v) }

    /// Appends an entry at the end. Keys are the caller's to keep unique.
    pub fn push(&mut self, key: K, value: V) { self.0.push((key, value)) }

    /// Returns the number of entries.
    pub fn len(&self) -> usize { self.0.len() }

    /// Indicates whether the `VecMap` is empty.
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Returns an `Iter` over the entries, in insertion order.
    pub fn iter(&self) -> Iter<(K, V)> { self.0.iter() }
}

impl<K: Eq + Hash, V> VecMap<K, V> {
    /// Consumes the `VecMap`, producing a `HashMap`. Entry order is lost and
    /// the last of any duplicate keys wins.
    pub fn into_hashmap<S: BuildHasher + Default>(self) -> HashMap<K, V, S> {
        self.into_iter().collect()
    }
}

impl<K, V> From<Vec<(K, V)>> for VecMap<K, V> {
    fn from(v: Vec<(K, V)>) -> Self { VecMap(v) }
}

impl<K: Ord + Hash, V, S: BuildHasher> From<HashMap<K, V, S>> for VecMap<K, V> {
    /// A hash map has no usable order, so entries are sorted by key to keep
    /// the result deterministic.
    fn from(hm: HashMap<K, V, S>) -> Self {
        let mut v: Vec<(K, V)> = hm.into_iter().collect();
        v.sort_unstable_by(|(k1, _), (k2, _)| k1.cmp(k2));
        VecMap(v)
    }
}

impl<K: Ord, V> From<BTreeMap<K, V>> for VecMap<K, V> {
    fn from(bt: BTreeMap<K, V>) -> Self { Self::from_iter(bt) }
}

impl<K, V> IntoIterator for VecMap<K, V> {
    type IntoIter = IntoIter<(K, V)>;
    type Item = (K, V);

    fn into_iter(self) -> IntoIter<(K, V)> { self.0.into_iter() }
}

impl<K, V> FromIterator<(K, V)> for VecMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> VecMap<K, V> {
        VecMap(Vec::from_iter(iter))
    }
}
