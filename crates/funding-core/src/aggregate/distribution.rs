// Dweve Funding Lens - Startup Funding Analytics
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Insertion-ordered key/value mapping produced by grouping operations.

use std::collections::HashMap;
use std::hash::Hash;

/// A single key/value pair of a [`Distribution`] or a ranked slice of one.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Entry<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Entry<K, V> {
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }
}

/// Mapping from group key to aggregate value.
///
/// Keys keep the order in which they were first encountered in the input
/// rows. Ranking operations rely on this order to break ties, so two runs
/// over the same rows always produce the same output.
#[derive(Debug, Clone)]
pub struct Distribution<K, V> {
    entries: Vec<Entry<K, V>>,
    index: HashMap<K, usize>,
}

impl<K, V> Default for Distribution<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, V> Distribution<K, V> {
    /// Creates an empty distribution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value for `key`, inserting `init()` first if absent.
    pub(crate) fn entry_or_insert_with(&mut self, key: K, init: impl FnOnce() -> V) -> &mut V {
        let position = match self.index.get(&key) {
            Some(&position) => position,
            None => {
                let position = self.entries.len();
                self.index.insert(key.clone(), position);
                self.entries.push(Entry::new(key, init()));
                position
            }
        };
        &mut self.entries[position].value
    }

    /// Looks up the aggregate for a key.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&i| &self.entries[i].value)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Removes a key, keeping the relative order of the remaining entries.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let position = self.index.remove(key)?;
        let removed = self.entries.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        Some(removed.value)
    }
}

impl<K, V> Distribution<K, V> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-encountered order.
    pub fn entries(&self) -> &[Entry<K, V>] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|e| (&e.key, &e.value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|e| &e.key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|e| &e.value)
    }

    /// Consumes the distribution, returning entries ordered by key.
    ///
    /// Used for time series where the key is a year or a (year, month) pair.
    pub fn into_sorted_by_key(self) -> Vec<Entry<K, V>>
    where
        K: Ord,
    {
        let mut entries = self.entries;
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        entries
    }
}

impl<K, V> IntoIterator for Distribution<K, V> {
    type Item = Entry<K, V>;
    type IntoIter = std::vec::IntoIter<Entry<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for Distribution<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

#[cfg(feature = "serde")]
impl<K: serde::Serialize, V: serde::Serialize> serde::Serialize for Distribution<K, V> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.entries)
    }
}
