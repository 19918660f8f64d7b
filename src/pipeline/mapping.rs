//! Insertion-ordered mapping pipeline container.
//!
//! [`Mapping`] is a small association container that remembers the order in
//! which keys were first inserted, mirroring the ordered-mapping semantics
//! of the pipeline surface: grouping and frequency operations on
//! [`Sequence`](super::Sequence) produce mappings whose iteration order is
//! the first-occurrence order of their keys.
//!
//! Like `Sequence`, every transformation returns a new `Mapping` and leaves
//! the receiver untouched.
//!
//! # Examples
//!
//! ```rust
//! use enumars::pipeline::Mapping;
//!
//! let scores = Mapping::new()
//!     .put("alice", 3)
//!     .put("bob", 5);
//!
//! assert_eq!(scores.get(&"alice"), Some(&3));
//! assert_eq!(scores.keys(), vec!["alice", "bob"]);
//!
//! // Updating an existing key keeps its original position.
//! let updated = scores.put("alice", 9);
//! assert_eq!(updated.keys(), vec!["alice", "bob"]);
//! assert_eq!(scores.get(&"alice"), Some(&3)); // original preserved
//! ```

use super::sequence::Sequence;

/// An insertion-ordered association container with chainable helpers.
///
/// Keys are compared with `PartialEq` and kept in first-insertion order;
/// updating an existing key replaces its value in place. Lookups are linear,
/// which suits the small, pipeline-shaped mappings this library produces
/// (group tables, frequency counts).
///
/// # Examples
///
/// ```rust
/// use enumars::pipeline::Mapping;
///
/// let mapping = Mapping::from(vec![("a", 1), ("b", 2)]);
/// assert_eq!(mapping.len(), 2);
/// assert!(mapping.contains_key(&"a"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mapping<K, V> {
    entries: Vec<(K, V)>,
}

impl<K, V> Default for Mapping<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Mapping<K, V> {
    /// Creates an empty mapping.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Mapping;
    ///
    /// let mapping: Mapping<&str, i32> = Mapping::new();
    /// assert!(mapping.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the mapping contains no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }
}

impl<K: PartialEq, V> Mapping<K, V> {
    /// Returns the value stored under `key`, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Mapping;
    ///
    /// let mapping = Mapping::from(vec![("a", 1)]);
    /// assert_eq!(mapping.get(&"a"), Some(&1));
    /// assert_eq!(mapping.get(&"b"), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries
            .iter()
            .find(|(stored, _)| stored == key)
            .map(|(_, value)| value)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.iter().any(|(stored, _)| stored == key)
    }

    /// Replaces the value under `key` (or appends the entry), mutating in
    /// place. Internal building block for the persistent operations.
    fn insert_in_place(&mut self, key: K, value: V) {
        match self.entries.iter_mut().find(|(stored, _)| *stored == key) {
            Some((_, stored_value)) => *stored_value = value,
            None => self.entries.push((key, value)),
        }
    }
}

impl<K: PartialEq + Clone, V: Clone> Mapping<K, V> {
    /// Returns a new mapping with `value` stored under `key`.
    ///
    /// An existing key keeps its original position; a new key is appended.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Mapping;
    ///
    /// let mapping = Mapping::new().put("a", 1).put("b", 2).put("a", 9);
    /// assert_eq!(mapping.get(&"a"), Some(&9));
    /// assert_eq!(mapping.keys(), vec!["a", "b"]);
    /// ```
    #[must_use]
    pub fn put(&self, key: K, value: V) -> Self {
        let mut updated = self.clone();
        updated.insert_in_place(key, value);
        updated
    }

    /// Returns a new mapping without the entry under `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Mapping;
    ///
    /// let mapping = Mapping::from(vec![("a", 1), ("b", 2)]).delete(&"a");
    /// assert_eq!(mapping.get(&"a"), None);
    /// assert_eq!(mapping.len(), 1);
    /// ```
    #[must_use]
    pub fn delete(&self, key: &K) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(stored, _)| stored != key)
                .cloned()
                .collect(),
        }
    }

    /// Returns a new mapping combining both mappings; entries from `other`
    /// overwrite entries with equal keys, positions follow first insertion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Mapping;
    ///
    /// let base = Mapping::from(vec![("a", 1), ("b", 2)]);
    /// let merged = base.merge(&Mapping::from(vec![("b", 9), ("c", 3)]));
    /// assert_eq!(merged.get(&"b"), Some(&9));
    /// assert_eq!(merged.keys(), vec!["a", "b", "c"]);
    /// ```
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let mut merged = self.clone();
        for (key, value) in &other.entries {
            merged.insert_in_place(key.clone(), value.clone());
        }
        merged
    }

    /// Returns the keys as a [`Sequence`], in insertion order.
    #[must_use]
    pub fn keys(&self) -> Sequence<K> {
        self.entries.iter().map(|(key, _)| key.clone()).collect()
    }

    /// Returns the values as a [`Sequence`], in insertion order.
    #[must_use]
    pub fn values(&self) -> Sequence<V> {
        self.entries
            .iter()
            .map(|(_, value)| value.clone())
            .collect()
    }

    /// Returns a new mapping with every value transformed, keys untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Mapping;
    ///
    /// let doubled = Mapping::from(vec![("a", 1), ("b", 2)]).map_values(|v| v * 2);
    /// assert_eq!(doubled.get(&"a"), Some(&2));
    /// assert_eq!(doubled.get(&"b"), Some(&4));
    /// ```
    pub fn map_values<W>(&self, transform: impl Fn(&V) -> W) -> Mapping<K, W> {
        Mapping {
            entries: self
                .entries
                .iter()
                .map(|(key, value)| (key.clone(), transform(value)))
                .collect(),
        }
    }

    /// Returns a new mapping keeping only entries satisfying `predicate`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Mapping;
    ///
    /// let odd = Mapping::from(vec![("a", 1), ("b", 2)]).filter(|_, v| v % 2 == 1);
    /// assert_eq!(odd.keys(), vec!["a"]);
    /// ```
    pub fn filter(&self, predicate: impl Fn(&K, &V) -> bool) -> Self {
        Self {
            entries: self
                .entries
                .iter()
                .filter(|(key, value)| predicate(key, value))
                .cloned()
                .collect(),
        }
    }

    /// Returns a new mapping excluding entries satisfying `predicate`.
    pub fn reject(&self, predicate: impl Fn(&K, &V) -> bool) -> Self {
        self.filter(|key, value| !predicate(key, value))
    }

    /// Copies the entries into a [`Sequence`] of pairs, in insertion order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumars::pipeline::Mapping;
    ///
    /// let pairs = Mapping::from(vec![("a", 1), ("b", 2)]).to_sequence();
    /// assert_eq!(pairs, vec![("a", 1), ("b", 2)]);
    /// ```
    #[must_use]
    pub fn to_sequence(&self) -> Sequence<(K, V)> {
        self.entries.iter().cloned().collect()
    }
}

// =============================================================================
// Conversions and Iteration
// =============================================================================

impl<K: PartialEq, V> From<Vec<(K, V)>> for Mapping<K, V> {
    fn from(entries: Vec<(K, V)>) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: PartialEq, V> FromIterator<(K, V)> for Mapping<K, V> {
    /// Collects pairs in encounter order; a later duplicate key overwrites
    /// the earlier value while keeping the first-insertion position.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iterable: I) -> Self {
        let mut mapping = Self::new();
        for (key, value) in iterable {
            mapping.insert_in_place(key, value);
        }
        mapping
    }
}

impl<K, V> IntoIterator for Mapping<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Mapping<K, V> {
    type Item = &'a (K, V);
    type IntoIter = std::slice::Iter<'a, (K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_keys_overwrite_but_keep_position() {
        let mapping = Mapping::from(vec![("a", 1), ("b", 2), ("a", 9)]);
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get(&"a"), Some(&9));
        assert_eq!(mapping.keys(), vec!["a", "b"]);
    }

    #[test]
    fn put_and_delete_leave_the_receiver_untouched() {
        let mapping = Mapping::from(vec![("a", 1)]);
        let _ = mapping.put("b", 2);
        let _ = mapping.delete(&"a");
        assert_eq!(mapping, Mapping::from(vec![("a", 1)]));
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let mapping = Mapping::from(vec![("b", 2), ("a", 1), ("c", 3)]);
        let keys: Vec<&&str> = mapping.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec![&"b", &"a", &"c"]);
    }
}
