//! Keys and key sequences.
//!
//! A [`KeySequence`] is the full set of keys on screen. Slot `i` always has
//! `id == i`; shuffles move labels between slots and replace the sequence as a
//! whole, so there is no way to edit a single key in place.

use std::collections::BTreeMap;

use crate::charset::CharacterSet;

/// Stable slot index of a key.
pub type KeyId = usize;

/// One keyboard button: its slot and its current label.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    /// Slot index, stable across shuffles.
    pub id: KeyId,
    /// Display label, compared when counting changed positions.
    pub value: String,
}

/// Ordered keys of a keyboard.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct KeySequence {
    keys: Vec<Key>,
}

impl KeySequence {
    /// Build a sequence assigning slot ids in label order.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let keys = labels
            .into_iter()
            .enumerate()
            .map(|(id, value)| Key { id, value: value.into() })
            .collect();
        Self { keys }
    }

    /// Build the initial sequence for a character set.
    pub fn from_character_set(set: &CharacterSet) -> Self {
        Self::from_labels(set.labels())
    }

    /// Number of keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the sequence has no keys.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys in slot order.
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Key in the given slot.
    pub fn get(&self, id: KeyId) -> Option<&Key> {
        self.keys.get(id)
    }

    /// Iterate keys in slot order.
    pub fn iter(&self) -> std::slice::Iter<'_, Key> {
        self.keys.iter()
    }

    /// Labels in slot order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(|k| k.value.as_str())
    }

    /// Count slots whose label differs between `self` and `other`.
    ///
    /// Only the common prefix is compared.
    pub fn changed_positions(&self, other: &Self) -> usize {
        self.keys.iter().zip(&other.keys).filter(|(a, b)| a.value != b.value).count()
    }

    /// Multiplicity of each label.
    pub fn value_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for value in self.values() {
            *counts.entry(value).or_insert(0) += 1;
        }
        counts
    }

    /// Whether both sequences hold the same multiset of labels.
    pub fn has_same_values(&self, other: &Self) -> bool {
        self.len() == other.len() && self.value_counts() == other.value_counts()
    }

    /// Split into display rows of `columns` keys; the last row may be short.
    ///
    /// A column count of zero is treated as one.
    pub fn rows(&self, columns: usize) -> std::slice::Chunks<'_, Key> {
        self.keys.chunks(columns.max(1))
    }

    /// New sequence where slot `i` takes the label currently in slot
    /// `order[i]`.
    ///
    /// `order` must be a permutation of `0..len`; slot ids are kept, so the
    /// label multiset is conserved by construction.
    pub(crate) fn permuted(&self, order: &[usize]) -> Self {
        debug_assert_eq!(order.len(), self.keys.len());
        let keys = self
            .keys
            .iter()
            .zip(order)
            .map(|(slot, &from)| Key { id: slot.id, value: self.keys[from].value.clone() })
            .collect();
        Self { keys }
    }
}

impl<'a> IntoIterator for &'a KeySequence {
    type Item = &'a Key;
    type IntoIter = std::slice::Iter<'a, Key>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}
