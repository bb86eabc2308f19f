use crate::hash::{DefaultHash, Hash};
use std::fmt;

/// A key-value pair stored in a hash table bucket.
///
/// Equality and hashing look at the key only, so a bucket list can find or
/// replace an entry through plain `PartialEq` without knowing about keys.
#[derive(Debug, Clone)]
pub struct KeyValueEntry<K, V> {
    key: K,
    value: V,
}

impl<K, V> KeyValueEntry<K, V> {
    /// Creates the entry from a key/value
    ///
    /// # Arguments
    ///
    /// `key`: The key
    ///
    /// `value`: The value
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Returns the key of the entry
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value of the entry
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns the value of the entry
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    /// Replaces the value, returning the old one
    pub fn set_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    /// Splits the entry into its key and value
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: PartialEq, V> PartialEq for KeyValueEntry<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<K: Eq, V> Eq for KeyValueEntry<K, V> {}

/// Probing with a bare key
impl<K: PartialEq, V> PartialEq<K> for KeyValueEntry<K, V> {
    fn eq(&self, key: &K) -> bool {
        &self.key == key
    }
}

impl<K: std::hash::Hash, V> std::hash::Hash for KeyValueEntry<K, V> {
    fn hash<S: std::hash::Hasher>(&self, state: &mut S) {
        std::hash::Hash::hash(&self.key, state)
    }
}

impl<K, V> Hash<KeyValueEntry<K, V>> for DefaultHash<KeyValueEntry<K, V>>
where
    DefaultHash<K>: Hash<K>,
{
    fn hash(val: &KeyValueEntry<K, V>) -> usize {
        DefaultHash::<K>::hash(val.key())
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for KeyValueEntry<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}
