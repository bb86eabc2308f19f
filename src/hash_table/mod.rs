use crate::error::{Error, Result};
use crate::hash::{DefaultHash, Hash};
use crate::list::{LinkedList, Node};
use itertools::Itertools;
use log::{debug, trace};
use std::fmt;
use std::marker::PhantomData;

pub use self::entry::KeyValueEntry;

mod entry;

/// The bucket count used by [`HashTable::new`]
pub const DEFAULT_CAPACITY: usize = 20;

type Bucket<K, V> = Option<LinkedList<KeyValueEntry<K, V>>>;

/// A hash table resolving collisions by separate chaining.
///
/// The bucket count is fixed when the table is built and never changes:
/// there is no rehash, so once the table holds many more entries than
/// buckets, lookups degrade towards a linear scan of one chain. Each
/// bucket's list is created the first time a key lands in it.
///
/// New keys are appended to the back of their bucket, so every chain keeps
/// its keys in first-insertion order.
pub struct HashTable<K: Eq, V, H: Hash<K> = DefaultHash<K>> {
    buckets: Box<[Bucket<K, V>]>,
    size: usize,
    _phantom_hash: PhantomData<H>,
}

impl<K: Eq, V> HashTable<K, V, DefaultHash<K>>
where
    DefaultHash<K>: Hash<K>,
{
    /// Creates an empty hash table with [`DEFAULT_CAPACITY`] buckets
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_CAPACITY)
    }

    /// Creates an empty hash table with `capacity` buckets
    ///
    /// # Arguments
    ///
    /// `capacity`: The number of buckets, which must be positive
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        Self::with_hash(capacity)
    }
}

impl<K: Eq, V, H: Hash<K>> HashTable<K, V, H> {
    /// Creates an empty hash table with `capacity` buckets, indexed by the
    /// hash function `H`
    ///
    /// # Arguments
    ///
    /// `capacity`: The number of buckets, which must be positive
    pub fn with_hash(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::InvalidArgument(format!(
                "capacity must be positive, got {capacity}"
            )));
        }
        Ok(Self::with_buckets(capacity))
    }

    fn with_buckets(capacity: usize) -> Self {
        debug!("creating hash table with {capacity} buckets");
        Self {
            buckets: (0..capacity).map(|_| None).collect(),
            size: 0,
            _phantom_hash: PhantomData,
        }
    }

    /// Returns the number of buckets
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns the number of entries in the hash table
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the hash table is empty
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the index of the bucket for the given key.
    ///
    /// The hash is taken as unsigned, so every hash value maps to exactly one
    /// bucket in `0..capacity`.
    ///
    /// # Arguments
    ///
    /// `key`: The key
    pub fn hash_index(&self, key: &K) -> usize {
        H::hash(key) % self.buckets.len()
    }

    /// Inserts the key-value pair into the hash table. If the key is already
    /// present its value is overwritten in place and the old value returned.
    ///
    /// # Arguments
    ///
    /// `key`: The key with which to insert the pair
    ///
    /// `value`: The associated value
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let index = self.hash_index(&key);
        let bucket = self.buckets[index].get_or_insert_with(|| {
            trace!("creating bucket {index}");
            LinkedList::new()
        });
        if let Some(existing) = bucket.find_mut(&key) {
            trace!("overwriting entry in bucket {index}");
            return Some(existing.set_value(value));
        }
        bucket.insert_last(Node::boxed(KeyValueEntry::new(key, value)));
        self.size += 1;
        trace!(
            "inserted entry into bucket {index}, chain length {}",
            bucket.len()
        );
        None
    }

    /// Fetches the associated value for a key
    ///
    /// # Arguments
    ///
    /// `key`: The key to search for
    pub fn get(&self, key: &K) -> Option<&V> {
        self.buckets[self.hash_index(key)]
            .as_ref()?
            .find(key)
            .map(KeyValueEntry::value)
    }

    /// Fetches the associated value for a key
    ///
    /// # Arguments
    ///
    /// `key`: The key to search for
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.hash_index(key);
        self.buckets[index]
            .as_mut()?
            .find_mut(key)
            .map(KeyValueEntry::value_mut)
    }

    /// Checks if the hash table contains the given key
    ///
    /// # Arguments
    ///
    /// `key`: The key to search for
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    fn entries(&self) -> impl Iterator<Item = &KeyValueEntry<K, V>> {
        self.buckets.iter().flatten().flat_map(LinkedList::iter)
    }
}

impl<K: Eq, V> Default for HashTable<K, V, DefaultHash<K>>
where
    DefaultHash<K>: Hash<K>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq, V> FromIterator<(K, V)> for HashTable<K, V, DefaultHash<K>>
where
    DefaultHash<K>: Hash<K>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut ht = Self::default();
        iter.into_iter().for_each(|(k, v)| {
            ht.put(k, v);
        });
        ht
    }
}

impl<K: Eq + fmt::Debug, V: fmt::Debug, H: Hash<K>> fmt::Debug for HashTable<K, V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.entries().map(|entry| (entry.key(), entry.value())))
            .finish()
    }
}

/// Every bucket in index order, e.g. `{[], [1=a 4=b], []}` for three
/// buckets. Meant for inspection only.
impl<K: Eq + fmt::Display, V: fmt::Display, H: Hash<K>> fmt::Display for HashTable<K, V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buckets = self.buckets.iter().format_with(", ", |bucket, emit| match bucket {
            Some(list) => emit(&format_args!("[{list}]")),
            None => emit(&"[]"),
        });
        write!(f, "{{{buckets}}}")
    }
}
