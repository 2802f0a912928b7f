use core::borrow::Borrow;
use core::fmt::{self, Debug};
use core::hash::{BuildHasher, Hash};
use core::mem;

use std::collections::hash_map::RandomState;

use hashbrown::HashTable;
use parking_lot::lock_api::{self, RwLock};

use crate::error::AllocError;
use crate::iter::{IndexedValues, Iter, Keys, Values};
use crate::lock::LocalLock;

#[derive(Clone)]
pub(crate) struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    hash: u64,
}

/// What happened to a batch handed to [`MapData::apply`].
enum Applied<V> {
    /// Every entry of the batch was a new key and has been appended.
    Appended,
    /// A key present before the batch was overwritten; holds the previous value.
    Replaced(V),
    /// A key repeated within the batch; holds the rejected value.
    Ignored(V),
}

/// The ordered storage and its index. Both live behind the same lock and are never accessed
/// separately.
struct MapData<K, V> {
    entries: Vec<Entry<K, V>>,
    // Positions into `entries`, probed with the hash stored in each entry.
    index: HashTable<usize>,
}

impl<K, V> MapData<K, V> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashTable::with_capacity(capacity),
        }
    }

    /// Grows both structures so that `additional` appends cannot allocate.
    ///
    /// On error nothing observable changes: the length and contents are untouched.
    fn try_reserve(&mut self, additional: usize) -> Result<(), AllocError> {
        let MapData { entries, index } = self;
        entries
            .try_reserve(additional)
            .map_err(|_| AllocError::for_vec::<Entry<K, V>>(entries.len(), additional))?;
        index.try_reserve(additional, |&i| entries[i].hash)?;
        Ok(())
    }

    /// Re-points the index slots of the entries that moved down after a removal at `removed`.
    ///
    /// When more than half of the index is affected, every slot is visited once. Otherwise each
    /// moved entry is probed for by its hash.
    fn decrement_index(&mut self, removed: usize) {
        let MapData { entries, index } = self;
        let moved = entries.len() - removed;

        if moved > index.len() / 2 {
            for pos in index.iter_mut() {
                if *pos > removed {
                    *pos -= 1;
                }
            }
            return;
        }

        for (new_pos, entry) in entries.iter().enumerate().skip(removed) {
            let slot = index.find_mut(entry.hash, |&pos| pos == new_pos + 1);
            debug_assert!(slot.is_some(), "Logic error: moved entry has no index slot");
            if let Some(pos) = slot {
                *pos = new_pos;
            }
        }
    }
}

impl<K, V> MapData<K, V>
where
    K: Eq,
{
    fn find<Q>(&self, hash: u64, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        self.index
            .find(hash, |&pos| key.eq(self.entries[pos].key.borrow()))
            .copied()
    }

    /// Appends a new key. Capacity must have been reserved.
    fn push(&mut self, hash: u64, key: K, value: V) {
        let MapData { entries, index } = self;
        let pos = entries.len();
        index.insert_unique(hash, pos, |&i| entries[i].hash);
        entries.push(Entry { key, value, hash });
    }

    /// Applies a batch of pre-hashed entries in order.
    ///
    /// New keys are appended. Processing stops at the first key that is already present: a key
    /// that existed before the batch gets the new value, a key appended earlier by this same batch
    /// keeps its first value. Entries left in `batch` are not applied.
    fn apply<I>(&mut self, batch: &mut I) -> Applied<V>
    where
        I: Iterator<Item = (u64, K, V)>,
    {
        let start = self.entries.len();
        for (hash, key, value) in batch {
            match self.find(hash, &key) {
                Some(pos) if pos < start => {
                    let old = mem::replace(&mut self.entries[pos].value, value);
                    return Applied::Replaced(old);
                }
                Some(_) => return Applied::Ignored(value),
                None => self.push(hash, key, value),
            }
        }
        Applied::Appended
    }

    fn remove<Q>(&mut self, hash: u64, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ?Sized + Eq,
    {
        let MapData { entries, index } = self;
        let pos = match index.find_entry(hash, |&pos| key.eq(entries[pos].key.borrow())) {
            Ok(slot) => slot.remove().0,
            Err(_) => return None,
        };

        // Call order matters: the index is re-pointed against the compacted entries.
        let removed = entries.remove(pos);
        self.decrement_index(pos);

        Some((removed.key, removed.value))
    }
}

/// A hash map that remembers the order in which keys were first inserted.
///
/// Entries live in a dense vector in insertion order, and a hash index maps every key to its
/// position. Updating an existing key keeps its position. Removing a key shifts every later entry
/// down by one, which makes [`OrderedMap::shift_remove`] _O_(n): this map is not meant for
/// workloads dominated by removals.
///
/// Both structures sit behind one reader/writer lock of type `R`:
///
/// - [`parking_lot::RawRwLock`] (the default) makes the map `Sync`, so it can be shared between
///   threads, e.g. in an `Arc`, and used through `&self`.
///
/// - [`LocalLock`] performs no synchronization at all. Such a map is `Send` but not `Sync`; see
///   [`UnguardedOrderedMap`].
///
/// All methods take `&self` except the ones that bypass the lock through an exclusive borrow
/// ([`OrderedMap::get_mut`], `Extend`, [`OrderedMap::into_entries`]). Reads return clones, since no
/// reference into the map can outlive the lock guard.
///
/// Keys and values are cloned while the read lock is held. A `Clone` impl must not call back into
/// the same guarded map: `parking_lot` read locks are not recursive, so such a call can deadlock
/// behind a queued writer.
///
/// # Examples
///
/// ```
/// use ordmap::OrderedMap;
///
/// let map = OrderedMap::new();
///
/// map.set("Frodo", "The Shire");
/// map.set("Legolas", "Mirkwood");
/// map.set("Frodo", "Bag End");
///
/// assert_eq!(map.get("Frodo"), Some("Bag End"));
/// assert_eq!(map.index_of("Legolas"), Some(1));
/// assert_eq!(map.keys().collect::<Vec<_>>(), vec!["Frodo", "Legolas"]);
/// ```
pub struct OrderedMap<K, V, R = parking_lot::RawRwLock, S = RandomState> {
    data: RwLock<R, MapData<K, V>>,
    hasher: S,
}

/// An [`OrderedMap`] without internal synchronization.
///
/// It avoids locking overhead when the caller already guarantees exclusive access: single-threaded
/// use, or a coarser lock around the whole map. It is `Send` but not `Sync`, so the compiler
/// rejects sharing it between threads without such a lock.
///
/// A conflicting re-entrant access panics, for example a value's `Clone` impl writing to the same
/// map while [`OrderedMap::get`] is copying that value.
///
/// ```compile_fail
/// use ordmap::OrderedMap;
///
/// fn shared<T: Sync>(_: &T) {}
///
/// let map: ordmap::UnguardedOrderedMap<u8, u8> = OrderedMap::new_unguarded();
/// shared(&map);
/// ```
pub type UnguardedOrderedMap<K, V, S = RandomState> = OrderedMap<K, V, LocalLock, S>;

impl<K, V> OrderedMap<K, V> {
    /// Creates an empty guarded map without allocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let map: OrderedMap<i32, &str> = OrderedMap::new();
    /// assert_eq!(map.len(), 0);
    /// ```
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty guarded map with room for `capacity` entries.
    ///
    /// # Panics
    ///
    /// Panics if the capacity overflows, or aborts when allocation fails.
    #[must_use]
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<K, V> OrderedMap<K, V, LocalLock> {
    /// Creates an empty unguarded map without allocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let map = OrderedMap::new_unguarded();
    /// map.set(1, "a");
    /// assert_eq!(map.get(&1), Some("a"));
    /// ```
    #[must_use]
    #[inline]
    pub fn new_unguarded() -> Self {
        Self::unguarded_with_capacity(0)
    }

    /// Creates an empty unguarded map with room for `capacity` entries.
    #[must_use]
    #[inline]
    pub fn unguarded_with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<K, V, R, S> OrderedMap<K, V, R, S>
where
    R: lock_api::RawRwLock,
{
    /// Creates an empty map that hashes keys with `hasher`.
    #[must_use]
    #[inline]
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    /// Creates an empty map with room for `capacity` entries that hashes keys with `hasher`.
    #[must_use]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            data: RwLock::new(MapData::with_capacity(capacity)),
            hasher,
        }
    }

    /// Returns the map's hasher.
    #[inline]
    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.read().entries.len()
    }

    /// Returns `true` if the map holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Reads the entry at `pos` under one shared acquisition.
    ///
    /// This is the single step every traversal view is built on.
    #[inline]
    pub(crate) fn read_at<T>(&self, pos: usize, f: impl FnOnce(&Entry<K, V>) -> T) -> Option<T> {
        self.data.read().entries.get(pos).map(f)
    }

    /// Returns a copy of the entry at position `index`, or `None` if it is out of bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let map = OrderedMap::new();
    /// map.set("a", 1);
    /// map.set("b", 2);
    ///
    /// assert_eq!(map.get_index(1), Some(("b", 2)));
    /// assert_eq!(map.get_index(2), None);
    /// ```
    pub fn get_index(&self, index: usize) -> Option<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.read_at(index, |entry| (entry.key.clone(), entry.value.clone()))
    }

    /// Returns a snapshot of all entries in insertion order, taken under a single acquisition.
    pub fn entries(&self) -> Vec<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        let data = self.data.read();
        data.entries
            .iter()
            .map(|entry| (entry.key.clone(), entry.value.clone()))
            .collect()
    }

    /// Returns a lazy view over the keys in insertion order.
    ///
    /// Each step locks the map for reading only while it copies one key. Writers can therefore
    /// interleave with the traversal, and the view follows the live length: it stops the first time
    /// its position reaches the current length.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let map = OrderedMap::new();
    /// map.set(2, "b");
    /// map.set(1, "a");
    ///
    /// assert_eq!(map.keys().collect::<Vec<_>>(), vec![2, 1]);
    /// ```
    pub fn keys(&self) -> Keys<'_, K, V, R, S>
    where
        K: Clone,
    {
        Keys::new(self)
    }

    /// Returns a lazy view over the values in insertion order.
    ///
    /// Locking follows [`OrderedMap::keys`].
    pub fn values(&self) -> Values<'_, K, V, R, S>
    where
        V: Clone,
    {
        Values::new(self)
    }

    /// Returns a lazy view over the `(key, value)` pairs in insertion order.
    ///
    /// Locking follows [`OrderedMap::keys`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let map = OrderedMap::new();
    /// map.set("x", 1);
    /// map.set("y", 2);
    ///
    /// for (key, value) in map.iter() {
    ///     println!("{key}: {value}");
    /// }
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V, R, S>
    where
        K: Clone,
        V: Clone,
    {
        Iter::new(self)
    }

    /// Returns a lazy view over the `(position, value)` pairs in insertion order.
    ///
    /// Locking follows [`OrderedMap::keys`].
    pub fn indexed_values(&self) -> IndexedValues<'_, K, V, R, S>
    where
        V: Clone,
    {
        IndexedValues::new(self)
    }

    /// Consumes the map and returns its entries in insertion order.
    pub fn into_entries(self) -> Vec<(K, V)> {
        self.data
            .into_inner()
            .entries
            .into_iter()
            .map(|entry| (entry.key, entry.value))
            .collect()
    }
}

impl<K, V, R, S> OrderedMap<K, V, R, S>
where
    K: Eq + Hash,
    R: lock_api::RawRwLock,
    S: BuildHasher,
{
    /// Hashes outside the lock; `K: Hash` never runs while a guard is held.
    #[inline]
    fn make_hash<Q>(&self, key: &Q) -> u64
    where
        Q: ?Sized + Hash,
    {
        self.hasher.hash_one(key)
    }

    /// Returns a copy of the value stored for `key`.
    ///
    /// # Time Complexity
    ///
    /// _O_(1) on average.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let map = OrderedMap::new();
    /// map.set(String::from("life"), 42);
    ///
    /// assert_eq!(map.get("life"), Some(42));
    /// assert_eq!(map.get("death"), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
        V: Clone,
    {
        let hash = self.make_hash(key);
        let data = self.data.read();
        data.find(hash, key).map(|pos| data.entries[pos].value.clone())
    }

    /// Returns a mutable reference to the value stored for `key`.
    ///
    /// The exclusive borrow already rules out other accessors, so no lock is taken.
    #[must_use]
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.make_hash(key);
        let data = self.data.get_mut();
        let pos = data.find(hash, key)?;
        Some(&mut data.entries[pos].value)
    }

    /// Returns the current position of `key` in insertion order.
    ///
    /// Positions are dense: they range over `0..len()`, and removing a key moves every later key
    /// down by one.
    #[must_use]
    pub fn index_of<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.make_hash(key);
        self.data.read().find(hash, key)
    }

    /// Returns `true` if the map holds `key`.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.index_of(key).is_some()
    }

    /// Locks for writing once, reserves for the whole batch and applies it.
    ///
    /// The guard is released before the caller drops anything the batch displaced.
    fn apply<I>(&self, batch: &mut I) -> Result<Applied<V>, AllocError>
    where
        I: ExactSizeIterator<Item = (u64, K, V)>,
    {
        if batch.len() == 0 {
            return Ok(Applied::Appended);
        }
        let mut data = self.data.write();
        data.try_reserve(batch.len())?;
        Ok(data.apply(batch))
    }

    /// Sets `key` to `value`.
    ///
    /// A new key is appended at the end of the order. An existing key keeps its position, and the
    /// previous value is returned.
    ///
    /// # Panics
    ///
    /// Panics if the capacity overflows, or aborts when allocation fails. See
    /// [`OrderedMap::try_set`].
    ///
    /// # Time Complexity
    ///
    /// _O_(1) amortized.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let map = OrderedMap::new();
    ///
    /// assert_eq!(map.set("a", 1), None);
    /// assert_eq!(map.set("b", 2), None);
    /// assert_eq!(map.set("a", 3), Some(1));
    ///
    /// assert_eq!(map.entries(), vec![("a", 3), ("b", 2)]);
    /// ```
    pub fn set(&self, key: K, value: V) -> Option<V> {
        self.try_set(key, value).unwrap_or_else(|err| err.raise())
    }

    /// Sets `key` to `value`, returning an error instead of panicking when the storage cannot
    /// grow. On error the map is unchanged.
    pub fn try_set(&self, key: K, value: V) -> Result<Option<V>, AllocError> {
        let mut batch = core::iter::once((self.make_hash(&key), key, value));
        match self.apply(&mut batch)? {
            Applied::Replaced(old) => Ok(Some(old)),
            Applied::Appended | Applied::Ignored(_) => Ok(None),
        }
    }

    /// Sets many entries under a single write lock.
    ///
    /// Entries are processed in order and new keys are appended. Processing **stops** at the first
    /// entry whose key is already present:
    ///
    /// - if the key was in the map before the call, its value is overwritten in place;
    /// - if the key was appended earlier in this same call, the first value is kept and the later
    ///   one is dropped.
    ///
    /// Entries after that point are not applied. Callers that need every pair applied regardless of
    /// duplicates should call [`OrderedMap::set`] per pair.
    ///
    /// # Panics
    ///
    /// Panics if the capacity overflows, or aborts when allocation fails. See
    /// [`OrderedMap::try_bulk_set`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let map = OrderedMap::new();
    /// map.bulk_set([("x", 10), ("y", 20), ("x", 30)]);
    ///
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get("x"), Some(10));
    /// assert_eq!(map.get("y"), Some(20));
    /// ```
    pub fn bulk_set<I>(&self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        if let Err(err) = self.try_bulk_set(entries) {
            err.raise();
        }
    }

    /// Sets many entries under a single write lock, returning an error instead of panicking when
    /// the storage cannot grow. On error the map is unchanged.
    ///
    /// The duplicate policy is the one of [`OrderedMap::bulk_set`].
    pub fn try_bulk_set<I>(&self, entries: I) -> Result<(), AllocError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        // Staged before locking: the caller's iterator and `K: Hash` run without the guard.
        let entries = entries.into_iter();
        let mut staged = Vec::new();
        staged
            .try_reserve(entries.size_hint().0)
            .map_err(|_| AllocError::for_vec::<(u64, K, V)>(0, entries.size_hint().0))?;
        for (key, value) in entries {
            if staged.len() == staged.capacity() {
                staged
                    .try_reserve(1)
                    .map_err(|_| AllocError::for_vec::<(u64, K, V)>(staged.len(), 1))?;
            }
            staged.push((self.make_hash(&key), key, value));
        }

        let mut batch = staged.into_iter();
        let _displaced = self.apply(&mut batch)?;
        Ok(())
    }

    /// Removes `key` and returns its value, shifting every later entry down by one position.
    ///
    /// Removing an absent key does nothing.
    ///
    /// # Time Complexity
    ///
    /// _O_(n): every entry after the removed one moves and is re-indexed. Prefer this map for
    /// workloads where removals are rare.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::OrderedMap;
    ///
    /// let map = OrderedMap::new();
    /// map.set("a", 1);
    /// map.set("b", 2);
    /// map.set("c", 3);
    ///
    /// assert_eq!(map.shift_remove("a"), Some(1));
    /// assert_eq!(map.shift_remove("a"), None);
    ///
    /// assert_eq!(map.index_of("b"), Some(0));
    /// assert_eq!(map.index_of("c"), Some(1));
    /// ```
    pub fn shift_remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let hash = self.make_hash(key);
        // The guard is a temporary: it is released before the removed entry is dropped.
        let removed = self.data.write().remove(hash, key);
        removed.map(|(_, value)| value)
    }

    /// Reserves room for at least `additional` more entries.
    ///
    /// # Panics
    ///
    /// Panics if the capacity overflows, or aborts when allocation fails.
    pub fn reserve(&self, additional: usize) {
        if let Err(err) = self.try_reserve(additional) {
            err.raise();
        }
    }

    /// Tries to reserve room for at least `additional` more entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordmap::{AllocError, OrderedMap};
    ///
    /// let map = OrderedMap::new();
    /// map.set(1, "a");
    ///
    /// assert_eq!(map.try_reserve(usize::MAX), Err(AllocError::Overflow));
    /// assert!(map.try_reserve(10).is_ok());
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn try_reserve(&self, additional: usize) -> Result<(), AllocError> {
        self.data.write().try_reserve(additional)
    }
}

impl<K, V, R, S> Default for OrderedMap<K, V, R, S>
where
    R: lock_api::RawRwLock,
    S: Default,
{
    #[inline]
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<K, V, R, S> Clone for OrderedMap<K, V, R, S>
where
    K: Clone,
    V: Clone,
    R: lock_api::RawRwLock,
    S: Clone,
{
    /// Clones a consistent snapshot of the map taken under one read acquisition.
    fn clone(&self) -> Self {
        let data = self.data.read();
        Self {
            data: RwLock::new(MapData {
                entries: data.entries.clone(),
                index: data.index.clone(),
            }),
            hasher: self.hasher.clone(),
        }
    }
}

impl<K, V, R, S> Debug for OrderedMap<K, V, R, S>
where
    K: Debug,
    V: Debug,
    R: lock_api::RawRwLock,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let data = self.data.read();
        f.debug_map()
            .entries(data.entries.iter().map(|entry| (&entry.key, &entry.value)))
            .finish()
    }
}

impl<K, V, R, S> Extend<(K, V)> for OrderedMap<K, V, R, S>
where
    K: Eq + Hash,
    R: lock_api::RawRwLock,
    S: BuildHasher,
{
    /// Sets every pair in order, like repeated calls to [`OrderedMap::set`]: a repeated key keeps
    /// its first position and takes the last value.
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let hasher = &self.hasher;
        let data = self.data.get_mut();
        if let Err(err) = data.try_reserve(iter.size_hint().0) {
            err.raise();
        }
        for (key, value) in iter {
            let mut batch = core::iter::once((hasher.hash_one(&key), key, value));
            // Only reached when `size_hint` under-reported the number of pairs.
            if data.entries.len() == data.entries.capacity() {
                if let Err(err) = data.try_reserve(1) {
                    err.raise();
                }
            }
            data.apply(&mut batch);
        }
    }
}

impl<K, V, R, S> FromIterator<(K, V)> for OrderedMap<K, V, R, S>
where
    K: Eq + Hash,
    R: lock_api::RawRwLock,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<'a, K, V, R, S> IntoIterator for &'a OrderedMap<K, V, R, S>
where
    K: Clone,
    V: Clone,
    R: lock_api::RawRwLock,
{
    type Item = (K, V);
    type IntoIter = Iter<'a, K, V, R, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, R, S> IntoIterator for OrderedMap<K, V, R, S>
where
    R: lock_api::RawRwLock,
{
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    /// Consumes the map and returns an iterator over its entries in insertion order.
    fn into_iter(self) -> Self::IntoIter {
        self.into_entries().into_iter()
    }
}

/// Development and testing methods that are not available in release builds.
#[cfg(test)]
impl<K, V, R, S> OrderedMap<K, V, R, S>
where
    K: Eq,
    R: lock_api::RawRwLock,
{
    /// Asserts that the index and the ordered storage describe each other exactly.
    pub(crate) fn debug_check_invariants(&self) {
        let data = self.data.read();
        assert_eq!(
            data.index.len(),
            data.entries.len(),
            "index and entries disagree on length"
        );
        for (pos, entry) in data.entries.iter().enumerate() {
            assert_eq!(
                data.find(entry.hash, &entry.key),
                Some(pos),
                "entry at {pos} is not indexed at its position"
            );
        }
    }

    /// Returns the allocated capacity of the ordered storage.
    pub(crate) fn debug_capacity(&self) -> usize {
        self.data.read().entries.capacity()
    }
}
