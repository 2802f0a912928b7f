//! Lazy traversal views over an [`OrderedMap`].
//!
//! A view holds a position, not a lock. Every call to `next` takes the read lock, copies the one
//! element at the current position and releases the lock again, so writers interleave freely with
//! a traversal and a view dropped early leaves nothing locked. The price is weak consistency: the
//! view reads the live storage, sees appends and removals made between steps, and ends the first
//! time its position reaches the current length. Once ended, a view stays ended.

use core::iter::FusedIterator;

use parking_lot::lock_api::RawRwLock;

use crate::map::{Entry, OrderedMap};

/// The shared position-tracking part of every view.
struct Cursor<'a, K, V, R, S> {
    map: &'a OrderedMap<K, V, R, S>,
    pos: usize,
    done: bool,
}

impl<'a, K, V, R, S> Cursor<'a, K, V, R, S>
where
    R: RawRwLock,
{
    #[inline]
    const fn new(map: &'a OrderedMap<K, V, R, S>) -> Self {
        Self {
            map,
            pos: 0,
            done: false,
        }
    }

    #[inline]
    fn step<T>(&mut self, read: impl FnOnce(usize, &Entry<K, V>) -> T) -> Option<T> {
        if self.done {
            return None;
        }
        let pos = self.pos;
        match self.map.read_at(pos, |entry| read(pos, entry)) {
            Some(item) => {
                self.pos += 1;
                Some(item)
            }
            None => {
                self.done = true;
                None
            }
        }
    }
}

/// A view over the keys of an [`OrderedMap`], created by [`OrderedMap::keys`].
pub struct Keys<'a, K, V, R, S> {
    cursor: Cursor<'a, K, V, R, S>,
}

impl<'a, K, V, R, S> Keys<'a, K, V, R, S>
where
    R: RawRwLock,
{
    pub(crate) const fn new(map: &'a OrderedMap<K, V, R, S>) -> Self {
        Self {
            cursor: Cursor::new(map),
        }
    }
}

impl<K, V, R, S> Iterator for Keys<'_, K, V, R, S>
where
    K: Clone,
    R: RawRwLock,
{
    type Item = K;

    fn next(&mut self) -> Option<K> {
        self.cursor.step(|_, entry| entry.key.clone())
    }
}

impl<K: Clone, V, R: RawRwLock, S> FusedIterator for Keys<'_, K, V, R, S> {}

/// A view over the values of an [`OrderedMap`], created by [`OrderedMap::values`].
pub struct Values<'a, K, V, R, S> {
    cursor: Cursor<'a, K, V, R, S>,
}

impl<'a, K, V, R, S> Values<'a, K, V, R, S>
where
    R: RawRwLock,
{
    pub(crate) const fn new(map: &'a OrderedMap<K, V, R, S>) -> Self {
        Self {
            cursor: Cursor::new(map),
        }
    }
}

impl<K, V, R, S> Iterator for Values<'_, K, V, R, S>
where
    V: Clone,
    R: RawRwLock,
{
    type Item = V;

    fn next(&mut self) -> Option<V> {
        self.cursor.step(|_, entry| entry.value.clone())
    }
}

impl<K, V: Clone, R: RawRwLock, S> FusedIterator for Values<'_, K, V, R, S> {}

/// A view over the `(key, value)` pairs of an [`OrderedMap`], created by [`OrderedMap::iter`].
pub struct Iter<'a, K, V, R, S> {
    cursor: Cursor<'a, K, V, R, S>,
}

impl<'a, K, V, R, S> Iter<'a, K, V, R, S>
where
    R: RawRwLock,
{
    pub(crate) const fn new(map: &'a OrderedMap<K, V, R, S>) -> Self {
        Self {
            cursor: Cursor::new(map),
        }
    }
}

impl<K, V, R, S> Iterator for Iter<'_, K, V, R, S>
where
    K: Clone,
    V: Clone,
    R: RawRwLock,
{
    type Item = (K, V);

    fn next(&mut self) -> Option<(K, V)> {
        self.cursor
            .step(|_, entry| (entry.key.clone(), entry.value.clone()))
    }
}

impl<K: Clone, V: Clone, R: RawRwLock, S> FusedIterator for Iter<'_, K, V, R, S> {}

/// A view over the `(position, value)` pairs of an [`OrderedMap`], created by
/// [`OrderedMap::indexed_values`].
pub struct IndexedValues<'a, K, V, R, S> {
    cursor: Cursor<'a, K, V, R, S>,
}

impl<'a, K, V, R, S> IndexedValues<'a, K, V, R, S>
where
    R: RawRwLock,
{
    pub(crate) const fn new(map: &'a OrderedMap<K, V, R, S>) -> Self {
        Self {
            cursor: Cursor::new(map),
        }
    }
}

impl<K, V, R, S> Iterator for IndexedValues<'_, K, V, R, S>
where
    V: Clone,
    R: RawRwLock,
{
    type Item = (usize, V);

    fn next(&mut self) -> Option<(usize, V)> {
        self.cursor.step(|pos, entry| (pos, entry.value.clone()))
    }
}

impl<K, V: Clone, R: RawRwLock, S> FusedIterator for IndexedValues<'_, K, V, R, S> {}
