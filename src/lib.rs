//! An insertion-ordered hash map with optional built-in reader/writer locking.
//!
//! [`OrderedMap`] keeps its entries in a dense vector, in the order keys were first inserted, next
//! to a hash index from each key to its position. Lookups, updates and appends are _O_(1) on
//! average, traversal follows insertion order, and removal shifts later entries down (_O_(n)).
//!
//! The map is parameterized by its lock strategy:
//!
//! - guarded (default): a `parking_lot` reader/writer lock covers the vector and the index
//!   together, and the map is `Sync`;
//! - unguarded ([`UnguardedOrderedMap`]): a [`LocalLock`] without atomics, for callers that already
//!   guarantee exclusive access.
//!
//! Traversal views ([`Keys`], [`Values`], [`Iter`], [`IndexedValues`]) lock once per element rather
//! than for the whole traversal.
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//!
//! use ordmap::OrderedMap;
//!
//! let map = Arc::new(OrderedMap::new());
//!
//! let handles: Vec<_> = (0..4)
//!     .map(|t| {
//!         let map = Arc::clone(&map);
//!         thread::spawn(move || {
//!             for i in 0..100 {
//!                 map.set(t * 100 + i, i);
//!             }
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(map.len(), 400);
//! ```

#[macro_use]
mod builder;
mod error;
mod iter;
mod lock;
mod map;
#[cfg(test)]
mod proptests;

// Public exports.
pub use error::AllocError;
pub use iter::{IndexedValues, Iter, Keys, Values};
pub use lock::LocalLock;
pub use map::{OrderedMap, UnguardedOrderedMap};
pub use parking_lot::RawRwLock;
