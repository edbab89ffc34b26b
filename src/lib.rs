#![warn(missing_docs)]
#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(all(test, not(feature = "std")))]
extern crate std;

/// Error type for the checked map operations.
pub mod error;

/// A HashMap implementation using separate chaining.
///
/// This module provides a `HashMap` that wraps the `HashTable` and provides
/// a key-value map interface with configurable hashers, checked access and
/// bucket introspection.
pub mod hash_map;

/// The raw chained table: bucket storage, resizing and cursors.
pub mod hash_table;

cfg_if::cfg_if! {
    if #[cfg(feature = "foldhash")] {
        /// The hasher builder used when none is specified.
        ///
        /// Its seed is fixed, so every map built with it places a given key in
        /// the same bucket and equal contents compare equal.
        pub type DefaultHashBuilder = foldhash::fast::FixedState;
    } else if #[cfg(feature = "std")] {
        /// The hasher builder used when none is specified.
        ///
        /// Its seed is fixed, so every map built with it places a given key in
        /// the same bucket and equal contents compare equal.
        pub type DefaultHashBuilder = core::hash::BuildHasherDefault<std::hash::DefaultHasher>;
    } else {
        /// Placeholder hasher builder for builds with neither `foldhash` nor
        /// `std`. It has no values; construct maps with
        /// [`HashMap::with_hasher`] instead.
        pub enum DefaultHashBuilder {}
    }
}

pub use error::Error;
pub use error::Result;
pub use hash_map::Entry;
pub use hash_map::HashMap;
pub use hash_table::HashTable;
pub use hash_table::Resize;
