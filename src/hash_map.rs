use core::fmt::Debug;
use core::hash::BuildHasher;
use core::hash::Hash;
use core::iter::FusedIterator;
use core::ops::Index;

use crate::DefaultHashBuilder;
use crate::error::Error;
use crate::error::Result;
use crate::hash_table::Entry as TableEntry;
use crate::hash_table::HashTable;
use crate::hash_table::Resize;

/// A hash map implemented using the separate-chaining [`HashTable`] as the
/// underlying storage.
///
/// `HashMap<K, V, S>` stores key-value pairs where keys implement `Hash + Eq`
/// and uses a configurable hasher builder `S` to hash keys. Each key's bucket
/// is its hash masked by the bucket count; colliding keys share a chain in
/// insertion order.
///
/// Unlike `std::collections::HashMap`, [`insert`](HashMap::insert) never
/// overwrites an existing value, and equality is structural: two maps are
/// equal only if they also have the same capacity.
///
/// The map has no internal synchronization; sharing it across threads for
/// mutation requires an external lock.
pub struct HashMap<K, V, S = DefaultHashBuilder> {
    table: HashTable<(K, V)>,
    hash_builder: S,
}

impl<K, V, S> Clone for HashMap<K, V, S>
where
    K: Clone,
    V: Clone,
    S: Clone,
{
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
            hash_builder: self.hash_builder.clone(),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.table.clone_from(&source.table);
        self.hash_builder.clone_from(&source.hash_builder);
    }
}

impl<K, V, S> Debug for HashMap<K, V, S>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Maps are equal when they hold the same entries *and* have the same
/// capacity, with each bucket holding the same entries in any order.
///
/// ```rust
/// # #[cfg(any(feature = "std", feature = "foldhash"))]
/// # {
/// use chain_hash::HashMap;
/// use chain_hash::hash_table::Resize;
///
/// let mut a: HashMap<&str, i32> = HashMap::new();
/// a.insert("a", 1);
/// let mut b = a.clone();
/// assert_eq!(a, b);
///
/// b.rehash(Resize::Grow);
/// assert_ne!(a, b);
/// # }
/// ```
impl<K, V, S> PartialEq for HashMap<K, V, S>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.table == other.table
    }
}

impl<K, V, S> Eq for HashMap<K, V, S>
where
    K: Eq,
    V: Eq,
{
}

impl<K, V, S> HashMap<K, V, S> {
    /// Returns the number of elements in the map.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the map contains no elements.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of buckets.
    ///
    /// The capacity is always a power of two and never below 16. It doubles
    /// when an insert pushes the load factor above 0.75 and halves when an
    /// insert or erase leaves it below 0.25.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Returns `len / capacity`.
    pub fn load_factor(&self) -> f64 {
        self.table.load_factor()
    }

    /// Removes all elements from the map.
    ///
    /// The capacity is unchanged until the next insert or erase, which shrinks
    /// it back toward 16.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Rehashes every entry into a doubled or halved bucket array.
    ///
    /// This happens automatically on insert and erase; calling it directly
    /// is only needed for manual control. Shrinking at the minimum capacity
    /// does nothing.
    pub fn rehash(&mut self, resize: Resize) {
        self.table.rehash(resize);
    }

    /// Returns an iterator over the key-value pairs of the map.
    ///
    /// Pairs come bucket by bucket, and in insertion order within a bucket.
    /// Iterating an unmodified map twice yields the same sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::HashMap;
    ///
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.insert("a", 1);
    /// map.insert("b", 2);
    ///
    /// let mut pairs: Vec<_> = map.iter().collect();
    /// pairs.sort();
    /// assert_eq!(pairs, [(&"a", &1), (&"b", &2)]);
    /// # }
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.table.iter(),
        }
    }

    /// Returns an iterator over the keys of the map.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values of the map.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Returns a cursor on the first entry, or the end cursor if the map is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::HashMap;
    ///
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.insert(1, "one");
    ///
    /// let mut cursor = map.cursor();
    /// assert_eq!(cursor.pair(), Some((1, "one")));
    /// cursor.advance();
    /// assert_eq!(cursor, map.end());
    /// # }
    /// ```
    pub fn cursor(&self) -> Cursor<'_, K, V> {
        Cursor {
            inner: self.table.cursor(),
        }
    }

    /// Returns the cursor positioned one past the last entry.
    pub fn end(&self) -> Cursor<'_, K, V> {
        Cursor {
            inner: self.table.end(),
        }
    }

    /// Computes bucket statistics for the map.
    ///
    /// Available with the `stats` feature.
    #[cfg(feature = "stats")]
    pub fn debug_stats(&self) -> crate::hash_table::DebugStats {
        self.table.debug_stats()
    }

    /// Prints how many buckets hold each chain length.
    ///
    /// Available with the `stats` and `std` features.
    #[cfg(all(feature = "stats", feature = "std"))]
    pub fn print_bucket_histogram(&self) {
        self.table.print_bucket_histogram();
    }
}

impl<K, V, S> HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    /// Creates an empty map with the given hasher builder.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use core::hash::BuildHasher;
    /// # use siphasher::sip::SipHasher;
    /// #
    /// # use chain_hash::HashMap;
    /// #
    /// # struct SimpleHasher;
    /// # impl BuildHasher for SimpleHasher {
    /// #     type Hasher = SipHasher;
    /// #
    /// #     fn build_hasher(&self) -> Self::Hasher {
    /// #         SipHasher::new()
    /// #     }
    /// # }
    /// #
    /// let map: HashMap<i32, String, _> = HashMap::with_hasher(SimpleHasher);
    /// assert!(map.is_empty());
    /// assert_eq!(map.capacity(), 16);
    /// ```
    pub fn with_hasher(hash_builder: S) -> Self {
        Self {
            table: HashTable::new(),
            hash_builder,
        }
    }

    /// Inserts a key-value pair if the key is not already present.
    ///
    /// Returns `true` on success. If the key is present the map is left
    /// unchanged, the existing value is kept, and `false` is returned. Use
    /// [`get_or_default`](HashMap::get_or_default) or
    /// [`at_mut`](HashMap::at_mut) to overwrite.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::HashMap;
    ///
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// assert!(map.insert(37, "a"));
    /// assert!(!map.insert(37, "b"));
    /// assert_eq!(map.get(&37), Some(&"a"));
    /// # }
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let hash = self.hash_builder.hash_one(&key);
        match self.table.entry(hash, |(k, _)| k == &key) {
            TableEntry::Occupied(_) => false,
            TableEntry::Vacant(entry) => {
                entry.insert((key, value));
                true
            }
        }
    }

    /// Returns `true` if the map contains a value for the specified key.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Returns a reference to the value corresponding to the key.
    pub fn get(&self, key: &K) -> Option<&V> {
        let hash = self.hash_builder.hash_one(key);
        self.table.find(hash, |(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let hash = self.hash_builder.hash_one(key);
        self.table.find_mut(hash, |(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns a reference to the value corresponding to the key, or
    /// [`Error::KeyNotFound`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::Error;
    /// use chain_hash::HashMap;
    ///
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.insert("k", 1);
    /// assert_eq!(map.at(&"k"), Ok(&1));
    /// assert_eq!(map.at(&"missing"), Err(Error::KeyNotFound));
    /// # }
    /// ```
    pub fn at(&self, key: &K) -> Result<&V> {
        self.get(key).ok_or(Error::KeyNotFound)
    }

    /// Returns a mutable reference to the value corresponding to the key, or
    /// [`Error::KeyNotFound`]. Writes through the reference are visible to
    /// later lookups.
    pub fn at_mut(&mut self, key: &K) -> Result<&mut V> {
        self.get_mut(key).ok_or(Error::KeyNotFound)
    }

    /// Removes a key from the map, returning `true` if it was present.
    ///
    /// The remaining entries of the key's bucket keep their order. If the
    /// load factor drops below 0.25 the map shrinks, but never below 16
    /// buckets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::HashMap;
    ///
    /// let mut map: HashMap<_, _> = HashMap::new();
    /// map.insert(1, "a");
    /// assert!(map.erase(&1));
    /// assert!(!map.erase(&1));
    /// assert!(map.is_empty());
    /// # }
    /// ```
    pub fn erase(&mut self, key: &K) -> bool {
        self.remove_entry(key).is_some()
    }

    /// Removes a key from the map, returning the value at the key if the key
    /// was previously in the map.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Removes a key from the map, returning the stored key and value if the
    /// key was previously in the map.
    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let hash = self.hash_builder.hash_one(key);
        self.table.remove(hash, |(k, _)| k == key)
    }

    /// Returns the number of entries sharing the key's bucket, or
    /// [`Error::InvalidKey`] if the key is absent.
    ///
    /// The error is returned even when the bucket the key would hash to holds
    /// other keys.
    pub fn bucket_size(&self, key: &K) -> Result<usize> {
        let hash = self.hash_builder.hash_one(key);
        self.table
            .bucket_len(hash, |(k, _)| k == key)
            .ok_or(Error::InvalidKey)
    }

    /// Returns the index of the bucket currently holding the key, or
    /// [`Error::InvalidKey`] if the key is absent.
    pub fn bucket_index(&self, key: &K) -> Result<usize> {
        let hash = self.hash_builder.hash_one(key);
        self.table
            .bucket_index(hash, |(k, _)| k == key)
            .ok_or(Error::InvalidKey)
    }

    /// Gets the given key's corresponding entry in the map for in-place
    /// manipulation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::HashMap;
    ///
    /// let mut map: HashMap<&str, u32> = HashMap::new();
    /// for word in ["a", "b", "a"] {
    ///     *map.entry(word).or_insert(0) += 1;
    /// }
    /// assert_eq!(map.get(&"a"), Some(&2));
    /// assert_eq!(map.get(&"b"), Some(&1));
    /// # }
    /// ```
    pub fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        let hash = self.hash_builder.hash_one(&key);
        match self.table.entry(hash, |(k, _)| k == &key) {
            TableEntry::Occupied(entry) => Entry::Occupied(OccupiedEntry { entry }),
            TableEntry::Vacant(entry) => Entry::Vacant(VacantEntry { entry, key }),
        }
    }

    /// Returns a mutable reference to the key's value, inserting
    /// `V::default()` first if the key is absent.
    ///
    /// This is the insert-on-miss access; assigning through the returned
    /// reference overwrites the stored value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::HashMap;
    ///
    /// let mut map: HashMap<&str, i32> = HashMap::new();
    /// assert_eq!(*map.get_or_default("x"), 0);
    /// *map.get_or_default("x") = 5;
    /// assert_eq!(map.get(&"x"), Some(&5));
    /// # }
    /// ```
    pub fn get_or_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.entry(key).or_default()
    }
}

impl<K, V, S> HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    /// Creates an empty map with 16 buckets, using the default hasher
    /// builder.
    pub fn new() -> Self {
        Self::with_hasher(S::default())
    }

    /// Builds a map from parallel sequences of keys and values, inserting the
    /// pairs in order.
    ///
    /// A key that appears more than once keeps the value of its first
    /// occurrence. Fails with [`Error::LengthMismatch`], without building
    /// anything, if the sequences differ in length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(any(feature = "std", feature = "foldhash"))]
    /// # {
    /// use chain_hash::Error;
    /// use chain_hash::HashMap;
    ///
    /// let map: HashMap<&str, i32> =
    ///     HashMap::from_keys_values(["a", "b", "a"], [1, 2, 3]).unwrap();
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get(&"a"), Some(&1));
    ///
    /// let err = HashMap::<&str, i32>::from_keys_values(["a"], [1, 2]).unwrap_err();
    /// assert_eq!(err, Error::LengthMismatch { keys: 1, values: 2 });
    /// # }
    /// ```
    pub fn from_keys_values<KI, VI>(keys: KI, values: VI) -> Result<Self>
    where
        KI: IntoIterator<Item = K>,
        KI::IntoIter: ExactSizeIterator,
        VI: IntoIterator<Item = V>,
        VI::IntoIter: ExactSizeIterator,
    {
        let keys = keys.into_iter();
        let values = values.into_iter();
        if keys.len() != values.len() {
            return Err(Error::LengthMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }

        let mut map = Self::new();
        for (key, value) in keys.zip(values) {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<K, V, S> Default for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Collects pairs with [`HashMap::insert`] semantics: the first value seen
/// for a key wins.
impl<K, V, S> FromIterator<(K, V)> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<K, V, S> Extend<(K, V)> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

/// Read-only indexing.
///
/// # Panics
///
/// Panics if the key is not present. Use [`HashMap::get`] or
/// [`HashMap::at`] for a fallible lookup, and [`HashMap::get_or_default`]
/// for insert-on-miss.
impl<K, V, S> Index<&K> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    type Output = V;

    fn index(&self, key: &K) -> &V {
        self.get(key).expect("key not in map")
    }
}

impl<'a, K, V, S> IntoIterator for &'a HashMap<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A view into a single entry in the map, which may either be vacant or
/// occupied.
///
/// This enum is constructed from the [`entry`] method on [`HashMap`].
///
/// [`entry`]: HashMap::entry
pub enum Entry<'a, K, V> {
    /// A vacant entry.
    Vacant(VacantEntry<'a, K, V>),
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, K, V>),
}

impl<'a, K, V> Entry<'a, K, V> {
    /// Inserts a default value if the entry is vacant and returns a mutable
    /// reference.
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts a value computed from a closure if the entry is vacant and
    /// returns a mutable reference.
    pub fn or_insert_with<F>(self, default: F) -> &'a mut V
    where
        F: FnOnce() -> V,
    {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Provides in-place mutable access to an occupied entry before any
    /// potential inserts.
    pub fn and_modify<F>(self, f: F) -> Self
    where
        F: FnOnce(&mut V),
    {
        match self {
            Entry::Occupied(mut entry) => {
                f(entry.get_mut());
                Entry::Occupied(entry)
            }
            Entry::Vacant(entry) => Entry::Vacant(entry),
        }
    }

    /// Returns a reference to this entry's key.
    pub fn key(&self) -> &K {
        match self {
            Entry::Occupied(entry) => entry.key(),
            Entry::Vacant(entry) => entry.key(),
        }
    }
}

impl<'a, K, V> Entry<'a, K, V>
where
    V: Default,
{
    /// Inserts the default value if the entry is vacant and returns a mutable
    /// reference.
    pub fn or_default(self) -> &'a mut V {
        self.or_insert_with(Default::default)
    }
}

/// A view into a vacant entry in the map.
pub struct VacantEntry<'a, K, V> {
    entry: crate::hash_table::VacantEntry<'a, (K, V)>,
    key: K,
}

impl<'a, K, V> VacantEntry<'a, K, V> {
    /// Gets a reference to the key that would be used when inserting a value.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Take ownership of the key.
    pub fn into_key(self) -> K {
        self.key
    }

    /// Inserts the value into the map and returns a mutable reference to it.
    ///
    /// The map may grow; the reference points into the grown storage.
    pub fn insert(self, value: V) -> &'a mut V {
        &mut self.entry.insert((self.key, value)).1
    }
}

/// A view into an occupied entry in the map.
pub struct OccupiedEntry<'a, K, V> {
    entry: crate::hash_table::OccupiedEntry<'a, (K, V)>,
}

impl<'a, K, V> OccupiedEntry<'a, K, V> {
    /// Gets a reference to the key in the entry.
    pub fn key(&self) -> &K {
        &self.entry.get().0
    }

    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        &self.entry.get().1
    }

    /// Gets a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.entry.get_mut().1
    }

    /// Converts the entry into a mutable reference to the value.
    pub fn into_mut(self) -> &'a mut V {
        &mut self.entry.into_mut().1
    }

    /// Replaces the value in the entry and returns the old value.
    pub fn insert(&mut self, value: V) -> V {
        core::mem::replace(&mut self.entry.get_mut().1, value)
    }

    /// Removes the entry from the map and returns the value.
    pub fn remove(self) -> V {
        self.entry.remove().1
    }

    /// Removes the entry from the map and returns the key and value.
    pub fn remove_entry(self) -> (K, V) {
        self.entry.remove()
    }
}

/// A read-only position in a [`HashMap`].
///
/// See [`hash_table::Cursor`](crate::hash_table::Cursor) for how positions
/// advance and where the end lies. A cursor borrows the map, so the map
/// cannot be modified while the cursor is in use.
pub struct Cursor<'a, K, V> {
    inner: crate::hash_table::Cursor<'a, (K, V)>,
}

impl<K, V> Clone for Cursor<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Cursor<'_, K, V> {}

impl<K, V> PartialEq for Cursor<'_, K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl<K, V> Eq for Cursor<'_, K, V> {}

impl<K, V> Debug for Cursor<'_, K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.inner.fmt(f)
    }
}

impl<'a, K, V> Cursor<'a, K, V> {
    /// Returns the entry under the cursor, or `None` at the end.
    pub fn get(&self) -> Option<(&'a K, &'a V)> {
        self.inner.get().map(|(k, v)| (k, v))
    }

    /// Returns a copy of the entry under the cursor, or `None` at the end.
    pub fn pair(&self) -> Option<(K, V)>
    where
        K: Clone,
        V: Clone,
    {
        self.inner.get().cloned()
    }

    /// Moves to the next entry. Does nothing at the end.
    pub fn advance(&mut self) {
        self.inner.advance();
    }

    /// Returns `true` if the cursor is one past the last entry.
    pub fn is_end(&self) -> bool {
        self.inner.is_end()
    }

    /// The `(bucket, slot)` position of the cursor.
    pub fn position(&self) -> (usize, usize) {
        self.inner.position()
    }
}

/// An iterator over the key-value pairs of a `HashMap`.
pub struct Iter<'a, K, V> {
    inner: crate::hash_table::Iter<'a, (K, V)>,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// An iterator over the keys of a `HashMap`.
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<K, V> Clone for Keys<'_, K, V> {
    fn clone(&self) -> Self {
        Keys {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, _)| k)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// An iterator over the values of a `HashMap`.
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<K, V> Clone for Values<'_, K, V> {
    fn clone(&self) -> Self {
        Values {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, v)| v)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}
