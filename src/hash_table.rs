use alloc::vec::Vec;
use core::fmt::Debug;
use core::iter::FusedIterator;

use tracing::debug;
use tracing::trace;

/// Load factor above which an insert doubles the bucket array.
pub const MAX_LOAD_FACTOR: f64 = 0.75;

/// Load factor below which an insert or erase halves the bucket array.
pub const MIN_LOAD_FACTOR: f64 = 0.25;

/// Number of buckets in a new table. The table never shrinks below this.
pub const MIN_CAPACITY: usize = 16;

/// Maps a hash to a bucket index for a table with `capacity` buckets.
///
/// `capacity` must be a power of two; the index is the hash masked by
/// `capacity - 1`, so the same hash always lands in the same bucket for a
/// fixed capacity.
///
/// # Examples
///
/// ```rust
/// # use chain_hash::hash_table::hash_to_index;
/// #
/// assert_eq!(hash_to_index(0x1234, 16), 0x4);
/// assert_eq!(hash_to_index(0x1234, 32), 0x14);
/// ```
#[inline(always)]
pub fn hash_to_index(hash: u64, capacity: usize) -> usize {
    debug_assert!(capacity.is_power_of_two());
    hash as usize & (capacity - 1)
}

/// Direction of a rehash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resize {
    /// Double the number of buckets.
    Grow,
    /// Halve the number of buckets, unless that would go below
    /// [`MIN_CAPACITY`].
    Shrink,
}

#[derive(Clone)]
struct Slot<V> {
    hash: u64,
    value: V,
}

type Bucket<V> = Vec<Slot<V>>;

/// Bucket statistics for hash table analysis.
///
/// Available with the `stats` feature.
#[cfg(feature = "stats")]
#[derive(Debug, Clone)]
pub struct DebugStats {
    /// Number of elements currently in the table
    pub populated: usize,
    /// Number of buckets
    pub capacity: usize,
    /// Load factor (populated / capacity)
    pub load_factor: f64,
    /// Number of buckets holding no entries
    pub empty_buckets: usize,
    /// Length of the longest chain
    pub longest_chain: usize,
    /// Mean chain length over non-empty buckets
    pub mean_chain_length: f64,
}

#[cfg(feature = "stats")]
impl DebugStats {
    /// Pretty-print the debug statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Hash Table Debug Statistics ===");
        println!(
            "Population: {}/{} ({:.2}% load factor)",
            self.populated,
            self.capacity,
            self.load_factor * 100.0
        );
        println!(
            "Buckets: {} empty ({:.2}%)",
            self.empty_buckets,
            if self.capacity == 0 {
                0.0
            } else {
                (self.empty_buckets as f64 / self.capacity as f64) * 100.0
            }
        );
        println!(
            "Chains: longest {}, mean {:.2} over non-empty buckets",
            self.longest_chain, self.mean_chain_length
        );
    }
}

/// A hash table using separate chaining.
///
/// `HashTable<V>` stores values of type `V` in a power-of-two array of
/// buckets, each bucket a chain of values in insertion order. Like the
/// `hashbrown` raw table API, it does not hash values itself: every operation
/// takes the value's hash and an equality predicate. The hash is kept next to
/// each value so rehashing never needs to recompute it.
///
/// The table doubles when an insert pushes the load factor above
/// [`MAX_LOAD_FACTOR`] and halves when an insert or removal leaves it below
/// [`MIN_LOAD_FACTOR`], never going below [`MIN_CAPACITY`] buckets.
///
/// The table has no internal synchronization.
///
/// ## Example
///
/// ```rust
/// # use core::hash::Hash;
/// # use core::hash::Hasher;
/// #
/// # use chain_hash::hash_table::HashTable;
/// # use siphasher::sip::SipHasher;
/// #
/// # #[derive(Debug, PartialEq)]
/// # struct Person {
/// #     id: u64,
/// #     name: String,
/// # }
/// #
/// # fn hash_id(id: u64) -> u64 {
/// #     let mut hasher = SipHasher::new();
/// #     id.hash(&mut hasher);
/// #     hasher.finish()
/// # }
///
/// let mut table = HashTable::new();
/// let hash = hash_id(123);
///
/// match table.entry(hash, |p: &Person| p.id == 123) {
///     chain_hash::hash_table::Entry::Vacant(entry) => {
///         entry.insert(Person {
///             id: 123,
///             name: "Alice".to_string(),
///         });
///     }
///     chain_hash::hash_table::Entry::Occupied(_) => {
///         println!("Person already exists");
///     }
/// }
/// assert_eq!(table.len(), 1);
/// ```
pub struct HashTable<V> {
    buckets: Vec<Bucket<V>>,
    populated: usize,
}

impl<V> Debug for HashTable<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HashTable")
            .field(
                "chains",
                &self.buckets.iter().map(Vec::len).collect::<Vec<_>>(),
            )
            .field("populated", &self.populated)
            .field("capacity", &self.capacity())
            .finish()
    }
}

impl<V> Clone for HashTable<V>
where
    V: Clone,
{
    fn clone(&self) -> Self {
        Self {
            buckets: self.buckets.clone(),
            populated: self.populated,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.buckets.clone_from(&source.buckets);
        self.populated = source.populated;
    }
}

impl<V> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Tables are equal when they have the same length, the same capacity, and
/// each pair of same-index buckets holds the same values in any order.
///
/// Two tables with the same contents but different capacities are not
/// equal.
impl<V> PartialEq for HashTable<V>
where
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.populated == other.populated
            && self.capacity() == other.capacity()
            && self
                .buckets
                .iter()
                .zip(other.buckets.iter())
                .all(|(lhs, rhs)| is_permutation(lhs, rhs))
    }
}

impl<V> Eq for HashTable<V> where V: Eq {}

fn is_permutation<V: PartialEq>(lhs: &[Slot<V>], rhs: &[Slot<V>]) -> bool {
    if lhs.len() != rhs.len() {
        return false;
    }

    let count = |chain: &[Slot<V>], value: &V| chain.iter().filter(|s| s.value == *value).count();
    lhs.iter()
        .all(|slot| count(lhs, &slot.value) == count(rhs, &slot.value))
}

impl<V> HashTable<V> {
    /// Creates an empty table with [`MIN_CAPACITY`] buckets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let table: HashTable<String> = HashTable::new();
    /// assert_eq!(table.capacity(), 16);
    /// assert!(table.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            buckets: empty_buckets(MIN_CAPACITY),
            populated: 0,
        }
    }

    /// Returns `true` if the table contains no elements.
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// Returns the number of elements in the table.
    pub fn len(&self) -> usize {
        self.populated
    }

    /// Returns the number of buckets. Always a power of two, at least
    /// [`MIN_CAPACITY`].
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Returns `len / capacity`.
    pub fn load_factor(&self) -> f64 {
        self.populated as f64 / self.capacity() as f64
    }

    /// Removes all elements from the table.
    ///
    /// The number of buckets is unchanged until the next insert or removal,
    /// which shrinks the table back toward [`MIN_CAPACITY`].
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.populated = 0;
    }

    /// Finds a value by hash and equality predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.entry(42, |&n: &u64| n == 42).or_insert(42);
    ///
    /// assert_eq!(table.find(42, |&n| n == 42), Some(&42));
    /// assert_eq!(table.find(99, |&n| n == 99), None);
    /// ```
    #[inline]
    pub fn find(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&V> {
        let (bucket, slot) = self.locate(hash, eq)?;
        Some(&self.buckets[bucket][slot].value)
    }

    /// Finds a value by hash and equality predicate, returning a mutable
    /// reference into the table's storage.
    #[inline]
    pub fn find_mut(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<&mut V> {
        let (bucket, slot) = self.locate(hash, eq)?;
        Some(&mut self.buckets[bucket][slot].value)
    }

    /// Returns the length of the chain holding the matching value, or `None`
    /// if no value matches.
    pub fn bucket_len(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<usize> {
        let (bucket, _) = self.locate(hash, eq)?;
        Some(self.buckets[bucket].len())
    }

    /// Returns the index of the bucket holding the matching value, or `None`
    /// if no value matches.
    pub fn bucket_index(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<usize> {
        self.locate(hash, eq).map(|(bucket, _)| bucket)
    }

    /// Removes and returns the matching value.
    ///
    /// The remaining values of the chain keep their relative order. If the
    /// load factor drops below [`MIN_LOAD_FACTOR`] the table shrinks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.entry(42, |&n: &u64| n == 42).or_insert(42);
    ///
    /// assert_eq!(table.remove(42, |&n| n == 42), Some(42));
    /// assert_eq!(table.remove(42, |&n| n == 42), None);
    /// assert!(table.is_empty());
    /// ```
    pub fn remove(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<V> {
        let (bucket, slot) = self.locate(hash, eq)?;
        Some(self.remove_at(bucket, slot))
    }

    /// Gets an entry for the given hash and equality predicate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::Entry;
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    ///
    /// match table.entry(7, |s: &String| s == "seven") {
    ///     Entry::Vacant(entry) => {
    ///         entry.insert("seven".to_string());
    ///     }
    ///     Entry::Occupied(mut entry) => {
    ///         entry.get_mut().push('!');
    ///     }
    /// }
    ///
    /// assert_eq!(table.find(7, |s| s == "seven"), Some(&"seven".to_string()));
    /// ```
    pub fn entry(&mut self, hash: u64, eq: impl Fn(&V) -> bool) -> Entry<'_, V> {
        let bucket = hash_to_index(hash, self.capacity());
        match self.buckets[bucket].iter().position(|s| eq(&s.value)) {
            Some(slot) => Entry::Occupied(OccupiedEntry {
                table: self,
                bucket,
                slot,
            }),
            None => Entry::Vacant(VacantEntry {
                table: self,
                hash,
                bucket,
            }),
        }
    }

    /// Redistributes every value into a bucket array of a new size.
    ///
    /// Growth and shrinkage normally happen automatically; this is for manual
    /// control. [`Resize::Shrink`] does nothing once the table is at
    /// [`MIN_CAPACITY`]. Values that land in the same new bucket keep the
    /// relative order they had in the old array.
    ///
    /// # Panics
    ///
    /// Panics if growing would overflow `usize`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// # use chain_hash::hash_table::Resize;
    /// #
    /// let mut table: HashTable<u64> = HashTable::new();
    /// table.rehash(Resize::Grow);
    /// assert_eq!(table.capacity(), 32);
    ///
    /// table.rehash(Resize::Shrink);
    /// table.rehash(Resize::Shrink);
    /// assert_eq!(table.capacity(), 16);
    /// ```
    pub fn rehash(&mut self, resize: Resize) {
        let capacity = self.capacity();
        let new_capacity = match resize {
            Resize::Grow => capacity.checked_mul(2).expect("capacity overflow"),
            Resize::Shrink => {
                if capacity / 2 < MIN_CAPACITY {
                    trace!(capacity, "shrink skipped at minimum capacity");
                    return;
                }
                capacity / 2
            }
        };

        self.do_rehash(new_capacity);
    }

    /// Returns an iterator over all values, bucket by bucket and in insertion
    /// order within a bucket.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            cursor: self.cursor(),
            remaining: self.populated,
        }
    }

    /// Returns a cursor on the first value of the table, or the end cursor if
    /// the table is empty.
    pub fn cursor(&self) -> Cursor<'_, V> {
        Cursor::begin(self)
    }

    /// Returns the cursor positioned one past the last value of the table.
    pub fn end(&self) -> Cursor<'_, V> {
        Cursor::end(self)
    }

    /// Returns, for each chain length `n`, the number of buckets whose chain
    /// holds exactly `n` values.
    ///
    /// Available with the `stats` feature.
    #[cfg(feature = "stats")]
    pub fn bucket_histogram(&self) -> Vec<usize> {
        let longest = self.buckets.iter().map(Vec::len).max().unwrap_or(0);
        let mut histogram = alloc::vec![0; longest + 1];
        for bucket in self.buckets.iter() {
            histogram[bucket.len()] += 1;
        }
        histogram
    }

    /// Prints the histogram returned by [`HashTable::bucket_histogram`].
    ///
    /// Available with the `stats` and `std` features.
    #[cfg(all(feature = "stats", feature = "std"))]
    pub fn print_bucket_histogram(&self) {
        let histogram = self.bucket_histogram();
        let widest = histogram.iter().copied().max().unwrap_or(0).max(1);
        println!("=== Chain Length Histogram ===");
        for (length, &count) in histogram.iter().enumerate() {
            let bar = "#".repeat((count * 50).div_ceil(widest));
            println!("{length:>4}: {count:>8} {bar}");
        }
    }

    /// Computes bucket statistics for the current table state.
    ///
    /// Available with the `stats` feature.
    #[cfg(feature = "stats")]
    pub fn debug_stats(&self) -> DebugStats {
        let empty_buckets = self.buckets.iter().filter(|b| b.is_empty()).count();
        let occupied = self.capacity() - empty_buckets;
        DebugStats {
            populated: self.populated,
            capacity: self.capacity(),
            load_factor: self.load_factor(),
            empty_buckets,
            longest_chain: self.buckets.iter().map(Vec::len).max().unwrap_or(0),
            mean_chain_length: if occupied == 0 {
                0.0
            } else {
                self.populated as f64 / occupied as f64
            },
        }
    }

    #[inline]
    fn locate(&self, hash: u64, eq: impl Fn(&V) -> bool) -> Option<(usize, usize)> {
        if self.populated == 0 {
            return None;
        }

        let bucket = hash_to_index(hash, self.capacity());
        let slot = self.buckets[bucket].iter().position(|s| eq(&s.value))?;
        Some((bucket, slot))
    }

    fn remove_at(&mut self, bucket: usize, slot: usize) -> V {
        let removed = self.buckets[bucket].remove(slot);
        self.populated -= 1;
        self.maybe_shrink();
        removed.value
    }

    #[inline]
    fn maybe_grow(&mut self) {
        if self.load_factor() > MAX_LOAD_FACTOR {
            self.rehash(Resize::Grow);
        }
    }

    #[inline]
    fn maybe_shrink(&mut self) {
        self.shrink_for(self.populated);
    }

    /// Halves the bucket array until `len` values would load it to at least
    /// [`MIN_LOAD_FACTOR`], or it reaches [`MIN_CAPACITY`]. After `clear` this
    /// can take several halvings. Returns `true` if the table was rehashed.
    fn shrink_for(&mut self, len: usize) -> bool {
        let mut shrunk = false;
        while self.capacity() > MIN_CAPACITY
            && (len as f64 / self.capacity() as f64) < MIN_LOAD_FACTOR
        {
            self.rehash(Resize::Shrink);
            shrunk = true;
        }
        shrunk
    }

    fn do_rehash(&mut self, new_capacity: usize) {
        debug_assert!(new_capacity.is_power_of_two() && new_capacity >= MIN_CAPACITY);

        let old_buckets = core::mem::replace(&mut self.buckets, empty_buckets(new_capacity));
        let old_capacity = old_buckets.len();
        for slot in old_buckets.into_iter().flatten() {
            let bucket = hash_to_index(slot.hash, new_capacity);
            self.buckets[bucket].push(slot);
        }

        debug_assert_eq!(
            self.buckets.iter().map(Vec::len).sum::<usize>(),
            self.populated
        );
        debug!(
            old_capacity,
            new_capacity,
            populated = self.populated,
            "rehashed table"
        );
    }
}

fn empty_buckets<V>(capacity: usize) -> Vec<Bucket<V>> {
    let mut buckets = Vec::with_capacity(capacity);
    buckets.resize_with(capacity, Vec::new);
    buckets
}

/// A view into a single entry in a table, which may either be vacant or
/// occupied.
///
/// This enum is constructed from the [`entry`] method on [`HashTable`].
///
/// [`entry`]: HashTable::entry
pub enum Entry<'a, V> {
    /// A vacant entry.
    Vacant(VacantEntry<'a, V>),
    /// An occupied entry.
    Occupied(OccupiedEntry<'a, V>),
}

impl<'a, V> Entry<'a, V> {
    /// Inserts `default` if the entry is vacant and returns a mutable
    /// reference to the entry's value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use chain_hash::hash_table::HashTable;
    /// #
    /// let mut table = HashTable::new();
    ///
    /// let value = table.entry(1, |&v: &i32| v == 10).or_insert(10);
    /// assert_eq!(*value, 10);
    ///
    /// let value = table.entry(1, |&v: &i32| v == 10).or_insert(20);
    /// assert_eq!(*value, 10);
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn or_insert(self, default: V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default),
        }
    }

    /// Inserts the result of `default` if the entry is vacant. The closure is
    /// not called for an occupied entry.
    pub fn or_insert_with(self, default: impl FnOnce() -> V) -> &'a mut V {
        match self {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => entry.insert(default()),
        }
    }

    /// Inserts `V::default()` if the entry is vacant.
    pub fn or_default(self) -> &'a mut V
    where
        V: Default,
    {
        self.or_insert_with(Default::default)
    }
}

/// A view into a vacant entry in a [`HashTable`].
pub struct VacantEntry<'a, V> {
    table: &'a mut HashTable<V>,
    hash: u64,
    bucket: usize,
}

impl<'a, V> VacantEntry<'a, V> {
    /// Appends the value to its bucket's chain and returns a mutable reference
    /// to it.
    ///
    /// If the insert pushes the load factor above [`MAX_LOAD_FACTOR`] the
    /// table grows first; the returned reference points into the grown
    /// storage. If the table would stay below [`MIN_LOAD_FACTOR`] even with
    /// the new value, as after [`HashTable::clear`], it shrinks before the
    /// value is added.
    pub fn insert(self, value: V) -> &'a mut V {
        let VacantEntry {
            table,
            hash,
            mut bucket,
        } = self;

        // A table emptied by `clear` keeps its capacity until the next insert.
        if table.shrink_for(table.populated + 1) {
            bucket = hash_to_index(hash, table.capacity());
        }

        table.buckets[bucket].push(Slot { hash, value });
        table.populated += 1;
        table.maybe_grow();

        // Growth maps each old chain, in order, onto the new chain's tail, so
        // the new value is still last in its chain.
        let bucket = hash_to_index(hash, table.capacity());
        match table.buckets[bucket].last_mut() {
            Some(slot) => &mut slot.value,
            None => unreachable!("inserted value missing from its bucket"),
        }
    }
}

/// A view into an occupied entry in a [`HashTable`].
pub struct OccupiedEntry<'a, V> {
    table: &'a mut HashTable<V>,
    bucket: usize,
    slot: usize,
}

impl<'a, V> OccupiedEntry<'a, V> {
    /// Gets a reference to the value in the entry.
    pub fn get(&self) -> &V {
        &self.table.buckets[self.bucket][self.slot].value
    }

    /// Gets a mutable reference to the value in the entry.
    pub fn get_mut(&mut self) -> &mut V {
        &mut self.table.buckets[self.bucket][self.slot].value
    }

    /// Converts the entry into a mutable reference to the value, bound to the
    /// table's lifetime.
    pub fn into_mut(self) -> &'a mut V {
        let table = self.table;
        &mut table.buckets[self.bucket][self.slot].value
    }

    /// Index of the bucket holding this entry.
    pub fn bucket_index(&self) -> usize {
        self.bucket
    }

    /// Removes the value from the table and returns it.
    ///
    /// The table may shrink afterwards.
    pub fn remove(self) -> V {
        self.table.remove_at(self.bucket, self.slot)
    }
}

/// A position in a [`HashTable`]: a bucket index and a slot within that
/// bucket's chain.
///
/// A cursor starts on the first value of the first non-empty bucket and
/// advances through the chain before skipping ahead to the next non-empty
/// bucket. The end cursor sits one past the last slot of the smallest bucket
/// at which the running count of values reaches the table length; for an
/// empty table that is slot 0 of bucket 0.
///
/// Cursors borrow the table, so the table cannot be mutated (and therefore
/// cannot be rehashed) while any cursor is alive. Two cursors are equal when
/// they point at the same position of the same table.
pub struct Cursor<'a, V> {
    table: &'a HashTable<V>,
    bucket: usize,
    slot: usize,
}

impl<V> Clone for Cursor<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V> Copy for Cursor<'_, V> {}

impl<V> PartialEq for Cursor<'_, V> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.table, other.table)
            && self.bucket == other.bucket
            && self.slot == other.slot
    }
}

impl<V> Eq for Cursor<'_, V> {}

impl<V> Debug for Cursor<'_, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cursor")
            .field("bucket", &self.bucket)
            .field("slot", &self.slot)
            .finish()
    }
}

impl<'a, V> Cursor<'a, V> {
    fn begin(table: &'a HashTable<V>) -> Self {
        match table.buckets.iter().position(|b| !b.is_empty()) {
            Some(bucket) => Cursor {
                table,
                bucket,
                slot: 0,
            },
            None => Self::end(table),
        }
    }

    fn end(table: &'a HashTable<V>) -> Self {
        let mut seen = 0;
        for (bucket, chain) in table.buckets.iter().enumerate() {
            seen += chain.len();
            if seen == table.populated {
                return Cursor {
                    table,
                    bucket,
                    slot: chain.len(),
                };
            }
        }

        unreachable!("chain lengths do not add up to the table length")
    }

    /// Returns the value under the cursor, or `None` at the end.
    pub fn get(&self) -> Option<&'a V> {
        self.table.buckets[self.bucket]
            .get(self.slot)
            .map(|s| &s.value)
    }

    /// Returns `true` if the cursor is one past the last value.
    pub fn is_end(&self) -> bool {
        self.slot >= self.table.buckets[self.bucket].len()
    }

    /// The `(bucket, slot)` position of the cursor.
    pub fn position(&self) -> (usize, usize) {
        (self.bucket, self.slot)
    }

    /// Moves to the next value. Does nothing at the end.
    pub fn advance(&mut self) {
        let chain = &self.table.buckets[self.bucket];
        if self.slot >= chain.len() {
            return;
        }

        self.slot += 1;
        if self.slot < chain.len() {
            return;
        }

        // If nothing follows, this was the last non-empty bucket and
        // `(bucket, len)` is already the end position.
        if let Some(offset) = self.table.buckets[self.bucket + 1..]
            .iter()
            .position(|b| !b.is_empty())
        {
            self.bucket += offset + 1;
            self.slot = 0;
        }
    }
}

/// An iterator over the values in a [`HashTable`].
///
/// This struct is created by the [`iter`] method on [`HashTable`].
///
/// [`iter`]: HashTable::iter
pub struct Iter<'a, V> {
    cursor: Cursor<'a, V>,
    remaining: usize,
}

impl<V> Clone for Iter<'_, V> {
    fn clone(&self) -> Self {
        Iter {
            cursor: self.cursor,
            remaining: self.remaining,
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.cursor.get()?;
        self.cursor.advance();
        self.remaining -= 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}
