use crate::{record::MarkedRecord, set_iter::OrderedSetIter};
use core::{
    hash::{BuildHasher, Hash},
    sync::atomic::{AtomicU64, AtomicUsize, Ordering},
};
use crossbeam_skiplist::SkipMap;
use crossbeam_utils::CachePadded;
use parking_lot::{Mutex, RwLock};
use std::{
    collections::{hash_map::RandomState, HashMap},
    sync::Arc,
};

/// Number of independently locked shards of the hash index.
const SHARD_COUNT: usize = 64;

/// Records of a shard grouped by the hash of their elements.
type Shard<E> = HashMap<u64, Vec<Arc<MarkedRecord<E>>>>;

/// A hash set preserving the insertion order of its elements, allowing concurrent additions
/// with a shared reference while removals are serialized.
///
/// * `add`, `contains`, `len` and creating an iterator share the lock; additions run in parallel.
/// * `remove` holds the lock exclusively; it is serialized against all additions and other removals.
///
/// Each element is held in a record with an insertion stamp and a mark. An element is present in the
/// set once the `add` which installed its record confirms it as live. Removing an element marks its record
/// as deleted and erases it; adding it again later installs a brand new record with a new stamp, which
/// places the element at the end of the iteration order.
///
/// Records are indexed twice: by the hash of the element in a sharded hash index, and by the stamp in a
/// concurrent skip list. Additions hash their element before touching any shard, and then lock only the
/// shard the hash falls into; hence, additions of different elements proceed in parallel.
///
/// Since the skip list reclaims its entries lazily, elements of a set which is modified concurrently
/// must be `Send + Sync + 'static`.
///
/// # Examples
///
/// ```rust
/// use orx_concurrent_collections::*;
///
/// let set = ConcurrentOrderedSet::new();
/// for i in 0..10 {
///     set.add(i.to_string());
/// }
///
/// assert!(set.remove(&"6".to_string()));
/// assert!(!set.remove(&"6".to_string()));
/// assert!(!set.contains(&"6".to_string()));
/// assert_eq!(set.len(), 9);
///
/// let elements: Vec<_> = set.iter().collect();
/// assert_eq!(elements, ["0", "1", "2", "3", "4", "5", "7", "8", "9"]);
/// ```
pub struct ConcurrentOrderedSet<E, S = RandomState> {
    tables: RwLock<Tables<E>>,
    hasher: S,
    stamps: AtomicU64,
}

/// The sharded hash index from elements to their records, and the records ordered by their stamps.
struct Tables<E> {
    shards: [CachePadded<Mutex<Shard<E>>>; SHARD_COUNT],
    ordered: SkipMap<u64, Arc<MarkedRecord<E>>>,
    len: AtomicUsize,
}

#[inline(always)]
fn shard_index(hash: u64) -> usize {
    hash as usize % SHARD_COUNT
}

impl<E> Tables<E> {
    fn with_capacity(capacity: usize) -> Self {
        let per_shard = capacity.div_ceil(SHARD_COUNT);
        Self {
            shards: std::array::from_fn(|_| CachePadded::new(Mutex::new(HashMap::with_capacity(per_shard)))),
            ordered: SkipMap::new(),
            len: AtomicUsize::new(0),
        }
    }

    fn records(&self) -> Vec<Arc<MarkedRecord<E>>> {
        self.ordered.iter().map(|entry| entry.value().clone()).collect()
    }
}

impl<E> Tables<E>
where
    E: Eq + Send + Sync + 'static,
{
    /// Returns the record of the element, installing a pending one with the next stamp if absent.
    ///
    /// Only the shard of `hash` is locked; the element's `Hash` is never called here.
    fn install(&self, element: E, hash: u64, stamps: &AtomicU64) -> Arc<MarkedRecord<E>> {
        let mut shard = self.shards[shard_index(hash)].lock();
        let bucket = shard.entry(hash).or_default();

        if let Some(existing) = bucket.iter().find(|x| x.element() == &element) {
            return existing.clone();
        }

        let stamp = stamps.fetch_add(1, Ordering::Relaxed);
        let record = Arc::new(MarkedRecord::pending(element, stamp));
        bucket.push(record.clone());
        self.ordered.insert(stamp, record.clone());
        self.len.fetch_add(1, Ordering::AcqRel);
        record
    }

    fn find(&self, element: &E, hash: u64) -> Option<Arc<MarkedRecord<E>>> {
        let shard = self.shards[shard_index(hash)].lock();
        shard
            .get(&hash)
            .and_then(|bucket| bucket.iter().find(|x| x.element() == element))
            .cloned()
    }

    /// Erases the live record of the element from both tables; requires exclusive access.
    fn erase(&mut self, element: &E, hash: u64) -> Option<Arc<MarkedRecord<E>>> {
        let shard = self.shards[shard_index(hash)].get_mut();
        let bucket = shard.get_mut(&hash)?;
        let position = bucket.iter().position(|x| x.element() == element && x.is_live())?;

        let record = bucket.swap_remove(position);
        if !record.retire() {
            bucket.push(record);
            return None;
        }
        if bucket.is_empty() {
            shard.remove(&hash);
        }

        self.ordered.remove(&record.stamp());
        self.len.fetch_sub(1, Ordering::AcqRel);
        Some(record)
    }
}

impl<E> ConcurrentOrderedSet<E, RandomState> {
    /// Creates a new empty set.
    pub fn new() -> Self {
        Self::with_hasher(RandomState::new())
    }

    /// Creates a new empty set whose hash index can hold at least `capacity` elements without reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::new())
    }
}

impl<E> Default for ConcurrentOrderedSet<E, RandomState> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E, S> ConcurrentOrderedSet<E, S> {
    /// Creates a new empty set which will use the given `hasher` to hash its elements.
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    /// Creates a new empty set with at least the given `capacity`, using `hasher` to hash its elements.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            tables: RwLock::new(Tables::with_capacity(capacity)),
            hasher,
            stamps: AtomicU64::new(0),
        }
    }

    /// Returns the number of records in the hash index.
    ///
    /// Removals erase their records before releasing exclusive access; hence, deleted elements are never counted.
    /// An element whose `add` is in flight might be counted slightly before it is reported by `contains`.
    pub fn len(&self) -> usize {
        self.tables.read().len.load(Ordering::Acquire)
    }

    /// Returns whether or not the set is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a reference to the hasher of the set.
    pub fn hasher(&self) -> &S {
        &self.hasher
    }

    /// Records in their insertion order, copied with shared access.
    pub(crate) fn records(&self) -> Vec<Arc<MarkedRecord<E>>> {
        self.tables.read().records()
    }
}

impl<E, S> ConcurrentOrderedSet<E, S>
where
    E: Hash + Eq + Send + Sync + 'static,
    S: BuildHasher,
{
    /// Concurrent, thread-safe method to add the `element` to the set.
    ///
    /// Returns true if the element was absent and this call added it; false if the element was already present.
    ///
    /// Additions share the lock and run in parallel with each other. The element becomes visible once
    /// its record is confirmed as live; among concurrent additions of equal elements exactly one returns true.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_concurrent_collections::*;
    ///
    /// let set = ConcurrentOrderedSet::new();
    ///
    /// assert!(set.add('a'));
    /// assert!(set.add('b'));
    /// assert!(!set.add('a'));
    ///
    /// assert_eq!(set.len(), 2);
    /// ```
    pub fn add(&self, element: E) -> bool {
        let tables = self.tables.read();
        let hash = self.hasher.hash_one(&element);
        let record = tables.install(element, hash, &self.stamps);
        record.confirm()
    }

    /// Removes the `element` from the set; returns true if it was present.
    ///
    /// Removal holds the lock exclusively: the record is marked as deleted and then erased from both
    /// the hash index and the insertion order before any other operation proceeds.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_concurrent_collections::*;
    ///
    /// let set: ConcurrentOrderedSet<_> = ['a', 'b', 'c'].into_iter().collect();
    ///
    /// assert!(set.remove(&'b'));
    /// assert!(!set.remove(&'b'));
    /// assert!(!set.remove(&'x'));
    ///
    /// assert_eq!(set.to_vec(), vec!['a', 'c']);
    /// ```
    pub fn remove(&self, element: &E) -> bool {
        let hash = self.hasher.hash_one(element);
        let mut tables = self.tables.write();

        match tables.erase(element, hash) {
            Some(_record) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(stamp = _record.stamp(), "removed from ordered set");
                true
            }
            None => false,
        }
    }

    /// Returns whether or not the `element` is present; i.e., it has a live record.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_concurrent_collections::*;
    ///
    /// let set = ConcurrentOrderedSet::new();
    /// set.add(42);
    ///
    /// assert!(set.contains(&42));
    /// assert!(!set.contains(&7));
    /// ```
    pub fn contains(&self, element: &E) -> bool {
        let hash = self.hasher.hash_one(element);
        let tables = self.tables.read();
        tables.find(element, hash).is_some_and(|x| x.is_live())
    }
}

impl<E, S> ConcurrentOrderedSet<E, S> {
    /// Returns an iterator over the elements in their insertion order.
    ///
    /// The records are copied with shared access when the iterator is created, while liveness of each record is
    /// checked only when the iterator reaches it. Therefore, the iterator is weakly consistent:
    /// * an element removed before the creation of the iterator is never yielded,
    /// * an element removed after the creation is skipped if the removal happens before the iterator reaches it,
    /// * an element added after the creation is never yielded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_concurrent_collections::*;
    ///
    /// let set: ConcurrentOrderedSet<_> = [3, 1, 2].into_iter().collect();
    ///
    /// let mut iter = set.iter();
    /// assert_eq!(iter.next(), Some(3));
    ///
    /// set.remove(&1);
    /// set.add(4);
    ///
    /// assert_eq!(iter.collect::<Vec<_>>(), vec![2]);
    /// ```
    pub fn iter(&self) -> OrderedSetIter<E>
    where
        E: Clone,
    {
        OrderedSetIter::new(self.records())
    }

    /// Clones the present elements into a regular vector in their insertion order.
    pub fn to_vec(&self) -> Vec<E>
    where
        E: Clone,
    {
        self.iter().collect()
    }
}
