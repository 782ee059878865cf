use crate::{elem::ConcurrentElement, errors::ArrayError, index::ArrayIndex, state::ArrayState, Slot};
use parking_lot::RwLock;

/// A growable array allowing concurrent append, read and update operations with a shared reference,
/// while structural changes are serialized.
///
/// * **concurrent**: `append`, `get`, `set`, `update` and snapshot iteration share the lock and run in parallel.
///   Appends which do not cross a capacity boundary never wait for each other.
/// * **serialized**: growing the underlying block and the shift-based `remove` hold the lock exclusively.
///
/// # Examples
///
/// ```rust
/// use orx_concurrent_collections::*;
///
/// let (num_threads, num_items_per_thread) = (4, 256);
///
/// let array = ConcurrentGrowableArray::new();
///
/// std::thread::scope(|s| {
///     let array = &array;
///     for i in 0..num_threads {
///         s.spawn(move || {
///             for j in 0..num_items_per_thread {
///                 // concurrently collect results simply by calling `append`
///                 array.append(i * 1000 + j);
///             }
///         });
///     }
/// });
///
/// let mut values = array.clone_to_vec();
/// values.sort();
/// let mut expected: Vec<_> = (0..num_threads).flat_map(|i| (0..num_items_per_thread).map(move |j| i * 1000 + j)).collect();
/// expected.sort();
/// assert_eq!(values, expected);
/// ```
///
/// # Concurrent State and Properties
///
/// The state is an atomic counter of the next free slot plus the block of cells behind a fair reader-writer lock.
/// * Each append reserves a unique position by atomically incrementing the counter.
/// * Only one growth happens at a time and each necessary doubling is performed exactly once.
/// * Capacity is always the initial capacity multiplied by a power of two.
/// * Removal shifts the elements after the removed position and is never observed half-way.
pub struct ConcurrentGrowableArray<T> {
    pub(crate) cells: RwLock<Vec<ConcurrentElement<T>>>,
    pub(crate) state: ArrayState,
}

impl<T> ConcurrentGrowableArray<T> {
    /// Returns the logical length of the array, which is the position of the next free slot.
    ///
    /// The length includes the positions reserved by appends which are currently in flight.
    /// See [`len_committed`] for the number of elements whose values are already written.
    ///
    /// [`len_committed`]: crate::ConcurrentGrowableArray::len_committed
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_concurrent_collections::*;
    ///
    /// let array = ConcurrentGrowableArray::new();
    /// array.append('a');
    /// array.append('b');
    ///
    /// assert_eq!(2, array.len());
    /// ```
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.state.len()
    }

    /// Returns the number of appended elements whose values are completely written.
    ///
    /// It is equal to [`len`] unless appends are in flight.
    ///
    /// [`len`]: crate::ConcurrentGrowableArray::len
    #[inline(always)]
    pub fn len_committed(&self) -> usize {
        self.state.len_committed()
    }

    /// Returns whether or not the array is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the physical capacity of the array, the number of cells of the current block.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_concurrent_collections::*;
    ///
    /// let array = ConcurrentGrowableArray::with_capacity(4);
    /// assert_eq!(array.capacity(), 4);
    ///
    /// for i in 0..5 {
    ///     array.append(i);
    /// }
    /// assert_eq!(array.capacity(), 8);
    /// ```
    pub fn capacity(&self) -> usize {
        self.cells.read().len()
    }

    /// Returns a clone of the element at the `index`-th position.
    ///
    /// Returns:
    /// * `Ok(Some(value))` if the position holds a committed value,
    /// * `Ok(None)` if the position is within the capacity but holds no visible value; i.e.,
    ///   it is beyond the length, or its append is still in flight,
    /// * `Err(OutOfRange)` if the index is at or beyond the capacity,
    /// * `Err(InvalidArgument)` if the index is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_concurrent_collections::*;
    ///
    /// let array = ConcurrentGrowableArray::with_capacity(4);
    /// array.append('a');
    ///
    /// assert_eq!(array.get(0), Ok(Some('a')));
    /// assert_eq!(array.get(3), Ok(None));
    /// assert_eq!(array.get(4), Err(ArrayError::OutOfRange { index: 4, bound: 4 }));
    /// assert_eq!(array.get(-1), Err(ArrayError::InvalidArgument(-1)));
    /// ```
    pub fn get<I: ArrayIndex>(&self, index: I) -> Result<Option<T>, ArrayError>
    where
        T: Clone,
    {
        self.map(index, T::clone)
    }

    /// Maps the element at the `index`-th position with `f` without cloning it.
    ///
    /// Window and failures are identical to those of [`get`].
    ///
    /// [`get`]: crate::ConcurrentGrowableArray::get
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_concurrent_collections::*;
    ///
    /// let array = ConcurrentGrowableArray::new();
    /// array.append("foo".to_string());
    ///
    /// assert_eq!(array.map(0, |x| x.len()), Ok(Some(3)));
    /// ```
    pub fn map<I, F, U>(&self, index: I, f: F) -> Result<Option<U>, ArrayError>
    where
        I: ArrayIndex,
        F: FnOnce(&T) -> U,
    {
        let index = index.to_position()?;
        let cells = self.cells.read();
        match cells.get(index) {
            Some(cell) => Ok(cell.map(f)),
            None => Err(ArrayError::OutOfRange {
                index,
                bound: cells.len(),
            }),
        }
    }

    /// Returns the three-state view of the `index`-th position; fails if the index is at or beyond the capacity.
    ///
    /// Unlike [`get`], the result distinguishes a position reserved by an in-flight append
    /// from a position which is not reserved at all.
    ///
    /// [`get`]: crate::ConcurrentGrowableArray::get
    pub fn slot<I: ArrayIndex>(&self, index: I) -> Result<Slot<T>, ArrayError>
    where
        T: Clone,
    {
        let index = index.to_position()?;
        let cells = self.cells.read();
        match cells.get(index) {
            Some(cell) => Ok(cell.slot(index < self.len())),
            None => Err(ArrayError::OutOfRange {
                index,
                bound: cells.len(),
            }),
        }
    }

    /// Clones the committed prefix of the array into a regular vector.
    pub fn clone_to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().collect()
    }
}
