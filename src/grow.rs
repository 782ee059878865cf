use crate::{array::ConcurrentGrowableArray, elem::ConcurrentElement};
use parking_lot::{RwLockReadGuard, RwLockWriteGuard};

type SharedCells<'a, T> = RwLockReadGuard<'a, Vec<ConcurrentElement<T>>>;

impl<T> ConcurrentGrowableArray<T> {
    /// Concurrent, thread-safe method to append the given `value` to the back of the array,
    /// and returns the position of the appended value.
    ///
    /// Every append receives a unique position. Appends which do not cross a capacity boundary
    /// run fully in parallel; when the reserved position is beyond the capacity, the block is
    /// grown first, which is serialized against all other operations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_concurrent_collections::*;
    ///
    /// let array = ConcurrentGrowableArray::with_capacity(2);
    ///
    /// assert_eq!(array.append('a'), 0);
    /// assert_eq!(array.append('b'), 1);
    /// assert_eq!(array.append('c'), 2);
    ///
    /// assert_eq!(array.capacity(), 4);
    /// assert_eq!(array.clone_to_vec(), vec!['a', 'b', 'c']);
    /// ```
    pub fn append(&self, value: T) -> usize {
        let mut cells = self.cells.read();
        let idx = self.state.reserve();

        if idx >= cells.len() {
            cells = self.grow_to_fit(cells, idx);
        }

        cells[idx].commit(value);
        self.state.commit();

        idx
    }

    /// Appends all `values` one after the other and returns the position of the first appended value;
    /// returns the length of the array if the iterator is empty.
    ///
    /// Values are appended individually; hence, appends of other threads might interleave and
    /// the positions of the values are not necessarily consecutive.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_concurrent_collections::*;
    ///
    /// let array = ConcurrentGrowableArray::new();
    /// array.append(0);
    ///
    /// assert_eq!(array.extend([1, 2, 3]), 1);
    /// assert_eq!(array.extend(Vec::<i32>::new()), 4);
    /// assert_eq!(array.clone_to_vec(), vec![0, 1, 2, 3]);
    /// ```
    pub fn extend<I>(&self, values: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        let mut values = values.into_iter();
        match values.next() {
            Some(first) => {
                let begin_idx = self.append(first);
                for value in values {
                    self.append(value);
                }
                begin_idx
            }
            None => self.len(),
        }
    }

    /// Grows the block so that position `idx` fits, and returns shared access to the grown block.
    ///
    /// There is no atomic upgrade from shared to exclusive access. The shared permit is released
    /// and the exclusive one is acquired, and during this gap any other thread might have grown
    /// the block already. Hence, the need for growth is checked again once exclusive.
    /// The exclusive permit is downgraded atomically, so that the caller is never left unprotected
    /// between the growth and writing its value.
    fn grow_to_fit<'a>(&'a self, shared: SharedCells<'a, T>, idx: usize) -> SharedCells<'a, T> {
        drop(shared);
        let mut exclusive = self.cells.write();

        if idx >= exclusive.len() {
            let old_capacity = exclusive.len();
            let new_capacity = grown_capacity(old_capacity, idx);

            let mut block = Vec::with_capacity(new_capacity);
            block.append(&mut *exclusive);
            block.resize_with(new_capacity, ConcurrentElement::empty);
            *exclusive = block;

            #[cfg(feature = "tracing")]
            tracing::debug!(old_capacity, new_capacity, idx, "grew concurrent array");
        }

        RwLockWriteGuard::downgrade(exclusive)
    }
}

/// Doubles the capacity until position `idx` fits.
fn grown_capacity(capacity: usize, idx: usize) -> usize {
    let mut new_capacity = capacity.max(1);
    while new_capacity <= idx {
        new_capacity = new_capacity.saturating_mul(2);
    }
    new_capacity
}
