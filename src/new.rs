use crate::{array::ConcurrentGrowableArray, elem::ConcurrentElement, state::ArrayState};
use parking_lot::RwLock;

/// Capacity of the block of a [`ConcurrentGrowableArray`] created by `new` or `default`.
pub const DEFAULT_INITIAL_CAPACITY: usize = 10;

impl<T> Default for ConcurrentGrowableArray<T> {
    /// Creates a new empty array with [`DEFAULT_INITIAL_CAPACITY`].
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ConcurrentGrowableArray<T> {
    /// Creates a new empty array with [`DEFAULT_INITIAL_CAPACITY`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_concurrent_collections::*;
    ///
    /// let array: ConcurrentGrowableArray<char> = ConcurrentGrowableArray::new();
    /// assert!(array.is_empty());
    /// assert_eq!(array.capacity(), DEFAULT_INITIAL_CAPACITY);
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_INITIAL_CAPACITY)
    }

    /// Creates a new empty array with the given `initial_capacity`.
    ///
    /// Capacity of the array is then always `initial_capacity` times a power of two.
    /// An initial capacity of zero is treated as one, since a block of zero cells cannot be doubled.
    pub fn with_capacity(initial_capacity: usize) -> Self {
        let capacity = initial_capacity.max(1);
        let mut cells = Vec::with_capacity(capacity);
        cells.resize_with(capacity, ConcurrentElement::empty);
        Self {
            cells: RwLock::new(cells),
            state: ArrayState::new(0),
        }
    }

    /// Creates an array from the given values, placing them into the first positions of a block
    /// with at least `initial_capacity` cells.
    pub(crate) fn from_values(values: Vec<T>, initial_capacity: usize) -> Self {
        let len = values.len();
        let mut capacity = initial_capacity.max(1);
        while capacity < len {
            capacity = capacity.saturating_mul(2);
        }

        let mut cells = Vec::with_capacity(capacity);
        cells.extend(values.into_iter().map(ConcurrentElement::committed));
        cells.resize_with(capacity, ConcurrentElement::empty);
        Self {
            cells: RwLock::new(cells),
            state: ArrayState::new(len),
        }
    }
}
