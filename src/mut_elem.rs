use crate::{array::ConcurrentGrowableArray, errors::ArrayError, index::ArrayIndex};

impl<T> ConcurrentGrowableArray<T> {
    /// Overwrites the element at the `index`-th position with the given `value`.
    ///
    /// The element must already exist; i.e., `index` must be less than the length of the array
    /// and its append must be completed. The length of the array does not change.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_concurrent_collections::*;
    ///
    /// let array = ConcurrentGrowableArray::from_iter(['a', 'b']);
    ///
    /// assert_eq!(array.set(1, 'x'), Ok(()));
    /// assert_eq!(array.get(1), Ok(Some('x')));
    ///
    /// assert_eq!(array.set(2, 'y'), Err(ArrayError::OutOfRange { index: 2, bound: 2 }));
    /// assert_eq!(array.len(), 2);
    /// ```
    pub fn set<I: ArrayIndex>(&self, index: I, value: T) -> Result<(), ArrayError> {
        let index = index.to_position()?;
        let cells = self.cells.read();
        let len = self.len();

        match index < len && cells.get(index).is_some_and(|cell| cell.overwrite(value)) {
            true => Ok(()),
            false => Err(ArrayError::OutOfRange { index, bound: len }),
        }
    }

    /// Replaces the element at the `index`-th position with the given `value`, and returns the old value.
    ///
    /// Window and failures are identical to those of [`set`].
    ///
    /// [`set`]: crate::ConcurrentGrowableArray::set
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_concurrent_collections::*;
    ///
    /// let array = ConcurrentGrowableArray::from_iter(['a', 'b', 'c']);
    ///
    /// assert_eq!(array.replace(2, 'x'), Ok('c'));
    /// assert_eq!(array.clone_to_vec(), vec!['a', 'b', 'x']);
    /// ```
    pub fn replace<I: ArrayIndex>(&self, index: I, value: T) -> Result<T, ArrayError> {
        let index = index.to_position()?;
        let cells = self.cells.read();
        let len = self.len();

        let old = match index < len {
            true => cells.get(index).and_then(|cell| cell.replace_committed(value)),
            false => None,
        };
        old.ok_or(ArrayError::OutOfRange { index, bound: len })
    }

    /// Updates the element at the `index`-th position in place by calling `f` on a mutable reference to it.
    ///
    /// Window and failures are identical to those of [`set`].
    ///
    /// [`set`]: crate::ConcurrentGrowableArray::set
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_concurrent_collections::*;
    ///
    /// let array = ConcurrentGrowableArray::from_iter([1, 2, 3]);
    ///
    /// array.update(1, |x| *x *= 10).unwrap();
    /// assert_eq!(array.clone_to_vec(), vec![1, 20, 3]);
    ///
    /// assert!(array.update(3, |x| *x *= 10).is_err());
    /// ```
    pub fn update<I, F>(&self, index: I, f: F) -> Result<(), ArrayError>
    where
        I: ArrayIndex,
        F: FnMut(&mut T),
    {
        let index = index.to_position()?;
        let cells = self.cells.read();
        let len = self.len();

        match index < len && cells.get(index).is_some_and(|cell| cell.update(f)) {
            true => Ok(()),
            false => Err(ArrayError::OutOfRange { index, bound: len }),
        }
    }
}
