use crate::{array::ConcurrentGrowableArray, elem::ConcurrentElement};

/// A point-in-time snapshot of the committed elements of a [`ConcurrentGrowableArray`].
///
/// It is created by [`ConcurrentGrowableArray::iter`] and owns clones of the values;
/// mutations of the array after its creation are never observed.
pub struct ArraySnapshot<T> {
    values: std::vec::IntoIter<T>,
}

impl<T> Iterator for ArraySnapshot<T> {
    type Item = T;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.values.next()
    }

    #[inline(always)]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.values.size_hint()
    }
}

impl<T> ExactSizeIterator for ArraySnapshot<T> {}

impl<T> ConcurrentGrowableArray<T> {
    /// Takes a snapshot of the array and returns an iterator over it.
    ///
    /// The snapshot is taken with shared access and copies the elements from the first position
    /// up to the length or the capacity, whichever is smaller. It stops at the first cell whose
    /// append is still in flight; hence, uncommitted appends are never yielded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_concurrent_collections::*;
    ///
    /// let array = ConcurrentGrowableArray::from_iter(0..5);
    ///
    /// let before = array.iter();
    /// array.set(2, 999).unwrap();
    /// let after = array.iter();
    ///
    /// assert_eq!(before.collect::<Vec<_>>(), vec![0, 1, 2, 3, 4]);
    /// assert_eq!(after.collect::<Vec<_>>(), vec![0, 1, 999, 3, 4]);
    /// ```
    pub fn iter(&self) -> ArraySnapshot<T>
    where
        T: Clone,
    {
        let cells = self.cells.read();
        let values = committed_prefix(&cells, self.len());
        ArraySnapshot {
            values: values.into_iter(),
        }
    }
}

/// Clones the values of the cells up to `len`, stopping at the first cell which is not committed.
pub(crate) fn committed_prefix<T: Clone>(cells: &[ConcurrentElement<T>], len: usize) -> Vec<T> {
    let end = cells.len().min(len);
    cells[..end].iter().map_while(|cell| cell.cloned()).collect()
}
