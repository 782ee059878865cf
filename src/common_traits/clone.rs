use crate::{iter::committed_prefix, ConcurrentGrowableArray, ConcurrentOrderedSet};
use core::hash::{BuildHasher, Hash};

impl<T: Clone> Clone for ConcurrentGrowableArray<T> {
    /// A thread-safe method to clone the committed elements of the array into a new array with the same capacity.
    ///
    /// # Example
    ///
    /// ```
    /// use orx_concurrent_collections::*;
    ///
    /// let array: ConcurrentGrowableArray<_> = (0..4).collect();
    /// let clone = array.clone();
    ///
    /// assert_eq!(&clone, &[0, 1, 2, 3]);
    /// assert_eq!(clone.capacity(), array.capacity());
    /// ```
    fn clone(&self) -> Self {
        let cells = self.cells.read();
        let values = committed_prefix(&cells, self.len());
        Self::from_values(values, cells.len())
    }
}

impl<E, S> Clone for ConcurrentOrderedSet<E, S>
where
    E: Clone + Hash + Eq + Send + Sync + 'static,
    S: BuildHasher + Clone,
{
    /// Clones the present elements into a new set, preserving their order.
    fn clone(&self) -> Self {
        let clone = Self::with_hasher(self.hasher().clone());
        for x in self.iter() {
            clone.add(x);
        }
        clone
    }
}
