use crate::{array::ConcurrentGrowableArray, elem::ConcurrentElement, errors::ArrayError, index::ArrayIndex};

impl<T> ConcurrentGrowableArray<T> {
    /// Removes the element at the `index`-th position, shifting all elements after it one position to the left.
    ///
    /// The operation is structural: it holds exclusive access for the duration of the shift, hence no other
    /// thread observes the array half-shifted. The vacated last cell becomes empty and the length decreases by one.
    ///
    /// Fails with `OutOfRange` unless `index < self.len()`, and with `InvalidArgument` if `index` is negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use orx_concurrent_collections::*;
    ///
    /// let array = ConcurrentGrowableArray::from_iter(["A", "B", "C", "D"]);
    ///
    /// assert_eq!(array.remove(1), Ok(()));
    /// assert_eq!(array.len(), 3);
    /// assert_eq!(array.clone_to_vec(), vec!["A", "C", "D"]);
    /// assert_eq!(array.get(3), Ok(None));
    ///
    /// assert_eq!(array.remove(3), Err(ArrayError::OutOfRange { index: 3, bound: 3 }));
    /// ```
    pub fn remove<I: ArrayIndex>(&self, index: I) -> Result<(), ArrayError> {
        let index = index.to_position()?;

        loop {
            let mut cells = self.cells.write();

            // an append releases its shared access while waiting to grow the block;
            // its reserved slot is not written yet and shifting now would leave a hole
            if self.state.has_pending() {
                drop(cells);
                self.state.wait_until_settled();
                continue;
            }

            let len = self.len();
            if index >= len {
                return Err(ArrayError::OutOfRange { index, bound: len });
            }

            cells[index..len].rotate_left(1);
            cells[len - 1] = ConcurrentElement::empty();
            self.state.release_last();

            #[cfg(feature = "tracing")]
            tracing::debug!(index, len = len - 1, "removed from concurrent array");

            return Ok(());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Slot;

    #[test]
    fn remove_first_middle_last() {
        let array = ConcurrentGrowableArray::from_iter(0..6);

        array.remove(0).unwrap();
        assert_eq!(array.clone_to_vec(), vec![1, 2, 3, 4, 5]);

        array.remove(2).unwrap();
        assert_eq!(array.clone_to_vec(), vec![1, 2, 4, 5]);

        array.remove(3).unwrap();
        assert_eq!(array.clone_to_vec(), vec![1, 2, 4]);

        assert_eq!(array.len(), 3);
        assert_eq!(array.slot(3), Ok(Slot::Unreserved));
    }

    #[test]
    fn failed_remove_leaves_array_untouched() {
        let array = ConcurrentGrowableArray::from_iter(['a', 'b']);

        assert_eq!(array.remove(-1), Err(ArrayError::InvalidArgument(-1)));
        assert_eq!(array.remove(2), Err(ArrayError::OutOfRange { index: 2, bound: 2 }));
        assert_eq!(array.clone_to_vec(), vec!['a', 'b']);
        assert_eq!(array.len(), 2);
    }

    #[test]
    fn append_after_remove_reuses_slot() {
        let array = ConcurrentGrowableArray::with_capacity(2);
        array.append('a');
        array.append('b');
        array.remove(0).unwrap();

        assert_eq!(array.append('c'), 1);
        assert_eq!(array.clone_to_vec(), vec!['b', 'c']);
        assert_eq!(array.capacity(), 2);
    }

    #[test]
    fn remove_waits_for_reserved_slot_to_be_written() {
        let array = ConcurrentGrowableArray::with_capacity(4);
        array.append('a');
        array.append('b');
        let idx = array.state.reserve();

        std::thread::scope(|s| {
            let remover = s.spawn(|| array.remove(0));

            std::thread::sleep(std::time::Duration::from_millis(20));
            assert!(!remover.is_finished());

            array.cells.read()[idx].commit('c');
            array.state.commit();
            assert_eq!(remover.join().unwrap(), Ok(()));
        });

        assert_eq!(array.clone_to_vec(), vec!['b', 'c']);
        assert_eq!(array.len(), 2);
    }
}
