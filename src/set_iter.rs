use crate::record::MarkedRecord;
use std::sync::Arc;

/// Weakly consistent iterator over the elements of a [`ConcurrentOrderedSet`] in their insertion order.
///
/// It is created by [`ConcurrentOrderedSet::iter`]. The records are captured at creation;
/// a record is skipped if it is not live at the moment the iterator reaches it.
///
/// [`ConcurrentOrderedSet`]: crate::ConcurrentOrderedSet
/// [`ConcurrentOrderedSet::iter`]: crate::ConcurrentOrderedSet::iter
pub struct OrderedSetIter<E> {
    records: std::vec::IntoIter<Arc<MarkedRecord<E>>>,
}

impl<E> OrderedSetIter<E> {
    pub(crate) fn new(records: Vec<Arc<MarkedRecord<E>>>) -> Self {
        Self {
            records: records.into_iter(),
        }
    }
}

impl<E: Clone> Iterator for OrderedSetIter<E> {
    type Item = E;

    fn next(&mut self) -> Option<Self::Item> {
        self.records
            .find(|record| record.is_live())
            .map(|record| record.element().clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.records.size_hint().1)
    }
}
