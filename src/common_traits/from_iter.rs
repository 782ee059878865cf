use crate::{new::DEFAULT_INITIAL_CAPACITY, ConcurrentGrowableArray, ConcurrentOrderedSet};
use core::hash::{BuildHasher, Hash};

impl<T> FromIterator<T> for ConcurrentGrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let values: Vec<_> = iter.into_iter().collect();
        Self::from_values(values, DEFAULT_INITIAL_CAPACITY)
    }
}

impl<E, S> FromIterator<E> for ConcurrentOrderedSet<E, S>
where
    E: Hash + Eq + Send + Sync + 'static,
    S: BuildHasher + Default,
{
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let mut set = Self::with_hasher(S::default());
        set.extend(iter);
        set
    }
}

impl<E, S> Extend<E> for ConcurrentOrderedSet<E, S>
where
    E: Hash + Eq + Send + Sync + 'static,
    S: BuildHasher,
{
    fn extend<I: IntoIterator<Item = E>>(&mut self, iter: I) {
        for x in iter {
            self.add(x);
        }
    }
}
