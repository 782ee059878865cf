use crate::{elem::ConcurrentElement, ConcurrentGrowableArray};

impl<T: PartialEq> PartialEq for ConcurrentGrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        if core::ptr::eq(self, other) {
            return true;
        }

        let (a, b) = (self.cells.read(), other.cells.read());
        let (a, b) = (committed(&a, self.len()), committed(&b, other.len()));
        a.len() == b.len()
            && a.iter()
                .zip(b.iter())
                .all(|(x, y)| x.map(|x| y.map(|y| x == y)) == Some(Some(true)))
    }
}

impl<T: PartialEq> PartialEq<[T]> for ConcurrentGrowableArray<T> {
    fn eq(&self, other: &[T]) -> bool {
        let cells = self.cells.read();
        let cells = committed(&cells, self.len());
        cells.len() == other.len()
            && cells
                .iter()
                .zip(other.iter())
                .all(|(x, y)| x.map(|x| x == y) == Some(true))
    }
}

impl<const N: usize, T: PartialEq> PartialEq<[T; N]> for ConcurrentGrowableArray<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.eq(other.as_slice())
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for ConcurrentGrowableArray<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.eq(other.as_slice())
    }
}

/// Cells from the first position up to the first one which is not committed.
fn committed<T>(cells: &[ConcurrentElement<T>], len: usize) -> &[ConcurrentElement<T>] {
    let end = cells.len().min(len);
    let end = cells[..end]
        .iter()
        .position(|x| !x.is_committed())
        .unwrap_or(end);
    &cells[..end]
}

#[cfg(test)]
mod tests {
    use crate::ConcurrentGrowableArray;

    #[test]
    fn eq_ignores_capacity() {
        let a = ConcurrentGrowableArray::with_capacity(2);
        let b = ConcurrentGrowableArray::with_capacity(64);
        for x in ['x', 'y', 'z'] {
            a.append(x);
            b.append(x);
        }

        assert_eq!(a, b);
        assert_eq!(a, ['x', 'y', 'z']);
        assert_eq!(a, vec!['x', 'y', 'z']);
        assert_ne!(a, ['x', 'y']);

        b.set(1, 'w').unwrap();
        assert_ne!(a, b);
    }
}
