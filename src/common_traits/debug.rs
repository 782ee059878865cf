use crate::{ConcurrentGrowableArray, ConcurrentOrderedSet};
use std::fmt::Debug;

const ELEM_PER_LINE: usize = 8;

impl<T: Debug> Debug for ConcurrentGrowableArray<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cells = self.cells.read();
        let len = self.len();
        let capacity = cells.len();

        write!(f, "ConcurrentGrowableArray {{")?;
        write!(f, "\n    len: {},", len)?;
        write!(f, "\n    capacity: {},", capacity)?;
        write!(f, "\n    data: [")?;
        for (i, cell) in cells.iter().take(len).enumerate() {
            if i % ELEM_PER_LINE == 0 {
                write!(f, "\n        ")?;
            }
            match cell.map(|x| write!(f, "{:?}, ", x)) {
                Some(written) => written?,
                None => write!(f, "*, ")?,
            }
        }
        write!(f, "\n    ],")?;
        write!(f, "\n}}")
    }
}

impl<E: Debug, S> Debug for ConcurrentOrderedSet<E, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let records = self.records();
        let live = records.iter().filter(|x| x.is_live()).map(|x| x.element());
        f.debug_set().entries(live).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_array() {
        let array = ConcurrentGrowableArray::new();
        array.extend([0, 4, 1, 2, 5, 6, 32, 5, 1, 121, 2, 42]);
        let dbg_str = format!("{:?}", &array);
        assert_eq!(dbg_str, "ConcurrentGrowableArray {\n    len: 12,\n    capacity: 20,\n    data: [\n        0, 4, 1, 2, 5, 6, 32, 5, \n        1, 121, 2, 42, \n    ],\n}");
    }

    #[test]
    fn debug_set() {
        let set: ConcurrentOrderedSet<_> = ["b", "a", "c"].into_iter().collect();
        set.remove(&"a");
        assert_eq!(format!("{:?}", &set), r#"{"b", "c"}"#);
    }
}
