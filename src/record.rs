use core::sync::atomic::{AtomicU8, Ordering};

/// Mark state of a record of the ordered set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum Mark {
    /// Installed by an `add` which has not confirmed it yet.
    Pending = 0,
    Live = 1,
    /// Logically deleted; about to be erased by the remover.
    Deleted = 2,
}

impl Mark {
    #[inline(always)]
    fn from_u8(value: u8) -> Self {
        match value {
            0 => Self::Pending,
            1 => Self::Live,
            _ => Self::Deleted,
        }
    }
}

/// An element of the ordered set together with its mark and insertion stamp.
///
/// The element and the stamp never change after creation; the mark is the only mutable part,
/// therefore the (element, mark) pair is updated by a single compare-and-swap on the mark.
/// Transitions are `Pending -> Live -> Deleted`, each happening at most once.
#[derive(Debug)]
pub(crate) struct MarkedRecord<E> {
    element: E,
    stamp: u64,
    mark: AtomicU8,
}

impl<E> MarkedRecord<E> {
    pub(crate) fn pending(element: E, stamp: u64) -> Self {
        Self {
            element,
            stamp,
            mark: AtomicU8::new(Mark::Pending as u8),
        }
    }

    #[inline(always)]
    pub(crate) fn element(&self) -> &E {
        &self.element
    }

    #[inline(always)]
    pub(crate) fn stamp(&self) -> u64 {
        self.stamp
    }

    #[inline(always)]
    pub(crate) fn mark(&self) -> Mark {
        Mark::from_u8(self.mark.load(Ordering::Acquire))
    }

    #[inline(always)]
    pub(crate) fn is_live(&self) -> bool {
        self.mark() == Mark::Live
    }

    /// Atomically moves the mark from `current` to `new`; returns false if the mark was not `current`.
    #[inline(always)]
    pub(crate) fn attempt_mark(&self, current: Mark, new: Mark) -> bool {
        self.mark
            .compare_exchange(current as u8, new as u8, Ordering::AcqRel, Ordering::Acquire)
            .is_ok()
    }

    /// `Pending -> Live`; linearization point of a successful add.
    #[inline(always)]
    pub(crate) fn confirm(&self) -> bool {
        self.attempt_mark(Mark::Pending, Mark::Live)
    }

    /// `Live -> Deleted`; linearization point of a successful remove.
    #[inline(always)]
    pub(crate) fn retire(&self) -> bool {
        self.attempt_mark(Mark::Live, Mark::Deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_transitions_happen_once() {
        let record = MarkedRecord::pending("x", 7);
        assert_eq!(record.mark(), Mark::Pending);
        assert!(!record.is_live());
        assert!(!record.retire());

        assert!(record.confirm());
        assert!(!record.confirm());
        assert!(record.is_live());

        assert!(record.retire());
        assert!(!record.retire());
        assert!(!record.confirm());
        assert_eq!(record.mark(), Mark::Deleted);

        assert_eq!(record.element(), &"x");
        assert_eq!(record.stamp(), 7);
    }
}
