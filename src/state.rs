use core::sync::atomic::{AtomicUsize, Ordering};
use parking_lot::{Condvar, Mutex};

/// Atomic counters of the concurrent array.
///
/// * `len_reserved` is the next free slot; its value is the logical length of the array.
/// * `len_committed` counts the reserved slots whose values are already written.
///
/// The two differ only while appends are in flight. Threads waiting for in-flight appends
/// to settle sleep on `settled` and are woken by the commits.
#[derive(Debug)]
pub(crate) struct ArrayState {
    len_reserved: AtomicUsize,
    len_committed: AtomicUsize,
    num_waiting: AtomicUsize,
    gate: Mutex<()>,
    settled: Condvar,
}

impl ArrayState {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            len_reserved: len.into(),
            len_committed: len.into(),
            num_waiting: 0.into(),
            gate: Mutex::new(()),
            settled: Condvar::new(),
        }
    }

    /// Reserves the next free slot and returns its position.
    ///
    /// No two calls observe the same position.
    #[inline(always)]
    pub(crate) fn reserve(&self) -> usize {
        self.len_reserved.fetch_add(1, Ordering::AcqRel)
    }

    /// Marks one reserved slot as written, waking up the waiters if there are any.
    #[inline(always)]
    pub(crate) fn commit(&self) {
        self.len_committed.fetch_add(1, Ordering::SeqCst);
        if self.num_waiting.load(Ordering::SeqCst) > 0 {
            let _gate = self.gate.lock();
            self.settled.notify_all();
        }
    }

    /// Blocks until every reserved slot is written.
    ///
    /// Must be called without holding any access to the cells, since the in-flight appends might
    /// need exclusive access to grow the block before they can commit.
    pub(crate) fn wait_until_settled(&self) {
        self.num_waiting.fetch_add(1, Ordering::SeqCst);
        let mut gate = self.gate.lock();
        while self.len_committed.load(Ordering::SeqCst) != self.len_reserved.load(Ordering::SeqCst) {
            self.settled.wait(&mut gate);
        }
        drop(gate);
        self.num_waiting.fetch_sub(1, Ordering::SeqCst);
    }

    /// Gives back the last slot after a removal.
    ///
    /// Called only with exclusive access and no pending appends, hence both counters are equal.
    #[inline(always)]
    pub(crate) fn release_last(&self) {
        self.len_reserved.fetch_sub(1, Ordering::AcqRel);
        self.len_committed.fetch_sub(1, Ordering::Release);
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.len_reserved.load(Ordering::Acquire)
    }

    #[inline(always)]
    pub(crate) fn len_committed(&self) -> usize {
        self.len_committed.load(Ordering::Acquire)
    }

    /// Returns whether some appends reserved their slots but did not write their values yet.
    #[inline(always)]
    pub(crate) fn has_pending(&self) -> bool {
        self.len_committed() != self.len()
    }
}
