use thiserror::Error;

/// Error returned by the index based operations of the [`ConcurrentGrowableArray`].
///
/// Both variants are contract violations of the caller, such as using a stale index.
/// A failed operation leaves the array exactly as it was before the call.
///
/// [`ConcurrentGrowableArray`]: crate::ConcurrentGrowableArray
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArrayError {
    /// The index is outside of the valid window of the requested operation.
    ///
    /// * `get` accepts indices below the capacity,
    /// * `set` and `remove` accept indices of committed elements, below the length.
    #[error("index {index} is out of range, the valid window ends at {bound}")]
    OutOfRange {
        /// The index requested by the caller.
        index: usize,
        /// Exclusive upper bound of the window at the time of the call.
        bound: usize,
    },
    /// The index is negative.
    #[error("invalid index {0}, expected a non-negative index")]
    InvalidArgument(i64),
}
