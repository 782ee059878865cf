//! Concurrent collections built on reader-writer exclusion.
//!
//! * [`ConcurrentGrowableArray`] is an index addressable array allowing concurrent
//!   append, read and update operations, while structural changes, growth of the
//!   underlying block and shift-based removal, are serialized.
//! * [`ConcurrentOrderedSet`] is a hash set preserving the insertion order of its
//!   elements, allowing concurrent additions while removals are serialized, and
//!   providing a weakly consistent iterator.
//!
//! Neither collection is lock-free. Both rely on a fair reader-writer lock where the
//! frequent operations share the lock and the rare structural operations hold it
//! exclusively.
#![warn(
    missing_docs,
    clippy::unwrap_in_result,
    clippy::unwrap_used,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::float_cmp,
    clippy::float_cmp_const,
    clippy::missing_panics_doc,
    clippy::todo
)]

mod array;
mod common_traits;
/// A cell of the concurrent array.
mod elem;
mod errors;
/// Methods adding elements to the array.
mod grow;
mod index;
mod iter;
/// Methods that mutate existing elements of the array.
mod mut_elem;
mod new;
mod ordered_set;
mod record;
/// Shift-based removal from the array.
mod remove;
mod set_iter;
mod state;

pub use array::ConcurrentGrowableArray;
pub use elem::Slot;
pub use errors::ArrayError;
pub use index::ArrayIndex;
pub use iter::ArraySnapshot;
pub use new::DEFAULT_INITIAL_CAPACITY;
pub use ordered_set::ConcurrentOrderedSet;
pub use set_iter::OrderedSetIter;
