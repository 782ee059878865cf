use orx_concurrent_option::ConcurrentOption;

/// State of a position of the [`ConcurrentGrowableArray`] as observed by a reader.
///
/// A position below the capacity can be in one of three states:
/// * `Unreserved` when it is at or beyond the length of the array,
/// * `Pending` when an in-flight `append` reserved the position but has not written its value yet,
/// * `Committed(value)` when the value is visible.
///
/// An explicitly absent value can be stored by choosing an optional element type,
/// which is never confused with a pending position.
///
/// [`ConcurrentGrowableArray`]: crate::ConcurrentGrowableArray
///
/// # Examples
///
/// ```rust
/// use orx_concurrent_collections::*;
///
/// let array = ConcurrentGrowableArray::with_capacity(4);
/// array.append(Some('a'));
/// array.append(None);
///
/// assert_eq!(array.slot(0), Ok(Slot::Committed(Some('a'))));
/// assert_eq!(array.slot(1), Ok(Slot::Committed(None)));
/// assert_eq!(array.slot(2), Ok(Slot::Unreserved));
/// assert!(array.slot(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot<T> {
    /// The position is not reserved by any append.
    Unreserved,
    /// The position is reserved by an append which has not completed yet.
    Pending,
    /// The position holds a visible value.
    Committed(T),
}

impl<T> Slot<T> {
    /// Returns the committed value; None if the slot is unreserved or pending.
    pub fn committed(self) -> Option<T> {
        match self {
            Self::Committed(value) => Some(value),
            _ => None,
        }
    }

    /// Returns whether or not the slot holds a visible value.
    pub fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }
}

/// A cell of the array; empty until an append commits its value.
pub(crate) struct ConcurrentElement<T>(pub(crate) ConcurrentOption<T>);

impl<T> ConcurrentElement<T> {
    #[inline(always)]
    pub(crate) fn empty() -> Self {
        Self(ConcurrentOption::none())
    }

    #[inline(always)]
    pub(crate) fn committed(value: T) -> Self {
        Self(ConcurrentOption::some(value))
    }

    #[inline(always)]
    pub(crate) fn is_committed(&self) -> bool {
        self.0.is_some()
    }

    /// Writes the value of a reserved cell.
    ///
    /// Each reserved position is written exactly once by the append which reserved it,
    /// while the writer holds shared access to the block.
    #[inline(always)]
    pub(crate) fn commit(&self, value: T) {
        let previous = self.0.replace(value);
        debug_assert!(previous.is_none(), "reserved cell is written twice");
    }

    #[inline(always)]
    pub(crate) fn cloned(&self) -> Option<T>
    where
        T: Clone,
    {
        self.0.clone_into_option()
    }

    #[inline(always)]
    pub(crate) fn map<F, U>(&self, f: F) -> Option<U>
    where
        F: FnOnce(&T) -> U,
    {
        self.0.map(f)
    }

    /// Overwrites the committed value; returns false, leaving the cell untouched, if it is empty.
    #[inline(always)]
    pub(crate) fn overwrite(&self, value: T) -> bool {
        let mut value = Some(value);
        self.0.update_if_some(|x| {
            if let Some(new_value) = value.take() {
                *x = new_value;
            }
        })
    }

    #[inline(always)]
    pub(crate) fn update<F>(&self, f: F) -> bool
    where
        F: FnMut(&mut T),
    {
        self.0.update_if_some(f)
    }

    #[inline(always)]
    pub(crate) fn replace_committed(&self, value: T) -> Option<T> {
        match self.is_committed() {
            true => self.0.replace(value),
            false => None,
        }
    }

    pub(crate) fn slot(&self, reserved: bool) -> Slot<T>
    where
        T: Clone,
    {
        match (self.cloned(), reserved) {
            (Some(value), _) => Slot::Committed(value),
            (None, true) => Slot::Pending,
            (None, false) => Slot::Unreserved,
        }
    }
}
