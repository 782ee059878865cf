use crate::errors::ArrayError;

/// An integer that can be used to address a position of the [`ConcurrentGrowableArray`].
///
/// Signed indices fail with [`ArrayError::InvalidArgument`] when negative. An index which does not fit
/// into `usize` on the target can never be within the capacity, and fails with
/// [`ArrayError::OutOfRange`] at `usize::MAX`.
///
/// [`ConcurrentGrowableArray`]: crate::ConcurrentGrowableArray
///
/// # Examples
///
/// ```rust
/// use orx_concurrent_collections::*;
///
/// assert_eq!(3usize.to_position(), Ok(3));
/// assert_eq!(3i32.to_position(), Ok(3));
/// assert_eq!((-1i64).to_position(), Err(ArrayError::InvalidArgument(-1)));
/// ```
pub trait ArrayIndex: Copy {
    /// Converts the index into a position of the array.
    fn to_position(self) -> Result<usize, ArrayError>;
}

fn unaddressable() -> ArrayError {
    ArrayError::OutOfRange {
        index: usize::MAX,
        bound: usize::MAX,
    }
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {
        $(
            impl ArrayIndex for $t {
                #[inline(always)]
                fn to_position(self) -> Result<usize, ArrayError> {
                    usize::try_from(self).map_err(|_| unaddressable())
                }
            }
        )*
    };
}

macro_rules! impl_signed {
    ($($t:ty),*) => {
        $(
            impl ArrayIndex for $t {
                #[inline(always)]
                fn to_position(self) -> Result<usize, ArrayError> {
                    match self < 0 {
                        true => Err(ArrayError::InvalidArgument(self as i64)),
                        false => usize::try_from(self).map_err(|_| unaddressable()),
                    }
                }
            }
        )*
    };
}

impl_unsigned!(usize, u8, u16, u32, u64);
impl_signed!(isize, i8, i16, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_indices_are_invalid() {
        assert_eq!((-1isize).to_position(), Err(ArrayError::InvalidArgument(-1)));
        assert_eq!(i32::MIN.to_position(), Err(ArrayError::InvalidArgument(i32::MIN as i64)));
        assert_eq!(0i8.to_position(), Ok(0));
        assert_eq!(42u16.to_position(), Ok(42));
    }

    #[test]
    fn wide_indices_convert_without_truncation() {
        assert_eq!(u64::from(u32::MAX).to_position(), Ok(u32::MAX as usize));
        assert_eq!(i64::from(i32::MAX).to_position(), Ok(i32::MAX as usize));

        let beyond_32_bits = 1u64 << 32;

        #[cfg(target_pointer_width = "64")]
        {
            assert_eq!(beyond_32_bits.to_position(), Ok(1usize << 32));
            assert_eq!((beyond_32_bits as i64).to_position(), Ok(1usize << 32));
        }

        #[cfg(not(target_pointer_width = "64"))]
        {
            assert_eq!(beyond_32_bits.to_position(), Err(unaddressable()));
            assert_eq!((beyond_32_bits as i64).to_position(), Err(unaddressable()));
        }
    }

    #[test]
    fn unaddressable_index_is_out_of_range_of_any_array() {
        let array = crate::ConcurrentGrowableArray::<char>::with_capacity(4);
        array.append('a');

        assert!(matches!(array.get(u64::MAX), Err(ArrayError::OutOfRange { index: usize::MAX, .. })));
        assert!(matches!(array.remove(i64::MAX), Err(ArrayError::OutOfRange { .. })));
        assert!(matches!(array.set(u64::MAX, 'x'), Err(ArrayError::OutOfRange { .. })));
        assert_eq!(array.clone_to_vec(), vec!['a']);
    }
}
