//! Capacity normalization.
//!
//! Every initialized ring has a power-of-two number of slots. Requests are
//! rounded up; a request of zero falls back to a minimum capacity.

use core::alloc::Layout;

use crate::error::DequeError;

/// Capacity used when zero is requested and no other minimum is configured.
pub const DEFAULT_MIN_CAPACITY: usize = 1024;

/// Rounds `requested` up to the next power of two, using
/// [`DEFAULT_MIN_CAPACITY`] for a request of zero.
///
/// # Panics
///
/// Panics if the rounded capacity does not fit in `usize`.
///
/// # Examples
///
/// ```
/// use ringdeque::capacity::normalize;
///
/// assert_eq!(normalize(0), 1024);
/// assert_eq!(normalize(5), 8);
/// assert_eq!(normalize(16), 16);
/// ```
#[inline]
pub fn normalize(requested: usize) -> usize {
    normalize_with_min(requested, DEFAULT_MIN_CAPACITY)
}

/// Like [`normalize`], but a request of zero yields `min` (itself rounded
/// up to a power of two).
///
/// # Panics
///
/// Panics if the rounded capacity does not fit in `usize`.
pub fn normalize_with_min(requested: usize, min: usize) -> usize {
    match try_normalize_with_min(requested, min) {
        Ok(capacity) => capacity,
        Err(_) => panic!("capacity overflow"),
    }
}

/// Fallible form of [`normalize`].
#[inline]
pub fn try_normalize(requested: usize) -> Result<usize, DequeError> {
    try_normalize_with_min(requested, DEFAULT_MIN_CAPACITY)
}

/// Fallible form of [`normalize_with_min`].
pub fn try_normalize_with_min(requested: usize, min: usize) -> Result<usize, DequeError> {
    let target = if requested == 0 { min.max(1) } else { requested };
    target
        .checked_next_power_of_two()
        .ok_or(DequeError::CapacityOverflow { requested: target })
}

/// Checks that `capacity` slots of `T` fit in one allocation, that is,
/// their total size does not exceed `isize::MAX` bytes.
///
/// # Examples
///
/// ```
/// use ringdeque::capacity::check_layout;
///
/// assert_eq!(check_layout::<u64>(1 << 20), Ok(1 << 20));
/// assert!(check_layout::<u64>(1 << 62).is_err());
/// ```
pub fn check_layout<T>(capacity: usize) -> Result<usize, DequeError> {
    Layout::array::<T>(capacity)
        .map(|_| capacity)
        .map_err(|_| DequeError::CapacityOverflow { requested: capacity })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_uses_default_minimum() {
        assert_eq!(normalize(0), DEFAULT_MIN_CAPACITY);
    }

    #[test]
    fn rounds_up_to_power_of_two() {
        assert_eq!(normalize(1), 1);
        assert_eq!(normalize(3), 4);
        assert_eq!(normalize(5), 8);
        assert_eq!(normalize(1025), 2048);
    }

    #[test]
    fn powers_of_two_unchanged() {
        for shift in 0..20 {
            assert_eq!(normalize(1 << shift), 1 << shift);
        }
    }

    #[test]
    fn configured_minimum() {
        assert_eq!(normalize_with_min(0, 16), 16);
        assert_eq!(normalize_with_min(0, 10), 16);
        assert_eq!(normalize_with_min(0, 0), 1);
        // the minimum only applies to zero requests
        assert_eq!(normalize_with_min(3, 16), 4);
    }

    #[test]
    fn overflow_is_reported() {
        let huge = usize::MAX / 2 + 2;
        assert_eq!(
            try_normalize(huge),
            Err(DequeError::CapacityOverflow { requested: huge })
        );
        assert_eq!(try_normalize(usize::MAX / 2 + 1), Ok(usize::MAX / 2 + 1));
    }

    #[test]
    fn layout_limits_slot_count() {
        let slots = 1usize << 62;
        assert_eq!(
            check_layout::<u64>(slots),
            Err(DequeError::CapacityOverflow { requested: slots })
        );
        assert_eq!(check_layout::<u8>(1024), Ok(1024));
        // zero-sized slots never exhaust the address space
        assert_eq!(check_layout::<()>(usize::MAX / 2 + 1), Ok(usize::MAX / 2 + 1));
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn normalize_panics_on_overflow() {
        normalize(usize::MAX);
    }
}
