//! Runtime configuration for `RingDeque`.

use crate::capacity::{self, DEFAULT_MIN_CAPACITY};
use crate::error::DequeError;
use crate::observer::{Observer, Silent};
use crate::RingDeque;

/// Configures and creates a [`RingDeque`].
///
/// Without an explicit [`capacity`](Builder::capacity) the deque is created
/// lazily and allocates [`min_capacity`](Builder::min_capacity) slots on its
/// first push.
///
/// # Examples
///
/// ```
/// use ringdeque::{Builder, LogObserver, RingDeque};
///
/// let deque: RingDeque<u32, _> = Builder::new()
///     .capacity(100)
///     .observer(LogObserver)
///     .build();
/// assert_eq!(deque.capacity(), 128);
///
/// let mut lazy: RingDeque<u32> = Builder::new().min_capacity(16).build();
/// assert_eq!(lazy.capacity(), 0);
/// lazy.push_back(1);
/// assert_eq!(lazy.capacity(), 16);
/// ```
#[derive(Clone, Debug)]
pub struct Builder<O = Silent> {
    capacity: Option<usize>,
    min_capacity: usize,
    observer: O,
}

impl Builder {
    /// A builder for a lazy deque with the default minimum capacity and no
    /// observer.
    pub fn new() -> Self {
        Builder {
            capacity: None,
            min_capacity: DEFAULT_MIN_CAPACITY,
            observer: Silent,
        }
    }
}

impl Default for Builder {
    fn default() -> Self {
        Builder::new()
    }
}

impl<O: Observer> Builder<O> {
    /// Allocate storage up front, rounded up to a power of two. Zero means
    /// the minimum capacity.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// Capacity used for a zero request and for lazy allocation. Rounded up
    /// to a power of two.
    pub fn min_capacity(mut self, min_capacity: usize) -> Self {
        self.min_capacity = min_capacity;
        self
    }

    /// Report events to `observer`.
    pub fn observer<P: Observer>(self, observer: P) -> Builder<P> {
        Builder {
            capacity: self.capacity,
            min_capacity: self.min_capacity,
            observer,
        }
    }

    /// Creates the deque.
    ///
    /// # Panics
    ///
    /// Panics if a capacity overflows `usize` when rounded up.
    pub fn build<T>(self) -> RingDeque<T, O> {
        match self.try_build() {
            Ok(deque) => deque,
            Err(_) => panic!("capacity overflow"),
        }
    }

    /// Creates the deque, reporting capacities that cannot be rounded up or
    /// whose slots would exceed `isize::MAX` bytes. A lazy deque has its
    /// minimum capacity checked here, so its first push cannot overflow.
    pub fn try_build<T>(self) -> Result<RingDeque<T, O>, DequeError> {
        let min_capacity = capacity::try_normalize_with_min(0, self.min_capacity)?;
        match self.capacity {
            None => {
                capacity::check_layout::<T>(min_capacity)?;
                Ok(RingDeque::uninit(min_capacity, self.observer))
            }
            Some(requested) => {
                let capacity = capacity::try_normalize_with_min(requested, min_capacity)?;
                RingDeque::try_allocated(capacity, min_capacity, self.observer)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_lazy_default_minimum() {
        let mut deque: RingDeque<i32> = Builder::new().build();
        assert!(!deque.is_initialized());
        deque.push_front(1);
        assert_eq!(deque.capacity(), DEFAULT_MIN_CAPACITY);
    }

    #[test]
    fn eager_capacity_is_normalized() {
        let deque: RingDeque<i32> = Builder::new().capacity(5).build();
        assert_eq!(deque.capacity(), 8);
        let deque: RingDeque<i32> = Builder::new().min_capacity(32).capacity(0).build();
        assert_eq!(deque.capacity(), 32);
    }

    #[test]
    fn minimum_is_rounded_up() {
        let mut deque: RingDeque<i32> = Builder::new().min_capacity(5).build();
        deque.push_back(1);
        assert_eq!(deque.capacity(), 8);
    }

    #[test]
    fn overflow_is_an_error() {
        let result = Builder::new().capacity(usize::MAX).try_build::<u8>();
        assert_eq!(
            result.err(),
            Some(DequeError::CapacityOverflow { requested: usize::MAX })
        );
        let result = Builder::new().min_capacity(usize::MAX).try_build::<u8>();
        assert!(result.is_err());
    }

    #[test]
    fn oversized_slots_are_an_error() {
        let slots = 1usize << 62;
        let result = Builder::new().capacity(slots).try_build::<u64>();
        assert_eq!(
            result.err(),
            Some(DequeError::CapacityOverflow { requested: slots })
        );
        let result = Builder::new().min_capacity(slots).try_build::<u64>();
        assert_eq!(
            result.err(),
            Some(DequeError::CapacityOverflow { requested: slots })
        );
    }

    #[test]
    #[should_panic(expected = "capacity overflow")]
    fn build_panics_on_overflow() {
        let _ = Builder::new().capacity(usize::MAX).build::<u8>();
    }
}
