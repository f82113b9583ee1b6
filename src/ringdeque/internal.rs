use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp;
use core::iter;
use core::mem::MaybeUninit;
use core::ops::Range;
use core::ptr;

use super::RingDeque;
use crate::capacity;
use crate::error::DequeError;
use crate::observer::{Event, Observer, Snapshot};
use crate::utils::*;

#[inline]
unsafe fn slice_assume_init<T>(slots: &[MaybeUninit<T>]) -> &[T] {
    &*(slots as *const [MaybeUninit<T>] as *const [T])
}

fn allocate<T>(capacity: usize) -> Box<[MaybeUninit<T>]> {
    iter::repeat_with(MaybeUninit::uninit)
        .take(capacity)
        .collect::<Vec<_>>()
        .into_boxed_slice()
}

impl<T, O: Observer> RingDeque<T, O> {
    /// A deque with no storage yet. `min_capacity` must be a power of two.
    pub(crate) fn uninit(min_capacity: usize, observer: O) -> Self {
        debug_assert!(min_capacity.is_power_of_two());
        RingDeque {
            buf: Box::new([]),
            head: 0,
            tail: 0,
            len: 0,
            min_capacity,
            observer,
        }
    }

    /// A deque with `capacity` slots allocated. Both sizes must be powers of two.
    pub(crate) fn allocated(capacity: usize, min_capacity: usize, observer: O) -> Self {
        debug_assert!(capacity.is_power_of_two());
        let mut deque = Self::uninit(min_capacity, observer);
        deque.materialize(capacity);
        deque
    }

    /// Like [`allocated`](RingDeque::allocated), but fails instead of
    /// panicking when the slots do not fit in one allocation.
    pub(crate) fn try_allocated(
        capacity: usize,
        min_capacity: usize,
        observer: O,
    ) -> Result<Self, DequeError> {
        capacity::check_layout::<T>(capacity)?;
        capacity::check_layout::<T>(min_capacity)?;
        Ok(Self::allocated(capacity, min_capacity, observer))
    }

    fn materialize(&mut self, capacity: usize) {
        debug_assert!(self.buf.is_empty());
        self.buf = allocate(capacity);
        self.emit(Event::Init { capacity });
    }

    /// Allocates storage at the minimum capacity if this deque has none.
    #[inline]
    pub(crate) fn ensure_init(&mut self) {
        if self.buf.is_empty() {
            self.materialize(self.min_capacity);
        }
    }

    #[inline]
    pub(crate) fn wrap_add(&self, index: usize, addend: usize) -> usize {
        wrap_add(index, addend, self.buf.len())
    }

    #[inline]
    pub(crate) fn wrap_sub(&self, index: usize, subtrahend: usize) -> usize {
        wrap_sub(index, subtrahend, self.buf.len())
    }

    /// Moves the value out of `slot`. The slot must hold a live element,
    /// which is no longer live afterwards.
    #[inline]
    pub(crate) unsafe fn buffer_read(&mut self, slot: usize) -> T {
        self.buf[slot].assume_init_read()
    }

    /// Writes `element` into `slot`. The slot must not hold a live element.
    #[inline]
    pub(crate) unsafe fn buffer_write(&mut self, slot: usize, element: T) {
        self.buf[slot].write(element);
    }

    /// The slot must hold a live element.
    #[inline]
    pub(crate) unsafe fn buffer_ref(&self, slot: usize) -> &T {
        self.buf[slot].assume_init_ref()
    }

    /// The slot must hold a live element.
    #[inline]
    pub(crate) unsafe fn buffer_mut(&mut self, slot: usize) -> &mut T {
        self.buf[slot].assume_init_mut()
    }

    /// Slot ranges holding the live elements, front to back. The second
    /// range is non-empty only when the elements wrap past the last slot.
    pub(crate) fn live_ranges(&self) -> (Range<usize>, Range<usize>) {
        if self.len == 0 {
            return (0..0, 0..0);
        }
        let first = cmp::min(self.len, self.buf.len() - self.head);
        (self.head..self.head + first, 0..self.len - first)
    }

    /// The live elements as two slices, front to back.
    pub(crate) fn as_slices(&self) -> (&[T], &[T]) {
        let (a, b) = self.live_ranges();
        unsafe { (slice_assume_init(&self.buf[a]), slice_assume_init(&self.buf[b])) }
    }

    /// Drops every live element and resets the pointers. Returns how many
    /// elements were dropped.
    pub(crate) fn drop_live(&mut self) -> usize {
        let (a, b) = self.live_ranges();
        let dropped = self.len;
        // if a destructor panics the remaining elements leak instead of
        // being dropped twice
        self.len = 0;
        self.head = 0;
        self.tail = 0;
        unsafe {
            let front = &mut self.buf[a] as *mut [MaybeUninit<T>] as *mut [T];
            ptr::drop_in_place(front);
            let back = &mut self.buf[b] as *mut [MaybeUninit<T>] as *mut [T];
            ptr::drop_in_place(back);
        }
        dropped
    }

    #[inline]
    pub(crate) fn snapshot(&self) -> Snapshot {
        Snapshot {
            head: self.head,
            tail: self.tail,
            len: self.len,
            capacity: self.buf.len(),
        }
    }

    #[inline]
    pub(crate) fn emit(&self, event: Event) {
        debug_assert!(if self.len == 0 {
            self.head == 0 && self.tail == 0
        } else {
            span(self.head, self.tail, self.buf.len()) == self.len
        });
        self.observer.observe(event, self.snapshot());
    }
}
