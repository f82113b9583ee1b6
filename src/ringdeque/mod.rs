use alloc::boxed::Box;
use core::mem::MaybeUninit;

use crate::capacity::{self, DEFAULT_MIN_CAPACITY};
use crate::error::DequeError;
use crate::observer::{End, Event, Observer, Silent};
use crate::utils::*;

mod internal;
mod trait_impls;


/// `RingDeque` is a bounded ring buffer with a power-of-two number of slots.
///
/// Pushing to a full deque never grows it: the element at the opposite end
/// is overwritten and handed back to the caller. Use `push_back` and
/// `pop_front` for a queue, or `push_back` and `pop_back` for a stack.
///
/// A deque made with [`RingDeque::new`] (or `Default`) owns no storage until
/// the first push, which allocates [`DEFAULT_MIN_CAPACITY`] slots. After that
/// the capacity never changes.
///
/// The observer parameter `O` receives diagnostic events; the default,
/// [`Silent`], ignores them. See [`Builder`] for configuring both.
///
/// [`Builder`]: crate::Builder
/// [`DEFAULT_MIN_CAPACITY`]: crate::capacity::DEFAULT_MIN_CAPACITY
pub struct RingDeque<T, O: Observer = Silent> {
    buf: Box<[MaybeUninit<T>]>,
    head: usize,
    tail: usize,
    len: usize,
    min_capacity: usize,
    observer: O,
}

impl<T> RingDeque<T> {
    /// Creates an empty `RingDeque` without allocating.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut deque: RingDeque<i32> = RingDeque::new();
    /// assert_eq!(deque.capacity(), 0);
    ///
    /// deque.push_back(1);
    /// assert_eq!(deque.capacity(), 1024);
    /// ```
    #[inline]
    pub fn new() -> Self {
        RingDeque::uninit(DEFAULT_MIN_CAPACITY, Silent)
    }

    /// Creates an empty `RingDeque` with room for at least `capacity`
    /// elements, rounded up to a power of two. Zero asks for the default
    /// minimum of 1024.
    ///
    /// # Panics
    ///
    /// Panics if the rounded capacity overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// assert_eq!(RingDeque::<u8>::with_capacity(5).capacity(), 8);
    /// assert_eq!(RingDeque::<u8>::with_capacity(0).capacity(), 1024);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        RingDeque::with_capacity_and_observer(capacity, Silent)
    }

    /// Like [`with_capacity`](RingDeque::with_capacity), but reports an
    /// impossible capacity instead of panicking: one whose next power of two
    /// overflows `usize`, or whose slots would exceed `isize::MAX` bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::{DequeError, RingDeque};
    ///
    /// assert_eq!(RingDeque::<u64>::try_with_capacity(5).map(|d| d.capacity()), Ok(8));
    /// assert_eq!(
    ///     RingDeque::<u64>::try_with_capacity(1 << 62).err(),
    ///     Some(DequeError::CapacityOverflow { requested: 1 << 62 })
    /// );
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<Self, DequeError> {
        let capacity = capacity::try_normalize(capacity)?;
        RingDeque::try_allocated(capacity, DEFAULT_MIN_CAPACITY, Silent)
    }
}

impl<T, O: Observer> RingDeque<T, O> {
    /// Creates an empty `RingDeque` that reports to `observer`, without
    /// allocating.
    #[inline]
    pub fn with_observer(observer: O) -> Self {
        RingDeque::uninit(DEFAULT_MIN_CAPACITY, observer)
    }

    /// Creates an empty `RingDeque` with `capacity` rounded up to a power of
    /// two, reporting to `observer`.
    ///
    /// # Panics
    ///
    /// Panics if the rounded capacity overflows `usize` or its slots exceed
    /// `isize::MAX` bytes.
    pub fn with_capacity_and_observer(capacity: usize, observer: O) -> Self {
        let capacity = capacity::normalize(capacity);
        match RingDeque::try_allocated(capacity, DEFAULT_MIN_CAPACITY, observer) {
            Ok(deque) => deque,
            Err(_) => panic!("capacity overflow"),
        }
    }

    /// Returns the number of elements in the deque.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the next push will overwrite an element.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len != 0 && self.len == self.buf.len()
    }

    /// Returns the number of slots, or 0 if no storage has been allocated yet.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` once storage has been allocated.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        !self.buf.is_empty()
    }

    /// Returns a reference to the observer.
    #[inline]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Adds an element to the back of the deque.
    ///
    /// Returns `None` if the deque still had room, or `Some(front)` if it was
    /// full, where `front` is the oldest element, overwritten by this push.
    ///
    /// # Examples
    ///
    /// ```text
    /// [_, _, _, _] <-(+)- 1 => [1, _, _, _] -> None
    /// [1, 2, 3, _] <-(+)- 4 => [1, 2, 3, 4] -> None
    /// [1, 2, 3, 4] <-(+)- 5 => [2, 3, 4, 5] -> Some(1)
    /// ```
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut deque = RingDeque::with_capacity(2);
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// let overwritten = deque.push_back(3);
    ///
    /// assert_eq!(overwritten, Some(1));
    /// assert_eq!(deque.front(), Some(&2));
    /// assert_eq!(deque.back(), Some(&3));
    /// ```
    pub fn push_back(&mut self, element: T) -> Option<T> {
        self.ensure_init();
        let slot = next_back_slot(self.tail, self.len, self.buf.len());
        let evicted = if self.is_full() {
            debug_assert_eq!(slot, self.head);
            let front = unsafe { self.buffer_read(slot) };
            self.head = self.wrap_add(self.head, 1);
            Some(front)
        } else {
            self.len += 1;
            None
        };
        unsafe { self.buffer_write(slot, element) };
        self.tail = slot;
        self.emit(Event::Push {
            end: End::Back,
            slot,
            evicted: evicted.is_some(),
        });
        evicted
    }

    /// Adds an element to the front of the deque.
    ///
    /// Returns `None` if the deque still had room, or `Some(back)` if it was
    /// full, where `back` is the newest element, overwritten by this push.
    ///
    /// # Examples
    ///
    /// ```text
    /// 1 -(+)-> [_, _, _, _] => [1, _, _, _] -> None
    /// 4 -(+)-> [3, 2, 1, _] => [4, 3, 2, 1] -> None
    /// 5 -(+)-> [4, 3, 2, 1] => [5, 4, 3, 2] -> Some(1)
    /// ```
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut deque = RingDeque::with_capacity(2);
    /// deque.push_front(1);
    /// deque.push_front(2);
    /// let overwritten = deque.push_front(3);
    ///
    /// assert_eq!(overwritten, Some(1));
    /// assert_eq!(deque.front(), Some(&3));
    /// assert_eq!(deque.back(), Some(&2));
    /// ```
    pub fn push_front(&mut self, element: T) -> Option<T> {
        self.ensure_init();
        let slot = next_front_slot(self.head, self.len, self.buf.len());
        let evicted = if self.is_full() {
            debug_assert_eq!(slot, self.tail);
            let back = unsafe { self.buffer_read(slot) };
            self.tail = self.wrap_sub(self.tail, 1);
            Some(back)
        } else {
            self.len += 1;
            None
        };
        unsafe { self.buffer_write(slot, element) };
        self.head = slot;
        self.emit(Event::Push {
            end: End::Front,
            slot,
            evicted: evicted.is_some(),
        });
        evicted
    }

    /// Removes the last element and returns it, or `None` if the deque is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut deque = RingDeque::new();
    /// assert_eq!(deque.pop_back(), None);
    /// deque.push_back(1);
    /// deque.push_back(3);
    /// assert_eq!(deque.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            self.emit(Event::PopEmpty { end: End::Back });
            return None;
        }
        let slot = self.tail;
        let element = unsafe { self.buffer_read(slot) };
        self.len -= 1;
        if self.len == 0 {
            self.head = 0;
            self.tail = 0;
        } else {
            self.tail = self.wrap_sub(slot, 1);
        }
        self.emit(Event::Pop { end: End::Back, slot });
        Some(element)
    }

    /// Removes the first element and returns it, or `None` if the deque is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut deque = RingDeque::new();
    /// deque.push_back(1);
    /// deque.push_back(2);
    ///
    /// assert_eq!(deque.pop_front(), Some(1));
    /// assert_eq!(deque.pop_front(), Some(2));
    /// assert_eq!(deque.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            self.emit(Event::PopEmpty { end: End::Front });
            return None;
        }
        let slot = self.head;
        let element = unsafe { self.buffer_read(slot) };
        self.len -= 1;
        if self.len == 0 {
            self.head = 0;
            self.tail = 0;
        } else {
            self.head = self.wrap_add(slot, 1);
        }
        self.emit(Event::Pop { end: End::Front, slot });
        Some(element)
    }

    /// Removes the last element, returning `T::default()` if the deque is
    /// empty.
    #[inline]
    pub fn pop_back_or_default(&mut self) -> T
    where
        T: Default,
    {
        self.pop_back().unwrap_or_default()
    }

    /// Removes the first element, returning `T::default()` if the deque is
    /// empty.
    #[inline]
    pub fn pop_front_or_default(&mut self) -> T
    where
        T: Default,
    {
        self.pop_front().unwrap_or_default()
    }

    /// Returns the front (oldest) element.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::OutOfRange` if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::{DequeError, RingDeque};
    ///
    /// let mut deque = RingDeque::new();
    /// assert_eq!(deque.head(), Err(DequeError::OutOfRange { op: "head" }));
    /// deque.push_back(7);
    /// assert_eq!(deque.head(), Ok(&7));
    /// ```
    #[inline]
    pub fn head(&self) -> Result<&T, DequeError> {
        self.front().ok_or(DequeError::OutOfRange { op: "head" })
    }

    /// Returns the back (newest) element.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::OutOfRange` if the deque is empty.
    #[inline]
    pub fn tail(&self) -> Result<&T, DequeError> {
        self.back().ok_or(DequeError::OutOfRange { op: "tail" })
    }

    /// Provides a reference to the front element, or `None` if the deque is
    /// empty.
    pub fn front(&self) -> Option<&T> {
        if self.len == 0 {
            None
        } else {
            Some(unsafe { self.buffer_ref(self.head) })
        }
    }

    /// Provides a mutable reference to the front element, or `None` if the
    /// deque is empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        if self.len == 0 {
            None
        } else {
            let head = self.head;
            Some(unsafe { self.buffer_mut(head) })
        }
    }

    /// Provides a reference to the back element, or `None` if the deque is
    /// empty.
    pub fn back(&self) -> Option<&T> {
        if self.len == 0 {
            None
        } else {
            Some(unsafe { self.buffer_ref(self.tail) })
        }
    }

    /// Provides a mutable reference to the back element, or `None` if the
    /// deque is empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.len == 0 {
            None
        } else {
            let tail = self.tail;
            Some(unsafe { self.buffer_mut(tail) })
        }
    }

    /// Returns `true` if the deque holds an element equal to `x`.
    ///
    /// Only live elements are compared; slots freed by pops or overwritten
    /// by pushes never match.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringdeque::RingDeque;
    ///
    /// let mut deque = RingDeque::with_capacity(2);
    /// deque.push_back(0);
    /// deque.push_back(1);
    /// deque.push_back(2);
    ///
    /// assert!(deque.contains(&2));
    /// assert!(!deque.contains(&0));
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        let (a, b) = self.as_slices();
        a.contains(x) || b.contains(x)
    }

    /// Drops every element. The capacity is kept.
    pub fn clear(&mut self) {
        let dropped = self.drop_live();
        self.emit(Event::Clear { dropped });
    }
}
