//! Operations on a deque that may not exist.
//!
//! An absent deque is `None`. Length and capacity queries treat it as
//! empty; pops report [`DequeError::NilReceiver`] so that callers can tell
//! "no deque" apart from "empty deque".

use crate::error::DequeError;
use crate::observer::Observer;
use crate::RingDeque;

/// Deque operations on an optional deque.
///
/// Pops through an existing but empty deque return `T::default()` rather
/// than an error.
///
/// # Examples
///
/// ```
/// use ringdeque::{DequeError, MaybeDeque, RingDeque};
///
/// let mut absent: Option<RingDeque<i32>> = None;
/// assert_eq!(absent.len(), 0);
/// assert_eq!(absent.pop_back(), Err(DequeError::NilReceiver { op: "pop_back" }));
///
/// let mut present = Some(RingDeque::with_capacity(4));
/// assert_eq!(present.pop_front(), Ok(0));
/// if let Some(deque) = present.as_mut() {
///     deque.push_back(9);
/// }
/// assert_eq!(present.pop_front(), Ok(9));
/// ```
pub trait MaybeDeque<T> {
    /// Number of elements, or 0 for an absent deque.
    fn len(&self) -> usize;

    /// Number of slots, or 0 for an absent or unallocated deque.
    fn capacity(&self) -> usize;

    /// Returns `true` if there is no deque or it holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes the back element, or returns `T::default()` if the deque is
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::NilReceiver` if the deque is absent.
    fn pop_back(&mut self) -> Result<T, DequeError>
    where
        T: Default;

    /// Removes the front element, or returns `T::default()` if the deque is
    /// empty.
    ///
    /// # Errors
    ///
    /// Returns `DequeError::NilReceiver` if the deque is absent.
    fn pop_front(&mut self) -> Result<T, DequeError>
    where
        T: Default;
}

impl<T, O: Observer> MaybeDeque<T> for Option<RingDeque<T, O>> {
    fn len(&self) -> usize {
        self.as_ref().map_or(0, |deque| deque.len())
    }

    fn capacity(&self) -> usize {
        self.as_ref().map_or(0, |deque| deque.capacity())
    }

    fn pop_back(&mut self) -> Result<T, DequeError>
    where
        T: Default,
    {
        self.as_mut().pop_back()
    }

    fn pop_front(&mut self) -> Result<T, DequeError>
    where
        T: Default,
    {
        self.as_mut().pop_front()
    }
}

impl<'a, T, O: Observer> MaybeDeque<T> for Option<&'a mut RingDeque<T, O>> {
    fn len(&self) -> usize {
        self.as_deref().map_or(0, |deque| deque.len())
    }

    fn capacity(&self) -> usize {
        self.as_deref().map_or(0, |deque| deque.capacity())
    }

    fn pop_back(&mut self) -> Result<T, DequeError>
    where
        T: Default,
    {
        match self {
            Some(deque) => Ok(deque.pop_back_or_default()),
            None => {
                log::error!(target: "ringdeque", "illegal pop_back on an absent deque");
                Err(DequeError::NilReceiver { op: "pop_back" })
            }
        }
    }

    fn pop_front(&mut self) -> Result<T, DequeError>
    where
        T: Default,
    {
        match self {
            Some(deque) => Ok(deque.pop_front_or_default()),
            None => {
                log::error!(target: "ringdeque", "illegal pop_front on an absent deque");
                Err(DequeError::NilReceiver { op: "pop_front" })
            }
        }
    }
}
