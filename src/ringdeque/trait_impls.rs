use core::fmt;
use core::iter;

use super::RingDeque;
use crate::observer::Observer;

impl<T, O: Observer> Drop for RingDeque<T, O> {
    fn drop(&mut self) {
        self.drop_live();
    }
}

impl<T, O: Observer + Default> Default for RingDeque<T, O> {
    #[inline]
    fn default() -> Self {
        RingDeque::with_observer(O::default())
    }
}

/// Clones keep the source's capacity and slot layout.
impl<T, O> Clone for RingDeque<T, O>
where
    T: Clone,
    O: Observer + Clone,
{
    fn clone(&self) -> Self {
        if !self.is_initialized() {
            return RingDeque::uninit(self.min_capacity, self.observer.clone());
        }
        let mut out = RingDeque::allocated(self.capacity(), self.min_capacity, self.observer.clone());
        out.head = self.head;
        // len grows with each written slot so a panicking clone leaves
        // `out` consistent
        for offset in 0..self.len {
            let slot = self.wrap_add(self.head, offset);
            let element = unsafe { self.buffer_ref(slot) }.clone();
            unsafe { out.buffer_write(slot, element) };
            out.tail = slot;
            out.len += 1;
        }
        out
    }
}

/// Deques are equal when they hold equal elements in the same order,
/// regardless of capacity or where the elements sit in the ring.
impl<T, O, P> PartialEq<RingDeque<T, P>> for RingDeque<T, O>
where
    T: PartialEq,
    O: Observer,
    P: Observer,
{
    fn eq(&self, other: &RingDeque<T, P>) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let (sa, sb) = self.as_slices();
        let (oa, ob) = other.as_slices();
        sa.iter().chain(sb).eq(oa.iter().chain(ob))
    }
}

impl<T: Eq, O: Observer> Eq for RingDeque<T, O> {}

impl<T, O> fmt::Debug for RingDeque<T, O>
where
    T: fmt::Debug,
    O: Observer,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (a, b) = self.as_slices();
        f.debug_list().entries(a.iter().chain(b)).finish()
    }
}

/// Extend the `RingDeque` by pushing every item to the back.
///
/// Items beyond the capacity overwrite the front, so only the last
/// `capacity()` items survive.
impl<T, O: Observer> Extend<T> for RingDeque<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push_back(element);
        }
    }
}

/// Collects into a deque of the default capacity.
impl<T> iter::FromIterator<T> for RingDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = RingDeque::new();
        deque.extend(iter);
        deque
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_lists_front_to_back() {
        let mut deque = RingDeque::with_capacity(4);
        deque.extend(1..=6);
        assert_eq!(format!("{:?}", deque), "[3, 4, 5, 6]");

        let empty: RingDeque<i32> = RingDeque::new();
        assert_eq!(format!("{:?}", empty), "[]");
    }

    #[test]
    fn equality_ignores_layout() {
        let mut wrapped = RingDeque::with_capacity(4);
        wrapped.extend(0..6);
        wrapped.pop_front();

        let mut straight = RingDeque::with_capacity(16);
        straight.extend(3..6);

        assert_eq!(wrapped, straight);
        straight.push_back(6);
        assert_ne!(wrapped, straight);
    }

    #[test]
    fn clone_keeps_capacity_and_contents() {
        let mut deque = RingDeque::with_capacity(4);
        deque.extend(vec![1, 2, 3, 4, 5]);
        let copy = deque.clone();
        assert_eq!(copy.capacity(), 4);
        assert_eq!(copy, deque);
        assert_eq!(copy.head(), Ok(&2));
        assert_eq!(copy.tail(), Ok(&5));
    }

    #[test]
    fn clone_of_lazy_deque_stays_lazy() {
        let deque: RingDeque<String> = RingDeque::new();
        let copy = deque.clone();
        assert!(!copy.is_initialized());
    }

    #[test]
    fn clone_owns_its_elements() {
        let mut deque = RingDeque::with_capacity(2);
        deque.push_back(String::from("a"));
        deque.push_back(String::from("b"));
        let mut copy = deque.clone();
        *copy.front_mut().unwrap() = String::from("z");
        assert_eq!(deque.head().map(|s| s.as_str()), Ok("a"));
        assert_eq!(copy.head().map(|s| s.as_str()), Ok("z"));
    }

    #[test]
    fn from_iter_uses_default_capacity() {
        let deque: RingDeque<usize> = (0..2000).collect();
        assert_eq!(deque.capacity(), 1024);
        assert_eq!(deque.len(), 1024);
        assert_eq!(deque.head(), Ok(&976));
        assert_eq!(deque.tail(), Ok(&1999));
    }

    #[test]
    fn default_is_lazy() {
        let deque: RingDeque<u8> = Default::default();
        assert_eq!(deque.capacity(), 0);
        assert_eq!(deque.len(), 0);
        assert_eq!(format!("{:?}", deque), "[]");
    }
}
