//! Wrap-around index arithmetic for the ring.

/// `index + addend`, wrapped to the ring.
#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    debug_assert!(addend <= capacity);
    (index + addend) % capacity
}

/// `index - subtrahend`, wrapped to the ring without going negative.
#[inline]
pub fn wrap_sub(index: usize, subtrahend: usize, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    debug_assert!(subtrahend <= capacity);
    (index + capacity - subtrahend) % capacity
}

/// Slot that an append at the back writes to.
///
/// An empty ring always starts writing at slot 0.
#[inline]
pub fn next_back_slot(tail: usize, count: usize, capacity: usize) -> usize {
    if count == 0 {
        0
    } else {
        wrap_add(tail, 1, capacity)
    }
}

/// Slot that an append at the front writes to.
#[inline]
pub fn next_front_slot(head: usize, count: usize, capacity: usize) -> usize {
    if count == 0 {
        0
    } else {
        wrap_sub(head, 1, capacity)
    }
}

/// Number of slots from `head` to `tail` inclusive.
#[inline]
pub fn span(head: usize, tail: usize, capacity: usize) -> usize {
    debug_assert!(head < capacity);
    debug_assert!(tail < capacity);
    wrap_sub(tail, head, capacity) + 1
}
