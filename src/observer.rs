//! Diagnostics hooks for `RingDeque`.
//!
//! A deque carries its observer as a type parameter, so the hook is resolved
//! at compile time. The default, [`Silent`], does nothing and compiles away.
//! [`LogObserver`] forwards every event to the `log` facade. Any
//! `Fn(Event, Snapshot)` closure is an observer as well.

/// End of the deque an operation acted on.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum End {
    /// The head side, where the oldest element lives.
    Front,
    /// The tail side, where the newest element lives.
    Back,
}

/// Pointer state of a deque right after an event.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Snapshot {
    /// Slot of the front element (0 when empty).
    pub head: usize,
    /// Slot of the back element (0 when empty).
    pub tail: usize,
    /// Number of live elements.
    pub len: usize,
    /// Number of slots.
    pub capacity: usize,
}

/// A state transition of a deque.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Event {
    /// Storage was allocated.
    Init {
        /// Number of slots allocated.
        capacity: usize,
    },
    /// An element was written at `slot`.
    Push {
        /// End that was pushed to.
        end: End,
        /// Slot that was written.
        slot: usize,
        /// Whether the element at the opposite end was overwritten.
        evicted: bool,
    },
    /// An element was removed from `slot`.
    Pop {
        /// End that was popped from.
        end: End,
        /// Slot that was read.
        slot: usize,
    },
    /// A pop found nothing to remove.
    PopEmpty {
        /// End that was popped from.
        end: End,
    },
    /// All live elements were dropped.
    Clear {
        /// Number of elements dropped.
        dropped: usize,
    },
}

/// Receives the events of a deque.
pub trait Observer {
    /// Called after every state transition. The default does nothing.
    #[inline]
    fn observe(&self, event: Event, snapshot: Snapshot) {
        let _ = (event, snapshot);
    }
}

/// Observer that ignores every event.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Silent;

impl Observer for Silent {}

/// Observer that writes events to the `log` facade under the `ringdeque`
/// target. Allocation and eviction are logged at `debug`, everything else
/// at `trace`.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LogObserver;

impl Observer for LogObserver {
    fn observe(&self, event: Event, s: Snapshot) {
        match event {
            Event::Init { capacity } => {
                log::debug!(target: "ringdeque", "allocated ring capacity={}", capacity);
            }
            Event::Push { end, slot, evicted: true } => {
                log::debug!(
                    target: "ringdeque",
                    "push {:?} slot={} overwrote opposite end head={} tail={} len={}",
                    end, slot, s.head, s.tail, s.len
                );
            }
            Event::Push { end, slot, evicted: false } => {
                log::trace!(
                    target: "ringdeque",
                    "push {:?} slot={} head={} tail={} len={}",
                    end, slot, s.head, s.tail, s.len
                );
            }
            Event::Pop { end, slot } => {
                log::trace!(
                    target: "ringdeque",
                    "pop {:?} slot={} head={} tail={} len={}",
                    end, slot, s.head, s.tail, s.len
                );
            }
            Event::PopEmpty { end } => {
                log::trace!(target: "ringdeque", "pop {:?} on empty ring", end);
            }
            Event::Clear { dropped } => {
                log::trace!(target: "ringdeque", "cleared {} elements", dropped);
            }
        }
    }
}

impl<F> Observer for F
where
    F: Fn(Event, Snapshot),
{
    #[inline]
    fn observe(&self, event: Event, snapshot: Snapshot) {
        self(event, snapshot)
    }
}
