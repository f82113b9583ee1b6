//! Error type for deque operations.

use thiserror::Error;

/// Errors returned by `RingDeque` operations.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum DequeError {
    /// A pop was attempted through an absent deque (`None`), as opposed
    /// to an existing deque that happens to be empty.
    #[error("illegal {op} on an absent deque")]
    NilReceiver {
        /// Name of the operation that was attempted.
        op: &'static str,
    },

    /// The front or back element was read from an empty deque.
    #[error("{op} called on an empty deque")]
    OutOfRange {
        /// Name of the operation that was attempted.
        op: &'static str,
    },

    /// No power of two at least as large as the requested capacity fits in `usize`.
    #[error("capacity overflow: cannot round {requested} up to a power of two")]
    CapacityOverflow {
        /// The capacity that was asked for.
        requested: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_operation() {
        assert_eq!(
            DequeError::NilReceiver { op: "pop_back" }.to_string(),
            "illegal pop_back on an absent deque"
        );
        assert_eq!(
            DequeError::OutOfRange { op: "head" }.to_string(),
            "head called on an empty deque"
        );
    }

    #[test]
    fn overflow_reports_the_request() {
        let err = DequeError::CapacityOverflow { requested: usize::MAX };
        assert!(err.to_string().contains(&usize::MAX.to_string()));
    }
}
