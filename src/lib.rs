//! A bounded ring deque.
//!
//! `RingDeque` has `O(1)` pushes and pops at both ends. Its storage is a
//! power-of-two number of slots that is allocated once and never grows:
//! pushing to a full deque overwrites the element at the opposite end and
//! hands it back to the caller.
//!
//! # Feature Flags
//! The **ringdeque** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd. Without it the crate is `no_std` and needs `alloc`.
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ringdeque = "0.1"
//! ```
//!
//! # Capacity
//!
//! The requested capacity is rounded up to the next power of two. A request
//! of zero, and the first push into a deque created with `new()`, allocate
//! [`DEFAULT_MIN_CAPACITY`](capacity::DEFAULT_MIN_CAPACITY) slots unless a
//! different minimum is configured through [`Builder`].
//!
//! # Examples
//! ```
//! use ringdeque::RingDeque;
//!
//! let mut deque = RingDeque::with_capacity(4);
//! assert_eq!(deque.capacity(), 4);
//!
//! deque.extend(vec![1, 2, 3, 4, 5]);
//! assert_eq!(deque.len(), 4);
//! assert_eq!(deque.head(), Ok(&2));
//! assert_eq!(deque.tail(), Ok(&5));
//! assert!(!deque.contains(&1));
//! ```
//!
//! # Absent deques
//! ```
//! use ringdeque::{DequeError, MaybeDeque, RingDeque};
//!
//! let mut deque: Option<RingDeque<u8>> = None;
//! assert_eq!(deque.capacity(), 0);
//! assert_eq!(deque.pop_front(), Err(DequeError::NilReceiver { op: "pop_front" }));
//! ```
//!
//! # Diagnostics
//! ```
//! use ringdeque::{LogObserver, RingDeque};
//!
//! // events go to the `log` facade under the `ringdeque` target
//! let mut deque = RingDeque::with_capacity_and_observer(8, LogObserver);
//! deque.push_front('a');
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]

extern crate alloc;

mod builder;
pub mod capacity;
pub mod error;
mod maybe;
pub mod observer;
mod ringdeque;
#[cfg(test)]
mod test_log;
mod utils;

pub use builder::Builder;
pub use error::DequeError;
pub use maybe::MaybeDeque;
pub use observer::{End, Event, LogObserver, Observer, Silent, Snapshot};
pub use ringdeque::RingDeque;
