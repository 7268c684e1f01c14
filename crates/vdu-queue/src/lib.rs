#![forbid(unsafe_code)]

//! Thread-safe heterogeneous FIFO command queue.
//!
//! [`CommandQueue`] decouples command producers (input sources, a second
//! execution core, periodic interrupts) from the single consumer thread
//! that mutates display state. The element type is a caller-defined enum
//! whose variants form the closed, known-at-build-time set of message
//! kinds; the queue itself is generic over any such enum.
//!
//! # Contract
//!
//! - **FIFO**: messages are delivered in arrival order, never reordered.
//! - **Non-blocking**: every operation completes within one lock critical
//!   section; `pop`/`peek` on an empty queue report emptiness instead of
//!   waiting. Callers own their polling cadence.
//! - **Coalescing**: [`push_unique`](CommandQueue::push_unique) appends
//!   only if no message of the same *kind* (enum variant) is already
//!   queued, so a fast producer cannot flood the consumer with redundant
//!   duplicates of the same kind of message.
//! - **No cancellation, no timeout**: a queued message is always
//!   eventually delivered.
//!
//! # Example
//!
//! ```
//! use vdu_queue::CommandQueue;
//!
//! #[derive(Debug, Clone, PartialEq)]
//! enum Message {
//!     KeyDown(u8),
//!     PointerMoved { x: i32, y: i32 },
//! }
//!
//! let queue = CommandQueue::new();
//! queue.push(Message::KeyDown(42));
//! assert!(queue.push_unique(Message::PointerMoved { x: 1, y: 2 }));
//! // A second pointer move coalesces away while one is still pending.
//! assert!(!queue.push_unique(Message::PointerMoved { x: 9, y: 9 }));
//!
//! assert_eq!(queue.pop(), Some(Message::KeyDown(42)));
//! assert_eq!(queue.pop(), Some(Message::PointerMoved { x: 1, y: 2 }));
//! assert_eq!(queue.pop(), None);
//! ```

use std::collections::VecDeque;
use std::mem;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// An ordered multi-type message queue guarded by a single lock.
///
/// `M` is expected to be an enum; message "kind" is the enum variant
/// (compared via [`std::mem::discriminant`]), independent of the payload
/// carried by the variant.
#[derive(Debug, Default)]
pub struct CommandQueue<M> {
    inner: Mutex<VecDeque<M>>,
}

impl<M> CommandQueue<M> {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(VecDeque::new()),
        }
    }

    /// Lock the queue, recovering from poisoning.
    ///
    /// A panic on another thread mid-operation cannot leave the deque in a
    /// torn state (element moves are atomic with respect to our lock), so
    /// the poisoned contents are still valid and delivery must continue.
    fn lock(&self) -> MutexGuard<'_, VecDeque<M>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a message to the back of the queue. Always succeeds; the
    /// queue is unbounded.
    pub fn push(&self, message: M) {
        self.lock().push_back(message);
    }

    /// Append a message only if no message of the same kind is queued.
    ///
    /// Returns `true` if the message was inserted. The scan is O(n) in
    /// queue depth.
    pub fn push_unique(&self, message: M) -> bool {
        let mut queue = self.lock();
        let kind = mem::discriminant(&message);
        if queue.iter().any(|m| mem::discriminant(m) == kind) {
            return false;
        }
        queue.push_back(message);
        true
    }

    /// Remove and return the front message, or `None` if empty.
    pub fn pop(&self) -> Option<M> {
        self.lock().pop_front()
    }

    /// Remove the front message without returning it. No-op if empty.
    pub fn discard_front(&self) {
        self.lock().pop_front();
    }

    /// Check whether a message of the same kind as `probe` is queued.
    pub fn contains_kind(&self, probe: &M) -> bool {
        let kind = mem::discriminant(probe);
        self.lock().iter().any(|m| mem::discriminant(m) == kind)
    }

    /// Number of queued messages.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl<M: Clone> CommandQueue<M> {
    /// Copy the front message without removing it, or `None` if empty.
    pub fn peek(&self) -> Option<M> {
        self.lock().front().cloned()
    }
}
