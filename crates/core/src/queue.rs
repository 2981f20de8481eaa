//! Intent queue - bounded FIFO between input producers and the simulation tick
//!
//! Producers (keyboard, CPU, the gravity timer) enqueue; the game drains the queue
//! to empty once per tick. The buffer is a fixed-size ring, so enqueueing never
//! allocates and a full queue rejects the intent instead of growing.

use crate::error::CoreError;
use crate::types::{Intent, INTENT_QUEUE_CAPACITY};

/// Fixed-capacity circular FIFO of intents
#[derive(Debug, Clone)]
pub struct IntentQueue {
    buffer: [Intent; INTENT_QUEUE_CAPACITY],
    head: usize,
    len: usize,
}

impl IntentQueue {
    pub fn new() -> Self {
        Self {
            buffer: [Intent::Gravity; INTENT_QUEUE_CAPACITY],
            head: 0,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == INTENT_QUEUE_CAPACITY
    }

    /// Append an intent at the tail
    ///
    /// Returns `CoreError::QueueFull` (and drops the intent) when at capacity.
    pub fn enqueue(&mut self, intent: Intent) -> Result<(), CoreError> {
        if self.is_full() {
            return Err(CoreError::QueueFull(intent));
        }

        let tail = (self.head + self.len) % INTENT_QUEUE_CAPACITY;
        self.buffer[tail] = intent;
        self.len += 1;
        Ok(())
    }

    /// Remove the intent at the head, or `None` when empty
    pub fn dequeue(&mut self) -> Option<Intent> {
        if self.is_empty() {
            return None;
        }

        let intent = self.buffer[self.head];
        self.head = (self.head + 1) % INTENT_QUEUE_CAPACITY;
        self.len -= 1;
        Some(intent)
    }
}

impl Default for IntentQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_fifo_order() {
        let mut q = IntentQueue::new();
        q.enqueue(Intent::MoveLeft).unwrap();
        q.enqueue(Intent::RotateRight).unwrap();
        q.enqueue(Intent::HardDrop).unwrap();

        assert_eq!(q.len(), 3);
        assert_eq!(q.dequeue(), Some(Intent::MoveLeft));
        assert_eq!(q.dequeue(), Some(Intent::RotateRight));
        assert_eq!(q.dequeue(), Some(Intent::HardDrop));
        assert_eq!(q.dequeue(), None);
    }

    #[test]
    fn test_dequeue_empty_fails() {
        let mut q = IntentQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.dequeue(), None);
    }

    #[test]
    fn test_enqueue_full_fails_and_drops() {
        let mut q = IntentQueue::new();
        for _ in 0..INTENT_QUEUE_CAPACITY {
            q.enqueue(Intent::Gravity).unwrap();
        }
        assert!(q.is_full());

        let err = q.enqueue(Intent::Hold).unwrap_err();
        assert_eq!(err, CoreError::QueueFull(Intent::Hold));
        assert_eq!(q.len(), INTENT_QUEUE_CAPACITY);

        // The rejected intent never shows up
        while let Some(intent) = q.dequeue() {
            assert_eq!(intent, Intent::Gravity);
        }
    }

    #[test]
    fn test_queue_wraps_around() {
        let mut q = IntentQueue::new();

        // Push the head deep into the buffer, then wrap the tail past the end.
        for round in 0..3 {
            for _ in 0..INTENT_QUEUE_CAPACITY - 1 {
                q.enqueue(Intent::MoveRight).unwrap();
            }
            q.enqueue(Intent::Reset).unwrap();
            for _ in 0..INTENT_QUEUE_CAPACITY - 1 {
                assert_eq!(q.dequeue(), Some(Intent::MoveRight), "round {}", round);
            }
            assert_eq!(q.dequeue(), Some(Intent::Reset));
            assert!(q.is_empty());
        }
    }
}
