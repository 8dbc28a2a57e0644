//! Lock-free input event queue.
//!
//! Events are produced by:
//! - the terminal input thread (buzzer button, quit)
//! - the Ctrl-C / SIGTERM handler (shutdown)
//! - tests and display adapters holding a clone of the queue handle
//!
//! Events are consumed by the scheduler on the loop thread, between
//! sampling cycles.  Producers never touch domain state.
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ stdin       │────▶│              │     │              │
//! │ Ctrl-C      │────▶│  EventQueue  │────▶│  Scheduler   │
//! │ Display     │────▶│  (lock-free) │     │  (consumer)  │
//! └─────────────┘     └──────────────┘     └──────────────┘
//! ```

use heapless::mpmc::Q32;

/// Inbound events for the loop thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// The dashboard's buzzer button was pressed.
    ToggleBuzzer,
    /// Stop at the top of the next loop iteration.
    Shutdown,
}

/// Bounded multi-producer queue.  Share it with `Arc<EventQueue>`.
pub struct EventQueue {
    inner: Q32<Event>,
}

impl EventQueue {
    pub const fn new() -> Self {
        Self { inner: Q32::new() }
    }

    /// Push an event.  Returns `false` if the queue is full (event dropped).
    pub fn push(&self, event: Event) -> bool {
        self.inner.enqueue(event).is_ok()
    }

    /// Pop the next event, oldest first.
    pub fn pop(&self) -> Option<Event> {
        self.inner.dequeue()
    }
}

impl Default for EventQueue {
    fn default() -> Self {
        Self::new()
    }
}
