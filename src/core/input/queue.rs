//=========================================================================
// Event Queue
//=========================================================================
//
// Mutex-guarded append-only event buffers.
//
// Architecture:
//   event threads ─ push()/extend() ─→ Mutex<Vec<T>> ─ drain() ─→ frame loop
//
// Producers hold the lock only for the append itself. `drain()` swaps the
// whole buffer out under the lock, so a drain sees every event appended
// before it and none appended after it. A poisoned lock is recovered:
// events are never dropped because some other thread panicked.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::{Mutex, MutexGuard, PoisonError};

//=== Internal Dependencies ===============================================

use super::event::{KeyEvent, MouseButtonEvent, PointerEvent};

//=== EventQueue ==========================================================

/// Thread-safe FIFO buffer drained once per frame.
#[derive(Debug)]
pub struct EventQueue<T> {
    events: Mutex<Vec<T>>,
}

impl<T> EventQueue<T> {
    /// Creates an empty queue with room for `capacity` events.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            events: Mutex::new(Vec::with_capacity(capacity)),
        }
    }

    /// Appends one event.
    pub fn push(&self, event: T) {
        self.lock().push(event);
    }

    /// Appends several events under a single lock; they stay contiguous.
    pub fn extend(&self, events: impl IntoIterator<Item = T>) {
        self.lock().extend(events);
    }

    /// Removes and returns every queued event in insertion order.
    pub fn drain(&self) -> Vec<T> {
        let mut events = self.lock();
        let capacity = events.capacity();
        std::mem::replace(&mut *events, Vec::with_capacity(capacity))
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<T>> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Default for EventQueue<T> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

//=== InputQueues =========================================================

/// The queues filled by the dispatcher and drained by the frame loop.
#[derive(Debug)]
pub struct InputQueues {
    pub keyboard: EventQueue<KeyEvent>,
    pub mouse_buttons: EventQueue<MouseButtonEvent>,
    pub pointers: EventQueue<PointerEvent>,
}

impl InputQueues {
    pub fn new() -> Self {
        const KEYBOARD_BASE: usize = 32;
        const MOUSE_BASE: usize = 32;
        const POINTER_BASE: usize = 64;

        Self {
            keyboard: EventQueue::with_capacity(KEYBOARD_BASE),
            mouse_buttons: EventQueue::with_capacity(MOUSE_BASE),
            pointers: EventQueue::with_capacity(POINTER_BASE),
        }
    }

    /// Drains all three queues into one frame.
    pub fn drain(&self) -> InputFrame {
        InputFrame {
            keys: self.keyboard.drain(),
            mouse_buttons: self.mouse_buttons.drain(),
            pointers: self.pointers.drain(),
        }
    }
}

impl Default for InputQueues {
    fn default() -> Self {
        Self::new()
    }
}

//=== InputFrame ==========================================================

/// Events collected during one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputFrame {
    pub keys: Vec<KeyEvent>,
    pub mouse_buttons: Vec<MouseButtonEvent>,
    pub pointers: Vec<PointerEvent>,
}

impl InputFrame {
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty() && self.mouse_buttons.is_empty() && self.pointers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keys.len() + self.mouse_buttons.len() + self.pointers.len()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
