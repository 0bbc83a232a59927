//=========================================================================
// Lifecycle
//=========================================================================
//
// Application lifecycle signals delivered to the frame loop.
//
// Architecture:
//   Sender<LifecycleEvent> → LifecycleCollector::collect_frame() → TickControl
//
// Polling is bounded per frame so a flood of signals cannot starve the
// input update. A disconnected sender ends the loop like `Shutdown`.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::warn;

//=== LifecycleEvent ======================================================

/// Application state changes relevant to input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// App went to the background; sensors idle.
    Paused,
    /// App returned to the foreground.
    Resumed,
    /// Stop the frame loop.
    Shutdown,
}

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== LifecycleCollector ==================================================

/// Collects lifecycle signals once per frame.
pub(crate) struct LifecycleCollector {
    receiver: Receiver<LifecycleEvent>,
    pending: Vec<LifecycleEvent>,
}

impl LifecycleCollector {
    pub(crate) const MAX_EVENTS_PER_FRAME: usize = 32;

    pub(crate) fn new(receiver: Receiver<LifecycleEvent>) -> Self {
        Self {
            receiver,
            pending: Vec::with_capacity(4),
        }
    }

    /// Gathers pending Paused/Resumed signals; `Exit` on shutdown or disconnect.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.pending.clear();
        let mut drained = 0;

        while drained < Self::MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(LifecycleEvent::Shutdown) => return TickControl::Exit,
                Ok(event) => {
                    self.pending.push(event);
                    drained += 1;
                }
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= Self::MAX_EVENTS_PER_FRAME {
            warn!(target: "input", "Lifecycle backlog: drained {} events this frame", drained);
        }

        TickControl::Continue
    }

    /// Signals collected by the last [`collect_frame`](Self::collect_frame).
    pub(crate) fn events(&self) -> &[LifecycleEvent] {
        &self.pending
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    #[test]
    fn collect_handles_empty_channel() {
        let (_tx, rx) = unbounded::<LifecycleEvent>();
        let mut collector = LifecycleCollector::new(rx);

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert!(collector.events().is_empty());
    }

    #[test]
    fn collect_keeps_order() {
        let (tx, rx) = unbounded();
        let mut collector = LifecycleCollector::new(rx);

        tx.send(LifecycleEvent::Paused).unwrap();
        tx.send(LifecycleEvent::Resumed).unwrap();

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert_eq!(collector.events(), &[LifecycleEvent::Paused, LifecycleEvent::Resumed]);

        assert_eq!(collector.collect_frame(), TickControl::Continue);
        assert!(collector.events().is_empty(), "Previous frame cleared");
    }

    #[test]
    fn collect_exits_on_shutdown() {
        let (tx, rx) = unbounded();
        let mut collector = LifecycleCollector::new(rx);

        tx.send(LifecycleEvent::Paused).unwrap();
        tx.send(LifecycleEvent::Shutdown).unwrap();

        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }

    #[test]
    fn collect_exits_on_disconnect() {
        let (tx, rx) = unbounded::<LifecycleEvent>();
        let mut collector = LifecycleCollector::new(rx);
        drop(tx);

        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }

    #[test]
    fn collect_is_bounded() {
        let (tx, rx) = unbounded();
        let mut collector = LifecycleCollector::new(rx);

        for _ in 0..LifecycleCollector::MAX_EVENTS_PER_FRAME + 5 {
            tx.send(LifecycleEvent::Resumed).unwrap();
        }

        collector.collect_frame();
        assert_eq!(collector.events().len(), LifecycleCollector::MAX_EVENTS_PER_FRAME);

        collector.collect_frame();
        assert_eq!(collector.events().len(), 5);
    }
}
