//=========================================================================
// Input Dispatcher
//=========================================================================
//
// Handler registration seam between platform event sources and the input
// subsystem.
//
// Architecture:
// ```text
//  PlatformEventSource ──register_handlers(sink)──┐
//        │                                        ↓
//        │ on_key / on_pointer / on_size_changed  InputDispatcher
//        └───────────────────────────────────────→ ├─ KeyMapper
//                                                  ├─ Mutex<PointerNormalizer>
//                                                  └─ Arc<InputQueues>
// ```
//
// Platform sources only know the `InputSink` trait, so any windowing
// toolkit can drive the subsystem. All sink methods take `&self` and may
// be called concurrently from several event threads.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use glam::Vec2;
use log::trace;

//=== Internal Dependencies ===============================================

use super::event::{KeyEvent, PointerState, Transition};
use super::key_mapper::{KeyMapper, PlatformKeyCode};
use super::pointer::{PointerNormalizer, RawPointerSample};
use super::queue::InputQueues;
use crate::error::Result;

//=== InputSink ===========================================================

/// Receiver of raw platform input.
pub trait InputSink<P>: Send + Sync {
    /// A platform key changed state.
    fn on_key(&self, code: P, transition: Transition);

    /// A pointer sample arrived.
    ///
    /// # Errors
    ///
    /// Fails for unsupported pointer hardware (pen).
    fn on_pointer(&self, sample: RawPointerSample, state: PointerState) -> Result<()>;

    /// The input surface changed size (pixels).
    fn on_size_changed(&self, width: f32, height: f32);
}

//=== PlatformEventSource =================================================

/// Anything that can deliver platform events to an [`InputSink`].
pub trait PlatformEventSource<P> {
    /// Installs `sink` as the receiver of every subsequent event.
    fn register_handlers(&mut self, sink: Arc<dyn InputSink<P>>);
}

/// Connects a platform source to the input subsystem.
pub fn register_handlers<P, S>(source: &mut S, sink: Arc<dyn InputSink<P>>)
where
    S: PlatformEventSource<P> + ?Sized,
{
    source.register_handlers(sink);
}

//=== InputDispatcher =====================================================

/// Default [`InputSink`]: maps keys, normalizes pointers and fills the
/// frame queues.
#[derive(Debug)]
pub struct InputDispatcher<P: PlatformKeyCode> {
    keys: KeyMapper<P>,
    pointer: Mutex<PointerTracking>,
    queues: Arc<InputQueues>,
}

/// Normalizer plus the last mouse position, kept under one lock so a
/// sample's effects are applied together.
#[derive(Debug, Default)]
struct PointerTracking {
    normalizer: PointerNormalizer,
    mouse_position: Vec2,
}

impl<P: PlatformKeyCode> InputDispatcher<P> {
    //--- Construction -----------------------------------------------------

    /// Creates a dispatcher using the platform's own key table.
    pub fn new(queues: Arc<InputQueues>) -> Self {
        Self::with_key_mapper(KeyMapper::new(), queues)
    }

    pub fn with_key_mapper(keys: KeyMapper<P>, queues: Arc<InputQueues>) -> Self {
        Self {
            keys,
            pointer: Mutex::new(PointerTracking::default()),
            queues,
        }
    }

    //--- Accessors --------------------------------------------------------

    pub fn queues(&self) -> &Arc<InputQueues> {
        &self.queues
    }

    pub fn key_mapper(&self) -> &KeyMapper<P> {
        &self.keys
    }

    /// Last normalized position reported by a mouse.
    pub fn mouse_position(&self) -> Vec2 {
        self.tracking().mouse_position
    }

    pub fn surface_size(&self) -> (f32, f32) {
        self.tracking().normalizer.surface_size()
    }

    //--- Internal Helpers -------------------------------------------------

    fn tracking(&self) -> MutexGuard<'_, PointerTracking> {
        self.pointer.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<P: PlatformKeyCode> InputSink<P> for InputDispatcher<P> {
    fn on_key(&self, code: P, transition: Transition) {
        let key = self.keys.map(code);
        trace!(target: "input::keys", "{:?} → {:?} {:?}", code, key, transition);
        self.queues.keyboard.push(KeyEvent { key, transition });
    }

    fn on_pointer(&self, sample: RawPointerSample, state: PointerState) -> Result<()> {
        let update = {
            let mut tracking = self.tracking();
            let update = tracking.normalizer.process(&sample, state)?;
            if let Some(position) = update.mouse_position {
                tracking.mouse_position = position;
            }
            update
        };

        if let Some(buttons) = update.buttons {
            self.queues.mouse_buttons.extend(buttons);
        }
        if let Some(pointer) = update.pointer {
            self.queues.pointers.push(pointer);
        }

        Ok(())
    }

    fn on_size_changed(&self, width: f32, height: f32) {
        self.tracking().normalizer.set_surface_size(width, height);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
