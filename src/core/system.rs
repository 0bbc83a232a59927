//=========================================================================
// Input System
//=========================================================================
//
// Per-tick driver tying the input and sensor halves together.
//
// Architecture:
// ```text
//  platform threads ──InputSink──→ InputDispatcher ──→ InputQueues
//                                                          │ drain()
//  update() ───────────────────────────────────────────────┤
//     ├─ StateTracker::process(frame)                      ↓
//     └─ SensorPoller::poll()                          InputFrame
// ```
//
// Frame lifecycle: update() → query frame() / state() / sensors()
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

use log::{debug, info, trace};

//=== Internal Dependencies ===============================================

use super::input::{
    InputDispatcher, InputFrame, InputQueues, InputSink, PlatformKeyCode, StateTracker, VirtualKey,
};
use super::sensors::{SensorPoller, SensorProvider};
use crate::config::InputConfig;

//=== InputSystem =========================================================

/// Owns the queues, the per-frame state and the sensor poller.
#[derive(Debug)]
pub struct InputSystem<P: PlatformKeyCode = VirtualKey> {
    dispatcher: Arc<InputDispatcher<P>>,
    state: StateTracker,
    sensors: SensorPoller,
    frame: InputFrame,
}

impl<P: PlatformKeyCode> InputSystem<P> {
    //--- Construction -----------------------------------------------------

    pub fn new<S: SensorProvider + ?Sized>(config: &InputConfig, provider: &mut S) -> Self {
        let dispatcher = Arc::new(InputDispatcher::new(Arc::new(InputQueues::new())));
        if config.surface_width > 0.0 && config.surface_height > 0.0 {
            dispatcher.on_size_changed(config.surface_width, config.surface_height);
        }

        info!(
            target: "input",
            "Input system ready ({} mapped keys, surface {}x{})",
            dispatcher.key_mapper().len(),
            config.surface_width,
            config.surface_height,
        );

        Self {
            dispatcher,
            state: StateTracker::new(),
            sensors: SensorPoller::new(provider, config.sensor_update_rate_hz),
            frame: InputFrame::default(),
        }
    }

    //--- Registration -----------------------------------------------------

    /// Sink to hand to a platform event source.
    pub fn sink(&self) -> Arc<dyn InputSink<P>> {
        self.dispatcher.clone()
    }

    pub fn dispatcher(&self) -> &Arc<InputDispatcher<P>> {
        &self.dispatcher
    }

    //--- Frame Update -----------------------------------------------------

    /// Drains the queues, folds the frame into state and polls sensors.
    pub fn update(&mut self) -> &InputFrame {
        self.state.clear();

        self.frame = self.dispatcher.queues().drain();
        self.state.process(&self.frame);
        self.state.set_mouse_position(self.dispatcher.mouse_position());
        self.state.finalize_frame();

        self.sensors.poll();

        if !self.frame.is_empty() {
            trace!(
                target: "input",
                "Frame: {} keys, {} buttons, {} pointers",
                self.frame.keys.len(),
                self.frame.mouse_buttons.len(),
                self.frame.pointers.len(),
            );
        }

        &self.frame
    }

    //--- Accessors --------------------------------------------------------

    /// Events drained by the last [`update`](Self::update).
    pub fn frame(&self) -> &InputFrame {
        &self.frame
    }

    pub fn state(&self) -> &StateTracker {
        &self.state
    }

    pub fn sensors(&self) -> &SensorPoller {
        &self.sensors
    }

    /// Mutable access for enabling and disabling sensors.
    pub fn sensors_mut(&mut self) -> &mut SensorPoller {
        &mut self.sensors
    }

    //--- Lifecycle --------------------------------------------------------

    pub fn pause(&mut self) {
        debug!(target: "input", "Input system paused");
        self.sensors.pause();
    }

    pub fn resume(&mut self) {
        debug!(target: "input", "Input system resumed");
        self.sensors.resume();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
