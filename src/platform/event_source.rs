//=========================================================================
// Winit Event Source
//=========================================================================
//
// Translates winit window events into raw input for an `InputSink`.
//
// Architecture:
//   WindowEvent → WinitEventSource → InputSink (on_key / on_pointer / on_size_changed)
//
// Stateful translation: winit reports cursor motion and button changes as
// separate events, while the sink expects full samples. The source caches
// the cursor position and the pressed-button mask and builds a complete
// `RawPointerSample` for each event.
//
// Pointer ids: the mouse is id 0; touch ids are shifted by one.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

use glam::Vec2;
use log::{debug, trace};
use winit::event::{ElementState, MouseButton as WinitMouseButton, TouchPhase, WindowEvent};
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

//=== Internal Dependencies ===============================================

use crate::core::input::{
    InputSink, PlatformEventSource, PointerButtons, PointerState, RawDeviceKind, RawPointerSample,
    Transition,
};
use crate::error::Result;

//=== WinitEventSource ====================================================

/// Platform event source backed by winit window events.
///
/// Events arriving before a sink is registered are dropped.
#[derive(Default)]
pub struct WinitEventSource {
    sink: Option<Arc<dyn InputSink<WinitKeyCode>>>,
    cursor: Vec2,
    buttons: PointerButtons,
}

impl WinitEventSource {
    pub const MOUSE_POINTER_ID: u64 = 0;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_registered(&self) -> bool {
        self.sink.is_some()
    }

    /// Buttons currently held, as tracked from `MouseInput` events.
    pub fn buttons(&self) -> PointerButtons {
        self.buttons
    }

    //--- Event Translation ------------------------------------------------

    /// Forwards one window event to the sink. Unrelated events are ignored.
    ///
    /// # Errors
    ///
    /// Propagates sink errors for pointer samples.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> Result<()> {
        match event {
            WindowEvent::Resized(size) => {
                self.resize(size.width, size.height);
                Ok(())
            }

            WindowEvent::KeyboardInput { event: key_event, .. } => {
                match key_event.physical_key {
                    PhysicalKey::Code(code) => self.key(code, key_event.state),
                    PhysicalKey::Unidentified(native) => {
                        trace!(target: "platform", "Unidentified key ignored: {:?}", native);
                    }
                }
                Ok(())
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x, position.y)
            }

            WindowEvent::MouseInput { state, button, .. } => self.mouse_input(*button, *state),

            WindowEvent::MouseWheel { .. } => self.mouse_sample(PointerState::Move),

            WindowEvent::CursorLeft { .. } => self.cursor_left(),

            WindowEvent::Touch(touch) => {
                self.touch(touch.id, touch.phase, touch.location.x, touch.location.y)
            }

            _ => Ok(()),
        }
    }

    /// Surface resized (physical pixels).
    pub fn resize(&self, width: u32, height: u32) {
        debug!(target: "platform", "Surface resized to {}x{}", width, height);
        if let Some(sink) = &self.sink {
            sink.on_size_changed(width as f32, height as f32);
        }
    }

    pub fn key(&self, code: WinitKeyCode, state: ElementState) {
        if let Some(sink) = &self.sink {
            sink.on_key(code, Transition::from_pressed(state.is_pressed()));
        }
    }

    pub fn cursor_moved(&mut self, x: f64, y: f64) -> Result<()> {
        self.cursor = Vec2::new(x as f32, y as f32);
        self.mouse_sample(PointerState::Move)
    }

    /// Updates the button mask, then emits Down or Up at the cursor.
    pub fn mouse_input(&mut self, button: WinitMouseButton, state: ElementState) -> Result<()> {
        let Some(bit) = button_bit(button) else {
            trace!(target: "platform", "Mouse button {:?} ignored", button);
            return Ok(());
        };

        let pointer_state = match state {
            ElementState::Pressed => {
                self.buttons.insert(bit);
                PointerState::Down
            }
            ElementState::Released => {
                self.buttons.remove(bit);
                PointerState::Up
            }
        };

        self.mouse_sample(pointer_state)
    }

    pub fn cursor_left(&mut self) -> Result<()> {
        self.mouse_sample(PointerState::Out)
    }

    /// Touch contact in physical pixels.
    pub fn touch(&self, id: u64, phase: TouchPhase, x: f64, y: f64) -> Result<()> {
        let state = match phase {
            TouchPhase::Started => PointerState::Down,
            TouchPhase::Moved => PointerState::Move,
            TouchPhase::Ended => PointerState::Up,
            TouchPhase::Cancelled => PointerState::Cancel,
        };

        let sample = RawPointerSample {
            pointer_id: id.wrapping_add(1),
            device: RawDeviceKind::Touch,
            x: x as f32,
            y: y as f32,
            buttons: PointerButtons::NONE,
        };
        self.send(sample, state)
    }

    //--- Internal Helpers -------------------------------------------------

    fn mouse_sample(&self, state: PointerState) -> Result<()> {
        let sample = RawPointerSample {
            pointer_id: Self::MOUSE_POINTER_ID,
            device: RawDeviceKind::Mouse,
            x: self.cursor.x,
            y: self.cursor.y,
            buttons: self.buttons,
        };
        self.send(sample, state)
    }

    fn send(&self, sample: RawPointerSample, state: PointerState) -> Result<()> {
        match &self.sink {
            Some(sink) => sink.on_pointer(sample, state),
            None => Ok(()),
        }
    }
}

impl PlatformEventSource<WinitKeyCode> for WinitEventSource {
    fn register_handlers(&mut self, sink: Arc<dyn InputSink<WinitKeyCode>>) {
        debug!(target: "platform", "Input handlers registered");
        self.sink = Some(sink);
    }
}

impl std::fmt::Debug for WinitEventSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WinitEventSource")
            .field("registered", &self.is_registered())
            .field("cursor", &self.cursor)
            .field("buttons", &self.buttons)
            .finish()
    }
}

/// winit buttons with an engine counterpart.
fn button_bit(button: WinitMouseButton) -> Option<PointerButtons> {
    match button {
        WinitMouseButton::Left => Some(PointerButtons::LEFT),
        WinitMouseButton::Right => Some(PointerButtons::RIGHT),
        WinitMouseButton::Middle => Some(PointerButtons::MIDDLE),
        WinitMouseButton::Back => Some(PointerButtons::EXTENDED1),
        WinitMouseButton::Forward => Some(PointerButtons::EXTENDED2),
        WinitMouseButton::Other(_) => None,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
