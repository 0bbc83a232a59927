//=========================================================================
// Pointer Normalizer
//=========================================================================
//
// Converts raw pointer samples into engine pointer and mouse events.
//
// Architecture:
//   RawPointerSample → classify() → normalize position → PointerUpdate
//                                     ├─ pointer: Option<PointerEvent>
//                                     ├─ buttons: Option<[MouseButtonEvent; 5]>
//                                     └─ mouse_position: Option<Vec2>
//
// Drag tracking: mouse pointer events are only reported while the left
// button is held (press, drag, release). The flag is shared by every
// mouse pointer; several mice pressing at once will interfere.
// Touch and unknown devices are always reported.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::{trace, warn};

//=== Internal Dependencies ===============================================

use super::event::{
    MouseButton, MouseButtonEvent, PointerDeviceKind, PointerEvent, PointerState, Transition,
};
use crate::error::{InputError, Result};

//=== RawDeviceKind =======================================================

/// Device type as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawDeviceKind {
    Mouse,
    Touch,
    Pen,
    /// Platform-specific value the engine has no name for.
    Other(u32),
}

//=== PointerButtons ======================================================

/// Bitmask of pressed mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointerButtons(u8);

impl PointerButtons {
    pub const NONE: Self = Self(0);
    pub const LEFT: Self = Self(1 << 0);
    pub const RIGHT: Self = Self(1 << 1);
    pub const MIDDLE: Self = Self(1 << 2);
    pub const EXTENDED1: Self = Self(1 << 3);
    pub const EXTENDED2: Self = Self(1 << 4);

    /// Builds a mask from raw bits; bits above the fifth are dropped.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & 0b1_1111)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }

    /// Returns the mask bit for `button`.
    pub const fn of(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Self::LEFT,
            MouseButton::Right => Self::RIGHT,
            MouseButton::Middle => Self::MIDDLE,
            MouseButton::Extended1 => Self::EXTENDED1,
            MouseButton::Extended2 => Self::EXTENDED2,
        }
    }

    pub const fn is_pressed(self, button: MouseButton) -> bool {
        self.contains(Self::of(button))
    }
}

//=== RawPointerSample ====================================================

/// One pointer sample straight from the platform, in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPointerSample {
    pub pointer_id: u64,
    pub device: RawDeviceKind,
    pub x: f32,
    pub y: f32,
    pub buttons: PointerButtons,
}

//=== PointerUpdate =======================================================

/// Everything a single sample produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerUpdate {
    /// Pointer event, absent for a mouse hovering without the left button.
    pub pointer: Option<PointerEvent>,

    /// Full button snapshot, present for non-move mouse samples.
    pub buttons: Option<[MouseButtonEvent; 5]>,

    /// New normalized mouse position, present for mouse samples.
    pub mouse_position: Option<Vec2>,
}

//=== PointerNormalizer ===================================================

/// Stateful pointer sample processor.
///
/// Holds the current surface size (fed by size-change notifications) and
/// the left-button drag flag.
#[derive(Debug, Clone, Default)]
pub struct PointerNormalizer {
    surface_width: f32,
    surface_height: f32,
    left_button_held: bool,
}

impl PointerNormalizer {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a normalizer for a surface of the given size.
    pub fn with_surface_size(width: f32, height: f32) -> Self {
        let mut normalizer = Self::new();
        normalizer.set_surface_size(width, height);
        normalizer
    }

    //--- Surface ----------------------------------------------------------

    /// Records a new surface size in pixels.
    pub fn set_surface_size(&mut self, width: f32, height: f32) {
        trace!(target: "input::pointer", "Surface resized to {}x{}", width, height);
        self.surface_width = width.max(0.0);
        self.surface_height = height.max(0.0);
    }

    pub fn surface_size(&self) -> (f32, f32) {
        (self.surface_width, self.surface_height)
    }

    /// `true` while the left mouse button drag is in progress.
    pub fn is_left_button_held(&self) -> bool {
        self.left_button_held
    }

    //--- Classification ---------------------------------------------------

    /// Maps a platform device kind onto the engine's.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::UnsupportedDevice`] for pen input.
    pub fn classify(device: RawDeviceKind) -> Result<PointerDeviceKind> {
        match device {
            RawDeviceKind::Mouse => Ok(PointerDeviceKind::Mouse),
            RawDeviceKind::Touch => Ok(PointerDeviceKind::Touch),
            RawDeviceKind::Pen => Err(InputError::UnsupportedDevice(device)),
            RawDeviceKind::Other(_) => Ok(PointerDeviceKind::Unknown),
        }
    }

    /// Converts surface pixels to `[0, 1]` coordinates.
    ///
    /// A zero-sized dimension (no size notification yet) yields 0 on that
    /// axis. Samples outside the surface are clamped to its edge.
    pub fn normalize_position(&self, x: f32, y: f32) -> Vec2 {
        Vec2::new(
            normalize_axis(x, self.surface_width),
            normalize_axis(y, self.surface_height),
        )
    }

    //--- Event Processing -------------------------------------------------

    /// Builds the pointer event for a sample without touching drag state.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::UnsupportedDevice`] for pen input.
    pub fn normalize(&self, sample: &RawPointerSample, state: PointerState) -> Result<PointerEvent> {
        let device = Self::classify(sample.device)?;

        Ok(PointerEvent {
            pointer_id: sample.pointer_id,
            position: self.normalize_position(sample.x, sample.y),
            state,
            device,
        })
    }

    /// Processes one sample, updating drag state.
    ///
    /// Pen samples fail before any state changes.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::UnsupportedDevice`] for pen input.
    pub fn process(&mut self, sample: &RawPointerSample, state: PointerState) -> Result<PointerUpdate> {
        let event = match self.normalize(sample, state) {
            Ok(event) => event,
            Err(err) => {
                warn!(target: "input::pointer", "Rejected pointer {}: {}", sample.pointer_id, err);
                return Err(err);
            }
        };

        let is_mouse = event.device == PointerDeviceKind::Mouse;
        let left_pressed = sample.buttons.contains(PointerButtons::LEFT);

        if is_mouse && left_pressed {
            self.left_button_held = true;
        }

        let buttons = (is_mouse && state != PointerState::Move)
            .then(|| button_snapshot(sample.buttons));

        let pointer = (!is_mouse || self.left_button_held).then_some(event);

        if is_mouse && !left_pressed {
            self.left_button_held = false;
        }

        trace!(
            target: "input::pointer",
            "Pointer {} {:?} {:?} at {:?} (reported: {})",
            sample.pointer_id,
            event.device,
            state,
            event.position,
            pointer.is_some()
        );

        Ok(PointerUpdate {
            pointer,
            buttons,
            mouse_position: is_mouse.then_some(event.position),
        })
    }
}

//--- Internal Helpers ----------------------------------------------------

fn normalize_axis(value: f32, extent: f32) -> f32 {
    if extent > 0.0 {
        (value / extent).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// One event per button in `MouseButton::ALL` order.
fn button_snapshot(buttons: PointerButtons) -> [MouseButtonEvent; 5] {
    MouseButton::ALL.map(|button| MouseButtonEvent {
        button,
        transition: Transition::from_pressed(buttons.is_pressed(button)),
    })
}

//=========================================================================
// Unit Tests
//=========================================================================
