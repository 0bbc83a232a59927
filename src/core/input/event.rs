//=========================================================================
// Input Event Types
//
// Defines the engine-neutral representation of input events.
//
// This module abstracts away platform-specific input (WinRT virtual keys,
// Winit key codes, raw pointer samples) into a unified, engine-friendly
// format produced by the dispatcher and drained by the frame loop.
//
// Responsibilities:
// - Represent keyboard, mouse button and pointer events portably
// - Keep every event cheap to copy (no heap allocations)
// - Provide the fixed button order used for mouse snapshots
//
// Event Flow:
// ```text
// Platform Source (WinRT / Winit)
//         ↓
//    InputDispatcher (KeyMapper, PointerNormalizer)
//         ↓
//    KeyEvent / MouseButtonEvent / PointerEvent (this module)
//         ↓
//    InputQueues → drained once per frame → StateTracker
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Transition ==========================================================

/// Direction of a discrete input change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Key or button went down.
    Down,

    /// Key or button went up.
    Up,
}

impl Transition {
    /// `Down` when `pressed`, `Up` otherwise.
    pub fn from_pressed(pressed: bool) -> Self {
        if pressed {
            Self::Down
        } else {
            Self::Up
        }
    }
}

//=== Key =================================================================

/// Engine keyboard key.
///
/// Platform key codes are translated into this enum by a
/// [`KeyMapper`](super::KeyMapper). Codes without an entry resolve to
/// [`Key::None`], so the enum never needs to be exhaustive with respect to
/// any particular platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Unmapped or unknown key.
    None,

    //--- Editing & Control ------------------------------------------------

    Back, Tab, Enter, Pause, CapsLock, Escape, Space,
    Select, Print, Execute, PrintScreen, Insert, Delete, Help,
    Apps, Sleep,

    //--- IME --------------------------------------------------------------

    KanaMode, KanjiMode, ImeConvert, ImeNonConvert,

    //--- Navigation -------------------------------------------------------

    PageUp, PageDown, End, Home,
    Left, Up, Right, Down,

    //--- Number Row -------------------------------------------------------

    D0, D1, D2, D3, D4, D5, D6, D7, D8, D9,

    //--- Letters ----------------------------------------------------------

    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    //--- Numeric Keypad ---------------------------------------------------

    NumPad0, NumPad1, NumPad2, NumPad3, NumPad4,
    NumPad5, NumPad6, NumPad7, NumPad8, NumPad9,
    Multiply, Add, Separator, Subtract, Decimal, Divide,

    //--- Function Keys ----------------------------------------------------

    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
    F13, F14, F15, F16, F17, F18, F19, F20, F21, F22, F23, F24,

    //--- Locks ------------------------------------------------------------

    NumLock, Scroll,

    //--- Modifiers --------------------------------------------------------

    LeftShift, RightShift,
    LeftCtrl, RightCtrl,
    LeftAlt, RightAlt,
    LeftWin, RightWin,
}

impl Key {
    /// Number row keys in ascending order.
    pub const DIGITS: [Key; 10] = [
        Key::D0, Key::D1, Key::D2, Key::D3, Key::D4,
        Key::D5, Key::D6, Key::D7, Key::D8, Key::D9,
    ];

    /// Letter keys in alphabetical order.
    pub const LETTERS: [Key; 26] = [
        Key::A, Key::B, Key::C, Key::D, Key::E, Key::F, Key::G,
        Key::H, Key::I, Key::J, Key::K, Key::L, Key::M, Key::N,
        Key::O, Key::P, Key::Q, Key::R, Key::S, Key::T, Key::U,
        Key::V, Key::W, Key::X, Key::Y, Key::Z,
    ];

    /// Keypad digits in ascending order.
    pub const NUMPAD: [Key; 10] = [
        Key::NumPad0, Key::NumPad1, Key::NumPad2, Key::NumPad3, Key::NumPad4,
        Key::NumPad5, Key::NumPad6, Key::NumPad7, Key::NumPad8, Key::NumPad9,
    ];

    /// Function keys F1 through F24.
    pub const FUNCTION: [Key; 24] = [
        Key::F1, Key::F2, Key::F3, Key::F4, Key::F5, Key::F6,
        Key::F7, Key::F8, Key::F9, Key::F10, Key::F11, Key::F12,
        Key::F13, Key::F14, Key::F15, Key::F16, Key::F17, Key::F18,
        Key::F19, Key::F20, Key::F21, Key::F22, Key::F23, Key::F24,
    ];
}

//=== KeyEvent ============================================================

/// A single key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub key: Key,
    pub transition: Transition,
}

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// `Extended1` and `Extended2` are the side (X1 / X2) buttons, usually
/// bound to browser back / forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// First side button.
    Extended1,

    /// Second side button.
    Extended2,
}

impl MouseButton {
    /// Every button, in the order snapshots are emitted.
    pub const ALL: [MouseButton; 5] = [
        MouseButton::Left,
        MouseButton::Right,
        MouseButton::Middle,
        MouseButton::Extended1,
        MouseButton::Extended2,
    ];
}

//=== MouseButtonEvent ====================================================

/// State of one mouse button as reported by a mouse sample.
///
/// The pointer normalizer emits one of these per button for every
/// non-move mouse sample, whether or not the button changed. Consumers get
/// a full snapshot instead of having to diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MouseButtonEvent {
    pub button: MouseButton,
    pub transition: Transition,
}

//=== PointerState ========================================================

/// Phase of a pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerState {
    /// Contact started or button pressed.
    Down,

    /// Contact ended or button released.
    Up,

    /// Position changed (also used for wheel input).
    Move,

    /// Pointer left the surface.
    Out,

    /// Platform cancelled the interaction (capture lost, gesture stolen).
    Cancel,
}

//=== PointerDeviceKind ===================================================

/// Engine classification of the device that produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerDeviceKind {
    Mouse,
    Touch,
    Unknown,
}

//=== PointerEvent ========================================================

/// Normalized pointer sample.
///
/// `position` is expressed relative to the input surface, with `(0, 0)`
/// at the top-left corner and `(1, 1)` at the bottom-right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub pointer_id: u64,
    pub position: Vec2,
    pub state: PointerState,
    pub device: PointerDeviceKind,
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn transition_from_pressed() {
        assert_eq!(Transition::from_pressed(true), Transition::Down);
        assert_eq!(Transition::from_pressed(false), Transition::Up);
    }

    #[test]
    fn mouse_button_snapshot_order() {
        assert_eq!(
            MouseButton::ALL,
            [
                MouseButton::Left,
                MouseButton::Right,
                MouseButton::Middle,
                MouseButton::Extended1,
                MouseButton::Extended2,
            ]
        );
    }

    #[test]
    fn key_groups_have_no_duplicates() {
        let mut seen = HashSet::new();
        for key in Key::DIGITS
            .iter()
            .chain(Key::LETTERS.iter())
            .chain(Key::NUMPAD.iter())
            .chain(Key::FUNCTION.iter())
        {
            assert!(seen.insert(*key), "{:?} listed twice", key);
        }
        assert_eq!(seen.len(), 10 + 26 + 10 + 24);
    }

    #[test]
    fn key_groups_are_ordered() {
        assert_eq!(Key::DIGITS[0], Key::D0);
        assert_eq!(Key::DIGITS[9], Key::D9);
        assert_eq!(Key::LETTERS[0], Key::A);
        assert_eq!(Key::LETTERS[25], Key::Z);
        assert_eq!(Key::FUNCTION[23], Key::F24);
    }

    #[test]
    fn events_are_copy() {
        let event = KeyEvent { key: Key::Space, transition: Transition::Down };
        let copied = event;
        assert_eq!(event, copied);

        let pointer = PointerEvent {
            pointer_id: 3,
            position: Vec2::new(0.25, 0.75),
            state: PointerState::Move,
            device: PointerDeviceKind::Touch,
        };
        let copied = pointer;
        assert_eq!(pointer, copied);
    }
}
