//=========================================================================
// State Tracker
//=========================================================================
//
// Folds drained input frames into queryable state with per-frame deltas.
//
// Architecture:
//   InputFrame → process() → HashSet (keys/buttons held) → query
//
// Frame lifecycle: clear() → process() → finalize_frame() → query
//
// Mouse button snapshots repeat unchanged buttons on every sample; a
// repeated Down is not a new press, so deltas only record real changes.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::{HashMap, HashSet};

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::event::{Key, KeyEvent, MouseButton, MouseButtonEvent, PointerEvent, PointerState, Transition};
use super::queue::InputFrame;

//=== StateTracker ========================================================

/// Tracks persistent state (keys held) and per-frame deltas (keys pressed/released).
/// Frame lifecycle: clear() → process() → finalize_frame() → query.
#[derive(Debug, Default)]
pub struct StateTracker {
    //--- Persistent State (survives frame boundary) ----------------------
    keys_down: HashSet<Key>,
    mouse_buttons_down: HashSet<MouseButton>,
    mouse_position: Vec2,
    pointers: HashMap<u64, PointerEvent>,

    //--- Frame Deltas (reset each frame via clear()) --------------------
    keys_pressed_this_frame: HashSet<Key>,
    keys_released_this_frame: HashSet<Key>,
    mouse_buttons_pressed_this_frame: HashSet<MouseButton>,
    mouse_buttons_released_this_frame: HashSet<MouseButton>,

    //--- Continuous Input (accumulated/calculated) -----------------------
    mouse_delta: Vec2,
    last_mouse_position: Vec2,
}

impl StateTracker {
    /// Creates a new state tracker with empty state.
    pub fn new() -> Self {
        Self::default()
    }

    //--- Frame Processing -------------------------------------------------

    /// Clears frame-specific deltas (pressed/released flags).
    pub fn clear(&mut self) {
        self.keys_pressed_this_frame.clear();
        self.keys_released_this_frame.clear();
        self.mouse_buttons_pressed_this_frame.clear();
        self.mouse_buttons_released_this_frame.clear();
        self.last_mouse_position = self.mouse_position;
    }

    /// Applies every event of a drained frame, in queue order.
    pub fn process(&mut self, frame: &InputFrame) {
        for event in &frame.keys {
            self.process_key(event);
        }
        for event in &frame.mouse_buttons {
            self.process_button(event);
        }
        for event in &frame.pointers {
            self.process_pointer(event);
        }
    }

    /// Records the latest normalized mouse position.
    pub fn set_mouse_position(&mut self, position: Vec2) {
        self.mouse_position = position;
    }

    /// Finalizes frame calculations (calculates mouse delta).
    pub fn finalize_frame(&mut self) {
        self.mouse_delta = self.mouse_position - self.last_mouse_position;
    }

    //--- Internal Helpers -------------------------------------------------

    fn process_key(&mut self, event: &KeyEvent) {
        if event.key == Key::None {
            return;
        }

        match event.transition {
            Transition::Down => {
                if self.keys_down.insert(event.key) {
                    self.keys_pressed_this_frame.insert(event.key);
                }
            }
            Transition::Up => {
                if self.keys_down.remove(&event.key) {
                    self.keys_released_this_frame.insert(event.key);
                }
            }
        }
    }

    fn process_button(&mut self, event: &MouseButtonEvent) {
        match event.transition {
            Transition::Down => {
                if self.mouse_buttons_down.insert(event.button) {
                    self.mouse_buttons_pressed_this_frame.insert(event.button);
                }
            }
            Transition::Up => {
                if self.mouse_buttons_down.remove(&event.button) {
                    self.mouse_buttons_released_this_frame.insert(event.button);
                }
            }
        }
    }

    fn process_pointer(&mut self, event: &PointerEvent) {
        match event.state {
            PointerState::Down | PointerState::Move => {
                self.pointers.insert(event.pointer_id, *event);
            }
            PointerState::Up | PointerState::Out | PointerState::Cancel => {
                self.pointers.remove(&event.pointer_id);
            }
        }
    }

    //=====================================================================
    // Query API - Keyboard
    //=====================================================================

    /// Returns `true` if key transitioned UP → DOWN (one frame only).
    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.keys_pressed_this_frame.contains(&key)
    }

    /// Returns `true` while key is held.
    pub fn is_key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    /// Returns `true` if key transitioned DOWN → UP.
    pub fn is_key_released(&self, key: Key) -> bool {
        self.keys_released_this_frame.contains(&key)
    }

    //=====================================================================
    // Query API - Mouse Buttons
    //=====================================================================

    /// Like [`is_key_pressed`](Self::is_key_pressed) but for mouse buttons.
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.mouse_buttons_pressed_this_frame.contains(&button)
    }

    /// Like [`is_key_down`](Self::is_key_down) but for mouse buttons.
    pub fn is_button_down(&self, button: MouseButton) -> bool {
        self.mouse_buttons_down.contains(&button)
    }

    /// Like [`is_key_released`](Self::is_key_released) but for mouse buttons.
    pub fn is_button_released(&self, button: MouseButton) -> bool {
        self.mouse_buttons_released_this_frame.contains(&button)
    }

    //=====================================================================
    // Query API - Mouse Position & Pointers
    //=====================================================================

    /// Normalized mouse position (top-left origin).
    pub fn mouse_position(&self) -> Vec2 {
        self.mouse_position
    }

    /// Mouse movement since the previous frame (zero if no movement).
    pub fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }

    /// Latest event of a pointer that is down or moving.
    pub fn pointer(&self, pointer_id: u64) -> Option<&PointerEvent> {
        self.pointers.get(&pointer_id)
    }

    /// Pointers currently in contact / dragging.
    pub fn active_pointers(&self) -> impl Iterator<Item = &PointerEvent> {
        self.pointers.values()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::event::PointerDeviceKind;

    //--- Test Helpers -----------------------------------------------------

    fn key(key: Key, transition: Transition) -> KeyEvent {
        KeyEvent { key, transition }
    }

    fn snapshot(pressed: &[MouseButton]) -> Vec<MouseButtonEvent> {
        MouseButton::ALL
            .iter()
            .map(|b| MouseButtonEvent {
                button: *b,
                transition: Transition::from_pressed(pressed.contains(b)),
            })
            .collect()
    }

    fn pointer(id: u64, state: PointerState) -> PointerEvent {
        PointerEvent {
            pointer_id: id,
            position: Vec2::new(0.5, 0.5),
            state,
            device: PointerDeviceKind::Touch,
        }
    }

    fn run_frame(tracker: &mut StateTracker, frame: InputFrame) {
        tracker.clear();
        tracker.process(&frame);
        tracker.finalize_frame();
    }

    //--- Tests ------------------------------------------------------------

    #[test]
    fn key_press_hold_release() {
        let mut tracker = StateTracker::new();

        run_frame(&mut tracker, InputFrame {
            keys: vec![key(Key::W, Transition::Down)],
            ..Default::default()
        });
        assert!(tracker.is_key_pressed(Key::W));
        assert!(tracker.is_key_down(Key::W));

        run_frame(&mut tracker, InputFrame::default());
        assert!(!tracker.is_key_pressed(Key::W), "Pressed lasts one frame");
        assert!(tracker.is_key_down(Key::W));

        run_frame(&mut tracker, InputFrame {
            keys: vec![key(Key::W, Transition::Up)],
            ..Default::default()
        });
        assert!(tracker.is_key_released(Key::W));
        assert!(!tracker.is_key_down(Key::W));
    }

    #[test]
    fn none_key_is_ignored() {
        let mut tracker = StateTracker::new();
        run_frame(&mut tracker, InputFrame {
            keys: vec![key(Key::None, Transition::Down)],
            ..Default::default()
        });
        assert!(!tracker.is_key_down(Key::None));
    }

    #[test]
    fn repeated_snapshots_are_not_new_presses() {
        let mut tracker = StateTracker::new();

        run_frame(&mut tracker, InputFrame {
            mouse_buttons: snapshot(&[MouseButton::Left]),
            ..Default::default()
        });
        assert!(tracker.is_button_pressed(MouseButton::Left));
        assert!(!tracker.is_button_released(MouseButton::Right), "Up on an up button is no release");

        run_frame(&mut tracker, InputFrame {
            mouse_buttons: snapshot(&[MouseButton::Left]),
            ..Default::default()
        });
        assert!(!tracker.is_button_pressed(MouseButton::Left));
        assert!(tracker.is_button_down(MouseButton::Left));

        run_frame(&mut tracker, InputFrame {
            mouse_buttons: snapshot(&[]),
            ..Default::default()
        });
        assert!(tracker.is_button_released(MouseButton::Left));
        assert!(!tracker.is_button_down(MouseButton::Left));
    }

    #[test]
    fn mouse_delta_tracks_frame_movement() {
        let mut tracker = StateTracker::new();

        tracker.clear();
        tracker.set_mouse_position(Vec2::new(0.25, 0.5));
        tracker.finalize_frame();
        assert_eq!(tracker.mouse_delta(), Vec2::new(0.25, 0.5));

        tracker.clear();
        tracker.finalize_frame();
        assert_eq!(tracker.mouse_delta(), Vec2::ZERO);
        assert_eq!(tracker.mouse_position(), Vec2::new(0.25, 0.5));
    }

    #[test]
    fn pointers_tracked_until_lifted() {
        let mut tracker = StateTracker::new();

        run_frame(&mut tracker, InputFrame {
            pointers: vec![pointer(1, PointerState::Down), pointer(2, PointerState::Down)],
            ..Default::default()
        });
        assert_eq!(tracker.active_pointers().count(), 2);

        run_frame(&mut tracker, InputFrame {
            pointers: vec![pointer(1, PointerState::Up), pointer(2, PointerState::Move)],
            ..Default::default()
        });
        assert!(tracker.pointer(1).is_none());
        assert_eq!(tracker.pointer(2).map(|p| p.state), Some(PointerState::Move));

        run_frame(&mut tracker, InputFrame {
            pointers: vec![pointer(2, PointerState::Cancel)],
            ..Default::default()
        });
        assert_eq!(tracker.active_pointers().count(), 0);
    }
}
