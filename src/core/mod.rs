//=========================================================================
// Core Systems
//=========================================================================
//
// Platform-independent input processing.
//
// Components:
// - `input`: Key mapping, pointer normalization, frame queues, state
// - `sensors`: Motion sensor devices, orientation math, poller
// - `system`: Per-tick `InputSystem` tying both halves together
// - `lifecycle`: Pause / resume / shutdown signals for the frame loop
//
//=========================================================================

//=== Module Declarations =================================================

pub mod input;
pub mod lifecycle;
pub mod sensors;
pub mod system;

//=== Public API ==========================================================

pub use lifecycle::LifecycleEvent;
pub use system::InputSystem;
