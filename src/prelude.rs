//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_input::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Runtime
pub use crate::config::InputConfig;
pub use crate::engine::{InputRuntime, InputRuntimeBuilder};
pub use crate::error::InputError;

// Input
pub use crate::core::input::{
    register_handlers, InputFrame, InputSink, Key, KeyEvent, MouseButton, PlatformEventSource,
    PointerEvent, PointerState, StateTracker, Transition, VirtualKey,
};
pub use crate::core::{InputSystem, LifecycleEvent};

// Sensors
pub use crate::core::sensors::{
    NoSensors, SensorKind, SensorPoller, SensorProvider, SensorValues, SimulatedSensor,
    SimulatedSensorProvider,
};

// Platform
pub use crate::platform::{Platform, WinitEventSource};
