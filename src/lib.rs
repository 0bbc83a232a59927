//=========================================================================
// Aetheric Input Library Root
//=========================================================================
//
// Engine-neutral input subsystem: platform key codes, pointer samples and
// motion sensors in; normalized per-frame events and sensor values out.
//
// Typical usage:
// ```no_run
// use aetheric_input::prelude::*;
//
// let builder = InputRuntimeBuilder::new();
// let system = builder.build::<winit::keyboard::KeyCode, _>(&mut NoSensors);
//
// let mut source = WinitEventSource::new();
// register_handlers(&mut source, system.sink());
//
// let runtime = builder.spawn(system, |system| { /* read system.state() */ })?;
// Platform::new(source, runtime.lifecycle()).run()?;
// runtime.shutdown();
// # Ok::<(), aetheric_input::InputError>(())
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------

pub mod config;
pub mod core;
pub mod error;
pub mod platform;
pub mod prelude;

mod engine;

//--- Public Exports ------------------------------------------------------

pub use crate::config::InputConfig;
pub use crate::core::input::{Key, KeyMapper, PlatformKeyCode, VirtualKey};
pub use crate::core::sensors::NoSensors;
pub use crate::core::{InputSystem, LifecycleEvent};
pub use crate::engine::{InputRuntime, InputRuntimeBuilder};
pub use crate::error::{InputError, Result};
