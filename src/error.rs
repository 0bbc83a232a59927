//=========================================================================
// Input Errors
//=========================================================================
//
// Error type shared by the input subsystem.
//
// Only genuinely exceptional situations are errors: pen input (explicitly
// unsupported hardware), bad configuration and failure to start the
// runtime thread or the window event loop. Unmapped keys and missing sensors are ordinary states
// and never surface here.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::input::pointer::RawDeviceKind;

//=== InputError ==========================================================

/// Errors produced by the input subsystem.
#[derive(Debug, Error)]
pub enum InputError {
    /// The pointer came from hardware the engine does not handle (pen).
    #[error("pointer device {0:?} is not supported")]
    UnsupportedDevice(RawDeviceKind),

    /// A configuration value is out of range.
    #[error("invalid input configuration: {0}")]
    Config(String),

    /// Configuration text could not be parsed.
    #[error("failed to parse input configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The runtime frame thread could not be spawned.
    #[error("failed to spawn input thread: {0}")]
    Spawn(#[from] std::io::Error),

    /// The windowing event loop could not be created or failed while running.
    #[error("event loop error: {0}")]
    EventLoop(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T, E = InputError> = std::result::Result<T, E>;

//=========================================================================
// Unit Tests
//=========================================================================
