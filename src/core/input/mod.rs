//=========================================================================
// Input
//=========================================================================
//
// Keyboard and pointer half of the input subsystem.
//
// Components:
// - `event`: Engine event types (keys, mouse buttons, pointers)
// - `virtual_key`: WinRT virtual-key codes and their key table
// - `key_mapper`: Platform code → engine key lookup
// - `pointer`: Raw pointer samples and the pointer normalizer
// - `queue`: Mutex-guarded frame queues
// - `dispatcher`: Handler registration seam and default sink
// - `state_tracker`: Per-frame state folded from drained events
//
//=========================================================================

//=== Module Declarations =================================================

pub mod dispatcher;
pub mod event;
pub mod key_mapper;
pub mod pointer;
pub mod queue;
pub mod state_tracker;
pub mod virtual_key;

//=== Public API ==========================================================

pub use dispatcher::{register_handlers, InputDispatcher, InputSink, PlatformEventSource};
pub use event::{
    Key, KeyEvent, MouseButton, MouseButtonEvent, PointerDeviceKind, PointerEvent, PointerState,
    Transition,
};
pub use key_mapper::{KeyMapper, PlatformKeyCode};
pub use pointer::{PointerButtons, PointerNormalizer, PointerUpdate, RawDeviceKind, RawPointerSample};
pub use queue::{EventQueue, InputFrame, InputQueues};
pub use state_tracker::StateTracker;
pub use virtual_key::VirtualKey;
