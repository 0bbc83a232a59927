//=========================================================================
// Platform Subsystem
//=========================================================================
//
// Hosts a winit window and feeds its events to the input subsystem.
//
// Architecture:
// ```text
//  Main Thread:                        Input Thread:
//  ┌───────────────────────────┐      ┌──────────────────────┐
//  │  Winit Event Loop         │      │  InputRuntime        │
//  │   ↓ window_event          │      │   ├─ InputSystem     │
//  │  WinitEventSource ────────┼──────┼─→ │   (queues)       │
//  │   (InputSink calls)       │      │   ↓ update() @ TPS   │
//  │                           │      │  on_frame callback   │
//  │  resumed / suspended /    │      │                      │
//  │  CloseRequested ──────────┼──────┼─→ LifecycleEvent     │
//  └───────────────────────────┘      └──────────────────────┘
// ```
//
// Input goes straight into the shared queues through the sink; only
// lifecycle signals cross the channel. Lifecycle sends never block: a full
// or disconnected channel is logged and the signal dropped.
//
// Winit requires the event loop on the main thread (macOS/iOS), so
// `Platform::run` must be called from there.
//
//=========================================================================

//=== Submodules ==========================================================

mod event_source;
mod key_table;

//=== External Dependencies ===============================================

use crossbeam_channel::{Sender, TrySendError};
use log::{debug, error, info, trace, warn};
use winit::{
    application::ApplicationHandler,
    dpi::LogicalSize,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowAttributes, WindowId},
};

//=== Internal Dependencies ===============================================

use crate::core::lifecycle::LifecycleEvent;
use crate::error::{InputError, Result};

//=== Public API ==========================================================

pub use event_source::WinitEventSource;

//=== Platform ============================================================

/// Window host driving a [`WinitEventSource`].
///
/// The window is created lazily in `resumed()` (mobile compatibility).
pub struct Platform {
    window: Option<Window>,
    source: WinitEventSource,
    lifecycle: Sender<LifecycleEvent>,
    title: String,
    suspended: bool,
}

impl Platform {
    //--- Construction -----------------------------------------------------

    /// `source` should already have its handlers registered.
    pub fn new(source: WinitEventSource, lifecycle: Sender<LifecycleEvent>) -> Self {
        info!(target: "platform", "Platform subsystem initialized");
        Self {
            window: None,
            source,
            lifecycle,
            title: String::from("Aetheric Input"),
            suspended: false,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn source(&self) -> &WinitEventSource {
        &self.source
    }

    //--- Execution --------------------------------------------------------

    /// Runs the winit event loop until the window closes.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::EventLoop`] if the loop cannot be created or
    /// exits with an error.
    pub fn run(mut self) -> Result<()> {
        debug!(target: "platform", "Starting winit event loop");

        let event_loop = EventLoop::new().map_err(|e| InputError::EventLoop(e.to_string()))?;
        event_loop
            .run_app(&mut self)
            .map_err(|e| InputError::EventLoop(e.to_string()))
    }

    //--- Internal Helpers -------------------------------------------------

    fn notify(&self, event: LifecycleEvent) {
        match self.lifecycle.try_send(event) {
            Ok(()) => trace!(target: "platform", "Lifecycle {:?} sent", event),
            Err(TrySendError::Full(_)) => {
                warn!(target: "platform", "Lifecycle channel full, dropping {:?}", event);
            }
            Err(TrySendError::Disconnected(_)) => {
                warn!(target: "platform", "Lifecycle channel disconnected, dropping {:?}", event);
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn window(&self) -> Option<&Window> {
        self.window.as_ref()
    }
}

//=== Winit Integration ===================================================

impl ApplicationHandler for Platform {
    /// Startup, or return from the background on mobile.
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.suspended {
            self.suspended = false;
            self.notify(LifecycleEvent::Resumed);
        }

        if self.window.is_some() {
            return;
        }

        let attrs = WindowAttributes::default()
            .with_title(self.title.clone())
            .with_inner_size(LogicalSize::new(800, 600));

        match event_loop.create_window(attrs) {
            Ok(window) => {
                let size = window.inner_size();
                info!(
                    target: "platform",
                    "Window created: {}x{} @ {}x DPI",
                    size.width,
                    size.height,
                    window.scale_factor()
                );
                self.source.resize(size.width, size.height);
                self.window = Some(window);
            }
            Err(e) => {
                error!(target: "platform", "Window creation failed: {}", e);
                self.notify(LifecycleEvent::Shutdown);
                event_loop.exit();
            }
        }
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {
        if !self.suspended {
            self.suspended = true;
            self.notify(LifecycleEvent::Paused);
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        if let WindowEvent::CloseRequested = event {
            info!(target: "platform", "Window close requested");
            self.notify(LifecycleEvent::Shutdown);
            event_loop.exit();
            return;
        }

        if let Err(e) = self.source.handle_window_event(&event) {
            warn!(target: "platform", "Input event rejected: {}", e);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::bounded;

    #[test]
    fn platform_creates_window_lazily() {
        let (tx, _rx) = bounded(4);
        let platform = Platform::new(WinitEventSource::new(), tx).with_title("Test");
        assert!(platform.window().is_none());
        assert!(!platform.source().is_registered());
    }

    #[test]
    fn notify_sends_lifecycle_events() {
        let (tx, rx) = bounded(4);
        let platform = Platform::new(WinitEventSource::new(), tx);

        platform.notify(LifecycleEvent::Paused);
        platform.notify(LifecycleEvent::Resumed);

        assert_eq!(rx.try_recv(), Ok(LifecycleEvent::Paused));
        assert_eq!(rx.try_recv(), Ok(LifecycleEvent::Resumed));
    }

    #[test]
    fn notify_never_blocks_on_full_channel() {
        let (tx, rx) = bounded(1);
        let platform = Platform::new(WinitEventSource::new(), tx);

        platform.notify(LifecycleEvent::Paused);
        platform.notify(LifecycleEvent::Shutdown);

        assert_eq!(rx.try_recv(), Ok(LifecycleEvent::Paused));
        assert!(rx.try_recv().is_err(), "Second signal was dropped");
    }

    #[test]
    fn notify_handles_disconnected_channel() {
        let (tx, rx) = bounded(1);
        let platform = Platform::new(WinitEventSource::new(), tx);
        drop(rx);

        platform.notify(LifecycleEvent::Shutdown);
    }
}
