//=========================================================================
// Input Runtime
//=========================================================================
//
// Runs the input frame loop on a dedicated thread at a fixed tick rate.
//
// Architecture:
// ```text
//     InputRuntimeBuilder ──build()──→ InputSystem ──spawn()──→ InputRuntime
//         │                                                       │
//         ├─ with_tps()                                           ├─ lifecycle() sender
//         ├─ with_channel_capacity()                              └─ shutdown() joins
//         ├─ with_sensor_update_rate()
//         └─ with_config()
// ```
//
// Each tick:
//  1. Collects lifecycle signals (Paused / Resumed / Shutdown)
//  2. Updates the input system (drain + fold + sensor poll)
//  3. Hands the system to the frame callback
//  4. Sleeps to maintain fixed pacing
//
//=========================================================================

//=== External Dependencies ===============================================

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Sender};
use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::config::InputConfig;
use crate::core::input::PlatformKeyCode;
use crate::core::lifecycle::{LifecycleCollector, LifecycleEvent, TickControl};
use crate::core::sensors::SensorProvider;
use crate::core::system::InputSystem;
use crate::error::Result;

//=== InputRuntimeBuilder =================================================

/// Builder for configuring an [`InputSystem`] and its [`InputRuntime`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (frame updates per second)
/// - **Sensor rate**: 60 Hz
/// - **Channel capacity**: 64 lifecycle events
///
/// # Examples
///
/// ```no_run
/// use aetheric_input::{InputRuntimeBuilder, NoSensors, VirtualKey};
///
/// let builder = InputRuntimeBuilder::new().with_tps(120.0);
/// let system = builder.build::<VirtualKey, _>(&mut NoSensors);
/// let sink = system.sink(); // hand to the platform event source
///
/// let runtime = builder
///     .spawn(system, |system| {
///         for key in &system.frame().keys {
///             println!("{:?}", key);
///         }
///     })
///     .unwrap();
///
/// runtime.shutdown();
/// ```
#[derive(Debug, Clone)]
pub struct InputRuntimeBuilder {
    config: InputConfig,
}

impl InputRuntimeBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            config: InputConfig::default(),
        }
    }

    /// Sets the target ticks per second for the frame thread.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.config.tps = tps;
        self
    }

    /// Sets the lifecycle channel capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.config.channel_capacity = capacity;
        self
    }

    /// Sets the target sensor sample rate.
    ///
    /// # Panics
    ///
    /// Panics if `rate_hz <= 0.0`.
    pub fn with_sensor_update_rate(mut self, rate_hz: f32) -> Self {
        assert!(rate_hz > 0.0, "Sensor update rate must be positive, got {}", rate_hz);
        self.config.sensor_update_rate_hz = rate_hz;
        self
    }

    /// Replaces every setting with a validated configuration.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails [`InputConfig::validate`].
    pub fn with_config(mut self, config: InputConfig) -> Self {
        if let Err(e) = config.validate() {
            panic!("{}", e);
        }
        self.config = config;
        self
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    /// Creates the input system, acquiring sensors from `provider`.
    pub fn build<P, S>(&self, provider: &mut S) -> InputSystem<P>
    where
        P: PlatformKeyCode,
        S: SensorProvider + ?Sized,
    {
        info!(
            target: "input",
            "Building input system (TPS: {}, sensors: {} Hz, channel: {})",
            self.config.tps,
            self.config.sensor_update_rate_hz,
            self.config.channel_capacity
        );
        InputSystem::new(&self.config, provider)
    }

    /// Starts the frame thread.
    ///
    /// `on_frame` runs on the frame thread after every update.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Spawn`](crate::InputError::Spawn) if the thread
    /// cannot be created.
    pub fn spawn<P, F>(self, system: InputSystem<P>, on_frame: F) -> Result<InputRuntime>
    where
        P: PlatformKeyCode,
        F: FnMut(&InputSystem<P>) + Send + 'static,
    {
        let (tx, rx) = bounded(self.config.channel_capacity);
        let frame_duration = Duration::from_secs_f64(1.0 / self.config.tps);

        let handle = thread::Builder::new()
            .name("aetheric-input".into())
            .spawn(move || run_frames(system, LifecycleCollector::new(rx), frame_duration, on_frame))?;

        info!(target: "input", "Input thread spawned (TPS: {})", self.config.tps);

        Ok(InputRuntime {
            lifecycle: tx,
            handle: Some(handle),
        })
    }
}

impl Default for InputRuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Frame Loop ==========================================================

fn run_frames<P, F>(
    mut system: InputSystem<P>,
    mut collector: LifecycleCollector,
    frame_duration: Duration,
    mut on_frame: F,
) where
    P: PlatformKeyCode,
    F: FnMut(&InputSystem<P>),
{
    loop {
        let frame_start = Instant::now();

        //--- Step 1: Lifecycle signals ------------------------------------
        if collector.collect_frame() == TickControl::Exit {
            info!(target: "input", "Input thread exiting");
            break;
        }
        for event in collector.events() {
            match event {
                LifecycleEvent::Paused => system.pause(),
                LifecycleEvent::Resumed => system.resume(),
                LifecycleEvent::Shutdown => {}
            }
        }

        //--- Step 2: Update -----------------------------------------------
        system.update();
        on_frame(&system);

        //--- Step 3: Fixed pacing -----------------------------------------
        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            thread::sleep(frame_duration - elapsed);
        }
    }
}

//=== InputRuntime ========================================================

/// Handle to a running frame thread.
///
/// Dropping the handle sends `Shutdown` and joins the thread.
#[derive(Debug)]
pub struct InputRuntime {
    lifecycle: Sender<LifecycleEvent>,
    handle: Option<thread::JoinHandle<()>>,
}

impl InputRuntime {
    /// Sender for lifecycle signals (e.g. for a [`Platform`](crate::platform::Platform)).
    pub fn lifecycle(&self) -> Sender<LifecycleEvent> {
        self.lifecycle.clone()
    }

    /// Whether the frame thread has exited.
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }

    /// Stops the frame thread and waits for it.
    pub fn shutdown(mut self) {
        self.stop();
    }

    fn stop(&mut self) {
        let Some(handle) = self.handle.take() else {
            return;
        };

        // Blocking send: a full channel drains within one tick. Fails only
        // if the thread already exited.
        let _ = self.lifecycle.send(LifecycleEvent::Shutdown);

        match handle.join() {
            Ok(()) => info!(target: "input", "Input thread terminated cleanly"),
            Err(e) => error!(target: "input", "Input thread panicked: {:?}", e),
        }
    }
}

impl Drop for InputRuntime {
    fn drop(&mut self) {
        self.stop();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::{InputSink, Key, Transition, VirtualKey};
    use crate::core::sensors::{
        AccelerometerReading, NoSensors, SensorKind, SimulatedSensor, SimulatedSensorProvider,
    };
    use crossbeam_channel::unbounded;
    use std::time::Duration;

    //=====================================================================
    // Builder Tests
    //=====================================================================

    #[test]
    fn builder_defaults() {
        let builder = InputRuntimeBuilder::new();
        assert_eq!(builder.config(), &InputConfig::default());
    }

    #[test]
    fn builder_fluent_api_chaining() {
        let builder = InputRuntimeBuilder::new()
            .with_tps(120.0)
            .with_channel_capacity(8)
            .with_sensor_update_rate(50.0);

        assert_eq!(builder.config().tps, 120.0);
        assert_eq!(builder.config().channel_capacity, 8);
        assert_eq!(builder.config().sensor_update_rate_hz, 50.0);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn builder_with_tps_panics_on_zero() {
        InputRuntimeBuilder::new().with_tps(0.0);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn builder_with_channel_capacity_panics_on_zero() {
        InputRuntimeBuilder::new().with_channel_capacity(0);
    }

    #[test]
    #[should_panic(expected = "Sensor update rate must be positive")]
    fn builder_with_sensor_rate_panics_on_negative() {
        InputRuntimeBuilder::new().with_sensor_update_rate(-1.0);
    }

    #[test]
    #[should_panic(expected = "tps must be positive")]
    fn builder_with_invalid_config_panics() {
        InputRuntimeBuilder::new().with_config(InputConfig { tps: 0.0, ..Default::default() });
    }

    #[test]
    fn build_uses_sensor_rate() {
        let system = InputRuntimeBuilder::new()
            .with_sensor_update_rate(50.0)
            .build::<VirtualKey, _>(&mut NoSensors);
        assert_eq!(system.sensors().desired_interval_ms(), 20);
    }

    //=====================================================================
    // Runtime Tests
    //=====================================================================

    #[test]
    fn runtime_delivers_frames() {
        let builder = InputRuntimeBuilder::new().with_tps(200.0);
        let system = builder.build::<VirtualKey, _>(&mut NoSensors);
        let sink = system.sink();

        let (tx, rx) = unbounded();
        let runtime = builder
            .spawn(system, move |system| {
                if system.state().is_key_pressed(Key::Space) {
                    let _ = tx.send(());
                }
            })
            .unwrap();

        sink.on_key(VirtualKey::SPACE, Transition::Down);
        assert!(rx.recv_timeout(Duration::from_secs(5)).is_ok(), "Press observed by a frame");

        runtime.shutdown();
    }

    #[test]
    fn runtime_applies_pause_and_resume() {
        let accelerometer = SimulatedSensor::<AccelerometerReading>::new(1);
        let mut provider = SimulatedSensorProvider::new().with_accelerometer(accelerometer.clone());

        let builder = InputRuntimeBuilder::new().with_tps(200.0);
        let mut system = builder.build::<VirtualKey, _>(&mut provider);
        assert!(system.sensors_mut().enable(SensorKind::Accelerometer));
        assert_eq!(accelerometer.interval(), 16);

        let (tx, rx) = unbounded();
        let runtime = builder
            .spawn(system, move |system| {
                let _ = tx.send(system.sensors().is_paused());
            })
            .unwrap();

        runtime.lifecycle().send(LifecycleEvent::Paused).unwrap();
        let paused = rx.iter().take(500).any(|paused| paused);
        assert!(paused, "Pause reaches the frame thread");
        assert_eq!(accelerometer.interval(), 0);

        runtime.lifecycle().send(LifecycleEvent::Resumed).unwrap();
        let resumed = rx.iter().take(500).any(|paused| !paused);
        assert!(resumed);
        assert_eq!(accelerometer.interval(), 16);

        runtime.shutdown();
    }

    #[test]
    fn shutdown_event_stops_thread() {
        let builder = InputRuntimeBuilder::new().with_tps(200.0);
        let system = builder.build::<VirtualKey, _>(&mut NoSensors);
        let runtime = builder.spawn(system, |_| {}).unwrap();

        runtime.lifecycle().send(LifecycleEvent::Shutdown).unwrap();

        let deadline = Instant::now() + Duration::from_secs(5);
        while !runtime.is_finished() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }
        assert!(runtime.is_finished());
    }

    #[test]
    fn drop_joins_thread() {
        let builder = InputRuntimeBuilder::new();
        let system = builder.build::<VirtualKey, _>(&mut NoSensors);
        let runtime = builder.spawn(system, |_| {}).unwrap();
        drop(runtime);
    }
}
