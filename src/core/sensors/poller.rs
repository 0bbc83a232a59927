//=========================================================================
// Sensor Poller
//=========================================================================
//
// Reads enabled motion sensors once per tick and keeps the latest values.
//
// Architecture:
// ```text
//  SensorProvider ──(once)──→ SensorPoller
//                               ├─ devices: accelerometer, gyrometer, compass, orientation
//                               ├─ status[SensorKind]: supported + consumer count
//                               └─ values: SensorValues (overwritten in place by poll())
// ```
//
// Gravity and UserAcceleration are derived from the orientation matrix and
// the raw acceleration; they are supported only when both devices exist.
//
// Report-interval policy, per device:
// - some dependent kind enabled → max(desired, device minimum)
// - no dependent enabled, or poller paused → 0 (idle)
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{Mat3, Quat, Vec3};
use log::{debug, info, warn};

//=== Internal Dependencies ===============================================

use super::device::{
    AccelerometerReading, CompassReading, GyrometerReading, OrientationReading, SensorDevice,
    SensorProvider, SensorRotationMatrix,
};
use super::orientation::{engine_rotation_matrix, gravity, EulerAngles};

//=== SensorKind ==========================================================

/// Logical sensors exposed to consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorKind {
    Accelerometer,
    Gyroscope,
    Compass,
    Orientation,
    Gravity,
    UserAcceleration,
}

impl SensorKind {
    pub const ALL: [SensorKind; 6] = [
        SensorKind::Accelerometer,
        SensorKind::Gyroscope,
        SensorKind::Compass,
        SensorKind::Orientation,
        SensorKind::Gravity,
        SensorKind::UserAcceleration,
    ];

    /// Computed from other sensors rather than sampled.
    pub fn is_derived(self) -> bool {
        matches!(self, SensorKind::Gravity | SensorKind::UserAcceleration)
    }

    fn index(self) -> usize {
        self as usize
    }

    fn devices(self) -> &'static [DeviceSlot] {
        match self {
            SensorKind::Accelerometer => &[DeviceSlot::Accelerometer],
            SensorKind::Gyroscope => &[DeviceSlot::Gyrometer],
            SensorKind::Compass => &[DeviceSlot::Compass],
            SensorKind::Orientation => &[DeviceSlot::Orientation],
            SensorKind::Gravity | SensorKind::UserAcceleration => {
                &[DeviceSlot::Orientation, DeviceSlot::Accelerometer]
            }
        }
    }
}

/// Physical devices backing the logical kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeviceSlot {
    Accelerometer,
    Gyrometer,
    Compass,
    Orientation,
}

//=== SensorStatus ========================================================

/// Support and enablement of one logical sensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SensorStatus {
    supported: bool,
    consumers: u32,
}

impl SensorStatus {
    pub fn is_supported(&self) -> bool {
        self.supported
    }

    pub fn is_enabled(&self) -> bool {
        self.consumers > 0
    }

    pub fn consumers(&self) -> u32 {
        self.consumers
    }
}

//=== SensorValues ========================================================

/// Device attitude in engine conventions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationValues {
    pub quaternion: Quat,
    /// Row-vector rotation matrix.
    pub rotation_matrix: Mat3,
    pub angles: EulerAngles,
}

impl Default for OrientationValues {
    fn default() -> Self {
        Self {
            quaternion: Quat::IDENTITY,
            rotation_matrix: Mat3::IDENTITY,
            angles: EulerAngles::default(),
        }
    }
}

/// Latest value of every logical sensor.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SensorValues {
    /// Acceleration in g.
    pub acceleration: Vec3,
    /// Angular velocity in degrees per second.
    pub rotation_rate: Vec3,
    /// Heading from magnetic north, radians.
    pub heading: f32,
    pub orientation: OrientationValues,
    pub gravity: Vec3,
    /// Acceleration with gravity removed.
    pub user_acceleration: Vec3,
}

//=== SensorPoller ========================================================

/// Owns the motion sensor devices and their logical state.
pub struct SensorPoller {
    accelerometer: Option<Box<dyn SensorDevice<AccelerometerReading>>>,
    gyrometer: Option<Box<dyn SensorDevice<GyrometerReading>>>,
    compass: Option<Box<dyn SensorDevice<CompassReading>>>,
    orientation: Option<Box<dyn SensorDevice<OrientationReading>>>,

    status: [SensorStatus; 6],
    values: SensorValues,

    desired_interval_ms: u32,
    paused: bool,

    //--- Last raw samples feeding the derived sensors --------------------
    last_acceleration: Option<Vec3>,
    last_rotation: Option<SensorRotationMatrix>,
}

impl SensorPoller {
    //--- Construction -----------------------------------------------------

    /// Acquires every device from `provider`; support is fixed from here on.
    ///
    /// `update_rate_hz` sets the desired interval to `trunc(1000 / rate)`
    /// milliseconds (0 for a non-positive rate).
    pub fn new<S: SensorProvider + ?Sized>(provider: &mut S, update_rate_hz: f32) -> Self {
        let desired_interval_ms = if update_rate_hz > 0.0 {
            (1000.0 / update_rate_hz) as u32
        } else {
            0
        };

        let mut poller = Self {
            accelerometer: provider.accelerometer(),
            gyrometer: provider.gyrometer(),
            compass: provider.compass(),
            orientation: provider.orientation(),
            status: [SensorStatus::default(); 6],
            values: SensorValues::default(),
            desired_interval_ms,
            paused: false,
            last_acceleration: None,
            last_rotation: None,
        };

        for kind in SensorKind::ALL {
            let supported = kind.devices().iter().all(|slot| poller.has_device(*slot));
            poller.status[kind.index()].supported = supported;
        }

        info!(
            target: "input::sensors",
            "Sensors: accelerometer={} gyroscope={} compass={} orientation={} (interval {} ms)",
            poller.is_supported(SensorKind::Accelerometer),
            poller.is_supported(SensorKind::Gyroscope),
            poller.is_supported(SensorKind::Compass),
            poller.is_supported(SensorKind::Orientation),
            desired_interval_ms,
        );

        poller
    }

    //--- Status -----------------------------------------------------------

    pub fn status(&self, kind: SensorKind) -> SensorStatus {
        self.status[kind.index()]
    }

    pub fn is_supported(&self, kind: SensorKind) -> bool {
        self.status(kind).is_supported()
    }

    pub fn is_enabled(&self, kind: SensorKind) -> bool {
        self.status(kind).is_enabled()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn values(&self) -> &SensorValues {
        &self.values
    }

    pub fn desired_interval_ms(&self) -> u32 {
        self.desired_interval_ms
    }

    //--- Enable / Disable -------------------------------------------------

    /// Adds a consumer to `kind`.
    ///
    /// Returns `false` (and changes nothing) when the sensor is unsupported.
    pub fn enable(&mut self, kind: SensorKind) -> bool {
        let status = &mut self.status[kind.index()];
        if !status.supported {
            warn!(target: "input::sensors", "Cannot enable {:?}: not supported on this device", kind);
            return false;
        }

        status.consumers += 1;
        if status.consumers == 1 {
            debug!(target: "input::sensors", "{:?} enabled", kind);
            self.apply_intervals();
        }
        true
    }

    /// Removes a consumer from `kind`; the last removal disables it.
    pub fn disable(&mut self, kind: SensorKind) {
        let status = &mut self.status[kind.index()];
        if status.consumers == 0 {
            return;
        }

        status.consumers -= 1;
        if status.consumers == 0 {
            debug!(target: "input::sensors", "{:?} disabled", kind);
            self.apply_intervals();
        }
    }

    //--- Power Management -------------------------------------------------

    /// Idles every device without touching enablement.
    pub fn pause(&mut self) {
        if self.paused {
            return;
        }
        self.paused = true;
        debug!(target: "input::sensors", "Sensors paused");
        self.apply_intervals();
    }

    /// Restores the intervals computed from current enablement.
    pub fn resume(&mut self) {
        if !self.paused {
            return;
        }
        self.paused = false;
        debug!(target: "input::sensors", "Sensors resumed");
        self.apply_intervals();
    }

    //--- Polling ----------------------------------------------------------

    /// Reads every enabled sensor and refreshes [`values`](Self::values).
    ///
    /// A device with no reading leaves the previous value in place.
    pub fn poll(&mut self) {
        let derived = self.is_enabled(SensorKind::Gravity) || self.is_enabled(SensorKind::UserAcceleration);

        if self.is_enabled(SensorKind::Accelerometer) || derived {
            if let Some(r) = self.accelerometer.as_ref().and_then(|d| d.current_reading()) {
                let acceleration = Vec3::new(r.x as f32, r.y as f32, r.z as f32);
                self.last_acceleration = Some(acceleration);
                if self.is_enabled(SensorKind::Accelerometer) {
                    self.values.acceleration = acceleration;
                }
            }
        }

        if self.is_enabled(SensorKind::Compass) {
            if let Some(r) = self.compass.as_ref().and_then(|d| d.current_reading()) {
                self.values.heading = r.heading_magnetic_north.to_radians() as f32;
            }
        }

        if self.is_enabled(SensorKind::Gyroscope) {
            if let Some(r) = self.gyrometer.as_ref().and_then(|d| d.current_reading()) {
                self.values.rotation_rate = Vec3::new(r.x as f32, r.y as f32, r.z as f32);
            }
        }

        if self.is_enabled(SensorKind::Orientation) || derived {
            if let Some(r) = self.orientation.as_ref().and_then(|d| d.current_reading()) {
                self.last_rotation = Some(r.rotation_matrix);
                if self.is_enabled(SensorKind::Orientation) {
                    self.values.orientation = OrientationValues {
                        quaternion: r.quaternion,
                        rotation_matrix: engine_rotation_matrix(&r.rotation_matrix),
                        angles: EulerAngles::from_quaternion(r.quaternion),
                    };
                }
            }
        }

        if derived {
            if let (Some(acceleration), Some(rotation)) = (self.last_acceleration, self.last_rotation) {
                let g = gravity(acceleration, &rotation);
                if self.is_enabled(SensorKind::Gravity) {
                    self.values.gravity = g;
                }
                if self.is_enabled(SensorKind::UserAcceleration) {
                    self.values.user_acceleration = acceleration - g;
                }
            }
        }
    }

    //--- Internal Helpers -------------------------------------------------

    fn has_device(&self, slot: DeviceSlot) -> bool {
        match slot {
            DeviceSlot::Accelerometer => self.accelerometer.is_some(),
            DeviceSlot::Gyrometer => self.gyrometer.is_some(),
            DeviceSlot::Compass => self.compass.is_some(),
            DeviceSlot::Orientation => self.orientation.is_some(),
        }
    }

    /// Whether any enabled kind depends on `slot`.
    fn is_slot_active(&self, slot: DeviceSlot) -> bool {
        SensorKind::ALL
            .iter()
            .any(|kind| self.is_enabled(*kind) && kind.devices().contains(&slot))
    }

    fn apply_intervals(&mut self) {
        let paused = self.paused;
        let desired = self.desired_interval_ms;

        let active = self.is_slot_active(DeviceSlot::Accelerometer);
        apply_interval(&mut self.accelerometer, "accelerometer", active && !paused, desired);

        let active = self.is_slot_active(DeviceSlot::Gyrometer);
        apply_interval(&mut self.gyrometer, "gyrometer", active && !paused, desired);

        let active = self.is_slot_active(DeviceSlot::Compass);
        apply_interval(&mut self.compass, "compass", active && !paused, desired);

        let active = self.is_slot_active(DeviceSlot::Orientation);
        apply_interval(&mut self.orientation, "orientation", active && !paused, desired);
    }
}

fn apply_interval<R>(
    device: &mut Option<Box<dyn SensorDevice<R>>>,
    name: &str,
    active: bool,
    desired: u32,
) {
    let Some(device) = device else {
        return;
    };

    let interval = if active {
        desired.max(device.minimum_report_interval())
    } else {
        0
    };

    if device.report_interval() != interval {
        debug!(target: "input::sensors", "{} report interval → {} ms", name, interval);
        device.set_report_interval(interval);
    }
}

impl std::fmt::Debug for SensorPoller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SensorPoller")
            .field("status", &self.status)
            .field("values", &self.values)
            .field("desired_interval_ms", &self.desired_interval_ms)
            .field("paused", &self.paused)
            .finish_non_exhaustive()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sensors::device::NoSensors;
    use crate::core::sensors::simulated::{SimulatedSensor, SimulatedSensorProvider};

    //--- Test Helpers -----------------------------------------------------

    struct Rig {
        accelerometer: SimulatedSensor<AccelerometerReading>,
        gyrometer: SimulatedSensor<GyrometerReading>,
        compass: SimulatedSensor<CompassReading>,
        orientation: SimulatedSensor<OrientationReading>,
        poller: SensorPoller,
    }

    /// All four devices; minimum intervals 10/20/30/40 ms, 60 Hz target (16 ms).
    fn rig() -> Rig {
        let accelerometer = SimulatedSensor::new(10);
        let gyrometer = SimulatedSensor::new(20);
        let compass = SimulatedSensor::new(30);
        let orientation = SimulatedSensor::new(40);

        let mut provider = SimulatedSensorProvider::new()
            .with_accelerometer(accelerometer.clone())
            .with_gyrometer(gyrometer.clone())
            .with_compass(compass.clone())
            .with_orientation(orientation.clone());

        let poller = SensorPoller::new(&mut provider, 60.0);
        Rig { accelerometer, gyrometer, compass, orientation, poller }
    }

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).abs().max_element() < 1e-5
    }

    //--- Support ----------------------------------------------------------

    #[test]
    fn nothing_supported_without_devices() {
        let mut poller = SensorPoller::new(&mut NoSensors, 60.0);
        for kind in SensorKind::ALL {
            assert!(!poller.is_supported(kind));
            assert!(!poller.enable(kind), "{:?} must refuse to enable", kind);
            assert!(!poller.is_enabled(kind));
        }
    }

    #[test]
    fn derived_support_is_and_of_dependencies() {
        let cases = [(false, false), (true, false), (false, true), (true, true)];

        for (has_accelerometer, has_orientation) in cases {
            let mut provider = SimulatedSensorProvider::new();
            if has_accelerometer {
                provider = provider.with_accelerometer(SimulatedSensor::new(0));
            }
            if has_orientation {
                provider = provider.with_orientation(SimulatedSensor::new(0));
            }

            let poller = SensorPoller::new(&mut provider, 60.0);
            let expected = has_accelerometer && has_orientation;
            assert_eq!(poller.is_supported(SensorKind::Gravity), expected);
            assert_eq!(poller.is_supported(SensorKind::UserAcceleration), expected);
            assert_eq!(poller.is_supported(SensorKind::Accelerometer), has_accelerometer);
            assert_eq!(poller.is_supported(SensorKind::Orientation), has_orientation);
        }
    }

    //--- Interval Policy --------------------------------------------------

    #[test]
    fn desired_interval_truncates() {
        assert_eq!(SensorPoller::new(&mut NoSensors, 60.0).desired_interval_ms(), 16);
        assert_eq!(SensorPoller::new(&mut NoSensors, 30.0).desired_interval_ms(), 33);
        assert_eq!(SensorPoller::new(&mut NoSensors, 0.0).desired_interval_ms(), 0);
    }

    #[test]
    fn interval_is_max_of_desired_and_minimum() {
        let mut rig = rig();
        assert!(rig.poller.enable(SensorKind::Accelerometer));
        assert!(rig.poller.enable(SensorKind::Gyroscope));

        assert_eq!(rig.accelerometer.interval(), 16, "Desired wins over 10 ms minimum");
        assert_eq!(rig.gyrometer.interval(), 20, "Minimum wins over 16 ms desired");
        assert_eq!(rig.compass.interval(), 0, "Untouched device stays idle");
    }

    #[test]
    fn derived_kind_activates_both_devices() {
        let mut rig = rig();
        rig.poller.enable(SensorKind::Gravity);
        assert_eq!(rig.accelerometer.interval(), 16);
        assert_eq!(rig.orientation.interval(), 40);

        rig.poller.enable(SensorKind::Accelerometer);
        rig.poller.disable(SensorKind::Gravity);
        assert_eq!(rig.accelerometer.interval(), 16, "Still needed by Accelerometer");
        assert_eq!(rig.orientation.interval(), 0, "No dependent left");
    }

    #[test]
    fn consumers_are_counted() {
        let mut rig = rig();
        rig.poller.enable(SensorKind::Compass);
        rig.poller.enable(SensorKind::Compass);
        assert_eq!(rig.poller.status(SensorKind::Compass).consumers(), 2);

        rig.poller.disable(SensorKind::Compass);
        assert!(rig.poller.is_enabled(SensorKind::Compass));
        assert_eq!(rig.compass.interval(), 30);

        rig.poller.disable(SensorKind::Compass);
        assert!(!rig.poller.is_enabled(SensorKind::Compass));
        assert_eq!(rig.compass.interval(), 0);

        rig.poller.disable(SensorKind::Compass);
        assert_eq!(rig.poller.status(SensorKind::Compass).consumers(), 0);
    }

    #[test]
    fn pause_idles_and_resume_restores() {
        let mut rig = rig();
        rig.poller.enable(SensorKind::Accelerometer);
        rig.poller.enable(SensorKind::Orientation);

        rig.poller.pause();
        assert!(rig.poller.is_paused());
        assert_eq!(rig.accelerometer.interval(), 0);
        assert_eq!(rig.orientation.interval(), 0);
        assert!(rig.poller.is_enabled(SensorKind::Accelerometer), "Pause is not a disable");

        // Enabling while paused takes effect on resume.
        rig.poller.enable(SensorKind::Compass);
        assert_eq!(rig.compass.interval(), 0);

        rig.poller.resume();
        assert_eq!(rig.accelerometer.interval(), 16);
        assert_eq!(rig.orientation.interval(), 40);
        assert_eq!(rig.compass.interval(), 30);
        assert_eq!(rig.gyrometer.interval(), 0);
    }

    //--- Polling ----------------------------------------------------------

    #[test]
    fn only_enabled_sensors_are_read() {
        let mut rig = rig();
        rig.accelerometer.set_reading(AccelerometerReading { x: 1.0, y: 2.0, z: 3.0 });
        rig.gyrometer.set_reading(GyrometerReading { x: 4.0, y: 5.0, z: 6.0 });

        rig.poller.enable(SensorKind::Gyroscope);
        rig.poller.poll();

        assert_eq!(rig.poller.values().acceleration, Vec3::ZERO);
        assert_eq!(rig.poller.values().rotation_rate, Vec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn compass_heading_in_radians() {
        let mut rig = rig();
        rig.compass.set_reading(CompassReading { heading_magnetic_north: 180.0 });
        rig.poller.enable(SensorKind::Compass);
        rig.poller.poll();

        assert!((rig.poller.values().heading - std::f32::consts::PI).abs() < 1e-5);
    }

    #[test]
    fn missing_reading_keeps_last_value() {
        let mut rig = rig();
        rig.poller.enable(SensorKind::Accelerometer);

        rig.accelerometer.set_reading(AccelerometerReading { x: 0.5, y: 0.0, z: -1.0 });
        rig.poller.poll();
        rig.accelerometer.clear_reading();
        rig.poller.poll();

        assert_eq!(rig.poller.values().acceleration, Vec3::new(0.5, 0.0, -1.0));
    }

    #[test]
    fn zero_rotation_orientation() {
        let mut rig = rig();
        rig.orientation.set_reading(OrientationReading {
            quaternion: Quat::IDENTITY,
            rotation_matrix: SensorRotationMatrix::IDENTITY,
        });
        rig.poller.enable(SensorKind::Orientation);
        rig.poller.poll();

        let orientation = rig.poller.values().orientation;
        assert!(orientation.angles.yaw.abs() < 1e-6);
        assert!(orientation.angles.pitch.abs() < 1e-6);
        assert!(orientation.angles.roll.abs() < 1e-6);
        assert_eq!(orientation.rotation_matrix, Mat3::IDENTITY);
    }

    #[test]
    fn gravity_and_user_acceleration() {
        let mut rig = rig();
        rig.accelerometer.set_reading(AccelerometerReading { x: 0.2, y: 0.0, z: -1.0 });
        rig.orientation.set_reading(OrientationReading {
            quaternion: Quat::IDENTITY,
            rotation_matrix: SensorRotationMatrix::IDENTITY,
        });

        rig.poller.enable(SensorKind::Gravity);
        rig.poller.enable(SensorKind::UserAcceleration);
        rig.poller.poll();

        let values = rig.poller.values();
        assert!(approx(values.gravity, Vec3::new(0.0, 0.0, -1.0)), "{:?}", values.gravity);
        assert!(approx(values.user_acceleration, Vec3::new(0.2, 0.0, 0.0)));
        assert_eq!(values.acceleration, Vec3::ZERO, "Accelerometer itself not enabled");
        assert_eq!(values.orientation, OrientationValues::default());
    }

    #[test]
    fn derived_values_wait_for_both_readings() {
        let mut rig = rig();
        rig.accelerometer.set_reading(AccelerometerReading { x: 0.0, y: 0.0, z: -1.0 });
        rig.poller.enable(SensorKind::Gravity);
        rig.poller.poll();

        assert_eq!(rig.poller.values().gravity, Vec3::ZERO);
    }
}
