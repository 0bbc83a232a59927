//=========================================================================
// Sensor Devices
//=========================================================================
//
// Contract for physical motion sensors as consumed by the poller.
//
// A `SensorProvider` hands out the default device of each kind (or `None`
// when the hardware is absent). A `SensorDevice` exposes a non-blocking
// snapshot read and a mutable report interval in milliseconds, where 0
// means "device default / idle".
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Quat;

//=== Readings ============================================================

/// Linear acceleration in g.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AccelerometerReading {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Angular velocity in degrees per second.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GyrometerReading {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Heading relative to magnetic north, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CompassReading {
    pub heading_magnetic_north: f64,
}

/// 3×3 rotation matrix as reported by the orientation sensor.
///
/// `mij` is row `i`, column `j` in the device's own (column-vector)
/// convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorRotationMatrix {
    pub m11: f32, pub m12: f32, pub m13: f32,
    pub m21: f32, pub m22: f32, pub m23: f32,
    pub m31: f32, pub m32: f32, pub m33: f32,
}

impl SensorRotationMatrix {
    pub const IDENTITY: Self = Self {
        m11: 1.0, m12: 0.0, m13: 0.0,
        m21: 0.0, m22: 1.0, m23: 0.0,
        m31: 0.0, m32: 0.0, m33: 1.0,
    };
}

impl Default for SensorRotationMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Device attitude.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrientationReading {
    pub quaternion: Quat,
    pub rotation_matrix: SensorRotationMatrix,
}

//=== SensorDevice ========================================================

/// A physical sensor.
pub trait SensorDevice<R>: Send {
    /// Latest sample, or `None` if the device has nothing to report.
    fn current_reading(&self) -> Option<R>;

    /// Fastest interval the hardware supports, in milliseconds.
    fn minimum_report_interval(&self) -> u32;

    /// Current report interval in milliseconds (0 = idle).
    fn report_interval(&self) -> u32;

    fn set_report_interval(&mut self, interval_ms: u32);
}

//=== SensorProvider ======================================================

/// Source of the default device for each physical sensor kind.
///
/// Called once when the poller is created; `None` marks the sensor as
/// unsupported for the lifetime of the poller.
pub trait SensorProvider {
    fn accelerometer(&mut self) -> Option<Box<dyn SensorDevice<AccelerometerReading>>>;
    fn gyrometer(&mut self) -> Option<Box<dyn SensorDevice<GyrometerReading>>>;
    fn compass(&mut self) -> Option<Box<dyn SensorDevice<CompassReading>>>;
    fn orientation(&mut self) -> Option<Box<dyn SensorDevice<OrientationReading>>>;
}

//=== NoSensors ===========================================================

/// Provider for platforms without motion sensors.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSensors;

impl SensorProvider for NoSensors {
    fn accelerometer(&mut self) -> Option<Box<dyn SensorDevice<AccelerometerReading>>> {
        None
    }

    fn gyrometer(&mut self) -> Option<Box<dyn SensorDevice<GyrometerReading>>> {
        None
    }

    fn compass(&mut self) -> Option<Box<dyn SensorDevice<CompassReading>>> {
        None
    }

    fn orientation(&mut self) -> Option<Box<dyn SensorDevice<OrientationReading>>> {
        None
    }
}
