//=========================================================================
// Sensors
//=========================================================================
//
// Motion sensor half of the input subsystem.
//
// Components:
// - `device`: Device and provider traits, raw reading types
// - `orientation`: Matrix convention change, Euler angles, gravity
// - `poller`: Logical sensors, consumer counting, interval policy, polling
// - `simulated`: Scriptable in-memory devices
//
//=========================================================================

//=== Module Declarations =================================================

pub mod device;
pub mod orientation;
pub mod poller;
pub mod simulated;

//=== Public API ==========================================================

pub use device::{
    AccelerometerReading, CompassReading, GyrometerReading, NoSensors, OrientationReading,
    SensorDevice, SensorProvider, SensorRotationMatrix,
};
pub use orientation::EulerAngles;
pub use poller::{OrientationValues, SensorKind, SensorPoller, SensorStatus, SensorValues};
pub use simulated::{SimulatedSensor, SimulatedSensorProvider};
