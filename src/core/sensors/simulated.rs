//=========================================================================
// Simulated Sensors
//=========================================================================
//
// In-memory sensor devices for headless runs and tests.
//
// A `SimulatedSensor` is a cheap handle: clones share the same state, so a
// test keeps one clone to script readings while the poller owns another.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

//=== Internal Dependencies ===============================================

use super::device::{
    AccelerometerReading, CompassReading, GyrometerReading, OrientationReading, SensorDevice,
    SensorProvider,
};

//=== SimulatedSensor =====================================================

#[derive(Debug)]
struct SimulatedState<R> {
    reading: Option<R>,
    minimum_report_interval: u32,
    report_interval: u32,
}

/// Scriptable sensor device.
#[derive(Debug)]
pub struct SimulatedSensor<R> {
    state: Arc<Mutex<SimulatedState<R>>>,
}

impl<R> Clone for SimulatedSensor<R> {
    fn clone(&self) -> Self {
        Self { state: Arc::clone(&self.state) }
    }
}

impl<R: Copy> SimulatedSensor<R> {
    /// Creates a device with no reading yet.
    pub fn new(minimum_report_interval: u32) -> Self {
        Self {
            state: Arc::new(Mutex::new(SimulatedState {
                reading: None,
                minimum_report_interval,
                report_interval: 0,
            })),
        }
    }

    pub fn set_reading(&self, reading: R) {
        self.lock().reading = Some(reading);
    }

    /// Makes subsequent reads report nothing.
    pub fn clear_reading(&self) {
        self.lock().reading = None;
    }

    /// Interval last applied by the poller.
    pub fn interval(&self) -> u32 {
        self.lock().report_interval
    }

    fn lock(&self) -> MutexGuard<'_, SimulatedState<R>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R: Copy + Send + 'static> SensorDevice<R> for SimulatedSensor<R> {
    fn current_reading(&self) -> Option<R> {
        self.lock().reading
    }

    fn minimum_report_interval(&self) -> u32 {
        self.lock().minimum_report_interval
    }

    fn report_interval(&self) -> u32 {
        self.lock().report_interval
    }

    fn set_report_interval(&mut self, interval_ms: u32) {
        self.lock().report_interval = interval_ms;
    }
}

//=== SimulatedSensorProvider =============================================

/// Provider handing out clones of the configured simulated devices.
#[derive(Debug, Clone, Default)]
pub struct SimulatedSensorProvider {
    accelerometer: Option<SimulatedSensor<AccelerometerReading>>,
    gyrometer: Option<SimulatedSensor<GyrometerReading>>,
    compass: Option<SimulatedSensor<CompassReading>>,
    orientation: Option<SimulatedSensor<OrientationReading>>,
}

impl SimulatedSensorProvider {
    /// Provider with no devices.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_accelerometer(mut self, sensor: SimulatedSensor<AccelerometerReading>) -> Self {
        self.accelerometer = Some(sensor);
        self
    }

    pub fn with_gyrometer(mut self, sensor: SimulatedSensor<GyrometerReading>) -> Self {
        self.gyrometer = Some(sensor);
        self
    }

    pub fn with_compass(mut self, sensor: SimulatedSensor<CompassReading>) -> Self {
        self.compass = Some(sensor);
        self
    }

    pub fn with_orientation(mut self, sensor: SimulatedSensor<OrientationReading>) -> Self {
        self.orientation = Some(sensor);
        self
    }
}

fn boxed<R: Copy + Send + 'static>(
    sensor: &Option<SimulatedSensor<R>>,
) -> Option<Box<dyn SensorDevice<R>>> {
    sensor
        .as_ref()
        .map(|s| Box::new(s.clone()) as Box<dyn SensorDevice<R>>)
}

impl SensorProvider for SimulatedSensorProvider {
    fn accelerometer(&mut self) -> Option<Box<dyn SensorDevice<AccelerometerReading>>> {
        boxed(&self.accelerometer)
    }

    fn gyrometer(&mut self) -> Option<Box<dyn SensorDevice<GyrometerReading>>> {
        boxed(&self.gyrometer)
    }

    fn compass(&mut self) -> Option<Box<dyn SensorDevice<CompassReading>>> {
        boxed(&self.compass)
    }

    fn orientation(&mut self) -> Option<Box<dyn SensorDevice<OrientationReading>>> {
        boxed(&self.orientation)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let sensor = SimulatedSensor::<CompassReading>::new(16);
        let mut device: Box<dyn SensorDevice<CompassReading>> = Box::new(sensor.clone());

        assert_eq!(device.current_reading(), None);
        sensor.set_reading(CompassReading { heading_magnetic_north: 90.0 });
        assert_eq!(device.current_reading().map(|r| r.heading_magnetic_north), Some(90.0));

        device.set_report_interval(20);
        assert_eq!(sensor.interval(), 20);
        assert_eq!(device.minimum_report_interval(), 16);

        sensor.clear_reading();
        assert_eq!(device.current_reading(), None);
    }

    #[test]
    fn provider_reports_only_configured_devices() {
        let mut provider = SimulatedSensorProvider::new()
            .with_accelerometer(SimulatedSensor::new(10));

        assert!(provider.accelerometer().is_some());
        assert!(provider.gyrometer().is_none());
        assert!(provider.compass().is_none());
        assert!(provider.orientation().is_none());
    }
}
