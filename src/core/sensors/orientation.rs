//=========================================================================
// Orientation Math
//=========================================================================
//
// Conversions from raw orientation readings into engine quantities.
//
// Conventions:
// - The device reports its rotation matrix for column vectors; the engine
//   stores row vectors, so engine `Mij` is device `Mji`.
// - Euler angles use the aerospace sequence on the device quaternion.
// - Gravity points along the negated third row of the engine matrix.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::{Mat3, Quat, Vec3};

//=== Internal Dependencies ===============================================

use super::device::SensorRotationMatrix;

//=== EulerAngles =========================================================

/// Yaw / pitch / roll in radians.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EulerAngles {
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
}

impl EulerAngles {
    /// Extracts angles from a unit quaternion.
    ///
    /// The pitch argument is clamped to `[-1, 1]` so rounding near gimbal
    /// lock cannot produce NaN.
    pub fn from_quaternion(q: Quat) -> Self {
        let (x, y, z, w) = (q.x, q.y, q.z, q.w);

        Self {
            yaw: (2.0 * (w * x + y * z)).atan2(1.0 - 2.0 * (x * x + y * y)),
            pitch: (2.0 * (w * y - z * x)).clamp(-1.0, 1.0).asin(),
            roll: (2.0 * (w * z + x * y)).atan2(1.0 - 2.0 * (y * y + z * z)),
        }
    }
}

//=== Matrix Conversion ===================================================

/// Transposes the device matrix into the engine's row convention.
///
/// `Mat3` is column-major, so engine row `i` is built from device column
/// `i`, i.e. engine `Mij = device Mji`.
pub fn engine_rotation_matrix(m: &SensorRotationMatrix) -> Mat3 {
    Mat3::from_cols(
        Vec3::new(m.m11, m.m12, m.m13),
        Vec3::new(m.m21, m.m22, m.m23),
        Vec3::new(m.m31, m.m32, m.m33),
    )
}

//=== Gravity =============================================================

/// Unit gravity direction in device space: `(-M13, -M23, -M33)`.
pub fn gravity_direction(m: &SensorRotationMatrix) -> Vec3 {
    Vec3::new(-m.m13, -m.m23, -m.m33)
}

/// Projection of `acceleration` onto the gravity axis.
pub fn gravity(acceleration: Vec3, m: &SensorRotationMatrix) -> Vec3 {
    let direction = gravity_direction(m);
    acceleration.dot(direction) * direction
}

//=========================================================================
// Unit Tests
//=========================================================================
