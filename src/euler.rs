//! Degree-based Euler angle conversions, XYZ axis order.
//!
//! Thin wrappers over glam's intrinsic Euler support, used by the
//! controller's absolute-orientation accessors and by hosts that
//! serialize orientations in degrees.

use glam::{EulerRot, Quat};

/// Decompose a quaternion into XYZ-order Euler angles in degrees.
///
/// Read-only projection; near the y = ±90° gimbal boundary the
/// decomposition is not unique and values may not round-trip exactly.
#[must_use]
pub fn quat_to_euler_deg(q: Quat) -> (f32, f32, f32) {
    let (x, y, z) = q.to_euler(EulerRot::XYZ);
    (x.to_degrees(), y.to_degrees(), z.to_degrees())
}

/// Build a unit quaternion from XYZ-order Euler angles in degrees.
#[must_use]
pub fn euler_deg_to_quat(x: f32, y: f32, z: f32) -> Quat {
    Quat::from_euler(
        EulerRot::XYZ,
        x.to_radians(),
        y.to_radians(),
        z.to_radians(),
    )
}
