//! Screen-to-sphere projection for the virtual trackball.
//!
//! Maps 2D pointer positions onto a unit sphere so that pointer motion
//! can be interpreted as great-circle rotation. Two variants exist: the
//! XY-plane mapping used by interactive dragging, and an XZ-plane
//! mapping for callers that rotate about the ground plane instead of
//! the viewing plane (e.g. light repositioning).

use glam::{Vec2, Vec3};

/// Viewport dimensions, in the same units as pointer coordinates.
///
/// Callers must supply positive dimensions; zero or negative bounds are
/// a caller error, not a recovered condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewBounds {
    /// Viewport width in pixels.
    pub width: f32,
    /// Viewport height in pixels.
    pub height: f32,
}

impl ViewBounds {
    /// Bounds from a width/height pair.
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Placement of the virtual sphere in normalized device space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallGeometry {
    /// Sphere center in normalized device coordinates.
    pub center: Vec2,
    /// Sphere radius in normalized device units.
    pub radius: f32,
}

impl Default for BallGeometry {
    fn default() -> Self {
        Self {
            center: Vec2::ZERO,
            radius: 1.0,
        }
    }
}

/// Normalize a screen point into ball-local coordinates.
///
/// Both axes are scaled by the *larger* viewport dimension so the
/// sphere stays round on non-square viewports, and the vertical axis is
/// flipped from screen-space y-down to math y-up.
fn ball_local(p: Vec2, bounds: ViewBounds, ball: BallGeometry) -> Vec2 {
    let scale = bounds.width.max(bounds.height) * 0.5;
    let x = (p.x - bounds.width * 0.5) / scale;
    let y = -(p.y - bounds.height * 0.5) / scale;
    (Vec2::new(x, y) - ball.center) / ball.radius
}

/// Project a screen point onto the virtual sphere (XY-plane variant).
///
/// Points inside the sphere's silhouette land on the front hemisphere
/// (`z = √(1 - x² - y²)`); points outside are pulled back to the
/// equator (`z = 0`). The result is always unit length.
#[must_use]
pub fn point_on_ball(p: Vec2, bounds: ViewBounds, ball: BallGeometry) -> Vec3 {
    let q = ball_local(p, bounds, ball);
    let m = q.length_squared();
    if m > 1.0 {
        let q = q / m.sqrt();
        Vec3::new(q.x, q.y, 0.0)
    } else {
        Vec3::new(q.x, q.y, (1.0 - m).sqrt())
    }
}

/// Project a screen point onto the virtual sphere (XZ-plane variant).
///
/// Swaps the role and sign of the out-of-plane coordinate relative to
/// [`point_on_ball`]: screen-vertical motion maps to the Z axis and the
/// hemisphere bulges toward -Y. Used by callers rotating about the
/// ground plane rather than the viewing plane.
#[must_use]
pub fn point_on_ball_xz(
    p: Vec2,
    bounds: ViewBounds,
    ball: BallGeometry,
) -> Vec3 {
    let q = ball_local(p, bounds, ball);
    let m = q.length_squared();
    if m > 1.0 {
        let q = q / m.sqrt();
        Vec3::new(q.x, 0.0, q.y)
    } else {
        Vec3::new(q.x, -(1.0 - m).sqrt(), q.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: ViewBounds = ViewBounds::new(800.0, 600.0);

    fn ball() -> BallGeometry {
        BallGeometry::default()
    }

    #[test]
    fn test_center_maps_to_pole() {
        let v = point_on_ball(Vec2::new(400.0, 300.0), BOUNDS, ball());
        assert!((v - Vec3::Z).length() < 1e-6);
    }

    #[test]
    fn test_projection_is_unit_length() {
        // On-ball, off-ball, corners, and degenerate samples.
        let samples = [
            Vec2::new(400.0, 300.0),
            Vec2::new(600.0, 300.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(800.0, 600.0),
            Vec2::new(-500.0, 1200.0),
            Vec2::new(400.0, 0.0),
            Vec2::new(400.1, 300.1),
        ];
        for p in samples {
            let v = point_on_ball(p, BOUNDS, ball());
            assert!(
                (v.length() - 1.0).abs() < 1e-6,
                "xy projection of {p:?} has length {}",
                v.length()
            );
            let v = point_on_ball_xz(p, BOUNDS, ball());
            assert!(
                (v.length() - 1.0).abs() < 1e-6,
                "xz projection of {p:?} has length {}",
                v.length()
            );
        }
    }

    #[test]
    fn test_larger_dimension_scales_both_axes() {
        // 200px right of center on an 800-wide viewport is 0.5 in ball
        // space regardless of the viewport height.
        let v = point_on_ball(Vec2::new(600.0, 300.0), BOUNDS, ball());
        assert!((v.x - 0.5).abs() < 1e-6);
        assert!(v.y.abs() < 1e-6);

        // Same pixel offset downward uses the same scale (the larger
        // dimension), so it also lands at 0.5 — sphere stays round.
        let v = point_on_ball(Vec2::new(400.0, 500.0), BOUNDS, ball());
        assert!((v.y + 0.5).abs() < 1e-6);
        assert!(v.x.abs() < 1e-6);
    }

    #[test]
    fn test_vertical_axis_is_flipped() {
        // Screen-up (smaller y) maps to +y in ball space.
        let v = point_on_ball(Vec2::new(400.0, 100.0), BOUNDS, ball());
        assert!(v.y > 0.0);
    }

    #[test]
    fn test_outside_silhouette_lands_on_equator() {
        let v = point_on_ball(Vec2::new(800.0, 300.0), BOUNDS, ball());
        assert_eq!(v.z, 0.0);
        assert!((v.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_xz_variant_swaps_out_of_plane_axis() {
        let v = point_on_ball_xz(Vec2::new(400.0, 300.0), BOUNDS, ball());
        assert!((v - Vec3::new(0.0, -1.0, 0.0)).length() < 1e-6);

        // Screen-vertical motion maps to the z axis.
        let v = point_on_ball_xz(Vec2::new(400.0, 100.0), BOUNDS, ball());
        assert!(v.z > 0.0);
        assert!(v.y < 0.0);
    }

    #[test]
    fn test_ball_geometry_offsets_center() {
        let off_center = BallGeometry {
            center: Vec2::new(0.5, 0.0),
            radius: 1.0,
        };
        let v = point_on_ball(Vec2::new(600.0, 300.0), BOUNDS, off_center);
        assert!((v - Vec3::Z).length() < 1e-6);
    }
}
