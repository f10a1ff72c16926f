//! Arcball (virtual trackball) rotation control.
//!
//! Maps pointer drags across a 2D viewport onto great-circle rotations
//! of a 3D target, and lets released drags continue as decaying
//! rotational momentum.

/// Decaying momentum state and the fixed-interval tick pacer.
pub(crate) mod momentum;
/// Pure screen-to-sphere projection functions.
pub mod projection;

use glam::{Quat, Vec2, Vec3};
use web_time::{Duration, Instant};

use self::momentum::Momentum;
pub use self::projection::{BallGeometry, ViewBounds};
use crate::euler;
use crate::options::ControlOptions;
use crate::orient::{OrientableTarget, RedrawTrigger};

/// Cross products shorter than this are treated as parallel samples and
/// the update is skipped; normalizing them would be unstable.
const AXIS_EPSILON: f32 = 1e-4;

/// Arcball rotation controller for a single orientable target.
///
/// The controller owns the interaction state machine (idle, dragging,
/// momentum) and writes orientations into an externally owned
/// [`OrientableTarget`]. Input coordinates are viewport pixels, origin
/// top-left, y-down; the host input layer feeds them in via
/// [`begin_drag`](Self::begin_drag) /
/// [`update_drag`](Self::update_drag) /
/// [`end_drag`](Self::end_drag), and the host render loop pumps
/// momentum via [`update`](Self::update).
///
/// All operations run on one logical thread; nothing here blocks or
/// locks. Callers must not mutate the target's orientation while a
/// controller is driving it.
pub struct ArcballController {
    bounds: ViewBounds,
    ball: BallGeometry,
    options: ControlOptions,

    /// Orientation currently applied to the target.
    orientation: Quat,
    /// Snapshot used as the left-composition base for the next
    /// incremental rotation. Frozen at drag start, re-based on every
    /// momentum tick, nudge, and Euler set.
    drag_base: Quat,

    dragging: bool,
    /// Ball vector of the drag's first sample.
    drag_start_vec: Vec3,
    /// Rotation axis from the most recent accepted drag update, reused
    /// when momentum starts.
    last_axis: Vec3,

    momentum: Option<Momentum>,
    redraw: Option<RedrawTrigger>,
}

impl ArcballController {
    /// Controller for `target`, reading its orientation as the initial
    /// current and drag-base values.
    pub fn new(
        target: &dyn OrientableTarget,
        bounds: ViewBounds,
        options: ControlOptions,
    ) -> Self {
        let orientation = target.orientation();
        Self {
            bounds,
            ball: BallGeometry::default(),
            options,
            orientation,
            drag_base: orientation,
            dragging: false,
            drag_start_vec: Vec3::ZERO,
            last_axis: Vec3::ZERO,
            momentum: None,
            redraw: None,
        }
    }

    /// Install the redraw callback, invoked after every visible
    /// orientation change.
    pub fn set_redraw_trigger(&mut self, trigger: RedrawTrigger) {
        self.redraw = Some(trigger);
    }

    /// Replace the viewport bounds. Safe mid-drag; only the mapping of
    /// future samples changes.
    pub fn reshape(&mut self, bounds: ViewBounds) {
        self.bounds = bounds;
    }

    /// Re-place the virtual sphere. Defaults to a unit sphere at the
    /// viewport center.
    pub fn set_ball_geometry(&mut self, ball: BallGeometry) {
        self.ball = ball;
    }

    /// Orientation currently applied to the target.
    #[must_use]
    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    /// True while a drag is in progress or momentum is still decaying,
    /// i.e. whenever the controller is mutating the target on its own
    /// or under pointer control.
    #[must_use]
    pub fn is_rotating(&self) -> bool {
        self.dragging || self.momentum.is_some()
    }

    // ── Drag lifecycle ──────────────────────────────────────────────────

    /// Begin a drag at `point`. Cancels any in-flight momentum.
    pub fn begin_drag(&mut self, point: Vec2) {
        if self.momentum.take().is_some() {
            log::debug!("momentum cancelled by new drag");
        }
        self.dragging = true;
        self.drag_start_vec =
            projection::point_on_ball(point, self.bounds, self.ball);
    }

    /// Update the active drag with a new pointer sample.
    ///
    /// Recomputes the rotation from the fixed start vector and drag
    /// base each time, so consecutive updates accumulate without
    /// integration drift. Samples projecting parallel to the start
    /// vector are skipped outright: no mutation, no redraw.
    pub fn update_drag(
        &mut self,
        point: Vec2,
        target: &mut dyn OrientableTarget,
    ) {
        if !self.dragging {
            return;
        }
        let end = projection::point_on_ball(point, self.bounds, self.ball);
        let Some((axis, angle)) = rotation_between(self.drag_start_vec, end)
        else {
            return;
        };
        self.last_axis = axis;
        // Left-multiplying expresses the increment in the pre-drag
        // frame, not the object's local frame.
        self.orientation = Quat::from_axis_angle(axis, angle) * self.drag_base;
        target.set_orientation(self.orientation);
        self.request_redraw();
    }

    /// End the active drag, committing the current orientation and
    /// possibly starting momentum.
    ///
    /// `velocity` is the pointer velocity at release in pixels/sec;
    /// `location` is the release position. Momentum starts only when
    /// the fling is fast enough and the projected per-tick angle is
    /// perceptible.
    pub fn end_drag(&mut self, velocity: Vec2, location: Vec2) {
        self.dragging = false;
        self.drag_base = self.orientation;

        if velocity.length() < self.options.min_release_speed {
            return;
        }
        // No accepted drag update means no axis to spin about.
        if self.last_axis.length_squared() < AXIS_EPSILON {
            return;
        }

        // Where the pointer would land after one tick at the release
        // velocity.
        let flung = location + velocity * self.options.rotation_rate;
        let from = projection::point_on_ball(location, self.bounds, self.ball);
        let to = projection::point_on_ball(flung, self.bounds, self.ball);
        let angle = from.dot(to).clamp(-1.0, 1.0).acos();
        if angle < self.options.min_momentum_angle {
            return;
        }

        log::debug!(
            "starting momentum: {angle:.4} rad about {:?}",
            self.last_axis
        );
        self.momentum = Some(Momentum::new(
            self.last_axis,
            angle,
            Duration::from_secs_f32(self.options.rotation_rate),
            Instant::now(),
        ));
    }

    /// Cancel any drag or momentum outright. Idempotent.
    pub fn stop_drag(&mut self) {
        self.momentum = None;
        self.dragging = false;
        self.drag_start_vec = Vec3::ZERO;
    }

    // ── Momentum pump ───────────────────────────────────────────────────

    /// Advance the momentum animation to `now`, firing one tick per
    /// elapsed interval. Call from the host's frame loop. Returns
    /// whether momentum is still active.
    pub fn update(
        &mut self,
        now: Instant,
        target: &mut dyn OrientableTarget,
    ) -> bool {
        while let Some(momentum) = self.momentum.as_mut() {
            if !momentum.pacer.tick_due(now) {
                break;
            }
            self.momentum_tick(target);
        }
        self.momentum.is_some()
    }

    /// One momentum tick: decrement the remaining angle, rotate, and
    /// re-base.
    ///
    /// Re-basing the drag snapshot each tick keeps the applied rotation
    /// genuinely incremental in the model's evolving frame, rather than
    /// recomputing a huge rotation from a stale base. It is also what
    /// folds a mid-momentum nudge into the next tick instead of losing
    /// it.
    fn momentum_tick(&mut self, target: &mut dyn OrientableTarget) {
        let rate = self.options.deceleration_rate;
        let Some(momentum) = self.momentum.as_mut() else {
            return;
        };
        if momentum.finished() {
            log::debug!("momentum finished");
            self.momentum = None;
            return;
        }
        momentum.decay(rate);
        let rotation =
            Quat::from_axis_angle(momentum.axis, momentum.remaining);
        self.orientation = rotation * self.drag_base;
        self.drag_base = self.orientation;
        target.set_orientation(self.orientation);
        self.request_redraw();
    }

    // ── Discrete nudges ─────────────────────────────────────────────────

    /// Yaw the target clockwise (seen from above) by the configured
    /// step.
    pub fn rotate_clockwise(&mut self, target: &mut dyn OrientableTarget) {
        self.rotate_about(target, Vec3::Y, -self.options.yaw_step_deg);
    }

    /// Yaw the target counterclockwise by the configured step.
    pub fn rotate_counterclockwise(
        &mut self,
        target: &mut dyn OrientableTarget,
    ) {
        self.rotate_about(target, Vec3::Y, self.options.yaw_step_deg);
    }

    /// Tip the target's top away from the viewer by the configured
    /// pitch step.
    pub fn nudge_pitch_up(&mut self, target: &mut dyn OrientableTarget) {
        self.rotate_about(target, Vec3::X, -self.options.pitch_step_deg);
    }

    /// Tip the target's top toward the viewer by the configured pitch
    /// step.
    pub fn nudge_pitch_down(&mut self, target: &mut dyn OrientableTarget) {
        self.rotate_about(target, Vec3::X, self.options.pitch_step_deg);
    }

    /// Roll the target about the view axis by the configured step.
    pub fn nudge_roll(&mut self, target: &mut dyn OrientableTarget) {
        self.rotate_about(target, Vec3::Z, self.options.roll_step_deg);
    }

    /// Compose a fixed world-axis rotation onto the current
    /// orientation.
    ///
    /// Writes the result to both the current orientation and the drag
    /// base, so a subsequent drag starts from the nudged baseline.
    /// Usable from any state; an in-flight momentum animation is not
    /// cancelled, its next tick re-bases from the nudged orientation.
    pub fn rotate_about(
        &mut self,
        target: &mut dyn OrientableTarget,
        axis: Vec3,
        degrees: f32,
    ) {
        let rotation = Quat::from_axis_angle(axis, degrees.to_radians());
        self.orientation = rotation * self.orientation;
        self.drag_base = self.orientation;
        target.set_orientation(self.orientation);
        self.request_redraw();
    }

    // ── Euler accessors ─────────────────────────────────────────────────

    /// The target's orientation as XYZ-order Euler angles in degrees.
    /// Read-only; controller state is untouched.
    #[must_use]
    pub fn rotation_euler(
        &self,
        target: &dyn OrientableTarget,
    ) -> (f32, f32, f32) {
        euler::quat_to_euler_deg(target.orientation())
    }

    /// Absolute-orientation reset from XYZ-order Euler angles in
    /// degrees. Replaces both the current orientation and the drag
    /// base; not a composition.
    pub fn set_rotation_euler(
        &mut self,
        target: &mut dyn OrientableTarget,
        x: f32,
        y: f32,
        z: f32,
    ) {
        let q = euler::euler_deg_to_quat(x, y, z);
        self.orientation = q;
        self.drag_base = q;
        target.set_orientation(q);
        self.request_redraw();
    }

    fn request_redraw(&mut self) {
        if let Some(trigger) = self.redraw.as_mut() {
            trigger();
        }
    }
}

impl std::fmt::Debug for ArcballController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArcballController")
            .field("bounds", &self.bounds)
            .field("dragging", &self.dragging)
            .field("momentum_active", &self.momentum.is_some())
            .field("orientation", &self.orientation)
            .finish_non_exhaustive()
    }
}

/// Axis and angle rotating unit vector `from` onto unit vector `to`.
///
/// Returns `None` when the cross product is too short to normalize
/// (parallel or anti-parallel samples). The dot product is clamped to
/// the arccosine domain so floating-point overshoot never yields NaN;
/// the angle is always in `[0, π]`.
fn rotation_between(from: Vec3, to: Vec3) -> Option<(Vec3, f32)> {
    let axis = from.cross(to);
    if axis.length() < AXIS_EPSILON {
        return None;
    }
    let angle = from.dot(to).clamp(-1.0, 1.0).acos();
    Some((axis.normalize(), angle))
}
