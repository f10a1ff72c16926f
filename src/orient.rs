//! Boundary contracts between the controller and its host.

use glam::Quat;

/// Something whose orientation the controller may read and write.
///
/// The controller reads the orientation once at construction and writes
/// it on every accepted drag update, momentum tick, nudge, and Euler
/// set. Single-writer discipline is expected from callers: while a
/// controller drives a target, nothing else should mutate its
/// orientation, or updates are silently lost.
pub trait OrientableTarget {
    /// Current orientation as a unit quaternion.
    fn orientation(&self) -> Quat;
    /// Replace the orientation. `orientation` is always unit length.
    fn set_orientation(&mut self, orientation: Quat);
}

/// Zero-argument callback invoked after every visible orientation
/// change. Absence is legal (no-op).
pub type RedrawTrigger = Box<dyn FnMut()>;

/// Minimal orientable scene node.
///
/// Hosts with their own scene graph implement [`OrientableTarget`] on
/// their node type instead; this stand-in exists for tests and for
/// embedding without a scene graph.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelNode {
    /// Display name, for logging and debugging.
    pub name: String,
    /// Current orientation, unit-norm.
    pub orientation: Quat,
}

impl ModelNode {
    /// Node with identity orientation.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            orientation: Quat::IDENTITY,
        }
    }
}

impl OrientableTarget for ModelNode {
    fn orientation(&self) -> Quat {
        self.orientation
    }

    fn set_orientation(&mut self, orientation: Quat) {
        self.orientation = orientation;
    }
}
