//! Arcball rotation control with release momentum for 3D viewers.
//!
//! Swivel lets a pointer drag across a 2D viewport reorient a 3D
//! object through the classic virtual-trackball model, and lets a
//! released drag keep spinning with a fixed decay schedule until the
//! motion dies out.
//!
//! # Key entry points
//!
//! - [`arcball::ArcballController`] - the rotation controller and its
//!   drag/momentum state machine
//! - [`orient::OrientableTarget`] - the trait a host scene node
//!   implements to receive orientations
//! - [`options::Options`] - runtime tuning (decay schedule, thresholds,
//!   nudge steps) with TOML presets
//!
//! # Architecture
//!
//! The controller is single-threaded and host-driven: an input layer
//! feeds pixel-space drag samples in, and the host's frame loop pumps
//! [`arcball::ArcballController::update`] with the current instant to
//! fire momentum ticks. The controller writes every accepted
//! orientation into the externally owned target and invokes an
//! optional redraw callback; nothing here blocks or locks.

pub mod arcball;
pub mod error;
pub mod euler;
pub mod options;
pub mod orient;
