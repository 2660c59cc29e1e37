//! Exercise tracking.
//!
//! Counts squat repetitions from pose landmarks so progress toward a
//! Squats challenge can be measured without manual entry.

pub mod counter;
pub mod pose;

pub use counter::{LegState, RepFeedback, SquatCounter};
pub use pose::{joint_angle, leg_angles, Landmark, DEFAULT_MIN_VISIBILITY};
