//! Pose landmark geometry.
//!
//! Landmarks follow the 33-point body pose layout; only the hip, knee and
//! ankle points are used for leg angles.

use glam::Vec3;

/// Minimum landmark visibility for an angle to be trusted.
pub const DEFAULT_MIN_VISIBILITY: f32 = 0.8;

pub const LEFT_HIP: usize = 23;
pub const RIGHT_HIP: usize = 24;
pub const LEFT_KNEE: usize = 25;
pub const RIGHT_KNEE: usize = 26;
pub const LEFT_ANKLE: usize = 27;
pub const RIGHT_ANKLE: usize = 28;

/// A tracked body point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landmark {
    /// Normalized position
    pub position: Vec3,
    /// Detection confidence (0-1)
    pub visibility: f32,
}

impl Landmark {
    pub fn new(position: Vec3, visibility: f32) -> Self {
        Self {
            position,
            visibility,
        }
    }
}

/// Angle at `b` between `a` and `c`, in degrees (0-180).
///
/// Returns `None` when any landmark is at or below `min_visibility` or
/// when two points coincide.
pub fn joint_angle(a: &Landmark, b: &Landmark, c: &Landmark, min_visibility: f32) -> Option<f32> {
    if [a, b, c].iter().any(|l| l.visibility <= min_visibility) {
        return None;
    }

    let ba = a.position - b.position;
    let bc = c.position - b.position;
    let norms = ba.length() * bc.length();
    if norms <= f32::EPSILON {
        return None;
    }

    let cos = (ba.dot(bc) / norms).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees())
}

/// Knee angles (left, right) from a full landmark set.
pub fn leg_angles(landmarks: &[Landmark], min_visibility: f32) -> (Option<f32>, Option<f32>) {
    let angle = |hip: usize, knee: usize, ankle: usize| match (
        landmarks.get(hip),
        landmarks.get(knee),
        landmarks.get(ankle),
    ) {
        (Some(h), Some(k), Some(a)) => joint_angle(h, k, a, min_visibility),
        _ => None,
    };

    (
        angle(LEFT_HIP, LEFT_KNEE, LEFT_ANKLE),
        angle(RIGHT_HIP, RIGHT_KNEE, RIGHT_ANKLE),
    )
}
