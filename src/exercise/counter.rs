//! Squat repetition counter.
//!
//! Each leg is classified from its knee angle. A rep is counted when both
//! legs settle in the squat range after having last settled upright.

use crate::goals::types::ChallengeSelection;

use super::pose::{leg_angles, Landmark, DEFAULT_MIN_VISIBILITY};

/// Knee angle below which a leg is in the squat range.
pub const SQUAT_MAX_ANGLE: f32 = 105.0;
/// Knee angle below which a leg is still transitioning.
pub const TRANSITION_MAX_ANGLE: f32 = 150.0;

/// Position of one leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegState {
    NotDetected,
    Squat,
    Transition,
    Upright,
}

impl LegState {
    /// Classify a knee angle in degrees.
    pub fn from_angle(angle: Option<f32>) -> Self {
        match angle {
            None => LegState::NotDetected,
            Some(a) if a < SQUAT_MAX_ANGLE => LegState::Squat,
            Some(a) if a < TRANSITION_MAX_ANGLE => LegState::Transition,
            Some(_) => LegState::Upright,
        }
    }
}

/// Guidance produced for each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepFeedback {
    /// One or both legs are not visible
    NotDetected { left: bool, right: bool },
    /// Coming up from a squat; the flagged legs still need to straighten
    FullyExtend { left: bool, right: bool },
    /// Going down; the flagged legs still need to bend
    FullyRetract { left: bool, right: bool },
    /// A rep was completed; carries the new total
    Rep(u32),
    /// Legs settled in the same position as before
    Holding,
}

/// Counts squats from per-frame knee angles.
#[derive(Debug, Clone)]
pub struct SquatCounter {
    reps: u32,
    settled: LegState,
    min_visibility: f32,
}

impl Default for SquatCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl SquatCounter {
    /// Create a counter starting upright.
    pub fn new() -> Self {
        Self::with_min_visibility(DEFAULT_MIN_VISIBILITY)
    }

    pub fn with_min_visibility(min_visibility: f32) -> Self {
        Self {
            reps: 0,
            settled: LegState::Upright,
            min_visibility,
        }
    }

    pub fn reps(&self) -> u32 {
        self.reps
    }

    /// Last position both legs settled in.
    pub fn settled(&self) -> LegState {
        self.settled
    }

    /// Process one frame of knee angles.
    pub fn update(&mut self, left: Option<f32>, right: Option<f32>) -> RepFeedback {
        let l = LegState::from_angle(left);
        let r = LegState::from_angle(right);

        if l == LegState::NotDetected || r == LegState::NotDetected {
            return RepFeedback::NotDetected {
                left: l == LegState::NotDetected,
                right: r == LegState::NotDetected,
            };
        }

        if l != r || l == LegState::Transition {
            return if self.settled == LegState::Squat {
                RepFeedback::FullyExtend {
                    left: l != LegState::Upright,
                    right: r != LegState::Upright,
                }
            } else {
                RepFeedback::FullyRetract {
                    left: l != LegState::Squat,
                    right: r != LegState::Squat,
                }
            };
        }

        if l == self.settled {
            return RepFeedback::Holding;
        }

        self.settled = l;
        if l == LegState::Squat {
            self.reps += 1;
            tracing::debug!("Squat rep {}", self.reps);
            RepFeedback::Rep(self.reps)
        } else {
            RepFeedback::Holding
        }
    }

    /// Process one frame of pose landmarks.
    pub fn update_pose(&mut self, landmarks: &[Landmark]) -> RepFeedback {
        let (left, right) = leg_angles(landmarks, self.min_visibility);
        self.update(left, right)
    }

    /// Progress toward a challenge target (0-100).
    pub fn progress_toward(&self, selection: &ChallengeSelection) -> f32 {
        selection.progress_percent(self.reps as f64)
    }

    /// Start counting again from zero.
    pub fn reset(&mut self) {
        self.reps = 0;
        self.settled = LegState::Upright;
    }
}
