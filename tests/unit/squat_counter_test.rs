//! Unit tests for squat counting from pose landmarks.

use glam::Vec3;
use goalcraft::exercise::{Landmark, RepFeedback, SquatCounter};
use goalcraft::exercise::pose::{
    LEFT_ANKLE, LEFT_HIP, LEFT_KNEE, RIGHT_ANKLE, RIGHT_HIP, RIGHT_KNEE,
};

/// Full 33-point pose with both knees bent to the given angle.
fn pose(knee_angle_deg: f32, visibility: f32) -> Vec<Landmark> {
    let mut landmarks = vec![Landmark::new(Vec3::ZERO, 0.0); 33];
    let radians = knee_angle_deg.to_radians();

    let knee = Vec3::new(0.0, 0.5, 0.0);
    let hip = knee + Vec3::new(0.0, -0.4, 0.0);
    // Rotate the shin away from the thigh by the knee angle.
    let ankle = knee + Vec3::new(0.4 * radians.sin(), -0.4 * radians.cos(), 0.0);

    for (h, k, a) in [(LEFT_HIP, LEFT_KNEE, LEFT_ANKLE), (RIGHT_HIP, RIGHT_KNEE, RIGHT_ANKLE)] {
        landmarks[h] = Landmark::new(hip, visibility);
        landmarks[k] = Landmark::new(knee, visibility);
        landmarks[a] = Landmark::new(ankle, visibility);
    }
    landmarks
}

#[test]
fn test_counts_reps_from_landmarks() {
    let mut counter = SquatCounter::new();

    let mut reps = Vec::new();
    for _ in 0..3 {
        for angle in [175.0, 130.0, 90.0, 130.0, 175.0] {
            if let RepFeedback::Rep(n) = counter.update_pose(&pose(angle, 0.95)) {
                reps.push(n);
            }
        }
    }

    assert_eq!(reps, vec![1, 2, 3]);
    assert_eq!(counter.reps(), 3);
}

#[test]
fn test_low_visibility_pose_is_not_detected() {
    let mut counter = SquatCounter::new();
    assert_eq!(
        counter.update_pose(&pose(90.0, 0.3)),
        RepFeedback::NotDetected {
            left: true,
            right: true
        }
    );
    assert_eq!(counter.reps(), 0);

    let mut lenient = SquatCounter::with_min_visibility(0.2);
    assert_eq!(lenient.update_pose(&pose(90.0, 0.3)), RepFeedback::Rep(1));
}
