//! Goalcraft - Fitness Goal Tracker
//!
//! Build goals from free-text parameters and predefined challenges
//! (pushups, squats, run distance, situps) through a three stage wizard,
//! then track them from pending to completed.

pub mod exercise;
pub mod goals;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use exercise::SquatCounter;
pub use goals::{GoalRecord, GoalStore, GoalWizard};
pub use storage::config::AppConfig;
