//! UI screens for the application.

pub mod goal_wizard;
pub mod goals;

pub use goal_wizard::GoalWizardScreen;
pub use goals::{GoalsAction, GoalsScreen};
