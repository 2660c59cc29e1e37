//! Goals module.
//!
//! Builds goals through a three stage wizard and tracks them as
//! pending or completed:
//! - Free-text parameters describing the goal
//! - Challenge selection with a numeric target per challenge
//! - Validation into an immutable record kept by the goal store

pub mod challenges;
pub mod store;
pub mod types;
pub mod validator;
pub mod wizard;

// Re-exports for convenience
pub use challenges::{ChallengeSelector, ChallengeSnapshot, InputError};
pub use store::{GoalStore, StoreError};
pub use types::{
    ChallengeSelection, ChallengeType, GoalParams, GoalRecord, GoalStatus, InputKind, ParamField,
};
pub use validator::{validate, FieldError, ParamRequirement, ValidationErrors};
pub use wizard::{
    reduce, CloseBehavior, GoalDraft, GoalWizard, Transition, WizardEvent, WizardHost,
    WizardOutcome, WizardPolicy, WizardStage, WizardState,
};
