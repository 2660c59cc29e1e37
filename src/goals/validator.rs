//! Goal draft validation.
//!
//! Turns a wizard draft into a finalized [`GoalRecord`] or the list of
//! field-level problems that block it.

use serde::{Deserialize, Serialize};

use super::challenges::ChallengeSelector;
use super::types::{ChallengeType, GoalRecord, GoalParams, InputKind, ParamField};
use super::wizard::GoalDraft;

/// Which free-text parameters must be filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamRequirement {
    /// All parameters may be blank
    Optional,
    /// At least one parameter must be non-blank
    #[default]
    AnyOne,
    /// Every parameter must be non-blank
    All,
}

/// A single problem with a draft.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("{0} is required")]
    MissingParam(ParamField),

    #[error("At least one parameter is required")]
    NoParams,

    #[error("Select at least one challenge")]
    NoChallenges,

    #[error("Enter a target for {0}")]
    MissingTarget(ChallengeType),

    #[error("Target for {challenge} must be greater than zero (got {value})")]
    NonPositiveTarget { challenge: ChallengeType, value: f64 },

    #[error("Target for {challenge} must be a whole number of reps (got {value})")]
    FractionalReps { challenge: ChallengeType, value: f64 },
}

/// Non-empty, ordered list of field errors.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    /// Wrap a list of errors, or `None` when there are none.
    pub fn from_vec(errors: Vec<FieldError>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self(errors))
        }
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, error: &FieldError) -> bool {
        self.0.contains(error)
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Check the free-text parameters against the requirement.
pub fn check_params(params: &GoalParams, requirement: ParamRequirement) -> Vec<FieldError> {
    match requirement {
        ParamRequirement::Optional => Vec::new(),
        ParamRequirement::AnyOne => {
            if params.title().is_some() {
                Vec::new()
            } else {
                vec![FieldError::NoParams]
            }
        }
        ParamRequirement::All => ParamField::all()
            .iter()
            .filter(|f| params.is_blank(**f))
            .map(|f| FieldError::MissingParam(*f))
            .collect(),
    }
}

/// Check that challenges are selected and every target is usable.
pub fn check_challenges(selector: &ChallengeSelector) -> Vec<FieldError> {
    if selector.is_empty() {
        return vec![FieldError::NoChallenges];
    }

    let mut errors = Vec::new();
    for challenge in selector.selected() {
        match selector.target(challenge) {
            None => errors.push(FieldError::MissingTarget(challenge)),
            Some(value) if value <= 0.0 => {
                errors.push(FieldError::NonPositiveTarget { challenge, value })
            }
            Some(value) if challenge.input_kind() == InputKind::Reps && value.fract() != 0.0 => {
                errors.push(FieldError::FractionalReps { challenge, value })
            }
            Some(_) => {}
        }
    }
    errors
}

/// Validate a draft and build the finalized record.
pub fn validate(
    draft: &GoalDraft,
    requirement: ParamRequirement,
) -> Result<GoalRecord, ValidationErrors> {
    let mut errors = check_params(&draft.params, requirement);
    errors.extend(check_challenges(&draft.challenges));

    if let Some(errors) = ValidationErrors::from_vec(errors) {
        return Err(errors);
    }

    let snapshot = draft.challenges.snapshot();
    Ok(GoalRecord::new(draft.params.clone(), snapshot.selections))
}
