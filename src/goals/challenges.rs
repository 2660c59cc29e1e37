//! Challenge selection for a goal draft.
//!
//! Tracks which challenge types are chosen and the target entered for each.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::types::{ChallengeSelection, ChallengeType};

/// Selected challenge types and their targets.
///
/// Keyed by type, so a type is selected at most once. A selected type
/// maps to `None` until a target is entered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChallengeSelector {
    selected: BTreeMap<ChallengeType, Option<f64>>,
}

/// Selections with a target, plus selected types still missing one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChallengeSnapshot {
    pub selections: Vec<ChallengeSelection>,
    pub missing_targets: Vec<ChallengeType>,
}

impl ChallengeSnapshot {
    /// Check if every selected type has a target.
    pub fn is_complete(&self) -> bool {
        self.missing_targets.is_empty()
    }
}

impl ChallengeSelector {
    /// Create an empty selector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip selection of a challenge type.
    ///
    /// Deselecting drops the stored target. Returns whether the type is
    /// selected afterwards.
    pub fn toggle(&mut self, challenge: ChallengeType) -> bool {
        if self.selected.remove(&challenge).is_some() {
            false
        } else {
            self.selected.insert(challenge, None);
            true
        }
    }

    /// Check if a challenge type is selected.
    pub fn is_selected(&self, challenge: ChallengeType) -> bool {
        self.selected.contains_key(&challenge)
    }

    /// Store the target for a selected type, or clear it with `None`.
    pub fn set_target(
        &mut self,
        challenge: ChallengeType,
        target: Option<f64>,
    ) -> Result<(), InputError> {
        match self.selected.get_mut(&challenge) {
            Some(slot) => {
                *slot = target;
                Ok(())
            }
            None => Err(InputError::NotSelected(challenge)),
        }
    }

    /// Parse raw text and store it as the target.
    ///
    /// Blank text clears the target. Text that is not a finite number is
    /// rejected and the previous target is kept.
    pub fn set_target_text(&mut self, challenge: ChallengeType, raw: &str) -> Result<(), InputError> {
        if !self.is_selected(challenge) {
            return Err(InputError::NotSelected(challenge));
        }
        let target = parse_target(challenge, raw)?;
        self.set_target(challenge, target)
    }

    /// Get the target for a type, if selected and set.
    pub fn target(&self, challenge: ChallengeType) -> Option<f64> {
        self.selected.get(&challenge).copied().flatten()
    }

    /// Iterate selected types in declaration order.
    pub fn selected(&self) -> impl Iterator<Item = ChallengeType> + '_ {
        self.selected.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    /// Deselect everything.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Current selections with targets, and selected types without one.
    pub fn snapshot(&self) -> ChallengeSnapshot {
        let mut snapshot = ChallengeSnapshot::default();
        for (&challenge, target) in &self.selected {
            match target {
                Some(target) => snapshot
                    .selections
                    .push(ChallengeSelection::new(challenge, *target)),
                None => snapshot.missing_targets.push(challenge),
            }
        }
        snapshot
    }
}

fn parse_target(challenge: ChallengeType, raw: &str) -> Result<Option<f64>, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(InputError::NotANumber {
            challenge,
            raw: raw.to_string(),
        }),
    }
}

/// Rejected target input. The selector state is left unchanged.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("Target for {challenge} is not a number: {raw:?}")]
    NotANumber { challenge: ChallengeType, raw: String },

    #[error("{0} is not selected")]
    NotSelected(ChallengeType),
}
