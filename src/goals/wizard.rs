//! Goal creation wizard.
//!
//! Three stages: free-text parameters, challenge selection with targets,
//! and a review step that commits the goal. Navigation in either direction
//! keeps everything entered so far.
//!
//! The state machine itself is the pure [`reduce`] function. [`GoalWizard`]
//! owns the state between events and forwards commits and closes to a
//! [`WizardHost`].

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::challenges::{ChallengeSelector, InputError};
use super::types::{ChallengeType, GoalParams, GoalRecord, ParamField};
use super::validator::{self, ParamRequirement, ValidationErrors};

/// Stages of the goal wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WizardStage {
    /// Free-text goal parameters
    #[default]
    CollectingParams,
    /// Challenge tiles and per-challenge targets
    SelectingChallenges,
    /// Review and confirm
    Confirming,
}

impl WizardStage {
    /// Get all stages in order.
    pub fn all() -> &'static [WizardStage] {
        &[
            WizardStage::CollectingParams,
            WizardStage::SelectingChallenges,
            WizardStage::Confirming,
        ]
    }

    /// Get the stage index (0-based).
    pub fn index(&self) -> usize {
        Self::all().iter().position(|s| s == self).unwrap_or(0)
    }

    /// Get the next stage, if any.
    pub fn next(&self) -> Option<WizardStage> {
        Self::all().get(self.index() + 1).copied()
    }

    /// Get the previous stage, if any.
    pub fn previous(&self) -> Option<WizardStage> {
        self.index().checked_sub(1).map(|i| Self::all()[i])
    }

    /// Get the title for this stage.
    pub fn title(&self) -> &'static str {
        match self {
            WizardStage::CollectingParams => "Create New Goal",
            WizardStage::SelectingChallenges => "Task",
            WizardStage::Confirming => "Confirm Your Goal",
        }
    }

    /// Get the description for this stage.
    pub fn description(&self) -> &'static str {
        match self {
            WizardStage::CollectingParams => {
                "Fill in the parameters below and issue a challenge. Remember, always bet on yourself!"
            }
            WizardStage::SelectingChallenges => "Select Your Challenge",
            WizardStage::Confirming => {
                "Review the details of your goal and confirm to create it."
            }
        }
    }

    pub fn is_first(&self) -> bool {
        *self == WizardStage::CollectingParams
    }

    pub fn is_last(&self) -> bool {
        *self == WizardStage::Confirming
    }
}

impl std::fmt::Display for WizardStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// In-progress goal while the wizard is open.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalDraft {
    pub params: GoalParams,
    pub challenges: ChallengeSelector,
    pub stage: WizardStage,
}

/// What a bare close does to the draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseBehavior {
    /// Discard the draft
    #[default]
    Reset,
    /// Keep the draft for the next open
    Resume,
}

/// Rules applied by the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WizardPolicy {
    /// Parameters required to leave the first stage and to confirm
    pub params: ParamRequirement,
    /// Draft handling on close without confirm
    pub close_behavior: CloseBehavior,
    /// Block review until at least one challenge is selected
    pub require_selection_to_review: bool,
}

impl Default for WizardPolicy {
    fn default() -> Self {
        Self {
            params: ParamRequirement::AnyOne,
            close_behavior: CloseBehavior::Reset,
            require_selection_to_review: true,
        }
    }
}

/// Wizard visibility plus the draft.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardState {
    pub open: bool,
    pub draft: GoalDraft,
}

/// User input fed to the wizard.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardEvent {
    Open,
    EditParam { field: ParamField, value: String },
    ToggleChallenge(ChallengeType),
    SetTarget { challenge: ChallengeType, raw: String },
    Next,
    Back,
    Confirm,
    Close,
}

/// Result of reducing one event.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// State changed
    Updated,
    /// Event does not apply in the current state
    Ignored,
    /// `Next` or `Confirm` refused; state unchanged
    Blocked(ValidationErrors),
    /// Target text rejected; previous target kept
    InputRejected(InputError),
    /// Goal validated; the wizard is closed and reset
    Commit(GoalRecord),
    /// Wizard closed without committing
    Close,
}

/// Apply one event to the wizard state.
pub fn reduce(
    mut state: WizardState,
    event: WizardEvent,
    policy: &WizardPolicy,
) -> (WizardState, Transition) {
    if !state.open {
        if event == WizardEvent::Open {
            state.open = true;
            state.draft.stage = WizardStage::CollectingParams;
            return (state, Transition::Updated);
        }
        return (state, Transition::Ignored);
    }

    let stage = state.draft.stage;
    let transition = match (stage, event) {
        (_, WizardEvent::Open) => Transition::Ignored,

        (_, WizardEvent::Close) => {
            state.open = false;
            state.draft.stage = WizardStage::CollectingParams;
            if policy.close_behavior == CloseBehavior::Reset {
                state.draft = GoalDraft::default();
            }
            Transition::Close
        }

        (WizardStage::CollectingParams, WizardEvent::EditParam { field, value }) => {
            state.draft.params.set(field, value);
            Transition::Updated
        }

        (WizardStage::SelectingChallenges, WizardEvent::ToggleChallenge(challenge)) => {
            state.draft.challenges.toggle(challenge);
            Transition::Updated
        }

        (WizardStage::SelectingChallenges, WizardEvent::SetTarget { challenge, raw }) => {
            match state.draft.challenges.set_target_text(challenge, &raw) {
                Ok(()) => Transition::Updated,
                Err(e) => Transition::InputRejected(e),
            }
        }

        (WizardStage::CollectingParams, WizardEvent::Next) => {
            let errors = validator::check_params(&state.draft.params, policy.params);
            advance(&mut state.draft, errors)
        }

        (WizardStage::SelectingChallenges, WizardEvent::Next) => {
            let errors = if policy.require_selection_to_review && state.draft.challenges.is_empty() {
                vec![validator::FieldError::NoChallenges]
            } else {
                Vec::new()
            };
            advance(&mut state.draft, errors)
        }

        (_, WizardEvent::Back) => match stage.previous() {
            Some(previous) => {
                state.draft.stage = previous;
                Transition::Updated
            }
            None => Transition::Ignored,
        },

        (WizardStage::Confirming, WizardEvent::Confirm) => {
            match validator::validate(&state.draft, policy.params) {
                Ok(record) => {
                    state = WizardState::default();
                    Transition::Commit(record)
                }
                Err(errors) => Transition::Blocked(errors),
            }
        }

        _ => Transition::Ignored,
    };

    (state, transition)
}

fn advance(draft: &mut GoalDraft, errors: Vec<validator::FieldError>) -> Transition {
    if let Some(errors) = ValidationErrors::from_vec(errors) {
        return Transition::Blocked(errors);
    }
    match draft.stage.next() {
        Some(next) => {
            draft.stage = next;
            Transition::Updated
        }
        None => Transition::Ignored,
    }
}

/// Receiver of wizard results.
pub trait WizardHost {
    /// Called exactly once per successful confirm with the new record.
    fn on_commit(&mut self, record: GoalRecord);

    /// Called whenever the wizard hides, after a commit or on cancel.
    fn on_close(&mut self) {}
}

/// Result of dispatching an event, as seen by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum WizardOutcome {
    Updated,
    Ignored,
    Blocked(ValidationErrors),
    InputRejected(InputError),
    Committed(Uuid),
    Closed,
}

/// Goal wizard controller.
#[derive(Debug, Clone, Default)]
pub struct GoalWizard {
    state: WizardState,
    policy: WizardPolicy,
}

impl GoalWizard {
    /// Create a closed wizard with the given policy.
    pub fn new(policy: WizardPolicy) -> Self {
        Self {
            state: WizardState::default(),
            policy,
        }
    }

    /// Create from existing state.
    pub fn from_state(state: WizardState, policy: WizardPolicy) -> Self {
        Self { state, policy }
    }

    /// Show the wizard. Returns false if it was already open.
    pub fn open(&mut self) -> bool {
        let state = std::mem::take(&mut self.state);
        let (state, transition) = reduce(state, WizardEvent::Open, &self.policy);
        self.state = state;
        transition == Transition::Updated
    }

    pub fn is_open(&self) -> bool {
        self.state.open
    }

    pub fn stage(&self) -> WizardStage {
        self.state.draft.stage
    }

    pub fn draft(&self) -> &GoalDraft {
        &self.state.draft
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn policy(&self) -> &WizardPolicy {
        &self.policy
    }

    /// Replace the policy. Takes effect from the next event.
    pub fn set_policy(&mut self, policy: WizardPolicy) {
        self.policy = policy;
    }

    /// Apply an event, notifying the host of commits and closes.
    pub fn dispatch<H: WizardHost + ?Sized>(
        &mut self,
        event: WizardEvent,
        host: &mut H,
    ) -> WizardOutcome {
        let from = self.state.draft.stage;
        let state = std::mem::take(&mut self.state);
        let (state, transition) = reduce(state, event, &self.policy);
        self.state = state;

        match transition {
            Transition::Updated => {
                if from != self.state.draft.stage {
                    tracing::debug!("Goal wizard moved from {:?} to {:?}", from, self.state.draft.stage);
                }
                WizardOutcome::Updated
            }
            Transition::Ignored => WizardOutcome::Ignored,
            Transition::Blocked(errors) => {
                tracing::debug!("Goal wizard blocked at {:?}: {}", from, errors);
                WizardOutcome::Blocked(errors)
            }
            Transition::InputRejected(e) => {
                tracing::warn!("Rejected challenge target: {}", e);
                WizardOutcome::InputRejected(e)
            }
            Transition::Commit(record) => {
                let id = record.id();
                tracing::info!("Committed goal {} ({})", id, record.title());
                host.on_commit(record);
                host.on_close();
                WizardOutcome::Committed(id)
            }
            Transition::Close => {
                tracing::debug!("Goal wizard closed at {:?}", from);
                host.on_close();
                WizardOutcome::Closed
            }
        }
    }
}
