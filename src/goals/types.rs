//! Goal type definitions.
//!
//! Challenge kinds, the free-text goal parameters, and the finalized
//! goal record handed to the goal store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A predefined challenge a goal can be built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChallengeType {
    /// Pushup repetitions
    Pushups,
    /// Squat repetitions
    Squats,
    /// Running distance
    RunDistance,
    /// Situp repetitions
    Situps,
}

/// How the target for a challenge is entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputKind {
    /// Whole number of repetitions
    Reps,
    /// Distance in kilometers
    DistanceKm,
}

struct ChallengeInfo {
    label: &'static str,
    unit: &'static str,
    input_kind: InputKind,
}

static CHALLENGE_TABLE: [(ChallengeType, ChallengeInfo); 4] = [
    (
        ChallengeType::Pushups,
        ChallengeInfo {
            label: "Reps of Pushups",
            unit: "reps",
            input_kind: InputKind::Reps,
        },
    ),
    (
        ChallengeType::Squats,
        ChallengeInfo {
            label: "Reps of Squats",
            unit: "reps",
            input_kind: InputKind::Reps,
        },
    ),
    (
        ChallengeType::RunDistance,
        ChallengeInfo {
            label: "Distance of Run (km)",
            unit: "km",
            input_kind: InputKind::DistanceKm,
        },
    ),
    (
        ChallengeType::Situps,
        ChallengeInfo {
            label: "Reps of Situps",
            unit: "reps",
            input_kind: InputKind::Reps,
        },
    ),
];

impl ChallengeType {
    /// Get all challenge types in display order.
    pub fn all() -> &'static [ChallengeType] {
        &[
            ChallengeType::Pushups,
            ChallengeType::Squats,
            ChallengeType::RunDistance,
            ChallengeType::Situps,
        ]
    }

    fn info(&self) -> &'static ChallengeInfo {
        // The table is indexed in declaration order.
        &CHALLENGE_TABLE[*self as usize].1
    }

    /// Get the short display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ChallengeType::Pushups => "Pushups",
            ChallengeType::Squats => "Squats",
            ChallengeType::RunDistance => "Run",
            ChallengeType::Situps => "Situps",
        }
    }

    /// Get the label shown above the target input.
    pub fn label(&self) -> &'static str {
        self.info().label
    }

    /// Get unit of measurement.
    pub fn unit(&self) -> &'static str {
        self.info().unit
    }

    /// Get how the target value is entered.
    pub fn input_kind(&self) -> InputKind {
        self.info().input_kind
    }
}

impl std::fmt::Display for ChallengeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A chosen challenge with its numeric target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChallengeSelection {
    /// Challenge being targeted
    pub challenge: ChallengeType,
    /// Target to reach, always strictly positive in a record
    pub target: f64,
}

impl ChallengeSelection {
    /// Create a new selection.
    pub fn new(challenge: ChallengeType, target: f64) -> Self {
        Self { challenge, target }
    }

    /// Get progress percentage (0-100) for the amount done so far.
    pub fn progress_percent(&self, done: f64) -> f32 {
        if self.target <= 0.0 {
            return 0.0;
        }
        ((done.max(0.0) / self.target) * 100.0).min(100.0) as f32
    }

    /// Human readable summary, e.g. "5 km Run".
    pub fn summary(&self) -> String {
        match self.challenge.input_kind() {
            InputKind::Reps => format!("{:.0} {}", self.target, self.challenge),
            InputKind::DistanceKm => format!("{} km {}", self.target, self.challenge),
        }
    }
}

/// One of the three free-text goal parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamField {
    Param1,
    Param2,
    Param3,
}

impl ParamField {
    /// Get all parameter fields in order.
    pub fn all() -> &'static [ParamField] {
        &[ParamField::Param1, ParamField::Param2, ParamField::Param3]
    }

    /// Get the input placeholder.
    pub fn placeholder(&self) -> &'static str {
        match self {
            ParamField::Param1 => "Param 1",
            ParamField::Param2 => "Param 2",
            ParamField::Param3 => "Param 3",
        }
    }
}

impl std::fmt::Display for ParamField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.placeholder())
    }
}

/// Free-text goal parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalParams {
    pub param1: String,
    pub param2: String,
    pub param3: String,
}

impl GoalParams {
    /// Create parameters from three values.
    pub fn new(
        param1: impl Into<String>,
        param2: impl Into<String>,
        param3: impl Into<String>,
    ) -> Self {
        Self {
            param1: param1.into(),
            param2: param2.into(),
            param3: param3.into(),
        }
    }

    /// Get a field value.
    pub fn get(&self, field: ParamField) -> &str {
        match field {
            ParamField::Param1 => &self.param1,
            ParamField::Param2 => &self.param2,
            ParamField::Param3 => &self.param3,
        }
    }

    /// Replace a field value.
    pub fn set(&mut self, field: ParamField, value: String) {
        match field {
            ParamField::Param1 => self.param1 = value,
            ParamField::Param2 => self.param2 = value,
            ParamField::Param3 => self.param3 = value,
        }
    }

    /// Check if a field holds only whitespace.
    pub fn is_blank(&self, field: ParamField) -> bool {
        self.get(field).trim().is_empty()
    }

    /// First non-blank parameter, if any.
    pub fn title(&self) -> Option<&str> {
        ParamField::all()
            .iter()
            .map(|f| self.get(*f).trim())
            .find(|v| !v.is_empty())
    }
}

/// Lifecycle state of a committed goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalStatus {
    /// Committed and not yet done
    Pending,
    /// Marked done by the user
    Completed,
}

impl GoalStatus {
    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            GoalStatus::Pending => "Pending",
            GoalStatus::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for GoalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// A finalized goal.
///
/// Fields are fixed at creation; only the goal store moves the status
/// from pending to completed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalRecord {
    id: Uuid,
    params: GoalParams,
    selections: Vec<ChallengeSelection>,
    created_at: DateTime<Utc>,
    status: GoalStatus,
    completed_at: Option<DateTime<Utc>>,
}

impl GoalRecord {
    /// Create a new pending record with a fresh id.
    pub(crate) fn new(params: GoalParams, selections: Vec<ChallengeSelection>) -> Self {
        Self {
            id: Uuid::new_v4(),
            params,
            selections,
            created_at: Utc::now(),
            status: GoalStatus::Pending,
            completed_at: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn params(&self) -> &GoalParams {
        &self.params
    }

    pub fn selections(&self) -> &[ChallengeSelection] {
        &self.selections
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn status(&self) -> GoalStatus {
        self.status
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Get the selection for a challenge, if the goal includes it.
    pub fn selection(&self, challenge: ChallengeType) -> Option<&ChallengeSelection> {
        self.selections.iter().find(|s| s.challenge == challenge)
    }

    /// Display title: first non-blank parameter, else the challenge list.
    pub fn title(&self) -> String {
        match self.params.title() {
            Some(title) => title.to_string(),
            None => self
                .selections
                .iter()
                .map(ChallengeSelection::summary)
                .collect::<Vec<_>>()
                .join(", "),
        }
    }

    pub(crate) fn mark_completed(&mut self) {
        self.status = GoalStatus::Completed;
        self.completed_at = Some(Utc::now());
    }
}
