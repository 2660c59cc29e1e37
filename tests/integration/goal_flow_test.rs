//! Integration tests for the goal wizard feeding the goal store.

use goalcraft::goals::{
    ChallengeSelection, ChallengeType, FieldError, GoalRecord, GoalStatus, GoalStore, GoalWizard,
    ParamField, ParamRequirement, WizardEvent, WizardHost, WizardOutcome, WizardPolicy,
    WizardStage,
};

fn param(field: ParamField, value: &str) -> WizardEvent {
    WizardEvent::EditParam {
        field,
        value: value.to_string(),
    }
}

fn target(challenge: ChallengeType, raw: &str) -> WizardEvent {
    WizardEvent::SetTarget {
        challenge,
        raw: raw.to_string(),
    }
}

fn drive(wizard: &mut GoalWizard, host: &mut impl WizardHost, events: Vec<WizardEvent>) {
    for event in events {
        let outcome = wizard.dispatch(event.clone(), &mut *host);
        assert_eq!(outcome, WizardOutcome::Updated, "event {:?}", event);
    }
}

#[derive(Default)]
struct CountingHost {
    store: GoalStore,
    commits: usize,
    closes: usize,
}

impl WizardHost for CountingHost {
    fn on_commit(&mut self, record: GoalRecord) {
        self.commits += 1;
        self.store.on_commit(record);
    }

    fn on_close(&mut self) {
        self.closes += 1;
    }
}

#[test]
fn test_single_challenge_goal_is_committed_as_pending() {
    let mut wizard = GoalWizard::default();
    let mut store = GoalStore::new();
    wizard.open();

    drive(
        &mut wizard,
        &mut store,
        vec![
            param(ParamField::Param1, "5k run"),
            WizardEvent::Next,
            WizardEvent::ToggleChallenge(ChallengeType::RunDistance),
            target(ChallengeType::RunDistance, "5"),
            WizardEvent::Next,
        ],
    );

    let outcome = wizard.dispatch(WizardEvent::Confirm, &mut store);
    let WizardOutcome::Committed(id) = outcome else {
        panic!("expected commit, got {:?}", outcome);
    };

    assert_eq!(store.pending().len(), 1);
    let record = store.get(id).unwrap();
    assert_eq!(record.status(), GoalStatus::Pending);
    assert_eq!(record.params().param1, "5k run");
    assert_eq!(record.params().param2, "");
    assert_eq!(
        record.selections(),
        &[ChallengeSelection::new(ChallengeType::RunDistance, 5.0)]
    );
    assert!(!wizard.is_open());
}

#[test]
fn test_missing_target_blocks_confirm() {
    let mut wizard = GoalWizard::default();
    let mut host = CountingHost::default();
    wizard.open();

    drive(
        &mut wizard,
        &mut host,
        vec![
            param(ParamField::Param1, "Pushup month"),
            WizardEvent::Next,
            WizardEvent::ToggleChallenge(ChallengeType::Pushups),
            WizardEvent::Next,
        ],
    );

    let outcome = wizard.dispatch(WizardEvent::Confirm, &mut host);
    let WizardOutcome::Blocked(errors) = outcome else {
        panic!("expected validation failure, got {:?}", outcome);
    };
    assert!(errors.contains(&FieldError::MissingTarget(ChallengeType::Pushups)));

    assert_eq!(wizard.stage(), WizardStage::Confirming);
    assert!(wizard.is_open());
    assert!(wizard.draft().challenges.is_selected(ChallengeType::Pushups));
    assert_eq!(host.commits, 0);
    assert_eq!(host.closes, 0);
    assert!(host.store.is_empty());
}

#[test]
fn test_back_and_forth_keeps_selection() {
    let mut wizard = GoalWizard::default();
    let mut store = GoalStore::new();
    wizard.open();

    drive(
        &mut wizard,
        &mut store,
        vec![
            param(ParamField::Param1, "Leg day"),
            WizardEvent::Next,
            WizardEvent::ToggleChallenge(ChallengeType::Squats),
            target(ChallengeType::Squats, "10"),
            WizardEvent::Next,
            WizardEvent::Back,
            WizardEvent::Back,
            WizardEvent::Next,
            WizardEvent::Next,
        ],
    );

    assert_eq!(wizard.stage(), WizardStage::Confirming);
    assert!(wizard.draft().challenges.is_selected(ChallengeType::Squats));
    assert_eq!(wizard.draft().challenges.target(ChallengeType::Squats), Some(10.0));
    assert_eq!(wizard.draft().params.param1, "Leg day");
}

#[test]
fn test_two_confirms_produce_distinct_pending_goals() {
    let mut wizard = GoalWizard::default();
    let mut host = CountingHost::default();
    let mut ids = Vec::new();

    for (name, challenge, raw) in [
        ("Arms", ChallengeType::Pushups, "25"),
        ("Core", ChallengeType::Situps, "60"),
    ] {
        assert!(wizard.open());
        drive(
            &mut wizard,
            &mut host,
            vec![
                param(ParamField::Param1, name),
                WizardEvent::Next,
                WizardEvent::ToggleChallenge(challenge),
                target(challenge, raw),
                WizardEvent::Next,
            ],
        );
        match wizard.dispatch(WizardEvent::Confirm, &mut host) {
            WizardOutcome::Committed(id) => ids.push(id),
            other => panic!("expected commit, got {:?}", other),
        }
        // A second click on the now closed wizard does nothing.
        assert_eq!(
            wizard.dispatch(WizardEvent::Confirm, &mut host),
            WizardOutcome::Ignored
        );
    }

    assert_eq!(host.commits, 2);
    assert_eq!(host.closes, 2);
    assert_ne!(ids[0], ids[1]);
    assert_eq!(host.store.pending().len(), 2);
    assert!(host
        .store
        .pending()
        .iter()
        .all(|g| g.status() == GoalStatus::Pending));
}

#[test]
fn test_confirm_then_complete() {
    let mut wizard = GoalWizard::new(WizardPolicy {
        params: ParamRequirement::Optional,
        ..WizardPolicy::default()
    });
    let mut store = GoalStore::new();
    wizard.open();

    drive(
        &mut wizard,
        &mut store,
        vec![
            WizardEvent::Next,
            WizardEvent::ToggleChallenge(ChallengeType::Squats),
            target(ChallengeType::Squats, "50"),
            WizardEvent::Next,
        ],
    );
    let WizardOutcome::Committed(id) = wizard.dispatch(WizardEvent::Confirm, &mut store) else {
        panic!("expected commit");
    };

    assert_eq!(store.get(id).unwrap().title(), "50 Squats");
    store.complete(id).unwrap();
    assert!(store.pending().is_empty());
    assert_eq!(store.completed()[0].status(), GoalStatus::Completed);
    assert!(store.complete(id).is_err());
}

#[test]
fn test_cancel_resets_draft_by_default() {
    let mut wizard = GoalWizard::default();
    let mut host = CountingHost::default();
    wizard.open();

    drive(
        &mut wizard,
        &mut host,
        vec![param(ParamField::Param2, "draft text"), WizardEvent::Next],
    );
    assert_eq!(wizard.dispatch(WizardEvent::Close, &mut host), WizardOutcome::Closed);
    assert_eq!(host.closes, 1);
    assert_eq!(host.commits, 0);

    wizard.open();
    assert_eq!(wizard.stage(), WizardStage::CollectingParams);
    assert_eq!(wizard.draft().params.param2, "");
}
