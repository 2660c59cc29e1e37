//! Unit tests for the goal store.

use goalcraft::goals::{
    validate, ChallengeType, GoalDraft, GoalParams, GoalRecord, GoalStatus, GoalStore,
    ParamRequirement, StoreError,
};
use uuid::Uuid;

fn make_record(name: &str, challenge: ChallengeType, target: &str) -> GoalRecord {
    let mut draft = GoalDraft {
        params: GoalParams::new(name, "", ""),
        ..Default::default()
    };
    draft.challenges.toggle(challenge);
    draft.challenges.set_target_text(challenge, target).unwrap();
    validate(&draft, ParamRequirement::AnyOne).unwrap()
}

/// No id in both lists, and status matches the holding list.
fn assert_consistent(store: &GoalStore) {
    for goal in store.pending() {
        assert_eq!(goal.status(), GoalStatus::Pending);
        assert!(!store.completed().iter().any(|g| g.id() == goal.id()));
    }
    for goal in store.completed() {
        assert_eq!(goal.status(), GoalStatus::Completed);
    }

    let mut ids: Vec<Uuid> = store
        .pending()
        .iter()
        .chain(store.completed())
        .map(|g| g.id())
        .collect();
    let total = ids.len();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), total);
}

#[test]
fn test_invariants_hold_across_operations() {
    let mut store = GoalStore::new();
    let records: Vec<GoalRecord> = (0..6)
        .map(|i| make_record(&format!("goal {}", i), ChallengeType::Pushups, "10"))
        .collect();
    let ids: Vec<Uuid> = records.iter().map(|r| r.id()).collect();

    for record in records.iter().cloned() {
        store.add_pending(record).unwrap();
        assert_consistent(&store);
    }

    store.complete(ids[1]).unwrap();
    assert_consistent(&store);
    store.complete(ids[4]).unwrap();
    assert_consistent(&store);
    store.remove(ids[0]).unwrap();
    assert_consistent(&store);
    store.remove(ids[4]).unwrap();
    assert_consistent(&store);
    assert!(store.add_pending(records[1].clone()).is_err());
    assert_consistent(&store);
    store.complete(ids[5]).unwrap();
    assert_consistent(&store);

    let pending: Vec<Uuid> = store.pending().iter().map(|g| g.id()).collect();
    let completed: Vec<Uuid> = store.completed().iter().map(|g| g.id()).collect();
    assert_eq!(pending, vec![ids[2], ids[3]]);
    assert_eq!(completed, vec![ids[1], ids[5]]);
}

#[test]
fn test_second_complete_is_not_found() {
    let mut store = GoalStore::new();
    let record = make_record("Run", ChallengeType::RunDistance, "5");
    let id = record.id();
    store.add_pending(record).unwrap();

    store.complete(id).unwrap();
    assert_eq!(store.complete(id).unwrap_err(), StoreError::NotFound(id));
    assert_eq!(store.completed().len(), 1);
    assert_consistent(&store);
}

#[test]
fn test_unknown_id_leaves_store_untouched() {
    let mut store = GoalStore::new();
    store
        .add_pending(make_record("Core", ChallengeType::Situps, "30"))
        .unwrap();
    let unknown = Uuid::new_v4();

    assert_eq!(store.complete(unknown).unwrap_err(), StoreError::NotFound(unknown));
    assert_eq!(store.remove(unknown).unwrap_err(), StoreError::NotFound(unknown));
    assert_eq!(store.pending().len(), 1);
    assert!(store.completed().is_empty());
}
