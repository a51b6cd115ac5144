use super::*;

fn loaded(items: Vec<u32>) -> ListView<u32> {
    let mut view = ListView::default();
    view.succeed(items);
    view
}

#[test]
fn default_is_loading_with_no_items() {
    let view = ListView::<u32>::default();
    assert!(view.loading);
    assert!(view.items.is_empty());
    assert_eq!(view.phase(), ViewPhase::Loading);
}

#[test]
fn success_replaces_items_and_clears_error() {
    let mut view = loaded(vec![1, 2]);
    view.report("stale".to_owned());
    view.begin();
    view.succeed(vec![3]);
    assert_eq!(view.items, vec![3]);
    assert_eq!(view.error, None);
    assert_eq!(view.phase(), ViewPhase::Populated);
}

#[test]
fn empty_success_is_empty_phase() {
    let view = loaded(Vec::new());
    assert_eq!(view.phase(), ViewPhase::Empty);
}

#[test]
fn mount_failure_clears_items() {
    let mut view = loaded(vec![1]);
    view.begin();
    view.fail(LoadKind::Mount, "boom".to_owned());
    assert!(view.items.is_empty());
    assert_eq!(view.error.as_deref(), Some("boom"));
    assert_eq!(view.phase(), ViewPhase::Failed);
}

#[test]
fn manual_failure_keeps_previous_items() {
    let mut view = loaded(vec![1, 2, 3]);
    view.begin();
    view.fail(LoadKind::Manual, "retry failed".to_owned());
    assert_eq!(view.items, vec![1, 2, 3]);
    assert_eq!(view.error.as_deref(), Some("retry failed"));
    assert_eq!(view.phase(), ViewPhase::Populated);
}

#[test]
fn retrying_unchanged_success_is_idempotent() {
    let first = loaded(vec![4, 5]);
    let mut second = first.clone();
    second.begin();
    second.succeed(vec![4, 5]);
    assert_eq!(first, second);
}

#[test]
fn begin_clears_error_and_sets_loading() {
    let mut view = loaded(vec![1]);
    view.report("x".to_owned());
    view.begin();
    assert!(view.loading);
    assert_eq!(view.error, None);
    view.dismiss_error();
    assert_eq!(view.phase(), ViewPhase::Loading);
}
