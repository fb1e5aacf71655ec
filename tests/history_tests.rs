//! History Tests
//!
//! Undo/redo and replay behaviour, both with a logging surface and against
//! a real grid.

mod common;

use std::sync::Arc;

use common::{layer, Journal, Named};
use layerpaint::history::StepKind;
use layerpaint::{Color, DrawStyle, Grid, GridAction, ReplayTracker, UndoTracker};
use pretty_assertions::assert_eq;

// === Undo Tracker ===

#[test]
fn test_redo_reapplies_once() {
    let mut journal = Journal::default();
    let mut tracker = UndoTracker::new();
    tracker.add_action(Named("a1"));
    tracker.add_action(Named("a2"));

    tracker.undo(&mut journal);
    tracker.redo(&mut journal);
    assert!(tracker.redo(&mut journal).is_none());

    assert_eq!(journal.entries, vec!["backward a2", "forward a2"]);
}

#[test]
fn test_new_action_discards_redo_branch() {
    let mut journal = Journal::default();
    let mut tracker = UndoTracker::new();
    tracker.add_action(Named("a1"));
    tracker.add_action(Named("a2"));
    tracker.undo(&mut journal);
    tracker.add_action(Named("a3"));

    assert!(tracker.redo(&mut journal).is_none());
    assert_eq!(journal.entries, vec!["backward a2"]);
}

#[test]
fn test_undo_history_saturates() {
    let mut tracker = UndoTracker::with_capacity(3);
    for name in ["a1", "a2", "a3", "a4"] {
        tracker.add_action(Named(name));
    }
    assert_eq!(tracker.undo_count(), 3);
    assert_eq!(tracker.peek_undo(), Some(&Named("a3")));
}

// === Replay Tracker ===

#[test]
fn test_replay_round_trip() {
    let mut journal = Journal::default();
    let mut tracker = ReplayTracker::new();
    let a1 = Arc::new(Named("a1"));
    let a2 = Arc::new(Named("a2"));
    tracker.add_action(Arc::clone(&a1), false).unwrap();
    tracker.add_action(Arc::clone(&a2), false).unwrap();
    tracker.add_action(Arc::clone(&a2), true).unwrap();
    tracker.start_replay();

    let results: Vec<bool> = (0..3).map(|_| tracker.play_next_action(&mut journal)).collect();
    assert_eq!(results, vec![false, false, false]);
    assert_eq!(journal.entries, vec!["forward a1", "forward a2", "backward a2"]);

    assert!(tracker.play_next_action(&mut journal));
    assert_eq!(journal.entries.len(), 3);
}

#[test]
fn test_replay_log_capacity() {
    let mut tracker = ReplayTracker::with_capacity(1);
    tracker.add_action(Named("a1"), false).unwrap();
    let err = tracker.add_action(Named("a2"), false).unwrap_err();
    assert_eq!(err.error_code(), "CAPACITY_EXCEEDED");
}

// === Against a grid ===

#[test]
fn test_undo_redo_strokes_on_grid() {
    let mut grid = Grid::new(DrawStyle::Sequence, 4, 4);
    let mut tracker = UndoTracker::new();

    let first = GridAction::stroke(&mut grid, 0, 0, &layer(0, "a"), StepKind::Add).unwrap();
    tracker.add_action(first);
    let second = GridAction::stroke(&mut grid, 0, 0, &layer(1, "b"), StepKind::Add).unwrap();
    tracker.add_action(second);

    let painted = grid.cell(0, 0).unwrap().get_color(Color::BLACK, 0, 0, 0);
    assert_eq!(painted.r, 12);

    tracker.undo(&mut grid);
    assert_eq!(grid.cell(0, 0).unwrap().get_color(Color::BLACK, 0, 0, 0).r, 1);

    tracker.redo(&mut grid);
    assert_eq!(grid.cell(0, 0).unwrap().get_color(Color::BLACK, 0, 0, 0), painted);
}

#[test]
fn test_replay_reproduces_session_on_fresh_grid() {
    let mut grid = Grid::new(DrawStyle::Sequence, 3, 3);
    let mut undo = UndoTracker::new();
    let mut replay = ReplayTracker::new();

    fn record(
        action: GridAction,
        undo: &mut UndoTracker<Arc<GridAction>>,
        replay: &mut ReplayTracker<Arc<GridAction>>,
    ) {
        let action = Arc::new(action);
        undo.add_action(Arc::clone(&action));
        replay.add_action(action, false).unwrap();
    }

    let stroke = GridAction::stroke(&mut grid, 1, 1, &layer(0, "alpha"), StepKind::Add).unwrap();
    record(stroke, &mut undo, &mut replay);
    let stroke = GridAction::stroke(&mut grid, 2, 2, &layer(5, "beta"), StepKind::Add).unwrap();
    record(stroke, &mut undo, &mut replay);
    if let Some(action) = undo.undo(&mut grid) {
        replay.add_action(Arc::clone(action), true).unwrap();
    }

    let mut fresh = Grid::new(DrawStyle::Sequence, 3, 3);
    replay.start_replay();
    while !replay.play_next_action(&mut fresh) {}

    assert_eq!(fresh.render(0), grid.render(0));
    assert!(!replay.is_replaying());
}
