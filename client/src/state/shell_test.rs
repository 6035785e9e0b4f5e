use super::*;
use crate::state::reports::ReportFeed;

// =============================================================
// ShellState defaults
// =============================================================

#[test]
fn shell_state_starts_at_home() {
    assert_eq!(ShellState::default().active_view, ActiveView::Home);
    assert_eq!(ActiveView::default(), ActiveView::Home);
}

// =============================================================
// Navigation
// =============================================================

#[test]
fn every_view_reachable_from_every_other_in_one_step() {
    for from in ActiveView::ALL {
        for to in ActiveView::ALL {
            let mut state = ShellState { active_view: from };
            let changed = state.navigate(to);
            assert_eq!(state.active_view, to);
            assert_eq!(changed, from != to);
        }
    }
}

#[test]
fn round_trip_returns_to_initial_state_with_feed_unchanged() {
    let feed = ReportFeed::sample();
    let before = feed.clone();
    let mut state = ShellState::default();

    state.navigate(ActiveView::Map);
    state.navigate(ActiveView::Report);
    state.go_home();

    assert_eq!(state, ShellState::default());
    assert_eq!(feed, before);
    assert_eq!(feed.len(), 3);
}

#[test]
fn view_labels_are_distinct() {
    assert_eq!(ActiveView::Home.label(), "Home");
    assert_eq!(ActiveView::Map.label(), "Map");
    assert_eq!(ActiveView::Report.label(), "Report");
}
