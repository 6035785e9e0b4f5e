use super::*;

#[test]
fn stats_match_home_screen_figures() {
    let values: Vec<_> = STATS.iter().map(|(_, value, _)| *value).collect();
    assert_eq!(values, ["2,847", "1,523", "2.3 days", "12"]);
    let labels: Vec<_> = STATS.iter().map(|(_, _, label)| *label).collect();
    assert_eq!(labels, ["Community Members", "Issues Resolved", "Avg Response Time", "Active Areas"]);
}

#[test]
fn nav_glyphs_are_distinct_per_view() {
    let glyphs: Vec<_> = ActiveView::ALL.into_iter().map(nav_glyph).collect();
    for (i, a) in glyphs.iter().enumerate() {
        for b in &glyphs[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
