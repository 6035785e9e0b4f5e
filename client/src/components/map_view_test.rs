use super::*;
use crate::state::reports::ReportFeed;

#[test]
fn total_label_counts_full_input() {
    assert_eq!(total_label(ReportFeed::sample().len()), "3 total issues");
    assert_eq!(total_label(ReportFeed::new(Vec::new()).len()), "0 total issues");
}

#[test]
fn total_label_ignores_filter() {
    let feed = ReportFeed::sample();
    let filter = ReportFilter { priority: Some("High".into()), ..ReportFilter::default() };
    assert_eq!(filter.apply(&feed.reports()).len(), 1);
    assert_eq!(total_label(feed.len()), "3 total issues");
}

#[test]
fn selection_maps_blank_to_any() {
    assert_eq!(selection(""), None);
    assert_eq!(selection("   "), None);
    assert_eq!(selection(" Road "), Some("Road".to_owned()));
}

#[test]
fn legend_has_four_fixed_entries() {
    let labels: Vec<_> = LEGEND.iter().map(|(_, label)| *label).collect();
    assert_eq!(labels, ["High Priority", "Medium Priority", "Resolved", "In Progress"]);
}
