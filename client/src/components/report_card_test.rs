use super::*;

fn report(status: &str, priority: &str, image: Option<&str>) -> Report {
    Report {
        id: "42".into(),
        title: "Fallen tree".into(),
        category: "Parks".into(),
        status: status.into(),
        location: "Elm Park".into(),
        date: "2025-09-21".into(),
        priority: priority.into(),
        image: image.map(str::to_owned),
    }
}

#[test]
fn card_classes_for_known_labels() {
    let classes = card_classes(&report("Resolved", "High", None));
    assert_eq!(classes.card, "report-card report-card--border-danger");
    assert_eq!(classes.badge, "badge badge--success report-card__status");
    assert_eq!(classes.dot, Some("status-dot status-dot--success"));
}

#[test]
fn card_classes_fall_back_to_neutral() {
    let classes = card_classes(&report("Escalated", "Critical", None));
    assert_eq!(classes.card, "report-card report-card--border-neutral");
    assert_eq!(classes.badge, "badge badge--neutral report-card__status");
    assert_eq!(classes.dot, None);
}

#[test]
fn lowercase_status_still_gets_a_dot() {
    let classes = card_classes(&report("in progress", "medium", None));
    assert_eq!(classes.badge, "badge badge--primary report-card__status");
    assert_eq!(classes.dot, Some("status-dot status-dot--primary status-dot--pulse"));
    assert_eq!(classes.card, "report-card report-card--border-warning");
}

#[test]
fn glyph_depends_on_image_presence() {
    assert_eq!(
        card_classes(&report("Pending", "Low", None)).glyph,
        "report-card__glyph report-card__glyph--placeholder"
    );
    assert_eq!(
        card_classes(&report("Pending", "Low", Some("a.jpg"))).glyph,
        "report-card__glyph report-card__glyph--photo"
    );
}
