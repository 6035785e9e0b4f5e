//! Summary card for one report, shared by the home list and the map view.
//!
//! DESIGN
//! ======
//! The card is a pure function of its `Report`. Every style decision comes
//! from [`card_classes`], which reads the shared status/priority
//! classification, so the badge and the status dot can never disagree.

#[cfg(test)]
#[path = "report_card_test.rs"]
mod report_card_test;

use leptos::prelude::*;

use crate::state::reports::Report;
use crate::util::date::format_report_date;

/// Derived CSS classes for a report card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardClasses {
    pub card: String,
    pub badge: String,
    pub dot: Option<&'static str>,
    pub glyph: &'static str,
}

pub fn card_classes(report: &Report) -> CardClasses {
    let status = report.status_kind();
    CardClasses {
        card: format!("report-card {}", report.priority_kind().border_class()),
        badge: format!("{} report-card__status", status.badge_class()),
        dot: status.dot_class(),
        glyph: if report.has_image() {
            "report-card__glyph report-card__glyph--photo"
        } else {
            "report-card__glyph report-card__glyph--placeholder"
        },
    }
}

/// A single report summary.
#[component]
pub fn ReportCard(report: Report) -> impl IntoView {
    let classes = card_classes(&report);
    let date = format_report_date(&report.date);
    let priority = format!("Priority: {}", report.priority);
    let dot = classes.dot.map(|class| view! { <span class=class></span> });

    view! {
        <article class=classes.card data-report-id=report.id>
            <div class="report-card__header">
                <div class="report-card__heading">
                    <h3 class="report-card__title">{report.title}</h3>
                    <span class="badge badge--outline">{report.category}</span>
                </div>
                <span class=classes.badge>{report.status}</span>
            </div>

            <div class=classes.glyph aria-hidden="true">
                <svg viewBox="0 0 24 24" class="icon">
                    <circle cx="12" cy="8" r="4"></circle>
                    <path d="M4 21v-1a7 7 0 0 1 16 0v1"></path>
                </svg>
            </div>

            <ul class="report-card__meta">
                <li>
                    <span class="report-card__meta-icon" aria-hidden="true">"📍"</span>
                    <span>{report.location}</span>
                </li>
                <li>
                    <span class="report-card__meta-icon" aria-hidden="true">"🕒"</span>
                    <time datetime=report.date>{date}</time>
                </li>
            </ul>

            <footer class="report-card__footer">
                <span class="report-card__priority">{priority}</span>
                <span class="report-card__dot">{dot}</span>
            </footer>
        </article>
    }
}
