//! Root shell: home layout plus the map and report screens it switches to.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::map_view::MapView;
use crate::components::report_card::ReportCard;
use crate::components::report_form::ReportForm;
use crate::state::reports::{Report, ReportFeed};
use crate::state::shell::{ActiveView, ShellState};

/// Community stat cards on the home screen: glyph, value, label.
pub const STATS: [(&str, &str, &str); 4] = [
    ("👥", "2,847", "Community Members"),
    ("✅", "1,523", "Issues Resolved"),
    ("⏱️", "2.3 days", "Avg Response Time"),
    ("📍", "12", "Active Areas"),
];

/// Glyph shown in the bottom navigation for each view.
pub fn nav_glyph(view: ActiveView) -> &'static str {
    match view {
        ActiveView::Home => "🏠",
        ActiveView::Map => "🗺️",
        ActiveView::Report => "📷",
    }
}

/// Home page. Holds which screen is active and reads the report feed from
/// context.
#[component]
pub fn HomePage() -> impl IntoView {
    let feed = expect_context::<ReportFeed>();
    let shell = RwSignal::new(ShellState::default());

    let navigate = Callback::new(move |view: ActiveView| {
        shell.update(|s| {
            if s.navigate(view) {
                #[cfg(feature = "hydrate")]
                log::debug!("view -> {view:?}");
            }
        });
    });
    let go_home = Callback::new(move |()| navigate.run(ActiveView::Home));

    view! {
        {move || match shell.with(|s| s.active_view) {
            ActiveView::Map => view! { <MapView on_back=go_home reports=feed.reports()/> }.into_any(),
            ActiveView::Report => view! { <ReportForm on_back=go_home on_submit=go_home/> }.into_any(),
            ActiveView::Home => view! { <HomeLayout reports=feed.reports() navigate=navigate/> }.into_any(),
        }}
    }
}

#[component]
fn HomeLayout(reports: Arc<[Report]>, navigate: Callback<ActiveView>) -> impl IntoView {
    let stats = STATS
        .iter()
        .map(|(glyph, value, label)| {
            view! {
                <div class="stat-card">
                    <div class="stat-card__glyph" aria-hidden="true">{*glyph}</div>
                    <h3 class="stat-card__value">{*value}</h3>
                    <p class="stat-card__label">{*label}</p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let cards = reports
        .iter()
        .cloned()
        .map(|report| view! { <ReportCard report=report/> })
        .collect::<Vec<_>>();

    let nav = ActiveView::ALL
        .into_iter()
        .map(|view| {
            let accent = view == ActiveView::Report;
            view! {
                <button
                    class="bottom-nav__item"
                    class:bottom-nav__item--accent=accent
                    on:click=move |_| navigate.run(view)
                >
                    <span class="bottom-nav__glyph" aria-hidden="true">{nav_glyph(view)}</span>
                    <span class="bottom-nav__label">{view.label()}</span>
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="home-page">
            <header class="site-header">
                <div class="site-header__brand">
                    <span class="site-header__logo" aria-hidden="true">"🏛️"</span>
                    <h1 class="site-header__title">"Your Neighborhood"</h1>
                </div>
            </header>

            <section class="hero">
                <h1 class="hero__title">"Help us improve your neighborhood in under 30 seconds."</h1>
                <div class="hero__actions">
                    <button class="btn btn--primary btn--lg" on:click=move |_| navigate.run(ActiveView::Report)>
                        "📷 Report an Issue"
                    </button>
                    <button class="btn btn--outline btn--lg" on:click=move |_| navigate.run(ActiveView::Map)>
                        "🗺️ View Map"
                    </button>
                </div>
            </section>

            <section class="stats">
                <div class="stats__grid">{stats}</div>
            </section>

            <section class="report-list">
                <div class="report-list__header">
                    <h2>"Recent Reports"</h2>
                    <button class="btn btn--outline" on:click=move |_| navigate.run(ActiveView::Map)>
                        "View All on Map"
                    </button>
                </div>
                <div class="report-grid">{cards}</div>
            </section>

            <nav class="bottom-nav">{nav}</nav>
        </div>
    }
}
