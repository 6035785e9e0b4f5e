//! Neighborhood map screen: placeholder map, legend, filters, report list.
//!
//! The map region is decorative. Marker positions are fixed and do not come
//! from report data; there is no geocoding.

#[cfg(test)]
#[path = "map_view_test.rs"]
mod map_view_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::report_card::ReportCard;
use crate::state::reports::{Report, ReportFilter, distinct_values};

/// Legend entries: dot modifier and label.
pub const LEGEND: [(&str, &str); 4] = [
    ("danger", "High Priority"),
    ("warning", "Medium Priority"),
    ("success", "Resolved"),
    ("primary", "In Progress"),
];

/// Fixed marker positions on the placeholder: modifier and inline style.
const MARKERS: [(&str, &str); 4] = [
    ("danger map-marker--pulse", "top: 4rem; left: 5rem;"),
    ("warning", "top: 8rem; right: 6rem;"),
    ("success", "bottom: 5rem; left: 8rem;"),
    ("primary", "top: 6rem; left: 50%;"),
];

/// Header count text. Always the size of the full input list.
pub fn total_label(total: usize) -> String {
    format!("{total} total issues")
}

/// A select's raw value mapped to a filter criterion; blank means "any".
pub fn selection(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

#[component]
pub fn MapView(on_back: Callback<()>, reports: Arc<[Report]>) -> impl IntoView {
    let total = reports.len();
    let filter = RwSignal::new(ReportFilter::default());
    let show_filters = RwSignal::new(false);

    let categories = distinct_values(&reports, |r| r.category.as_str());
    let statuses = distinct_values(&reports, |r| r.status.as_str());
    let priorities = distinct_values(&reports, |r| r.priority.as_str());

    let visible = {
        let reports = Arc::clone(&reports);
        move || filter.with(|f| f.apply(&reports))
    };
    let visible_count = {
        let visible = visible.clone();
        move || visible().len()
    };

    let markers = MARKERS
        .iter()
        .map(|(modifier, style)| {
            let class = format!("map-marker map-marker--{modifier}");
            view! { <span class=class style=*style></span> }
        })
        .collect::<Vec<_>>();

    let legend = LEGEND
        .iter()
        .map(|(modifier, label)| {
            let class = format!("legend__dot legend__dot--{modifier}");
            view! {
                <li class="legend__item">
                    <span class=class></span>
                    <span>{*label}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="map-page">
            <header class="page-header page-header--sticky">
                <div class="page-header__left">
                    <button class="btn btn--ghost btn--sm" title="Back" on:click=move |_| on_back.run(())>
                        "←"
                    </button>
                    <h1 class="page-header__title">"Neighborhood Map"</h1>
                </div>
                <button
                    class="btn btn--outline btn--sm"
                    class:btn--active=move || filter.with(ReportFilter::is_active)
                    aria-expanded=move || show_filters.get().to_string()
                    on:click=move |_| show_filters.update(|open| *open = !*open)
                >
                    "Filter"
                </button>
            </header>

            <Show when=move || show_filters.get()>
                <div class="filter-panel">
                    <FilterSelect
                        label="Category"
                        options=categories.clone()
                        selected=Signal::derive(move || filter.with(|f| f.category.clone().unwrap_or_default()))
                        on_select=Callback::new(move |raw: String| filter.update(|f| f.category = selection(&raw)))
                    />
                    <FilterSelect
                        label="Status"
                        options=statuses.clone()
                        selected=Signal::derive(move || filter.with(|f| f.status.clone().unwrap_or_default()))
                        on_select=Callback::new(move |raw: String| filter.update(|f| f.status = selection(&raw)))
                    />
                    <FilterSelect
                        label="Priority"
                        options=priorities.clone()
                        selected=Signal::derive(move || filter.with(|f| f.priority.clone().unwrap_or_default()))
                        on_select=Callback::new(move |raw: String| filter.update(|f| f.priority = selection(&raw)))
                    />
                    <button class="btn btn--ghost btn--sm" on:click=move |_| filter.set(ReportFilter::default())>
                        "Clear"
                    </button>
                </div>
            </Show>

            <div class="map-region">
                <div class="map-region__placeholder">
                    <div class="map-region__badge" aria-hidden="true">
                        <svg viewBox="0 0 24 24" class="icon icon--lg">
                            <path d="M17.657 16.657L13.414 20.9a1.998 1.998 0 01-2.827 0l-4.244-4.243a8 8 0 1111.314 0z"></path>
                            <path d="M15 11a3 3 0 11-6 0 3 3 0 016 0z"></path>
                        </svg>
                    </div>
                    <p class="map-region__title">"Interactive Map Coming Soon"</p>
                    <p class="map-region__hint">
                        "This will show all reported issues with interactive markers and clustering"
                    </p>
                </div>
                {markers}
                <ul class="legend">{legend}</ul>
            </div>

            <section class="report-list">
                <div class="report-list__header">
                    <h2>"All Reports"</h2>
                    <div class="report-list__count">
                        <span>{total_label(total)}</span>
                        <Show when=move || filter.with(ReportFilter::is_active)>
                            <span class="report-list__showing">{
                                let visible_count = visible_count.clone();
                                move || format!("showing {}", visible_count())
                            }</span>
                        </Show>
                    </div>
                </div>
                <div class="report-grid">
                    <For
                        each=visible
                        key=|report: &Report| report.id.clone()
                        children=move |report: Report| view! { <ReportCard report=report/> }
                    />
                </div>
            </section>
        </div>
    }
}

/// One labelled filter select with an "All" option.
#[component]
fn FilterSelect(
    label: &'static str,
    options: Vec<String>,
    selected: Signal<String>,
    on_select: Callback<String>,
) -> impl IntoView {
    let options = options
        .into_iter()
        .map(|value| { let attr = value.clone(); view! { <option value=attr>{value}</option> } })
        .collect::<Vec<_>>();

    view! {
        <label class="filter-panel__field">
            <span class="filter-panel__label">{label}</span>
            <select
                class="filter-panel__select"
                prop:value=move || selected.get()
                on:change=move |ev| on_select.run(event_target_value(&ev))
            >
                <option value="">"All"</option>
                {options}
            </select>
        </label>
    }
}
