//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_host::{Notifier, ToastHost};
use crate::pages::home::HomePage;
use crate::state::reports::ReportFeed;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the report feed and the notifier, then mounts the router. A
/// feed already present in context (e.g. supplied by the server) wins over
/// the built-in sample.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    if use_context::<ReportFeed>().is_none() {
        provide_context(ReportFeed::sample());
    }

    let notifier = Notifier::new();
    provide_context(notifier.clone());
    on_cleanup(move || notifier.shutdown());

    view! {
        <Stylesheet id="leptos" href="/pkg/neighborhood.css"/>
        <Title text="Your Neighborhood"/>

        <Router>
            <main>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                </Routes>
            </main>
        </Router>
        <ToastHost/>
    }
}
