//! Issue submission form with the simulated "detect location" action.

use leptos::prelude::*;

use crate::components::toast_host::Notifier;
use crate::state::form::{CATEGORIES, LOCATE_DELAY, LocateState, ReportDraft, submit_draft, submit_toast};
use crate::state::toast::ToastVariant;
use crate::util::timer::{Lifetime, run_after};

#[component]
pub fn ReportForm(on_back: Callback<()>, on_submit: Callback<()>) -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let draft = RwSignal::new(ReportDraft::default());
    let locate = RwSignal::new(LocateState::default());

    // Pending locate timers must not touch this form once it is gone.
    let lifetime = Lifetime::new();
    on_cleanup({
        let lifetime = lifetime.clone();
        move || {
            lifetime.end();
            let _ = locate.try_update(LocateState::cancel);
        }
    });

    let detect_location = {
        let notifier = notifier.clone();
        move |_| {
            let mut ticket = None;
            locate.update(|l| ticket = l.begin());
            let Some(ticket) = ticket else {
                return;
            };
            let notifier = notifier.clone();
            run_after(LOCATE_DELAY, lifetime.clone(), move || {
                let mut applied = false;
                locate.update(|l| draft.update(|d| applied = l.complete(ticket, d)));
                if applied {
                    notifier.notify(
                        "Location detected",
                        "Your current location has been automatically filled in.",
                        ToastVariant::Default,
                    );
                }
            });
        }
    };

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();
        let result = submit_draft(&current, || {
            #[cfg(feature = "hydrate")]
            log::info!("report submitted: category={}", current.category);
            on_submit.run(());
        });
        let (title, description, variant) = submit_toast(&result);
        notifier.notify(title, description, variant);
    };

    let category_options = CATEGORIES
        .iter()
        .map(|category| view! { <option value=*category>{*category}</option> })
        .collect::<Vec<_>>();

    view! {
        <div class="form-page">
            <header class="page-header page-header--sticky">
                <div class="page-header__left">
                    <button class="btn btn--ghost btn--sm" title="Back" on:click=move |_| on_back.run(())>
                        "←"
                    </button>
                    <h1 class="page-header__title">"Report an Issue"</h1>
                </div>
            </header>

            <div class="form-page__body">
                <div class="card">
                    <div class="card__header">
                        <h2 class="card__title">"📷 Help us improve your neighborhood"</h2>
                        <p class="card__subtitle">
                            "Report issues in under 30 seconds and help make your community better."
                        </p>
                    </div>

                    <form class="report-form" on:submit=handle_submit>
                        <div class="field">
                            <label class="field__label" for="category">"Issue Category *"</label>
                            <select
                                id="category"
                                class="field__input"
                                prop:value=move || draft.with(|d| d.category.clone())
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.category = value);
                                }
                            >
                                <option value="" disabled=true>"Select a Category"</option>
                                {category_options}
                            </select>
                        </div>

                        <div class="field">
                            <span class="field__label">"Upload Images"</span>
                            <div class="upload-drop">
                                <span class="upload-drop__icon" aria-hidden="true">"⬆"</span>
                                <p class="upload-drop__title">"Tap or Upload an image"</p>
                                <p class="upload-drop__hint">"Photos help us understand the issue better"</p>
                            </div>
                            <div class="upload-examples">
                                <figure class="upload-examples__item">
                                    <div class="upload-examples__tile" aria-hidden="true">"📷"</div>
                                    <figcaption>"Example: Pothole"</figcaption>
                                </figure>
                                <figure class="upload-examples__item">
                                    <div class="upload-examples__tile" aria-hidden="true">"📷"</div>
                                    <figcaption>"Example: Broken light"</figcaption>
                                </figure>
                            </div>
                        </div>

                        <div class="field">
                            <label class="field__label" for="description">"Issue Description *"</label>
                            <textarea
                                id="description"
                                class="field__input field__input--tall"
                                placeholder="Explain your issue (in 50 words)"
                                prop:value=move || draft.with(|d| d.description.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.description = value);
                                }
                            ></textarea>
                        </div>

                        <div class="field">
                            <span class="field__label">"Your Location"</span>
                            <button
                                type="button"
                                class="btn btn--outline btn--block"
                                disabled=move || locate.with(LocateState::is_detecting)
                                on:click=detect_location
                            >
                                "📍 "
                                {move || locate.with(LocateState::button_label)}
                            </button>
                            <Show when=move || draft.with(|d| !d.location.is_empty())>
                                <div class="location-box">{move || draft.with(|d| d.location.clone())}</div>
                            </Show>
                            <div class="coords">
                                <div>
                                    <span class="field__label field__label--muted">"Latitude"</span>
                                    <div class="coords__value">"Waiting for your Location..."</div>
                                </div>
                                <div>
                                    <span class="field__label field__label--muted">"Longitude"</span>
                                    <div class="coords__value">"Waiting for your Location..."</div>
                                </div>
                            </div>
                        </div>

                        <div class="field">
                            <label class="field__label" for="name">"Name (Optional)"</label>
                            <input
                                id="name"
                                class="field__input"
                                type="text"
                                placeholder="Enter your Name"
                                prop:value=move || draft.with(|d| d.name.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.name = value);
                                }
                            />
                        </div>

                        <div class="field">
                            <label class="field__label" for="phone">"Phone Number (Optional)"</label>
                            <input
                                id="phone"
                                class="field__input"
                                type="tel"
                                placeholder="Enter your phone number"
                                prop:value=move || draft.with(|d| d.phone.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    draft.update(|d| d.phone = value);
                                }
                            />
                        </div>

                        <button type="submit" class="btn btn--primary btn--block btn--lg">
                            "Register Complaint"
                        </button>
                    </form>
                </div>

                <p class="form-page__tagline">"Empowering Communities for Better Civic"</p>
            </div>
        </div>
    }
}
