//! Notification overlay and the `Notifier` handle used to raise toasts.

use leptos::prelude::*;

use crate::state::toast::{TOAST_DURATION, Toast, ToastState, ToastVariant};
use crate::util::timer::{Lifetime, run_after};

/// Context handle for raising toasts from any component.
#[derive(Clone, Debug)]
pub struct Notifier {
    toasts: RwSignal<ToastState>,
    lifetime: Lifetime,
}

impl Notifier {
    pub fn new() -> Self {
        Self { toasts: RwSignal::new(ToastState::default()), lifetime: Lifetime::new() }
    }

    /// Show a toast and schedule its auto-dismissal.
    pub fn notify(&self, title: &str, description: impl Into<String>, variant: ToastVariant) {
        let mut id = 0;
        self.toasts.update(|t| id = t.push(title, description, variant));
        let toasts = self.toasts;
        run_after(TOAST_DURATION, self.lifetime.clone(), move || {
            toasts.update(|t| {
                t.dismiss(id);
            });
        });
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|t| {
            t.dismiss(id);
        });
    }

    /// Stop pending auto-dismissals. Called when the app unmounts.
    pub fn shutdown(&self) {
        self.lifetime.end();
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders active toasts in a fixed corner stack.
#[component]
pub fn ToastHost() -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let toasts = notifier.toasts;

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || toasts.get().toasts
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let notifier = notifier.clone();
                    let class = match toast.variant {
                        ToastVariant::Default => "toast",
                        ToastVariant::Destructive => "toast toast--destructive",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class>
                            <div class="toast__body">
                                <p class="toast__title">{toast.title}</p>
                                <p class="toast__description">{toast.description}</p>
                            </div>
                            <button
                                class="toast__close"
                                aria-label="Dismiss"
                                on:click=move |_| notifier.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
