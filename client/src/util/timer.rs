//! Delayed callbacks scoped to a component lifetime.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components that schedule delayed work create a [`Lifetime`], end it from
//! `on_cleanup`, and schedule through [`run_after`]. A callback whose
//! lifetime has ended is dropped without running, so nothing writes into
//! disposed signals after teardown.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Shared liveness flag for one mounted component.
#[derive(Clone, Debug)]
pub struct Lifetime(Arc<AtomicBool>);

impl Lifetime {
    #[must_use]
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn end(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Run `f` if still alive. Returns whether it ran.
    pub fn run_if_alive(&self, f: impl FnOnce()) -> bool {
        if !self.is_alive() {
            return false;
        }
        f();
        true
    }
}

impl Default for Lifetime {
    fn default() -> Self {
        Self::new()
    }
}

/// Run `f` once after `delay` unless `lifetime` has ended by then.
///
/// Only the hydrated client has a timer; during server rendering the
/// callback is dropped.
pub fn run_after(delay: Duration, lifetime: Lifetime, f: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(delay).await;
        if !lifetime.run_if_alive(f) {
            log::debug!("delayed callback dropped after teardown");
        }
    });

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (delay, lifetime, f);
    }
}
