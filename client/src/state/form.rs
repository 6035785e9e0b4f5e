//! Report form fields, submit validation, and the simulated locate action.
//!
//! DESIGN
//! ======
//! The form component owns a [`ReportDraft`] and a [`LocateState`]. All of
//! the decisions (what counts as missing, whether a locate completion still
//! applies) live here as plain functions so they run without a browser.
//!
//! Locate completions carry a [`LocateTicket`]. Cancelling bumps the
//! generation, so a completion that arrives after teardown or after a newer
//! request is ignored instead of writing into the draft.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::time::Duration;

use thiserror::Error;

use crate::state::toast::ToastVariant;

/// Issue categories offered by the category select.
pub const CATEGORIES: [&str; 8] = [
    "Road Issues",
    "Streetlights",
    "Sanitation",
    "Public Safety",
    "Parks & Recreation",
    "Water & Utilities",
    "Noise Complaints",
    "Other",
];

/// Simulated latency of the locate action.
pub const LOCATE_DELAY: Duration = Duration::from_secs(2);

/// Address written into the draft when the simulated locate completes.
pub const DETECTED_LOCATION: &str = "123 Main Street, City Center";

/// Editable field values of the report form. All fields start empty.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReportDraft {
    pub category: String,
    pub description: String,
    pub name: String,
    pub phone: String,
    pub location: String,
}

/// Required fields left blank on submit.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum MissingFields {
    #[error("Please fill in the category field.")]
    Category,
    #[error("Please fill in the description field.")]
    Description,
    #[error("Please fill in the category and description fields.")]
    CategoryAndDescription,
}

impl ReportDraft {
    /// Check the required fields. Whitespace-only values count as blank.
    ///
    /// # Errors
    ///
    /// Returns which of `category` / `description` are missing.
    pub fn validate(&self) -> Result<(), MissingFields> {
        let no_category = self.category.trim().is_empty();
        let no_description = self.description.trim().is_empty();
        match (no_category, no_description) {
            (false, false) => Ok(()),
            (true, false) => Err(MissingFields::Category),
            (false, true) => Err(MissingFields::Description),
            (true, true) => Err(MissingFields::CategoryAndDescription),
        }
    }
}

/// Validate `draft` and run `on_submit` exactly once when it passes.
///
/// The draft is borrowed immutably; a failed submit leaves every field as
/// entered.
///
/// # Errors
///
/// Propagates [`ReportDraft::validate`] failures; `on_submit` is not called.
pub fn submit_draft(draft: &ReportDraft, on_submit: impl FnOnce()) -> Result<(), MissingFields> {
    draft.validate()?;
    on_submit();
    Ok(())
}

/// Notification for a submit outcome: title, description, variant.
#[must_use]
pub fn submit_toast(result: &Result<(), MissingFields>) -> (&'static str, String, ToastVariant) {
    match result {
        Ok(()) => (
            "Report Submitted",
            "Your civic issue report has been submitted successfully. You'll receive updates on its progress."
                .to_owned(),
            ToastVariant::Default,
        ),
        Err(missing) => ("Missing Information", missing.to_string(), ToastVariant::Destructive),
    }
}

// =============================================================================
// LOCATE
// =============================================================================

/// Handle for one in-flight locate request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocateTicket(u64);

/// Pending flag and generation counter for the locate action.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LocateState {
    detecting: bool,
    generation: u64,
}

impl LocateState {
    #[must_use]
    pub fn is_detecting(&self) -> bool {
        self.detecting
    }

    /// Start a locate request. Returns `None` while one is already pending.
    pub fn begin(&mut self) -> Option<LocateTicket> {
        if self.detecting {
            return None;
        }
        self.detecting = true;
        self.generation += 1;
        Some(LocateTicket(self.generation))
    }

    /// Apply a finished request to `draft`.
    ///
    /// Returns `false` and leaves `draft` untouched when the ticket was
    /// cancelled or superseded.
    pub fn complete(&mut self, ticket: LocateTicket, draft: &mut ReportDraft) -> bool {
        if !self.detecting || ticket.0 != self.generation {
            return false;
        }
        draft.location = DETECTED_LOCATION.to_owned();
        self.detecting = false;
        true
    }

    /// Invalidate any outstanding ticket and clear the pending flag. The form
    /// calls this on teardown.
    pub fn cancel(&mut self) {
        if self.detecting {
            self.generation += 1;
        }
        self.detecting = false;
    }

    /// Label for the locate button.
    #[must_use]
    pub fn button_label(&self) -> &'static str {
        if self.detecting {
            "Detecting your Location..."
        } else {
            "Detect your Location"
        }
    }
}
