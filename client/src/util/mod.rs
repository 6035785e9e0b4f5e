//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate formatting and browser timing concerns from page
//! and component logic to improve reuse and testability.

pub mod date;
pub mod timer;
