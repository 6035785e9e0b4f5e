//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the map, form, card, and notification surfaces. Data
//! arrives through props; only the toast host reads shared context.

pub mod map_view;
pub mod report_card;
pub mod report_form;
pub mod toast_host;
