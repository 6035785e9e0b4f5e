//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`reports`, `shell`, `form`, `toast`) as plain
//! Rust values. Components wrap them in signals; the rules stay testable
//! without a browser.

pub mod form;
pub mod reports;
pub mod shell;
pub mod toast;
