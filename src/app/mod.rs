//! App Orchestration Methods
//!
//! `impl App` methods grouped by domain. They sit between key handlers and
//! the pure model, adding logging and user feedback (toasts):
//! - filters: filter changes, expansion toggles, view reset
//! - listing: non-interactive `--list` output

pub(crate) mod filters;
pub(crate) mod listing;
