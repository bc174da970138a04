//! Filter and disclosure commands
//!
//! Wraps the model's browse commands with user feedback. Filtering and
//! expansion stay independent: a filter change never collapses the expanded
//! license, so when it gets filtered out the user is told it is still open.

use licensetui::{Filter, Toggle};
use tracing::{debug, warn};

use crate::App;

impl App {
    /// Switch the category filter, keeping the cursor where possible
    pub(crate) fn set_filter(&mut self, filter: Filter) {
        let was_hidden = self.model.browse.expanded_is_hidden();
        self.model.apply_filter(filter);

        debug!(
            filter = %filter,
            visible = self.model.visible().len(),
            "filter applied"
        );

        if !was_hidden && self.model.browse.expanded_is_hidden() {
            if let Some(license) = self.model.browse.expanded() {
                self.model.ui.show_toast(format!(
                    "{} stays expanded (hidden by filter)",
                    license.short_name
                ));
            }
        }
    }

    pub(crate) fn cycle_filter(&mut self, forward: bool) {
        let next = if forward {
            licensetui::logic::filter::next_filter(self.model.browse.active_filter())
        } else {
            licensetui::logic::filter::prev_filter(self.model.browse.active_filter())
        };
        self.set_filter(next);
    }

    /// Expand or collapse the license under the cursor
    pub(crate) fn toggle_selected(&mut self) {
        match self.model.toggle_selected() {
            Some(Toggle::Ignored) => {
                // Cursor ids always come from the catalog, so this is a bug
                warn!("cursor pointed at an id missing from the catalog");
                self.model.ui.show_toast("Error: unknown license");
            }
            Some(outcome) => debug!(?outcome, "toggled selected license"),
            None => debug!("toggle with empty list ignored"),
        }
    }

    /// Collapse the expanded license even when it is filtered out of view
    pub(crate) fn collapse_expanded(&mut self) {
        let hidden = self.model.browse.expanded_is_hidden();
        let name = self
            .model
            .browse
            .expanded()
            .map(|l| l.short_name.clone());

        if self.model.collapse_expanded().is_some() && hidden {
            if let Some(name) = name {
                self.model.ui.show_toast(format!("Collapsed {}", name));
            }
        }
    }

    /// Back to "All", nothing expanded, cursor on the first license
    pub(crate) fn reset_view(&mut self) {
        self.model.browse.reset();
        self.model.select_first();
        self.model.ui.scroll_offset = 0;
        self.model.ui.show_toast("View reset");
    }
}
