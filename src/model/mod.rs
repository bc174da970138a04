//! Pure Application Model - Elm Architecture
//!
//! The model is split into focused sub-models:
//!
//! - **BrowseController**: the browse state (filter + expanded license)
//! - **UiModel**: cursor, scrolling, popups and preferences
//!
//! Key principles:
//! - Clone + Debug: can snapshot state in tests
//! - No I/O: terminal handling lives in the binary
//! - Every browse mutation goes through the controller's two commands

pub mod browse;
pub mod ui;

pub use browse::{BrowseController, BrowseState, Filter, Toggle};
pub use ui::{UiModel, VimCommandState};

use crate::catalog::{Catalog, License};
use crate::logic;

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model<'c> {
    pub browse: BrowseController<'c>,
    pub ui: UiModel,
}

impl<'c> Model<'c> {
    /// Create initial model; the cursor starts on the first visible license
    pub fn new(catalog: &'c Catalog, vim_mode: bool) -> Self {
        let mut model = Self {
            browse: BrowseController::new(catalog),
            ui: UiModel::new(vim_mode),
        };
        model.ui.selected_index = logic::navigation::first_selection(model.visible().len());
        model
    }

    /// Licenses currently shown, in catalog order
    pub fn visible(&self) -> Vec<&'c License> {
        self.browse.visible_list()
    }

    /// License under the cursor
    pub fn selected_license(&self) -> Option<&'c License> {
        self.ui
            .selected_index
            .and_then(|idx| self.visible().get(idx).copied())
    }

    pub fn select_next(&mut self) {
        let len = self.visible().len();
        self.ui.selected_index = logic::navigation::next_selection(self.ui.selected_index, len);
    }

    pub fn select_prev(&mut self) {
        let len = self.visible().len();
        self.ui.selected_index = logic::navigation::prev_selection(self.ui.selected_index, len);
    }

    pub fn select_first(&mut self) {
        self.ui.selected_index = logic::navigation::first_selection(self.visible().len());
    }

    pub fn select_last(&mut self) {
        self.ui.selected_index = logic::navigation::last_selection(self.visible().len());
    }

    /// Change the filter and keep the cursor on the same license when it is
    /// still visible, otherwise clamp it into the new list
    pub fn apply_filter(&mut self, filter: Filter) {
        let previous_id = self.selected_license().map(|l| l.id.clone());
        let previous_index = self.ui.selected_index;

        self.browse.set_filter(filter);

        let visible = self.visible();
        let ids: Vec<&str> = visible.iter().map(|l| l.id.as_str()).collect();
        self.ui.selected_index =
            logic::navigation::reselect(previous_id.as_deref(), previous_index, &ids);
        self.ui.scroll_offset = 0;
    }

    /// Move to the next (or previous) filter in filter-bar order
    pub fn cycle_filter(&mut self, forward: bool) {
        let next = if forward {
            logic::filter::next_filter(self.browse.active_filter())
        } else {
            logic::filter::prev_filter(self.browse.active_filter())
        };
        self.apply_filter(next);
    }

    /// Toggle the license under the cursor
    pub fn toggle_selected(&mut self) -> Option<Toggle> {
        let id = self.selected_license()?.id.clone();
        Some(self.browse.toggle_expanded(&id))
    }

    /// Collapse whatever is expanded, visible or not
    pub fn collapse_expanded(&mut self) -> Option<Toggle> {
        let id = self.browse.expanded_id()?.to_string();
        Some(self.browse.toggle_expanded(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn model() -> Model<'static> {
        Model::new(Catalog::builtin(), false)
    }

    #[test]
    fn test_model_creation() {
        let model = model();
        assert_eq!(model.ui.selected_index, Some(0));
        assert_eq!(model.selected_license().map(|l| l.id.as_str()), Some("mit"));
        assert_eq!(model.browse.active_filter(), Filter::All);
    }

    #[test]
    fn test_model_is_cloneable() {
        let model = model();
        let _cloned = model.clone();
    }

    #[test]
    fn test_apply_filter_keeps_cursor_on_same_license() {
        let mut model = model();
        // mit, apache, gpl3, lgpl, bsd -> cursor on bsd
        for _ in 0..4 {
            model.select_next();
        }
        assert_eq!(model.selected_license().map(|l| l.id.as_str()), Some("bsd"));

        model.apply_filter(Category::Permissive.into());
        assert_eq!(model.selected_license().map(|l| l.id.as_str()), Some("bsd"));
        assert_eq!(model.ui.selected_index, Some(2));
    }

    #[test]
    fn test_apply_filter_clamps_when_selection_hidden() {
        let mut model = model();
        model.select_last(); // mpl
        model.apply_filter(Category::StrongCopyleft.into());
        assert_eq!(model.ui.selected_index, Some(0));
        assert_eq!(model.selected_license().map(|l| l.id.as_str()), Some("gpl3"));
    }

    #[test]
    fn test_toggle_selected_then_filter_away() {
        let mut model = model();
        model.select_next(); // apache
        assert_eq!(model.toggle_selected(), Some(Toggle::Expanded));

        model.apply_filter(Category::WeakCopyleft.into());
        assert!(model.browse.is_expanded("apache"));
        assert!(model.browse.expanded_is_hidden());

        assert_eq!(model.collapse_expanded(), Some(Toggle::Collapsed));
        assert!(model.browse.expanded_id().is_none());
        assert_eq!(model.collapse_expanded(), None);
    }

    #[test]
    fn test_cycle_filter_wraps() {
        let mut model = model();
        model.cycle_filter(false);
        assert_eq!(
            model.browse.active_filter(),
            Filter::Category(Category::StrongCopyleft)
        );
        model.cycle_filter(true);
        assert_eq!(model.browse.active_filter(), Filter::All);
    }
}
