//! UI Model
//!
//! Presentation-only state: cursor, scroll position, popups and
//! preferences. None of it feeds back into the browse state.

use std::time::Instant;

/// Vim double-key command tracking (for `gg`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VimCommandState {
    None,
    WaitingForSecondG,
}

#[derive(Clone, Debug)]
pub struct UiModel {
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    pub vim_command_state: VimCommandState,

    /// Cursor position within the visible list
    pub selected_index: Option<usize>,

    /// First content line drawn in the card viewport
    pub scroll_offset: usize,

    /// Whether the category guide panel is shown
    pub show_guide: bool,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            vim_command_state: VimCommandState::None,
            selected_index: None,
            scroll_offset: 0,
            show_guide: false,
            toast_message: None,
            should_quit: false,
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast_message = Some((message.into(), Instant::now()));
    }

    /// Check if toast should be dismissed
    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis())
        } else {
            false
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_model_defaults() {
        let ui = UiModel::new(true);
        assert!(ui.vim_mode);
        assert_eq!(ui.vim_command_state, VimCommandState::None);
        assert!(ui.selected_index.is_none());
        assert!(!ui.show_guide);
        assert!(!ui.should_quit);
    }

    #[test]
    fn test_toast_lifecycle() {
        let mut ui = UiModel::new(false);
        ui.show_toast("Filter: All");
        assert!(ui.toast_message.is_some());
        assert!(!ui.should_dismiss_toast());

        ui.dismiss_toast();
        assert!(ui.toast_message.is_none());
        assert!(!ui.should_dismiss_toast());
    }
}
