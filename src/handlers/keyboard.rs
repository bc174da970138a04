//! Keyboard Input Handler
//!
//! Maps key presses onto app commands. The browse state is only ever changed
//! through the filter and toggle commands.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use licensetui::logic;
use licensetui::model::VimCommandState;

use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Windows reports releases too; act on presses only
    if key.kind == KeyEventKind::Release {
        return;
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.model.ui.should_quit = true;
        return;
    }

    // Second half of vim 'gg'
    if app.model.ui.vim_command_state == VimCommandState::WaitingForSecondG {
        app.model.ui.vim_command_state = VimCommandState::None;
        if key.code == KeyCode::Char('g') {
            app.model.select_first();
            return;
        }
    }

    let vim_mode = app.model.ui.vim_mode;

    match key.code {
        KeyCode::Char('q') => app.model.ui.should_quit = true,
        KeyCode::Esc => {
            // Esc closes the guide first, quits otherwise
            if app.model.ui.show_guide {
                app.model.ui.show_guide = false;
            } else {
                app.model.ui.should_quit = true;
            }
        }
        KeyCode::Down => app.model.select_next(),
        KeyCode::Up => app.model.select_prev(),
        KeyCode::Char('j') if vim_mode => app.model.select_next(),
        KeyCode::Char('k') if vim_mode => app.model.select_prev(),
        KeyCode::Home => app.model.select_first(),
        KeyCode::End => app.model.select_last(),
        KeyCode::Char('g') if vim_mode => {
            app.model.ui.vim_command_state = VimCommandState::WaitingForSecondG;
        }
        KeyCode::Char('G') if vim_mode => app.model.select_last(),
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_selected(),
        KeyCode::Char('c') => app.collapse_expanded(),
        KeyCode::Char('r') => app.reset_view(),
        KeyCode::Tab => app.cycle_filter(true),
        KeyCode::BackTab => app.cycle_filter(false),
        KeyCode::Char('?') => app.model.ui.show_guide = !app.model.ui.show_guide,
        KeyCode::Char(c) => {
            if let Some(filter) = logic::filter::filter_for_key(c) {
                app.set_filter(filter);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use licensetui::{Category, Filter};

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn app(vim_mode: bool) -> App {
        App::new(&Config {
            vim_mode,
            ..Config::default()
        })
    }

    #[test]
    fn test_digit_keys_set_filter() {
        let mut app = app(false);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(
            app.model.browse.active_filter(),
            Filter::Category(Category::StrongCopyleft)
        );
        press(&mut app, KeyCode::Char('0'));
        assert_eq!(app.model.browse.active_filter(), Filter::All);
    }

    #[test]
    fn test_enter_toggles_selected() {
        let mut app = app(false);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert!(app.model.browse.is_expanded("apache"));

        press(&mut app, KeyCode::Char(' '));
        assert!(app.model.browse.expanded_id().is_none());
    }

    #[test]
    fn test_hidden_expansion_through_keys() {
        let mut app = app(false);
        // Expand gpl3 (third entry), then filter to permissive
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('1'));

        assert!(app.model.browse.is_expanded("gpl3"));
        let visible: Vec<&str> = app.model.visible().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(visible, vec!["mit", "apache", "bsd"]);

        // 'c' collapses the hidden entry
        press(&mut app, KeyCode::Char('c'));
        assert!(!app.model.browse.is_expanded("gpl3"));
    }

    #[test]
    fn test_vim_keys_only_in_vim_mode() {
        let mut plain = app(false);
        press(&mut plain, KeyCode::Char('j'));
        assert_eq!(plain.model.ui.selected_index, Some(0));

        let mut vim = app(true);
        press(&mut vim, KeyCode::Char('j'));
        assert_eq!(vim.model.ui.selected_index, Some(1));
        press(&mut vim, KeyCode::Char('G'));
        assert_eq!(vim.model.ui.selected_index, Some(5));
        press(&mut vim, KeyCode::Char('g'));
        assert_eq!(vim.model.ui.selected_index, Some(5));
        press(&mut vim, KeyCode::Char('g'));
        assert_eq!(vim.model.ui.selected_index, Some(0));
    }

    #[test]
    fn test_esc_closes_guide_before_quitting() {
        let mut app = app(false);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.model.ui.show_guide);

        press(&mut app, KeyCode::Esc);
        assert!(!app.model.ui.show_guide);
        assert!(!app.model.ui.should_quit);

        press(&mut app, KeyCode::Esc);
        assert!(app.model.ui.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = app(false);
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.model.ui.should_quit);
    }

    #[test]
    fn test_tab_cycles_filters() {
        let mut app = app(false);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(
            app.model.browse.active_filter(),
            Filter::Category(Category::WeakCopyleft)
        );
        press(&mut app, KeyCode::BackTab);
        assert_eq!(
            app.model.browse.active_filter(),
            Filter::Category(Category::Permissive)
        );
    }
}
