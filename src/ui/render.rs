use crate::App;
use ratatui::Frame;

use super::{filter_bar, guide, header, layout, legend, license_list, status_bar, toast};

/// Main render function - orchestrates all UI rendering
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let model = &mut app.model;

    let guide_height = model.ui.show_guide.then(|| guide::guide_height(size.width));
    let layout_info = layout::calculate_layout(size, guide_height);

    header::render_header(f, layout_info.header_area);

    filter_bar::render_filter_bar(
        f,
        layout_info.filter_area,
        model.browse.catalog(),
        model.browse.active_filter(),
    );

    license_list::render_license_list(f, layout_info.cards_area, model);

    if let Some(guide_area) = layout_info.guide_area {
        guide::render_guide(f, guide_area);
    }

    legend::render_legend(
        f,
        layout_info.legend_area,
        model.ui.vim_mode,
        model.browse.expanded_id().is_some(),
        model.ui.show_guide,
    );

    status_bar::render_status_bar(f, layout_info.status_area, model);

    if let Some((message, _timestamp)) = &model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &mut App, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    fn screen_contains(rows: &[String], needle: &str) -> bool {
        rows.iter().any(|row| row.contains(needle))
    }

    #[test]
    fn test_initial_screen() {
        let mut app = App::new(&Config::default());
        let rows = draw(&mut app, 100, 50);

        assert!(screen_contains(&rows, "Open Source License Explorer"));
        assert!(screen_contains(&rows, "1 Permissive (3)"));
        assert!(screen_contains(&rows, "MIT License"));
        assert!(screen_contains(&rows, "Showing 6 of 6"));
        assert!(!screen_contains(&rows, "Advantages"));
    }

    #[test]
    fn test_expanded_card_shows_details() {
        let mut app = App::new(&Config::default());
        app.toggle_selected();
        let rows = draw(&mut app, 100, 60);

        assert!(screen_contains(&rows, "Advantages"));
        assert!(screen_contains(&rows, "Very short and simple"));
        assert!(screen_contains(&rows, "Hide details"));
    }

    #[test]
    fn test_filtered_screen_hides_other_categories() {
        let mut app = App::new(&Config::default());
        app.set_filter(licensetui::Filter::Category(licensetui::Category::StrongCopyleft));
        let rows = draw(&mut app, 100, 40);

        assert!(screen_contains(&rows, "GNU General Public License v3"));
        assert!(!screen_contains(&rows, "MIT License"));
        assert!(screen_contains(&rows, "Showing 1 of 6"));
    }

    #[test]
    fn test_cursor_scrolls_last_card_into_view() {
        let mut app = App::new(&Config::default());
        app.model.select_last();
        let rows = draw(&mut app, 80, 24);

        assert!(screen_contains(&rows, "Mozilla Public License 2.0"));
        assert!(app.model.ui.scroll_offset > 0);
    }

    #[test]
    fn test_guide_panel() {
        let mut app = App::new(&Config {
            show_guide: true,
            ..Config::default()
        });
        let rows = draw(&mut app, 120, 60);
        assert!(screen_contains(&rows, "Category guide"));
        assert!(screen_contains(&rows, "Maximum protection."));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = App::new(&Config::default());
        app.toggle_selected();
        let _ = draw(&mut app, 10, 5);
    }
}
