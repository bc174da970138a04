use licensetui::Model;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Status line text: counts, cursor position, filter and expanded license
///
/// An expanded license hidden by the filter is flagged so the user knows it
/// is still open.
pub fn status_text(model: &Model<'_>) -> String {
    let visible = model.visible().len();
    let total = model.browse.catalog().len();

    let position = match model.ui.selected_index {
        Some(idx) if visible > 0 => format!("{}/{}", idx + 1, visible),
        _ => "-".to_string(),
    };

    let expanded = match model.browse.expanded() {
        Some(license) if model.browse.expanded_is_hidden() => {
            format!("{} (hidden by filter)", license.short_name)
        }
        Some(license) => license.short_name.clone(),
        None => "none".to_string(),
    };

    format!(
        "Showing {} of {} │ Cursor: {} │ Filter: {} │ Expanded: {}",
        visible,
        total,
        position,
        model.browse.active_filter(),
        expanded
    )
}

/// Render the bottom status bar
pub fn render_status_bar(f: &mut Frame, area: Rect, model: &Model<'_>) {
    let style = if model.browse.expanded_is_hidden() {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(status_text(model), style)))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(paragraph, area);
}
