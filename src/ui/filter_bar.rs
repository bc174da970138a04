use licensetui::logic::filter::{key_for_filter, match_count};
use licensetui::{Catalog, Filter};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme;

/// Build the filter button spans (extracted for testability)
fn build_filter_spans(catalog: &Catalog, active: Filter) -> Vec<Span<'static>> {
    let mut spans = Vec::new();

    for filter in Filter::ALL {
        let color = theme::filter_color(filter);
        let text = format!(
            " {} {} ({}) ",
            key_for_filter(filter),
            filter.label(),
            match_count(catalog, filter)
        );

        let style = if filter == active {
            Style::default()
                .fg(Color::Black)
                .bg(color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        };

        spans.push(Span::styled(text, style));
        spans.push(Span::raw("  "));
    }

    spans
}

/// Render the category filter buttons
pub fn render_filter_bar(f: &mut Frame, area: Rect, catalog: &Catalog, active: Filter) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Filter by category ");

    let paragraph = Paragraph::new(Line::from(build_filter_spans(catalog, active))).block(block);
    f.render_widget(paragraph, area);
}
