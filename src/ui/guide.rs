use licensetui::logic::formatting::wrap_text;
use licensetui::Category;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme;

/// Guide lines for an inner width: a colored heading and wrapped text per category
pub fn guide_lines(width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for (i, category) in Category::ALL.into_iter().enumerate() {
        if i > 0 {
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            category.label(),
            Style::default()
                .fg(theme::category_color(category))
                .add_modifier(Modifier::BOLD),
        )));
        lines.extend(
            wrap_text(category.guide(), width)
                .into_iter()
                .map(Line::from),
        );
    }

    lines
}

/// Total height including borders for a panel `outer_width` columns wide
pub fn guide_height(outer_width: u16) -> u16 {
    let inner = outer_width.saturating_sub(2) as usize;
    guide_lines(inner).len() as u16 + 2
}

/// Render the category guide panel
pub fn render_guide(f: &mut Frame, area: Rect) {
    let inner = area.width.saturating_sub(2) as usize;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Category guide (? to close) ");

    f.render_widget(Paragraph::new(guide_lines(inner)).block(block), area);
}
