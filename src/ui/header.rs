use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::theme;

pub const TITLE: &str = "Open Source License Explorer";
pub const SUBTITLE: &str = "Compare and analyze the main open source licenses";

/// Render the title banner
pub fn render_header(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(vec![
            Span::styled("⚖ ", Style::default().fg(theme::ACCENT)),
            Span::styled(
                TITLE,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(Color::Gray))),
    ];

    let header = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);

    f.render_widget(header, area);
}
