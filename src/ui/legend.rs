use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool, has_expanded: bool, show_guide: bool) -> Vec<Span<'static>> {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));

    let mut hotkey_spans = vec![];

    if vim_mode {
        hotkey_spans.extend(vec![
            key("j/k"),
            Span::raw(":Nav  "),
            key("gg/G"),
            Span::raw(":First/Last  "),
        ]);
    } else {
        hotkey_spans.extend(vec![key("↑/↓"), Span::raw(":Nav  ")]);
    }

    hotkey_spans.extend(vec![
        key("Enter"),
        Span::raw(":Details  "),
        key("0-3"),
        Span::raw(":Filter  "),
        key("Tab"),
        Span::raw(":Next Filter  "),
    ]);

    if has_expanded {
        hotkey_spans.extend(vec![key("c"), Span::raw(":Collapse  ")]);
    }

    hotkey_spans.extend(vec![
        key("?"),
        Span::raw(if show_guide { ":Hide Guide  " } else { ":Guide  " }),
        key("r"),
        Span::raw(":Reset  "),
        key("q"),
        Span::raw(":Quit"),
    ]);

    hotkey_spans
}

/// Render the hotkey legend
pub fn render_legend(f: &mut Frame, area: Rect, vim_mode: bool, has_expanded: bool, show_guide: bool) {
    let legend = Paragraph::new(Line::from(build_hotkey_spans(
        vim_mode,
        has_expanded,
        show_guide,
    )))
    .block(Block::default().borders(Borders::ALL).title("Hotkeys"));

    f.render_widget(legend, area);
}
