use licensetui::logic::formatting::{truncate, wrap_bullet, wrap_text};
use licensetui::logic::freedom::{filled_cells, FreedomTier};
use licensetui::logic::layout::{card_offsets, clip_card, resolve_scroll};
use licensetui::logic::ui::disclosure_label;
use licensetui::{License, Model};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::theme;

const FREEDOM_LABEL: &str = "Freedom ";
const MAX_BAR_WIDTH: usize = 30;

fn heading(text: &'static str, color: Color) -> Line<'static> {
    Line::from(Span::styled(
        text,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))
}

fn freedom_line(level: u8, width: usize) -> Line<'static> {
    let percent = format!(" {}%", level);
    let bar_width = width
        .saturating_sub(FREEDOM_LABEL.len() + percent.len())
        .min(MAX_BAR_WIDTH);
    let filled = filled_cells(level, bar_width as u16) as usize;
    let color = theme::freedom_color(FreedomTier::from_level(level));

    Line::from(vec![
        Span::raw(FREEDOM_LABEL),
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled(
            "░".repeat(bar_width - filled),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(percent, Style::default().add_modifier(Modifier::BOLD)),
    ])
}

fn bullets(lines: &mut Vec<Line<'static>>, marker: &str, items: &[String], width: usize) {
    for item in items {
        lines.extend(
            wrap_bullet(marker, item, width)
                .into_iter()
                .map(|l| Line::styled(l, Style::default().fg(Color::Gray))),
        );
    }
}

/// Content lines of one card (borders excluded) for an inner width
pub fn card_lines(license: &License, expanded: bool, width: usize) -> Vec<Line<'static>> {
    let category = license.category;
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                truncate(&license.short_name, width.saturating_sub(category.label().len() + 4)),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!(" {} ", category.label()),
                Style::default()
                    .fg(Color::Black)
                    .bg(theme::category_color(category)),
            ),
        ]),
        freedom_line(license.freedom_level, width),
    ];

    lines.extend(wrap_text(&license.description, width).into_iter().map(Line::from));
    lines.push(Line::from(Span::styled(
        disclosure_label(expanded),
        Style::default()
            .fg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
    )));

    if !expanded {
        return lines;
    }

    lines.push(Line::default());
    lines.push(heading("Advantages", Color::Green));
    bullets(&mut lines, "✓", &license.pros, width);

    lines.push(Line::default());
    lines.push(heading("Disadvantages", Color::Red));
    bullets(&mut lines, "✗", &license.cons, width);

    lines.push(Line::default());
    lines.push(heading("Key points", theme::ACCENT));
    bullets(&mut lines, "•", &license.key_points, width);

    lines.push(Line::default());
    lines.push(heading("Compatibility", Color::Blue));
    lines.extend(wrap_text(&license.compatibility, width).into_iter().map(Line::from));

    lines.push(Line::default());
    lines.push(heading("Popular projects", Color::White));
    lines.extend(
        wrap_text(&license.examples.join(" · "), width)
            .into_iter()
            .map(Line::from),
    );

    lines
}

/// Render the visible licenses as stacked cards, scrolled so the card under
/// the cursor is on screen. Updates the stored scroll offset.
pub fn render_license_list(f: &mut Frame, area: Rect, model: &mut Model<'_>) {
    let visible = model.visible();

    if visible.is_empty() {
        model.ui.scroll_offset = 0;
        let empty = Paragraph::new("No licenses in this category")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(empty, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let cards: Vec<Vec<Line<'static>>> = visible
        .iter()
        .map(|l| card_lines(l, model.browse.is_expanded(&l.id), inner_width))
        .collect();
    let heights: Vec<usize> = cards.iter().map(|lines| lines.len() + 2).collect();

    let viewport = area.height as usize;
    let offset = resolve_scroll(
        model.ui.scroll_offset,
        &heights,
        model.ui.selected_index,
        viewport,
    );
    model.ui.scroll_offset = offset;

    let offsets = card_offsets(&heights);
    for (idx, lines) in cards.into_iter().enumerate() {
        let Some(clip) = clip_card(offsets[idx], heights[idx], offset, viewport) else {
            continue;
        };

        let license = visible[idx];
        let is_selected = model.ui.selected_index == Some(idx);
        let is_expanded = model.browse.is_expanded(&license.id);

        let mut borders = Borders::LEFT | Borders::RIGHT;
        if clip.top_cut == 0 {
            borders |= Borders::TOP;
        }
        if clip.bottom_cut == 0 {
            borders |= Borders::BOTTOM;
        }

        let (border_type, border_style) = if is_selected {
            (
                BorderType::Thick,
                Style::default()
                    .fg(theme::SELECTED)
                    .add_modifier(Modifier::BOLD),
            )
        } else if is_expanded {
            (
                BorderType::Rounded,
                Style::default().fg(theme::category_color(license.category)),
            )
        } else {
            (BorderType::Rounded, Style::default().fg(Color::DarkGray))
        };

        let mut block = Block::default()
            .borders(borders)
            .border_type(border_type)
            .border_style(border_style);
        // Titles sit on the top border; skip when it is scrolled off
        if clip.top_cut == 0 {
            let marker = if is_selected { "▶ " } else { "" };
            block = block.title(Span::styled(
                format!(" {}{} ", marker, license.name),
                Style::default().add_modifier(Modifier::BOLD),
            ));
        }

        let card_area = Rect {
            x: area.x,
            y: area.y + clip.y as u16,
            width: area.width,
            height: clip.height as u16,
        };
        let scroll = clip.top_cut.saturating_sub(1) as u16;

        f.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), card_area);
    }
}
