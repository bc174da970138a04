use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Title banner
    pub header_area: Rect,
    /// Category filter buttons
    pub filter_area: Rect,
    /// Scrolling license cards
    pub cards_area: Rect,
    /// Category guide (if shown)
    pub guide_area: Option<Rect>,
    /// Hotkey legend
    pub legend_area: Rect,
    /// Bottom status bar
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
///
/// `guide_height` is the full height of the guide panel including borders;
/// it is capped so the cards always keep some room.
pub fn calculate_layout(terminal_size: Rect, guide_height: Option<u16>) -> LayoutInfo {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header: border, title, subtitle, border
            Constraint::Length(3), // Filter bar
            Constraint::Min(3),    // Cards (+ guide)
            Constraint::Length(3), // Legend
            Constraint::Length(3), // Status bar
        ])
        .split(terminal_size);

    let content_area = main_chunks[2];

    let (cards_area, guide_area) = match guide_height {
        Some(height) => {
            let height = height.min(content_area.height / 2);
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(3), Constraint::Length(height)])
                .split(content_area);
            (chunks[0], Some(chunks[1]))
        }
        None => (content_area, None),
    };

    LayoutInfo {
        header_area: main_chunks[0],
        filter_area: main_chunks[1],
        cards_area,
        guide_area,
        legend_area: main_chunks[3],
        status_area: main_chunks[4],
    }
}
