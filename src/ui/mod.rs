// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - render: Main orchestration function that coordinates all rendering
// - layout: Calculates screen areas (header, filters, cards, guide, legend, status)
// - theme: Category, filter and freedom-tier colors
// - header: Title banner
// - filter_bar: Category filter buttons with counts
// - license_list: Scrolling license cards with inline details
// - guide: Category guide panel
// - legend: Hotkey legend
// - status_bar: Counts, filter and expanded license
// - toast: Brief pop-up messages

pub mod filter_bar;
pub mod guide;
pub mod header;
pub mod layout;
pub mod legend;
pub mod license_list;
pub mod render;
pub mod status_bar;
pub mod theme;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
