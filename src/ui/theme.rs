//! Colors for categories, filters and freedom tiers
//!
//! Total matches over closed enums: adding a category fails to compile
//! until it has a color.

use licensetui::logic::freedom::FreedomTier;
use licensetui::{Category, Filter};
use ratatui::style::Color;

pub const ORANGE: Color = Color::Rgb(255, 140, 0);

pub fn category_color(category: Category) -> Color {
    match category {
        Category::Permissive => Color::Green,
        Category::WeakCopyleft => Color::Yellow,
        Category::StrongCopyleft => Color::Red,
    }
}

pub fn filter_color(filter: Filter) -> Color {
    match filter {
        Filter::All => Color::Blue,
        Filter::Category(category) => category_color(category),
    }
}

pub fn freedom_color(tier: FreedomTier) -> Color {
    match tier {
        FreedomTier::High => Color::Green,
        FreedomTier::Medium => Color::Yellow,
        FreedomTier::Low => ORANGE,
    }
}

/// Border color for the card under the cursor
pub const SELECTED: Color = Color::Cyan;

/// Accent for headings and hotkeys
pub const ACCENT: Color = Color::Magenta;
