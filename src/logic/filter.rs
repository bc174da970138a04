//! Filter selection logic
//!
//! Pure functions mapping key presses to filters and cycling through them.

use crate::catalog::{Catalog, Category};
use crate::model::Filter;

/// Next filter in filter-bar order, wrapping around
///
/// # Examples
/// ```
/// use licensetui::catalog::Category;
/// use licensetui::logic::filter::next_filter;
/// use licensetui::model::Filter;
///
/// assert_eq!(next_filter(Filter::All), Filter::Category(Category::Permissive));
/// assert_eq!(next_filter(Filter::Category(Category::StrongCopyleft)), Filter::All);
/// ```
pub fn next_filter(current: Filter) -> Filter {
    match current {
        Filter::All => Filter::Category(Category::Permissive),
        Filter::Category(Category::Permissive) => Filter::Category(Category::WeakCopyleft),
        Filter::Category(Category::WeakCopyleft) => Filter::Category(Category::StrongCopyleft),
        Filter::Category(Category::StrongCopyleft) => Filter::All,
    }
}

/// Previous filter in filter-bar order, wrapping around
pub fn prev_filter(current: Filter) -> Filter {
    match current {
        Filter::All => Filter::Category(Category::StrongCopyleft),
        Filter::Category(Category::Permissive) => Filter::All,
        Filter::Category(Category::WeakCopyleft) => Filter::Category(Category::Permissive),
        Filter::Category(Category::StrongCopyleft) => Filter::Category(Category::WeakCopyleft),
    }
}

/// Filter bound to a digit/letter hotkey
///
/// # Examples
/// ```
/// use licensetui::catalog::Category;
/// use licensetui::logic::filter::filter_for_key;
/// use licensetui::model::Filter;
///
/// assert_eq!(filter_for_key('0'), Some(Filter::All));
/// assert_eq!(filter_for_key('2'), Some(Filter::Category(Category::WeakCopyleft)));
/// assert_eq!(filter_for_key('9'), None);
/// ```
pub fn filter_for_key(c: char) -> Option<Filter> {
    match c {
        '0' | 'a' => Some(Filter::All),
        '1' => Some(Filter::Category(Category::Permissive)),
        '2' => Some(Filter::Category(Category::WeakCopyleft)),
        '3' => Some(Filter::Category(Category::StrongCopyleft)),
        _ => None,
    }
}

/// Hotkey shown next to a filter in the filter bar
pub fn key_for_filter(filter: Filter) -> char {
    match filter {
        Filter::All => '0',
        Filter::Category(Category::Permissive) => '1',
        Filter::Category(Category::WeakCopyleft) => '2',
        Filter::Category(Category::StrongCopyleft) => '3',
    }
}

/// Number of catalog licenses passing a filter
pub fn match_count(catalog: &Catalog, filter: Filter) -> usize {
    match filter {
        Filter::All => catalog.len(),
        Filter::Category(category) => catalog.count(category),
    }
}
