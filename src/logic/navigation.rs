//! Cursor selection logic
//!
//! Pure functions for moving the cursor through the visible license list.

/// Next index with wrap-around; selects the first item when nothing is selected
///
/// # Examples
/// ```
/// use licensetui::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i + 1 >= list_len => 0,
        Some(i) => i + 1,
        None => 0,
    })
}

/// Previous index with wrap-around; selects the last item when nothing is selected
///
/// # Examples
/// ```
/// use licensetui::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 0), None);
/// assert_eq!(prev_selection(Some(2), 3), Some(1));
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(None, 3), Some(2));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1,
        // Stale index past the end after the list shrank
        Some(i) if i >= list_len => list_len - 1,
        Some(i) => i - 1,
    })
}

pub fn first_selection(list_len: usize) -> Option<usize> {
    (list_len > 0).then_some(0)
}

pub fn last_selection(list_len: usize) -> Option<usize> {
    list_len.checked_sub(1)
}

/// Pick the cursor position after the visible list changed
///
/// Follows `previous_id` when it is still in `ids`; otherwise keeps the old
/// index, clamped to the new length.
///
/// # Examples
/// ```
/// use licensetui::logic::navigation::reselect;
///
/// assert_eq!(reselect(Some("bsd"), Some(4), &["mit", "apache", "bsd"]), Some(2));
/// assert_eq!(reselect(Some("gpl3"), Some(2), &["lgpl", "mpl"]), Some(1));
/// assert_eq!(reselect(Some("mit"), Some(0), &[]), None);
/// ```
pub fn reselect(previous_id: Option<&str>, previous_index: Option<usize>, ids: &[&str]) -> Option<usize> {
    if ids.is_empty() {
        return None;
    }

    if let Some(pos) = previous_id.and_then(|id| ids.iter().position(|candidate| *candidate == id)) {
        return Some(pos);
    }

    Some(previous_index.unwrap_or(0).min(ids.len() - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_selection_empty_list() {
        assert_eq!(next_selection(None, 0), None);
        assert_eq!(next_selection(Some(3), 0), None);
    }

    #[test]
    fn test_next_selection_stale_index_wraps() {
        assert_eq!(next_selection(Some(7), 3), Some(0));
    }

    #[test]
    fn test_prev_selection_stale_index_clamps() {
        assert_eq!(prev_selection(Some(7), 3), Some(2));
    }

    #[test]
    fn test_single_item_list() {
        assert_eq!(next_selection(Some(0), 1), Some(0));
        assert_eq!(prev_selection(Some(0), 1), Some(0));
    }

    #[test]
    fn test_first_and_last() {
        assert_eq!(first_selection(0), None);
        assert_eq!(first_selection(4), Some(0));
        assert_eq!(last_selection(0), None);
        assert_eq!(last_selection(4), Some(3));
    }

    #[test]
    fn test_reselect_without_previous() {
        assert_eq!(reselect(None, None, &["a", "b"]), Some(0));
    }

    #[test]
    fn test_reselect_prefers_id_over_index() {
        assert_eq!(reselect(Some("b"), Some(0), &["a", "b"]), Some(1));
    }
}
