//! UI state transition logic

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u128 = 1500;

/// Whether a toast shown `elapsed_ms` ago should be dismissed
///
/// # Examples
/// ```
/// use licensetui::logic::ui::should_dismiss_toast;
///
/// assert!(!should_dismiss_toast(200));
/// assert!(should_dismiss_toast(1500));
/// ```
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

/// Label for the expand/collapse affordance on a card
pub fn disclosure_label(expanded: bool) -> &'static str {
    if expanded {
        "▲ Hide details"
    } else {
        "▼ Show details"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_threshold() {
        assert!(!should_dismiss_toast(TOAST_DURATION_MS - 1));
        assert!(should_dismiss_toast(TOAST_DURATION_MS + 1));
    }

    #[test]
    fn test_disclosure_label() {
        assert!(disclosure_label(true).contains("Hide"));
        assert!(disclosure_label(false).contains("Show"));
    }
}
