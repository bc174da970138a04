//! Layout calculation logic
//!
//! Pure functions for positioning license cards in a vertically scrolling
//! viewport. Cards are stacked top to bottom; each has a height in lines.

/// Starting line of each card given the card heights
///
/// # Examples
/// ```
/// use licensetui::logic::layout::card_offsets;
///
/// assert_eq!(card_offsets(&[4, 10, 4]), vec![0, 4, 14]);
/// assert!(card_offsets(&[]).is_empty());
/// ```
pub fn card_offsets(heights: &[usize]) -> Vec<usize> {
    heights
        .iter()
        .scan(0usize, |top, &h| {
            let start = *top;
            *top += h;
            Some(start)
        })
        .collect()
}

/// Adjust the scroll offset so the card at `[start, start + height)` is visible
///
/// Cards taller than the viewport are aligned to their top edge.
///
/// # Examples
/// ```
/// use licensetui::logic::layout::scroll_to_reveal;
///
/// // Already visible: offset unchanged
/// assert_eq!(scroll_to_reveal(0, 4, 4, 20), 0);
/// // Above the viewport: scroll up to its top
/// assert_eq!(scroll_to_reveal(10, 4, 4, 20), 4);
/// // Below the viewport: scroll down until its bottom fits
/// assert_eq!(scroll_to_reveal(0, 18, 4, 20), 2);
/// // Taller than the viewport: align top
/// assert_eq!(scroll_to_reveal(0, 18, 30, 20), 18);
/// ```
pub fn scroll_to_reveal(current: usize, start: usize, height: usize, viewport: usize) -> usize {
    if viewport == 0 {
        return start;
    }

    let end = start + height;
    if start < current {
        start
    } else if end > current + viewport {
        if height >= viewport {
            start
        } else {
            end - viewport
        }
    } else {
        current
    }
}

/// Largest useful scroll offset for `total` content lines
pub fn max_scroll(total: usize, viewport: usize) -> usize {
    total.saturating_sub(viewport)
}

/// Scroll offset for the current frame: reveal the selected card, then clamp
pub fn resolve_scroll(
    current: usize,
    heights: &[usize],
    selected: Option<usize>,
    viewport: usize,
) -> usize {
    let total: usize = heights.iter().sum();
    let offsets = card_offsets(heights);

    let revealed = match selected.and_then(|idx| offsets.get(idx).map(|&start| (start, heights[idx]))) {
        Some((start, height)) => scroll_to_reveal(current, start, height, viewport),
        None => current,
    };

    // An over-tall selected card may need an offset past max_scroll
    let limit = match selected.and_then(|idx| offsets.get(idx)) {
        Some(&start) => max_scroll(total, viewport).max(start.min(total)),
        None => max_scroll(total, viewport),
    };
    revealed.min(limit)
}

/// Portion of a card that falls inside the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardClip {
    /// Row inside the viewport where the visible part starts
    pub y: usize,
    /// Number of visible rows
    pub height: usize,
    /// Card rows hidden above the viewport
    pub top_cut: usize,
    /// Card rows hidden below the viewport
    pub bottom_cut: usize,
}

/// Clip a card spanning `[start, start + height)` to the viewport
/// `[offset, offset + viewport)`. Returns `None` when nothing is visible.
///
/// # Examples
/// ```
/// use licensetui::logic::layout::{clip_card, CardClip};
///
/// assert_eq!(
///     clip_card(8, 6, 10, 20),
///     Some(CardClip { y: 0, height: 4, top_cut: 2, bottom_cut: 0 })
/// );
/// assert_eq!(clip_card(0, 5, 10, 20), None);
/// ```
pub fn clip_card(start: usize, height: usize, offset: usize, viewport: usize) -> Option<CardClip> {
    let end = start + height;
    let view_end = offset + viewport;
    let visible_start = start.max(offset);
    let visible_end = end.min(view_end);

    if visible_start >= visible_end {
        return None;
    }

    Some(CardClip {
        y: visible_start - offset,
        height: visible_end - visible_start,
        top_cut: visible_start - start,
        bottom_cut: end - visible_end,
    })
}
