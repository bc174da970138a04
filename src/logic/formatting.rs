//! Text formatting logic
//!
//! Pure functions for fitting text into terminal cells. Widths are measured
//! in display columns, not bytes.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Word-wrap `text` into lines at most `width` columns wide
///
/// Words longer than the width are split across lines. Empty input yields
/// no lines.
///
/// # Examples
/// ```
/// use licensetui::logic::formatting::wrap_text;
///
/// assert_eq!(wrap_text("Very short and simple", 10), vec!["Very short", "and simple"]);
/// assert_eq!(wrap_text("abcdefgh", 3), vec!["abc", "def", "gh"]);
/// assert!(wrap_text("", 10).is_empty());
/// ```
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if width == 0 {
        return lines;
    }

    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();

        if current_width > 0 && current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }

        if current_width > 0 {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        // Hard-split an over-long word
        for ch in word.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if current_width + ch_width > width && current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += ch_width;
        }
    }

    if current_width > 0 {
        lines.push(current);
    }

    lines
}

/// Wrap a bullet item, indenting continuation lines under the text
///
/// # Examples
/// ```
/// use licensetui::logic::formatting::wrap_bullet;
///
/// assert_eq!(
///     wrap_bullet("✓", "Allows commercial use", 12),
///     vec!["✓ Allows", "  commercial", "  use"]
/// );
/// ```
pub fn wrap_bullet(marker: &str, text: &str, width: usize) -> Vec<String> {
    let indent = marker.width() + 1;
    if width <= indent {
        return wrap_text(&format!("{} {}", marker, text), width);
    }

    wrap_text(text, width - indent)
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                format!("{} {}", marker, line)
            } else {
                format!("{}{}", " ".repeat(indent), line)
            }
        })
        .collect()
}

/// Truncate to `width` columns, ending with an ellipsis when shortened
///
/// # Examples
/// ```
/// use licensetui::logic::formatting::truncate;
///
/// assert_eq!(truncate("Apache License 2.0", 50), "Apache License 2.0");
/// assert_eq!(truncate("Apache License 2.0", 8), "Apache …");
/// ```
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width + 1 > width {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.push('…');
    out
}
