//! Non-interactive output for `--list`
//!
//! Prints the same derived view the TUI shows: the visible list under the
//! active filter, with details for the expanded license.

use anyhow::Result;
use licensetui::{License, Model};
use std::fmt::Write;

/// One line per visible license; the expanded one gets its details indented
pub fn render_plain(model: &Model<'_>) -> String {
    let mut out = String::new();

    for license in model.visible() {
        let _ = writeln!(
            out,
            "{:<8} {:<12} {:<16} {:>3}%  {}",
            license.id,
            license.short_name,
            license.category.label(),
            license.freedom_level,
            license.name
        );

        if model.browse.is_expanded(&license.id) {
            write_details(&mut out, license);
        }
    }

    out
}

fn write_details(out: &mut String, license: &License) {
    let _ = writeln!(out, "    {}", license.description);
    let sections: [(&str, &str, &[String]); 3] = [
        ("Advantages", "✓", license.pros.as_slice()),
        ("Disadvantages", "✗", license.cons.as_slice()),
        ("Key points", "•", license.key_points.as_slice()),
    ];
    for (title, marker, items) in sections {
        let _ = writeln!(out, "    {}:", title);
        for item in items {
            let _ = writeln!(out, "      {} {}", marker, item);
        }
    }
    let _ = writeln!(out, "    Compatibility: {}", license.compatibility);
    let _ = writeln!(out, "    Popular projects: {}", license.examples.join(", "));
}

/// Visible licenses as a JSON array
pub fn render_json(model: &Model<'_>) -> Result<String> {
    let mut json = serde_json::to_string_pretty(&model.visible())?;
    json.push('\n');
    Ok(json)
}
