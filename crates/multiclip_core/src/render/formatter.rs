//! Style-driven item formatting.
//!
//! # Invariants
//! - Leading/trailing blank lines of each item are stripped first; inner
//!   lines and indentation are preserved.
//! - Numbering always starts at 1 over the items actually rendered.

use crate::model::style::Style;
use crate::model::text::is_line_break;

/// Renders `items` as one block in `style`.
pub fn format_items<S: AsRef<str>>(style: Style, items: &[S]) -> String {
    style_items(style, items).join(separator(style))
}

/// Renders each item with its style marker, without joining.
///
/// `Comma` and `Plain` carry no per-item marker, so items are only trimmed.
pub fn style_items<S: AsRef<str>>(style: Style, items: &[S]) -> Vec<String> {
    items
        .iter()
        .map(|item| trim_blank_lines(item.as_ref()))
        .enumerate()
        .map(|(index, item)| match style {
            Style::Dash => format!("- {item}"),
            Style::Numbered => format!("{}. {item}", index + 1),
            Style::Bullet => format!("\u{2022} {item}"),
            Style::Comma | Style::Plain => item.to_string(),
        })
        .collect()
}

/// Removes whitespace-only lines from both ends of `text`.
pub fn trim_blank_lines(text: &str) -> &str {
    let mut start = 0;
    while let Some(offset) = text[start..].find(is_line_break) {
        let line_end = start + offset;
        if !text[start..line_end].trim().is_empty() {
            break;
        }
        start = line_end + break_len_at(text, line_end);
    }
    if text[start..].trim().is_empty() {
        return "";
    }

    let mut end = text.len();
    while let Some(offset) = text[start..end].rfind(is_line_break) {
        let line_break = start + offset;
        if !text[line_break + break_len_at(text, line_break)..end]
            .trim()
            .is_empty()
        {
            break;
        }
        end = line_break;
    }
    &text[start..end]
}

fn break_len_at(text: &str, index: usize) -> usize {
    text[index..].chars().next().map_or(1, char::len_utf8)
}

fn separator(style: Style) -> &'static str {
    match style {
        Style::Comma => ", ",
        Style::Dash | Style::Numbered | Style::Bullet | Style::Plain => "\n",
    }
}
