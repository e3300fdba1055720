//! Line splitting for clipboard text.
//!
//! Clipboard content comes from arbitrary apps, so every Unicode line
//! boundary counts: `\n`, `\r`, `\r\n`, `\x0b`, `\x0c`, `\x1c`-`\x1e`,
//! `\u{85}`, `\u{2028}` and `\u{2029}`. A trailing boundary does not start
//! an extra empty line.

/// Returns whether `ch` ends a line.
pub fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Splits `text` into lines without their terminators.
pub fn split_lines(text: &str) -> SplitLines<'_> {
    SplitLines { rest: text }
}

/// Iterator returned by [`split_lines`].
#[derive(Debug, Clone)]
pub struct SplitLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        let Some((index, ch)) = self
            .rest
            .char_indices()
            .find(|(_, ch)| is_line_break(*ch))
        else {
            let line = self.rest;
            self.rest = "";
            return Some(line);
        };

        let line = &self.rest[..index];
        let mut end = index + ch.len_utf8();
        if ch == '\r' && self.rest[end..].starts_with('\n') {
            end += 1;
        }
        self.rest = &self.rest[end..];
        Some(line)
    }
}
