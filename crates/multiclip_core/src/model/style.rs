//! Output style enumeration.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Rendering rule applied uniformly to a sequence of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    /// `- item`
    Dash,
    /// `1. item`
    Numbered,
    /// `• item`
    Bullet,
    /// `a, b, c`
    Comma,
    /// One item per line, no marker.
    Plain,
}

/// Style name used on the command line.
pub const STYLE_DASH: &str = "dash";
pub const STYLE_NUMBERED: &str = "numbered";
pub const STYLE_BULLET: &str = "bullet";
pub const STYLE_COMMA: &str = "comma";
pub const STYLE_PLAIN: &str = "plain";

impl Style {
    /// All styles in chooser order.
    pub const ALL: [Style; 5] = [
        Style::Dash,
        Style::Numbered,
        Style::Bullet,
        Style::Comma,
        Style::Plain,
    ];

    /// Stable machine name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dash => STYLE_DASH,
            Self::Numbered => STYLE_NUMBERED,
            Self::Bullet => STYLE_BULLET,
            Self::Comma => STYLE_COMMA,
            Self::Plain => STYLE_PLAIN,
        }
    }

    /// Human label shown by style choosers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dash => "Dash list",
            Self::Numbered => "Numbered list",
            Self::Bullet => "Bullet points",
            Self::Comma => "Comma separated",
            Self::Plain => "Plain (newlines)",
        }
    }

    /// Resolves a chooser label, falling back to `Plain` for unknown input.
    pub fn from_label_or_plain(label: &str) -> Self {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|style| style.label() == label)
            .unwrap_or(Self::Plain)
    }
}

impl Display for Style {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Style {
    type Err = StyleParseError;

    /// Accepts either the machine name (case-insensitive) or the exact label.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(StyleParseError::Empty);
        }
        if let Some(style) = Self::ALL.into_iter().find(|style| style.label() == trimmed) {
            return Ok(style);
        }

        match trimmed.to_ascii_lowercase().as_str() {
            STYLE_DASH => Ok(Self::Dash),
            STYLE_NUMBERED => Ok(Self::Numbered),
            STYLE_BULLET => Ok(Self::Bullet),
            STYLE_COMMA => Ok(Self::Comma),
            STYLE_PLAIN => Ok(Self::Plain),
            _ => Err(StyleParseError::Unsupported(trimmed.to_string())),
        }
    }
}

/// Style parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleParseError {
    Empty,
    Unsupported(String),
}

impl Display for StyleParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "style must not be empty"),
            Self::Unsupported(value) => write!(
                f,
                "unsupported style `{value}`; expected dash|numbered|bullet|comma|plain"
            ),
        }
    }
}

impl Error for StyleParseError {}

#[cfg(test)]
mod tests {
    use super::{Style, StyleParseError};

    #[test]
    fn parses_machine_names_case_insensitively() {
        assert_eq!("dash".parse::<Style>().expect("dash"), Style::Dash);
        assert_eq!(" Numbered ".parse::<Style>().expect("numbered"), Style::Numbered);
        assert_eq!("COMMA".parse::<Style>().expect("comma"), Style::Comma);
    }

    #[test]
    fn parses_chooser_labels() {
        assert_eq!(
            "Bullet points".parse::<Style>().expect("bullet label"),
            Style::Bullet
        );
        assert_eq!(
            "Plain (newlines)".parse::<Style>().expect("plain label"),
            Style::Plain
        );
    }

    #[test]
    fn rejects_empty_and_unknown_names() {
        assert_eq!("  ".parse::<Style>(), Err(StyleParseError::Empty));
        assert_eq!(
            "roman".parse::<Style>(),
            Err(StyleParseError::Unsupported("roman".to_string()))
        );
    }

    #[test]
    fn unknown_label_falls_back_to_plain() {
        assert_eq!(Style::from_label_or_plain("Comma separated"), Style::Comma);
        assert_eq!(Style::from_label_or_plain("Roman numerals"), Style::Plain);
    }

    #[test]
    fn every_style_round_trips_through_its_name() {
        for style in Style::ALL {
            assert_eq!(style.as_str().parse::<Style>().expect("name"), style);
        }
    }
}
