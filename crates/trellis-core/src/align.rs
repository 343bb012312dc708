//! Cell alignment and space-justification.

use std::str::FromStr;

use crate::errors::ParseAlignError;
use crate::text::display_width;

/// Horizontal alignment of content within a fixed-width field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    /// Content flush left, spaces on the right
    #[default]
    Left,
    /// Content flush right, spaces on the left
    Right,
    /// Content centered; an odd leftover space goes to the right
    Center,
}

impl FromStr for Align {
    type Err = ParseAlignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Align::Left),
            "right" => Ok(Align::Right),
            "center" | "centre" => Ok(Align::Center),
            _ => Err(ParseAlignError {
                value: s.to_string(),
            }),
        }
    }
}

/// Pad `text` with spaces to exactly `width` characters.
///
/// Justification never truncates: content at least `width` wide is
/// returned unchanged. Width is measured in raw `char`s.
pub fn justify(text: &str, width: usize, align: Align) -> String {
    let len = display_width(text);
    if len >= width {
        return text.to_string();
    }

    let slack = width - len;
    let (left, right) = match align {
        Align::Left => (0, slack),
        Align::Right => (slack, 0),
        Align::Center => (slack / 2, slack - slack / 2),
    };

    let mut out = String::with_capacity(text.len() + slack);
    out.push_str(&" ".repeat(left));
    out.push_str(text);
    out.push_str(&" ".repeat(right));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_justify_left() {
        assert_eq!(justify("ab", 5, Align::Left), "ab   ");
    }

    #[test]
    fn test_justify_right() {
        assert_eq!(justify("ab", 5, Align::Right), "   ab");
    }

    #[test]
    fn test_justify_center_even_slack() {
        assert_eq!(justify("ab", 6, Align::Center), "  ab  ");
    }

    #[test]
    fn test_justify_center_odd_slack_biases_right() {
        assert_eq!(justify("ab", 5, Align::Center), " ab  ");
        assert_eq!(justify("x", 2, Align::Center), "x ");
    }

    #[test]
    fn test_justify_never_truncates() {
        assert_eq!(justify("abcdef", 3, Align::Left), "abcdef");
        assert_eq!(justify("abc", 3, Align::Center), "abc");
    }

    #[test]
    fn test_justify_counts_chars_not_bytes() {
        // Three chars, nine bytes.
        assert_eq!(justify("äöü", 5, Align::Left), "äöü  ");
    }

    #[test]
    fn test_align_from_str() {
        assert_eq!("left".parse::<Align>(), Ok(Align::Left));
        assert_eq!("RIGHT".parse::<Align>(), Ok(Align::Right));
        assert_eq!("Centre".parse::<Align>(), Ok(Align::Center));
        assert!("middle".parse::<Align>().is_err());
    }

    #[test]
    fn test_align_default_is_left() {
        assert_eq!(Align::default(), Align::Left);
    }
}
