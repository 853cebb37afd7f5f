// SPDX-License-Identifier: PMPL-1.0-or-later
//! Inline `style` attribute heuristics.
//!
//! This is deliberately not a CSS parser. Rules match on raw substrings of
//! the attribute text, and declaration values are read by splitting on the
//! literal `key:` marker up to the next `;`. Keeping that logic here lets a
//! real declaration parser replace it without touching the rules.

use crate::error::{AuditError, Result};

/// Raw text of an element's `style` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InlineStyle<'a> {
    raw: &'a str,
}

impl<'a> InlineStyle<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self { raw }
    }

    /// Substring test against the raw style text (case-sensitive)
    pub fn contains(&self, needle: &str) -> bool {
        self.raw.contains(needle)
    }

    /// Value of the first `key:` occurrence, up to the next `;`, trimmed.
    ///
    /// `value_of("color")` on `"background-color: red; color: blue"` yields
    /// `"red"`: the first literal `color:` sits inside `background-color:`.
    pub fn value_of(&self, key: &str) -> Result<&'a str> {
        let marker = format!("{}:", key);
        let start = self
            .raw
            .find(&marker)
            .map(|pos| pos + marker.len())
            .ok_or_else(|| {
                AuditError::MalformedStyle(format!("no `{}` in style \"{}\"", marker, self.raw))
            })?;
        let rest = &self.raw[start..];
        let value = rest.split(';').next().unwrap_or(rest).trim();
        Ok(value)
    }

    /// Foreground and background color tokens
    pub fn color_pair(&self) -> Result<(&'a str, &'a str)> {
        Ok((self.value_of("color")?, self.value_of("background-color")?))
    }

    /// Whether a `font-size` declaration is present
    pub fn has_font_size(&self) -> bool {
        self.contains("font-size")
    }

    /// Whether `px` appears anywhere in the style
    pub fn uses_px(&self) -> bool {
        self.contains("px")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_of() {
        let style = InlineStyle::new("color: black; background-color: white;");
        assert_eq!(style.value_of("color").unwrap(), "black");
        assert_eq!(style.value_of("background-color").unwrap(), "white");
    }

    #[test]
    fn test_value_without_trailing_semicolon() {
        let style = InlineStyle::new("color:#333;background-color: #fafafa");
        assert_eq!(style.color_pair().unwrap(), ("#333", "#fafafa"));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let style = InlineStyle::new("background-color: navy; color: white");
        assert_eq!(style.value_of("color").unwrap(), "navy");
    }

    #[test]
    fn test_missing_marker_is_malformed() {
        let style = InlineStyle::new("background-color : white; color : black");
        assert!(matches!(
            style.value_of("background-color"),
            Err(AuditError::MalformedStyle(_))
        ));
        assert!(style.color_pair().is_err());
    }

    #[test]
    fn test_font_size_heuristics() {
        let rem = InlineStyle::new("font-size: 1.2rem");
        assert!(rem.has_font_size());
        assert!(!rem.uses_px());

        let px = InlineStyle::new("font-size: 16px");
        assert!(px.uses_px());

        let padded = InlineStyle::new("font-size: 1em; padding: 4px");
        assert!(padded.uses_px());

        assert!(!InlineStyle::new("").has_font_size());
    }
}
