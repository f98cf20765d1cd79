use regex::{Regex, RegexBuilder};

use crate::error::RepoError;

/// Case-insensitive "title starts with" filter.
///
/// The pattern is the search text anchored with `^`. Stores apply it as a
/// regular expression with the case-insensitive option, so the text is
/// escaped unless the caller explicitly asks for the raw form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitlePrefix {
    text: String,
    pattern: String,
}

impl TitlePrefix {
    /// Match the text literally.
    pub fn escaped(text: &str) -> Self {
        Self {
            text: text.to_string(),
            pattern: format!("^{}", regex::escape(text)),
        }
    }

    /// Interpolate the text into the pattern as-is. Metacharacters in `text`
    /// change what matches.
    pub fn raw(text: &str) -> Self {
        Self {
            text: text.to_string(),
            pattern: format!("^{}", text),
        }
    }

    pub fn new(text: &str, raw: bool) -> Self {
        if raw {
            Self::raw(text)
        } else {
            Self::escaped(text)
        }
    }

    /// The text as received from the caller.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The anchored regular expression source.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Compile the pattern with case folding enabled.
    pub fn to_regex(&self) -> Result<Regex, RepoError> {
        RegexBuilder::new(&self.pattern)
            .case_insensitive(true)
            .build()
            .map_err(|e| RepoError::InvalidPattern(e.to_string()))
    }
}
