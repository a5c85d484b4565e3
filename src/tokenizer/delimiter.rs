use std::fmt::{self, Display};

use regex::Regex;

use crate::errors::ComparatorError;

/// The separator both texts are split on before comparing them.
///
/// Splitting follows the semantics of JavaScript's `String.prototype.split`
/// so that results line up with comparisons made in the browser:
///
/// ```not_rust
/// "a,b"  split on ","  -> ["a", "b"]
/// "ab"   split on ","  -> ["ab"]
/// ",a,"  split on ","  -> ["", "a", ""]
/// "ab"   split on ""   -> ["a", "b"]
/// ""     split on ""   -> []
/// ""     split on ","  -> [""]
/// ```
#[derive(Debug, Clone)]
pub enum Delimiter {
    /// Split on every occurrence of a literal substring.
    Literal(String),

    /// Split on every match of a regular expression. Capture groups are not
    /// spliced into the output.
    Pattern(Regex),
}

impl Delimiter {
    #[must_use]
    pub fn literal(separator: impl Into<String>) -> Self { Delimiter::Literal(separator.into()) }

    /// Compiles `pattern` into a regex delimiter.
    ///
    /// # Errors
    ///
    /// Returns [`ComparatorError::InvalidPattern`] if `pattern` is not a valid
    /// regular expression.
    pub fn pattern(pattern: &str) -> Result<Self, ComparatorError> {
        Regex::new(pattern)
            .map(Delimiter::Pattern)
            .map_err(|source| ComparatorError::InvalidPattern {
                pattern: pattern.to_owned(),
                source,
            })
    }

    /// The literal separator or the regex source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Delimiter::Literal(separator) => separator,
            Delimiter::Pattern(regex) => regex.as_str(),
        }
    }

    /// Splits `text` into tokens borrowing from it.
    #[must_use]
    pub fn split<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match self {
            Delimiter::Literal(separator) if separator.is_empty() => split_into_chars(text),
            Delimiter::Literal(separator) => text.split(separator.as_str()).collect(),
            Delimiter::Pattern(regex) => split_on_matches(regex, text),
        }
    }
}

fn split_into_chars(text: &str) -> Vec<&str> {
    text.char_indices()
        .map(|(i, c)| &text[i..i + c.len_utf8()])
        .collect()
}

/// Empty matches at the position where the previous token ended are skipped,
/// which makes patterns like `x*` split between every character instead of
/// producing empty tokens at both ends.
fn split_on_matches<'a>(regex: &Regex, text: &'a str) -> Vec<&'a str> {
    if text.is_empty() {
        return if regex.is_match(text) {
            Vec::new()
        } else {
            vec![text]
        };
    }

    let mut result = Vec::new();
    let mut token_start = 0;
    let mut search_from = 0;

    while search_from < text.len() {
        let Some(found) = regex.find_at(text, search_from) else {
            break;
        };

        if found.start() >= text.len() {
            break;
        }

        if found.end() == token_start {
            search_from += text[search_from..].chars().next().map_or(1, char::len_utf8);
            continue;
        }

        result.push(&text[token_start..found.start()]);
        token_start = found.end();
        search_from = found.end();
    }

    result.push(&text[token_start..]);
    result
}

impl PartialEq for Delimiter {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Delimiter::Literal(left), Delimiter::Literal(right)) => left == right,
            (Delimiter::Pattern(left), Delimiter::Pattern(right)) => left.as_str() == right.as_str(),
            _ => false,
        }
    }
}

impl Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Delimiter::Literal(separator) => write!(f, "{separator:?}"),
            Delimiter::Pattern(regex) => write!(f, "/{}/", regex.as_str()),
        }
    }
}

impl From<&str> for Delimiter {
    fn from(separator: &str) -> Self { Delimiter::literal(separator) }
}

impl From<String> for Delimiter {
    fn from(separator: String) -> Self { Delimiter::Literal(separator) }
}

impl From<char> for Delimiter {
    fn from(separator: char) -> Self { Delimiter::Literal(separator.to_string()) }
}

impl From<Regex> for Delimiter {
    fn from(regex: Regex) -> Self { Delimiter::Pattern(regex) }
}

#[cfg(feature = "serde")]
mod serialization {
    use serde::{Deserialize, Serialize};

    use super::Delimiter;
    use crate::errors::ComparatorError;

    /// A plain string is a literal separator, `{ pattern: "..." }` is a regex.
    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    pub(super) enum RawDelimiter {
        Literal(String),
        Pattern { pattern: String },
    }

    impl TryFrom<RawDelimiter> for Delimiter {
        type Error = ComparatorError;

        fn try_from(raw: RawDelimiter) -> Result<Self, Self::Error> {
            match raw {
                RawDelimiter::Literal(separator) => Ok(Delimiter::Literal(separator)),
                RawDelimiter::Pattern { pattern } => Delimiter::pattern(&pattern),
            }
        }
    }

    impl From<Delimiter> for RawDelimiter {
        fn from(delimiter: Delimiter) -> Self {
            match delimiter {
                Delimiter::Literal(separator) => RawDelimiter::Literal(separator),
                Delimiter::Pattern(regex) => RawDelimiter::Pattern {
                    pattern: regex.as_str().to_owned(),
                },
            }
        }
    }

    impl Serialize for Delimiter {
        fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            RawDelimiter::from(self.clone()).serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Delimiter {
        fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = RawDelimiter::deserialize(deserializer)?;
            Delimiter::try_from(raw).map_err(serde::de::Error::custom)
        }
    }
}
