use thiserror::Error;

/// Errors raised while setting up a comparison.
///
/// Comparing two texts never fails; only building the delimiter they are
/// split on can.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComparatorError {
    /// The delimiter pattern is not a valid regular expression
    #[error("Invalid delimiter pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The pattern as it was given
        pattern: String,
        /// The reason the regex engine rejected it
        source: regex::Error,
    },
}
