mod classifier;
mod comparison_outcome;
mod comparison_result;
mod correspondence;
mod matcher;

pub use classifier::{TrailingAdditions, classify};
pub use comparison_outcome::ComparisonOutcome;
pub use comparison_result::{ChangeKind, ComparisonResult};
pub use correspondence::Correspondence;
pub use matcher::find_correspondence;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::tokenizer::Delimiter;

/// Splits both texts on `split_on` and classifies every token as added,
/// deleted or unchanged.
///
/// Tokens are paired greedily from left to right; when a pair would cross
/// one accepted earlier, the earlier one is given up. This keeps the pairing
/// order-preserving but does not guarantee the longest common subsequence.
///
/// ```
/// use token_diff::{ComparisonResult, compare};
///
/// let outcome = compare("a b c", "b c d", &" ".into());
///
/// assert_eq!(outcome.deleted_from_a(), &[ComparisonResult::deleted("a", 0)]);
/// assert_eq!(outcome.added_in_b(), &[ComparisonResult::added("d", 2)]);
/// assert_eq!(
///     outcome.unchanged(),
///     &[ComparisonResult::unchanged("b", 1, 0), ComparisonResult::unchanged("c", 2, 1)]
/// );
/// ```
#[must_use]
pub fn compare<'a>(
    string_a: &'a str,
    string_b: &'a str,
    split_on: &Delimiter,
) -> ComparisonOutcome<'a> {
    compare_with_trailing_additions(string_a, string_b, split_on, TrailingAdditions::default())
}

/// Like [`compare`] but lets the caller decide what happens to additions
/// after the last pair, see [`TrailingAdditions`].
#[must_use]
pub fn compare_with_trailing_additions<'a>(
    string_a: &'a str,
    string_b: &'a str,
    split_on: &Delimiter,
    trailing_additions: TrailingAdditions,
) -> ComparisonOutcome<'a> {
    let tokens_in_a = split_on.split(string_a);
    let tokens_in_b = split_on.split(string_b);

    let correspondence = find_correspondence(&tokens_in_a, &tokens_in_b);
    let outcome = classify(&tokens_in_a, &tokens_in_b, &correspondence, trailing_additions);

    debug!(
        delimiter = %split_on,
        tokens_in_a = tokens_in_a.len(),
        tokens_in_b = tokens_in_b.len(),
        unchanged = outcome.unchanged().len(),
        added = outcome.added_in_b().len(),
        deleted = outcome.deleted_from_a().len(),
        "compared texts"
    );

    outcome
}

/// A comparison waiting to be run: the two texts and what to split them on.
///
/// With the `serde` feature it deserialises from `{ stringA, stringB, splitOn }`
/// where `splitOn` is either a literal string or `{ pattern: "..." }`. Other
/// keys are ignored.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct StringComparator {
    pub string_a: String,
    pub string_b: String,
    pub split_on: Delimiter,

    #[cfg_attr(feature = "serde", serde(default))]
    pub trailing_additions: TrailingAdditions,
}

impl StringComparator {
    #[must_use]
    pub fn new(
        string_a: impl Into<String>,
        string_b: impl Into<String>,
        split_on: impl Into<Delimiter>,
    ) -> Self {
        Self {
            string_a: string_a.into(),
            string_b: string_b.into(),
            split_on: split_on.into(),
            trailing_additions: TrailingAdditions::default(),
        }
    }

    #[must_use]
    pub fn with_trailing_additions(mut self, trailing_additions: TrailingAdditions) -> Self {
        self.trailing_additions = trailing_additions;
        self
    }

    /// Runs the comparison. Every call starts from scratch.
    #[must_use]
    pub fn compare(&self) -> ComparisonOutcome<'_> {
        compare_with_trailing_additions(
            &self.string_a,
            &self.string_b,
            &self.split_on,
            self.trailing_additions,
        )
    }
}
