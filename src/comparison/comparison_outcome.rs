#[cfg(feature = "serde")]
use serde::Serialize;

use super::comparison_result::{ChangeKind, ComparisonResult};

/// Everything a single comparison produced.
///
/// Besides the tokenised inputs it holds three categorised lists and their
/// interleaved union, ordered the way the tokens were discovered while
/// walking A from left to right.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComparisonOutcome<'a> {
    #[cfg_attr(feature = "serde", serde(rename = "stringsInA"))]
    tokens_in_a: Vec<&'a str>,

    #[cfg_attr(feature = "serde", serde(rename = "stringsInB"))]
    tokens_in_b: Vec<&'a str>,

    #[cfg_attr(feature = "serde", serde(rename = "stringsAddedInB"))]
    added_in_b: Vec<ComparisonResult<'a>>,

    #[cfg_attr(feature = "serde", serde(rename = "stringsDeletedFromA"))]
    deleted_from_a: Vec<ComparisonResult<'a>>,

    #[cfg_attr(feature = "serde", serde(rename = "stringsUnchanged"))]
    unchanged: Vec<ComparisonResult<'a>>,

    #[cfg_attr(feature = "serde", serde(rename = "diffUnion"))]
    diff_union: Vec<ComparisonResult<'a>>,
}

impl<'a> ComparisonOutcome<'a> {
    pub(crate) fn with_tokens(tokens_in_a: Vec<&'a str>, tokens_in_b: Vec<&'a str>) -> Self {
        Self {
            tokens_in_a,
            tokens_in_b,
            ..Self::default()
        }
    }

    /// Appends `result` to its category and to the union.
    pub(crate) fn push(&mut self, result: ComparisonResult<'a>) {
        match result.kind() {
            ChangeKind::Added => self.added_in_b.push(result),
            ChangeKind::Deleted => self.deleted_from_a.push(result),
            ChangeKind::Unchanged => self.unchanged.push(result),
        }

        self.diff_union.push(result);
    }

    #[must_use]
    pub fn tokens_in_a(&self) -> &[&'a str] { &self.tokens_in_a }

    #[must_use]
    pub fn tokens_in_b(&self) -> &[&'a str] { &self.tokens_in_b }

    /// Tokens that only exist in B, in B order.
    #[must_use]
    pub fn added_in_b(&self) -> &[ComparisonResult<'a>] { &self.added_in_b }

    /// Tokens that only exist in A, in A order.
    #[must_use]
    pub fn deleted_from_a(&self) -> &[ComparisonResult<'a>] { &self.deleted_from_a }

    /// Tokens present in both, in A order.
    #[must_use]
    pub fn unchanged(&self) -> &[ComparisonResult<'a>] { &self.unchanged }

    /// All results interleaved into a single edit script.
    #[must_use]
    pub fn diff_union(&self) -> &[ComparisonResult<'a>] { &self.diff_union }

    #[must_use]
    pub fn into_diff_union(self) -> Vec<ComparisonResult<'a>> { self.diff_union }

    pub fn iter(&self) -> std::slice::Iter<'_, ComparisonResult<'a>> { self.diff_union.iter() }

    /// Whether nothing was added or deleted.
    #[must_use]
    pub fn is_identical(&self) -> bool {
        self.added_in_b.is_empty() && self.deleted_from_a.is_empty()
    }
}

impl<'a, 'b> IntoIterator for &'b ComparisonOutcome<'a> {
    type Item = &'b ComparisonResult<'a>;
    type IntoIter = std::slice::Iter<'b, ComparisonResult<'a>>;

    fn into_iter(self) -> Self::IntoIter { self.iter() }
}
