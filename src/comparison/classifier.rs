#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{
    comparison_outcome::ComparisonOutcome, comparison_result::ComparisonResult,
    correspondence::Correspondence,
};

/// What happens to unmatched tokens of B that come after the last token of B
/// paired with anything.
///
/// Added tokens are swept up right before each token of A is classified, so
/// the ones trailing the final pair are only reached if some token of A
/// follows that pair.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingAdditions {
    /// Sweep once more after the last token of A so every token of B ends up
    /// in the outcome.
    #[default]
    Emit,

    /// Stop with the last token of A, dropping trailing additions that were
    /// not swept up by then.
    Drop,
}

/// Walks `a` once and turns `correspondence` into added, deleted and
/// unchanged results together with their union.
///
/// `correspondence` must be order-preserving, as produced by
/// [`find_correspondence`](super::matcher::find_correspondence).
#[must_use]
pub fn classify<'a>(
    a: &[&'a str],
    b: &[&'a str],
    correspondence: &Correspondence,
    trailing_additions: TrailingAdditions,
) -> ComparisonOutcome<'a> {
    debug_assert!(
        correspondence.is_order_preserving(),
        "Matches must not cross each other"
    );

    let mut outcome = ComparisonOutcome::with_tokens(a.to_vec(), b.to_vec());
    let mut next_in_b = 0;

    for (index_in_a, &token) in a.iter().enumerate() {
        next_in_b = sweep_added(b, correspondence, next_in_b, &mut outcome);

        match correspondence.b_for(index_in_a) {
            Some(index_in_b) => {
                outcome.push(ComparisonResult::unchanged(token, index_in_a, index_in_b));
                next_in_b = index_in_b + 1;
            }
            None => outcome.push(ComparisonResult::deleted(token, index_in_a)),
        }
    }

    if trailing_additions == TrailingAdditions::Emit {
        sweep_added(b, correspondence, next_in_b, &mut outcome);
    }

    outcome
}

/// Emits unmatched tokens of `b` from `start` up to the next matched one and
/// returns where the sweep stopped.
fn sweep_added<'a>(
    b: &[&'a str],
    correspondence: &Correspondence,
    start: usize,
    outcome: &mut ComparisonOutcome<'a>,
) -> usize {
    let mut index_in_b = start;

    while index_in_b < b.len() && correspondence.a_for(index_in_b).is_none() {
        outcome.push(ComparisonResult::added(b[index_in_b], index_in_b));
        index_in_b += 1;
    }

    index_in_b
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::comparison::matcher::find_correspondence;

    fn render(a: &str, b: &str, trailing_additions: TrailingAdditions) -> String {
        let a = a.split(' ').collect::<Vec<_>>();
        let b = b.split(' ').collect::<Vec<_>>();
        let correspondence = find_correspondence(&a, &b);

        classify(&a, &b, &correspondence, trailing_additions)
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_interleaving() {
        assert_snapshot!(render("a x b y c", "a b z c w", TrailingAdditions::Emit), @r"
        {a, 0, 0}
        {x, 1, -1}
        {b, 2, 1}
        {z, -1, 2}
        {y, 3, -1}
        {c, 4, 3}
        {w, -1, 4}
        ");
    }

    #[test]
    fn test_additions_are_swept_before_the_next_token_of_a() {
        assert_snapshot!(render("a b", "x y a z b", TrailingAdditions::Drop), @r"
        {x, -1, 0}
        {y, -1, 1}
        {a, 0, 2}
        {z, -1, 3}
        {b, 1, 4}
        ");
    }

    #[test]
    fn test_trailing_additions_after_last_match() {
        assert_eq!(
            render("a b c", "b c d", TrailingAdditions::Emit),
            "{a, 0, -1}\n{b, 1, 0}\n{c, 2, 1}\n{d, -1, 2}"
        );
        assert_eq!(
            render("a b c", "b c d", TrailingAdditions::Drop),
            "{a, 0, -1}\n{b, 1, 0}\n{c, 2, 1}"
        );
    }

    #[test]
    fn test_trailing_deletions_still_sweep_additions() {
        // the deleted "x" gives the sweep a chance to reach "d"
        let expected = "{b, 0, 0}\n{c, 1, 1}\n{d, -1, 2}\n{x, 2, -1}";
        assert_eq!(render("b c x", "b c d", TrailingAdditions::Emit), expected);
        assert_eq!(render("b c x", "b c d", TrailingAdditions::Drop), expected);
    }

    #[test]
    fn test_empty_a_only_emits_with_trailing_sweep() {
        let b = ["x", "y"];
        let correspondence = Correspondence::new(0, 2);

        let outcome = classify(&[], &b, &correspondence, TrailingAdditions::Emit);
        assert_eq!(
            outcome.added_in_b(),
            &[ComparisonResult::added("x", 0), ComparisonResult::added("y", 1)]
        );

        let outcome = classify(&[], &b, &correspondence, TrailingAdditions::Drop);
        assert!(outcome.diff_union().is_empty());
    }
}
