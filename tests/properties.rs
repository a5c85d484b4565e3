use proptest::{prelude::*, sample::select};
use token_diff::{
    ChangeKind, ComparisonResult, Delimiter, TrailingAdditions, compare,
    compare_with_trailing_additions,
};

/// Space separated text over a small alphabet so that tokens repeat often.
/// Empty tokens show up as runs of spaces.
fn text(alphabet: Vec<&'static str>, len: std::ops::Range<usize>) -> impl Strategy<Value = String> {
    prop::collection::vec(select(alphabet), len).prop_map(|tokens| tokens.join(" "))
}

fn any_text() -> impl Strategy<Value = String> { text(vec!["a", "b", "c", "d", ""], 0..12) }

proptest! {
    #[test]
    fn partitions_are_complete(a in any_text(), b in any_text()) {
        let outcome = compare(&a, &b, &" ".into());

        prop_assert_eq!(
            outcome.unchanged().len() + outcome.deleted_from_a().len(),
            outcome.tokens_in_a().len()
        );
        prop_assert_eq!(
            outcome.unchanged().len() + outcome.added_in_b().len(),
            outcome.tokens_in_b().len()
        );
    }

    #[test]
    fn union_is_made_of_the_categories(a in any_text(), b in any_text()) {
        let outcome = compare(&a, &b, &" ".into());

        prop_assert_eq!(
            outcome.diff_union().len(),
            outcome.added_in_b().len() + outcome.deleted_from_a().len() + outcome.unchanged().len()
        );

        for (kind, expected) in [
            (ChangeKind::Added, outcome.added_in_b()),
            (ChangeKind::Deleted, outcome.deleted_from_a()),
            (ChangeKind::Unchanged, outcome.unchanged()),
        ] {
            let from_union = outcome
                .iter()
                .filter(|result| result.kind() == kind)
                .copied()
                .collect::<Vec<_>>();
            prop_assert_eq!(from_union.as_slice(), expected);
        }
    }

    #[test]
    fn results_point_at_their_tokens(a in any_text(), b in any_text()) {
        let outcome = compare(&a, &b, &" ".into());

        for result in &outcome {
            if let Some(index) = result.index_in_a {
                prop_assert_eq!(outcome.tokens_in_a()[index], result.string);
            }
            if let Some(index) = result.index_in_b {
                prop_assert_eq!(outcome.tokens_in_b()[index], result.string);
            }
        }
    }

    #[test]
    fn unchanged_tokens_keep_their_order(a in any_text(), b in any_text()) {
        let outcome = compare(&a, &b, &" ".into());

        for pair in outcome.unchanged().windows(2) {
            prop_assert!(pair[0].index_in_a < pair[1].index_in_a);
            prop_assert!(pair[0].index_in_b < pair[1].index_in_b);
        }
    }

    #[test]
    fn comparing_with_itself_changes_nothing(a in any_text()) {
        let outcome = compare(&a, &a, &" ".into());

        prop_assert!(outcome.is_identical());
        for (index, result) in outcome.unchanged().iter().enumerate() {
            prop_assert_eq!(result.index_in_a, Some(index));
            prop_assert_eq!(result.index_in_b, Some(index));
        }
    }

    #[test]
    fn disjoint_texts_share_nothing(
        a in text(vec!["a", "b"], 1..8),
        b in text(vec!["c", "d"], 1..8),
    ) {
        let outcome = compare(&a, &b, &" ".into());
        let tokens_in_a = a.split(' ').collect::<Vec<_>>();
        let tokens_in_b = b.split(' ').collect::<Vec<_>>();

        prop_assert!(outcome.unchanged().is_empty());
        prop_assert_eq!(
            outcome.deleted_from_a().to_vec(),
            tokens_in_a
                .iter()
                .enumerate()
                .map(|(index, &token)| ComparisonResult::deleted(token, index))
                .collect::<Vec<_>>()
        );
        prop_assert_eq!(
            outcome.added_in_b().to_vec(),
            tokens_in_b
                .iter()
                .enumerate()
                .map(|(index, &token)| ComparisonResult::added(token, index))
                .collect::<Vec<_>>()
        );
    }

    #[test]
    fn dropping_trailing_additions_only_shortens_the_union(a in any_text(), b in any_text()) {
        let split_on = Delimiter::literal(" ");
        let emitted = compare_with_trailing_additions(&a, &b, &split_on, TrailingAdditions::Emit);
        let dropped = compare_with_trailing_additions(&a, &b, &split_on, TrailingAdditions::Drop);

        let (prefix, rest) = emitted.diff_union().split_at(dropped.diff_union().len());
        prop_assert_eq!(prefix, dropped.diff_union());
        prop_assert!(rest.iter().all(ComparisonResult::is_added));
    }

    #[test]
    fn comparisons_are_deterministic(a in any_text(), b in any_text()) {
        prop_assert_eq!(compare(&a, &b, &" ".into()), compare(&a, &b, &" ".into()));
    }
}
