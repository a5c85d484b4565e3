//! Greedy matcher pairing equal tokens of two sequences.
//!
//! Every token of `a` is paired, left to right, with the first equal and not
//! yet paired token of `b`. When such a pair lands before a pair accepted
//! earlier, the pairs that would now cross it are revoked instead of the new
//! pair being dropped. Revoked tokens of `a` are not retried, so the result is
//! a maximal greedy pairing rather than a longest common subsequence.
//!
//! * time: `O(N·M)` scanning plus `O(K²)` for undoing inversions
//! * space: `O(N+M+K)`
//!
//! where `K` is the number of accepted pairs.

use tracing::trace;

use super::correspondence::Correspondence;

/// One link of the chain of accepted pairs.
///
/// The chain always ends in a pending slot whose pair is not filled in yet.
/// Links point into the arena by index, so rewinding to an earlier slot only
/// rewrites indices.
#[derive(Debug, Clone, Copy, Default)]
struct MatchSlot {
    index_in_a: usize,
    index_in_b: usize,
    previous: Option<usize>,
    next: Option<usize>,
}

#[derive(Debug)]
struct MatchChain {
    slots: Vec<MatchSlot>,
    head: usize,
    pending: usize,
}

impl MatchChain {
    fn new() -> Self {
        Self {
            slots: vec![MatchSlot::default()],
            head: 0,
            pending: 0,
        }
    }

    /// Revokes every accepted pair whose B index lies after `index_in_b`,
    /// rewinding the pending slot to the earliest of them.
    fn revoke_inversions(&mut self, index_in_b: usize, correspondence: &mut Correspondence) {
        let mut previous = self.slots[self.pending].previous;

        while let Some(slot_index) = previous {
            let slot = self.slots[slot_index];

            if slot.index_in_b > index_in_b {
                trace!(
                    index_in_a = slot.index_in_a,
                    index_in_b = slot.index_in_b,
                    inverted_by = index_in_b,
                    "revoking inverted match"
                );

                correspondence.remove(slot.index_in_a, slot.index_in_b);
                self.slots[slot_index].next = Some(self.pending);
                self.pending = slot_index;
            }

            previous = slot.previous;
        }
    }

    /// Fills the pending slot and appends a fresh one after it.
    fn accept(&mut self, index_in_a: usize, index_in_b: usize) {
        let next = self.slots.len();
        self.slots.push(MatchSlot {
            previous: Some(self.pending),
            ..MatchSlot::default()
        });

        let slot = &mut self.slots[self.pending];
        slot.index_in_a = index_in_a;
        slot.index_in_b = index_in_b;
        slot.next = Some(next);

        self.pending = next;
    }

    /// Accepted pairs in the order they were confirmed.
    fn accepted(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let mut current = Some(self.head);

        std::iter::from_fn(move || {
            let index = current.filter(|&index| index != self.pending)?;
            let slot = &self.slots[index];
            current = slot.next;

            Some((slot.index_in_a, slot.index_in_b))
        })
    }
}

/// Pairs up equal tokens of `a` and `b` without any two pairs crossing.
///
/// The returned correspondence is the only state of the run; nothing is
/// shared between calls.
pub fn find_correspondence<T>(a: &[T], b: &[T]) -> Correspondence
where
    T: PartialEq,
{
    let mut correspondence = Correspondence::new(a.len(), b.len());
    let mut chain = MatchChain::new();

    for (index_in_a, token) in a.iter().enumerate() {
        let candidate = b.iter().enumerate().find_map(|(index_in_b, other)| {
            (other == token && !correspondence.is_b_taken(index_in_b)).then_some(index_in_b)
        });

        if let Some(index_in_b) = candidate {
            chain.revoke_inversions(index_in_b, &mut correspondence);
            chain.accept(index_in_a, index_in_b);
            correspondence.insert(index_in_a, index_in_b);
        }
    }

    debug_assert!(
        chain.accepted().eq(correspondence.pairs()),
        "The chain of accepted matches must mirror the correspondence"
    );
    debug_assert!(correspondence.is_order_preserving());

    correspondence
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn pairs(a: &str, b: &str) -> Vec<(usize, usize)> {
        let a = a.split(' ').collect::<Vec<_>>();
        let b = b.split(' ').collect::<Vec<_>>();

        find_correspondence(&a, &b).pairs().collect()
    }

    #[test]
    fn test_empty_sequences() {
        let empty: [&str; 0] = [];
        assert!(find_correspondence(&empty, &empty).is_empty());
        assert!(find_correspondence(&["a"], &empty).is_empty());
        assert!(find_correspondence(&empty, &["a"]).is_empty());
    }

    #[test]
    fn test_identical() {
        assert_eq!(pairs("a b c", "a b c"), vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn test_repeated_tokens_pair_in_order() {
        assert_eq!(pairs("a a a", "a a"), vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn test_disjoint() {
        assert_eq!(pairs("a b", "c d"), vec![]);
    }

    #[test]
    fn test_shifted() {
        assert_eq!(pairs("a b c", "b c d"), vec![(1, 0), (2, 1)]);
    }

    #[test]
    fn test_swap_revokes_earlier_match() {
        // x pairs with B[1] first, then y pairs with B[0] which evicts x
        assert_eq!(pairs("x y", "y x"), vec![(1, 0)]);
    }

    #[test]
    fn test_single_inversion_revokes_several_matches() {
        assert_eq!(pairs("a b c", "c a b"), vec![(2, 0)]);
    }

    #[test]
    fn test_revoked_token_is_not_retried() {
        assert_eq!(pairs("x y x", "y x"), vec![(1, 0), (2, 1)]);
    }

    #[test]
    fn test_only_crossing_matches_are_revoked() {
        // a-0 survives, c-3 is revoked by b-1
        assert_eq!(pairs("a c b", "a b b c"), vec![(0, 0), (2, 1)]);
        assert_eq!(pairs("a c b d", "a b c d"), vec![(0, 0), (2, 1), (3, 3)]);
    }

    #[test]
    fn test_empty_tokens_match() {
        let a = ["", "a", ""];
        let b = ["", "a"];

        assert_eq!(
            find_correspondence(&a, &b).pairs().collect::<Vec<_>>(),
            vec![(0, 0), (1, 1)]
        );
    }

    #[test]
    fn test_chain_rewinds_to_earliest_revoked_slot() {
        let mut correspondence = Correspondence::new(3, 3);
        let mut chain = MatchChain::new();

        chain.accept(0, 1);
        correspondence.insert(0, 1);
        chain.accept(1, 2);
        correspondence.insert(1, 2);

        chain.revoke_inversions(0, &mut correspondence);
        assert_eq!(chain.pending, chain.head);
        assert!(correspondence.is_empty());

        chain.accept(2, 0);
        assert_eq!(chain.accepted().collect::<Vec<_>>(), vec![(2, 0)]);
    }
}
