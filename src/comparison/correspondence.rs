/// Partial, order-preserving pairing between token indices of two sequences.
///
/// Both directions are stored in tables sized to their sequence so lookups
/// are O(1). A pair `(i, j)` is always present in both tables at once, and
/// for any two pairs `(i1, j1)`, `(i2, j2)` with `i1 < i2` we have `j1 < j2`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Correspondence {
    a_to_b: Vec<Option<usize>>,
    b_to_a: Vec<Option<usize>>,
}

impl Correspondence {
    /// Creates an empty correspondence between sequences of `len_a` and
    /// `len_b` tokens.
    #[must_use]
    pub fn new(len_a: usize, len_b: usize) -> Self {
        Self {
            a_to_b: vec![None; len_a],
            b_to_a: vec![None; len_b],
        }
    }

    /// The index in B paired with `index_in_a`, if any.
    #[must_use]
    pub fn b_for(&self, index_in_a: usize) -> Option<usize> {
        self.a_to_b.get(index_in_a).copied().flatten()
    }

    /// The index in A paired with `index_in_b`, if any.
    #[must_use]
    pub fn a_for(&self, index_in_b: usize) -> Option<usize> {
        self.b_to_a.get(index_in_b).copied().flatten()
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize { self.a_to_b.iter().flatten().count() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.a_to_b.iter().all(Option::is_none) }

    /// All pairs as `(index_in_a, index_in_b)` in ascending A order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.a_to_b
            .iter()
            .enumerate()
            .filter_map(|(index_in_a, index_in_b)| index_in_b.map(|j| (index_in_a, j)))
    }

    /// Whether no two pairs cross each other.
    #[must_use]
    pub fn is_order_preserving(&self) -> bool {
        self.pairs()
            .zip(self.pairs().skip(1))
            .all(|((_, previous), (_, next))| previous < next)
    }

    pub(crate) fn is_b_taken(&self, index_in_b: usize) -> bool {
        self.b_to_a[index_in_b].is_some()
    }

    pub(crate) fn insert(&mut self, index_in_a: usize, index_in_b: usize) {
        debug_assert!(
            self.a_to_b[index_in_a].is_none() && self.b_to_a[index_in_b].is_none(),
            "Both ({index_in_a}, {index_in_b}) slots must be free before pairing them"
        );

        self.a_to_b[index_in_a] = Some(index_in_b);
        self.b_to_a[index_in_b] = Some(index_in_a);
    }

    pub(crate) fn remove(&mut self, index_in_a: usize, index_in_b: usize) {
        self.a_to_b[index_in_a] = None;
        self.b_to_a[index_in_b] = None;
    }
}
