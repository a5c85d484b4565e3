use std::fmt::{self, Display};

#[cfg(feature = "serde")]
use serde::Serialize;

/// Flat classification of a [`ComparisonResult`].
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Added,
    Deleted,
    Unchanged,
}

/// The fate of a single token.
///
/// A token only present in B has no `index_in_a`, a token only present in A
/// has no `index_in_b`, and an unchanged token has both.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComparisonResult<'a> {
    pub string: &'a str,

    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_index"))]
    pub index_in_a: Option<usize>,

    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_index"))]
    pub index_in_b: Option<usize>,
}

impl<'a> ComparisonResult<'a> {
    #[must_use]
    pub fn added(string: &'a str, index_in_b: usize) -> Self {
        Self {
            string,
            index_in_a: None,
            index_in_b: Some(index_in_b),
        }
    }

    #[must_use]
    pub fn deleted(string: &'a str, index_in_a: usize) -> Self {
        Self {
            string,
            index_in_a: Some(index_in_a),
            index_in_b: None,
        }
    }

    #[must_use]
    pub fn unchanged(string: &'a str, index_in_a: usize, index_in_b: usize) -> Self {
        Self {
            string,
            index_in_a: Some(index_in_a),
            index_in_b: Some(index_in_b),
        }
    }

    /// # Panics
    ///
    /// In debug builds, if neither index is set.
    #[must_use]
    pub fn kind(&self) -> ChangeKind {
        debug_assert!(
            self.index_in_a.is_some() || self.index_in_b.is_some(),
            "A comparison result must come from at least one of the sequences"
        );

        match (self.index_in_a, self.index_in_b) {
            (Some(_), Some(_)) => ChangeKind::Unchanged,
            (Some(_), None) => ChangeKind::Deleted,
            (None, _) => ChangeKind::Added,
        }
    }

    #[must_use]
    pub fn is_added(&self) -> bool { self.kind() == ChangeKind::Added }

    #[must_use]
    pub fn is_deleted(&self) -> bool { self.kind() == ChangeKind::Deleted }

    #[must_use]
    pub fn is_unchanged(&self) -> bool { self.kind() == ChangeKind::Unchanged }
}

/// Renders as `{string, indexInA, indexInB}` with `-1` for a missing index.
impl Display for ComparisonResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}, {}, {}}}",
            self.string,
            DisplayIndex(self.index_in_a),
            DisplayIndex(self.index_in_b)
        )
    }
}

struct DisplayIndex(Option<usize>);

impl Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(index) => write!(f, "{index}"),
            None => write!(f, "-1"),
        }
    }
}

#[cfg(feature = "serde")]
#[allow(clippy::ref_option, clippy::trivially_copy_pass_by_ref)]
fn serialize_index<S>(index: &Option<usize>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match index {
        Some(index) => index.serialize(serializer),
        None => serializer.serialize_i64(-1),
    }
}
