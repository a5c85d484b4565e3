mod comparison;
mod errors;
mod tokenizer;

pub use comparison::{
    ChangeKind, ComparisonOutcome, ComparisonResult, Correspondence, StringComparator,
    TrailingAdditions, classify, compare, compare_with_trailing_additions, find_correspondence,
};
pub use errors::ComparatorError;
pub use tokenizer::Delimiter;

#[cfg(feature = "wasm")]
pub mod wasm;
