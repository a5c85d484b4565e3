use wasm_bindgen::prelude::*;

use crate::{ComparisonOutcome, ComparisonResult};

/// Wrapper type to expose `ComparisonResult` to JS. Missing indices are `-1`.
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsComparisonResult {
    string: String,
    index_in_a: isize,
    index_in_b: isize,
}

#[wasm_bindgen]
impl JsComparisonResult {
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn string(&self) -> String { self.string.clone() }

    #[wasm_bindgen(getter, js_name = indexInA)]
    #[must_use]
    pub fn index_in_a(&self) -> isize { self.index_in_a }

    #[wasm_bindgen(getter, js_name = indexInB)]
    #[must_use]
    pub fn index_in_b(&self) -> isize { self.index_in_b }
}

fn to_js_index(index: Option<usize>) -> isize {
    index.map_or(-1, |index| isize::try_from(index).unwrap_or(isize::MAX))
}

impl From<&ComparisonResult<'_>> for JsComparisonResult {
    fn from(result: &ComparisonResult<'_>) -> Self {
        JsComparisonResult {
            string: result.string.to_owned(),
            index_in_a: to_js_index(result.index_in_a),
            index_in_b: to_js_index(result.index_in_b),
        }
    }
}

/// Wrapper type to expose `ComparisonOutcome` to JS under the property names
/// of the browser comparator.
#[wasm_bindgen]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JsComparisonOutcome {
    strings_in_a: Vec<String>,
    strings_in_b: Vec<String>,
    strings_added_in_b: Vec<JsComparisonResult>,
    strings_deleted_from_a: Vec<JsComparisonResult>,
    strings_unchanged: Vec<JsComparisonResult>,
    diff_union: Vec<JsComparisonResult>,
}

#[wasm_bindgen]
impl JsComparisonOutcome {
    #[wasm_bindgen(getter, js_name = stringsInA)]
    #[must_use]
    pub fn strings_in_a(&self) -> Vec<String> { self.strings_in_a.clone() }

    #[wasm_bindgen(getter, js_name = stringsInB)]
    #[must_use]
    pub fn strings_in_b(&self) -> Vec<String> { self.strings_in_b.clone() }

    #[wasm_bindgen(getter, js_name = stringsAddedInB)]
    #[must_use]
    pub fn strings_added_in_b(&self) -> Vec<JsComparisonResult> { self.strings_added_in_b.clone() }

    #[wasm_bindgen(getter, js_name = stringsDeletedFromA)]
    #[must_use]
    pub fn strings_deleted_from_a(&self) -> Vec<JsComparisonResult> {
        self.strings_deleted_from_a.clone()
    }

    #[wasm_bindgen(getter, js_name = stringsUnchanged)]
    #[must_use]
    pub fn strings_unchanged(&self) -> Vec<JsComparisonResult> { self.strings_unchanged.clone() }

    #[wasm_bindgen(getter, js_name = diffUnion)]
    #[must_use]
    pub fn diff_union(&self) -> Vec<JsComparisonResult> { self.diff_union.clone() }
}

impl From<ComparisonOutcome<'_>> for JsComparisonOutcome {
    fn from(outcome: ComparisonOutcome<'_>) -> Self {
        fn convert(results: &[ComparisonResult<'_>]) -> Vec<JsComparisonResult> {
            results.iter().map(JsComparisonResult::from).collect()
        }

        JsComparisonOutcome {
            strings_in_a: outcome.tokens_in_a().iter().map(|&token| token.to_owned()).collect(),
            strings_in_b: outcome.tokens_in_b().iter().map(|&token| token.to_owned()).collect(),
            strings_added_in_b: convert(outcome.added_in_b()),
            strings_deleted_from_a: convert(outcome.deleted_from_a()),
            strings_unchanged: convert(outcome.unchanged()),
            diff_union: convert(outcome.diff_union()),
        }
    }
}
