//! Expose the `token_diff` crate's functionality to WebAssembly.
mod types;

pub use types::{JsComparisonOutcome, JsComparisonResult};
use wasm_bindgen::prelude::*;

use crate::{Delimiter, StringComparator, TrailingAdditions};

#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc<'_> = wee_alloc::WeeAlloc::INIT;

/// WASM wrapper around [`crate::StringComparator`].
#[wasm_bindgen(js_name = StringComparator)]
#[derive(Debug, Clone, PartialEq)]
pub struct JsStringComparator {
    inner: StringComparator,
}

#[wasm_bindgen(js_class = StringComparator)]
impl JsStringComparator {
    /// Compares `string_a` and `string_b` split on the literal `split_on`.
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new(string_a: String, string_b: String, split_on: String) -> Self {
        set_panic_hook();

        Self {
            inner: StringComparator::new(string_a, string_b, split_on),
        }
    }

    /// Compares `string_a` and `string_b` split on matches of the regular
    /// expression `pattern`.
    ///
    /// # Errors
    ///
    /// If `pattern` is not a valid regular expression.
    #[wasm_bindgen(js_name = withPattern)]
    pub fn with_pattern(
        string_a: String,
        string_b: String,
        pattern: &str,
    ) -> Result<JsStringComparator, JsError> {
        set_panic_hook();

        Ok(Self {
            inner: StringComparator::new(string_a, string_b, Delimiter::pattern(pattern)?),
        })
    }

    /// Keep unmatched tokens of B trailing the last pair out of the results.
    #[wasm_bindgen(js_name = dropTrailingAdditions)]
    pub fn drop_trailing_additions(&mut self) {
        self.inner.trailing_additions = TrailingAdditions::Drop;
    }

    #[wasm_bindgen(getter, js_name = stringA)]
    #[must_use]
    pub fn string_a(&self) -> String { self.inner.string_a.clone() }

    #[wasm_bindgen(getter, js_name = stringB)]
    #[must_use]
    pub fn string_b(&self) -> String { self.inner.string_b.clone() }

    #[wasm_bindgen(getter, js_name = splitOn)]
    #[must_use]
    pub fn split_on(&self) -> String { self.inner.split_on.as_str().to_owned() }

    #[must_use]
    pub fn compare(&self) -> JsComparisonOutcome { self.inner.compare().into() }
}

fn set_panic_hook() {
    // https://github.com/rustwasm/console_error_panic_hook#readme
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
