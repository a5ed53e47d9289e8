//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use crate::Input;

impl Input {
    #[inline]
    pub(crate) fn ensure_offset(text: &str, offset: usize) {
        assert!(
            offset <= text.len(),
            "Input: offset {offset} is past the end of a {}-byte text \
             (combinators must only advance over matched text)",
            text.len()
        );
    }
}
