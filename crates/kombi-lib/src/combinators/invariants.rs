//! Invariant checks excluded from coverage reports.

#![cfg_attr(coverage_nightly, coverage(off))]

use super::recursion::Rule;

impl<T> Rule<T> {
    #[inline]
    pub(super) fn ensure_defined_once(defined: bool) {
        assert!(defined, "Rule: define() called on an already defined rule");
    }
}
