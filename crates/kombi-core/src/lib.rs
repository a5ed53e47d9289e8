#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures shared by every kombi parser.
//!
//! Two layers:
//! - **Cursor layer**: [`Input`] is an immutable position in shared source text,
//!   optionally carrying a [`LeftPayload`] threaded back into left-recursive rules
//! - **Result layer**: [`Output`] pairs a payload with the cursor to resume from
//!
//! A failed parse is simply the absence of an `Output`.

mod colors;
mod input;
mod invariants;
mod parser_id;

#[cfg(test)]
mod parser_id_tests;

pub use colors::Colors;
pub use input::{Input, LeftPayload, Output};
pub use parser_id::ParserId;
