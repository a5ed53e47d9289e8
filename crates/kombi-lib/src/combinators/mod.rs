//! Combinators, leaves first.
//!
//! - `primitives`: literal strings and single characters
//! - `structural`: alternation, repetition, mapping
//! - `sequence`: `in_order` and its skip helpers
//! - `strings`: whitespace-insensitive tokens and separated lists
//! - `recursion`: lazy references, forward-declared rules, the non-recursion guard
//! - `assoc`: left-associative folding of left-recursive rules
//! - `precedence`: precedence climbing over ordered alternatives

pub mod assoc;
mod invariants;
pub mod precedence;
pub mod primitives;
pub mod recursion;
pub mod sequence;
pub mod strings;
pub mod structural;

#[cfg(test)]
mod primitives_tests;
#[cfg(test)]
mod sequence_tests;
#[cfg(test)]
mod structural_tests;

pub use precedence::{nested_precedence, one_of_with_precedence};
pub use recursion::{Rule, lazy, non_recursive};
pub use sequence::{InOrder, Sequence, in_order};
pub use strings::{joined_with, token};
pub use structural::{one_of, one_of_longest, optional, repeat};
