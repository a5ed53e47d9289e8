//! kombi: parser combinators with left recursion, precedence climbing and packrat caching.
//!
//! # Example
//!
//! ```
//! use kombi_lib::{Rule, in_order, one_of_with_precedence, parse_with, token};
//! use kombi_lib::primitives::char_in;
//! use kombi_lib::structural::one_or_more;
//!
//! let expr: Rule<i64> = Rule::declare();
//! let number = one_or_more(char_in('0'..='9'))
//!     .map(|digits| digits.into_iter().collect::<String>().parse::<i64>().unwrap_or(0));
//! let minus = in_order((expr.reference(), token("-"), expr.reference()))
//!     .map_left_assoc(|(l, _, r)| l - r);
//! expr.define(one_of_with_precedence(vec![minus, number]));
//!
//! assert_eq!(parse_with("10 - 4 - 3", &expr.parser()).ok(), Some(3));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod cache;
pub mod combinators;
pub mod diagnostics;
pub mod log;
pub mod parser;

mod driver;


pub use cache::{CacheStats, OutputCache};
pub use combinators::{
    InOrder, Rule, in_order, joined_with, lazy, nested_precedence, non_recursive, one_of,
    one_of_longest, one_of_with_precedence, optional, primitives, repeat, strings, structural,
    token,
};
pub use diagnostics::ErrorPrinter;
pub use driver::parse_with;
pub use kombi_core::{Colors, Input, LeftPayload, Output, ParserId};
pub use log::{ParsingEvent, ParsingLog};
pub use parser::{BoxedParser, Parser};

/// Errors reported by [`parse_with`].
///
/// Sub-parser failures are ordinary no-match results and never surface here;
/// only the two top-level conditions do.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The entry parser matched nothing at offset 0.
    #[error("no matching parsers")]
    NoMatchingParsers { input: String },

    /// The entry parser matched a prefix and left trailing text.
    #[error("input is not consumed at offset {offset}")]
    InputIsNotConsumed {
        input: String,
        offset: usize,
        /// Debug rendering of what was parsed before stopping.
        payload: String,
    },
}

impl Error {
    /// The full text that was being parsed.
    pub fn input(&self) -> &str {
        match self {
            Error::NoMatchingParsers { input } | Error::InputIsNotConsumed { input, .. } => input,
        }
    }

    /// Offset the failure is reported at.
    pub fn offset(&self) -> usize {
        match self {
            Error::NoMatchingParsers { .. } => 0,
            Error::InputIsNotConsumed { offset, .. } => *offset,
        }
    }
}

/// Result type for top-level parses.
pub type Result<T> = std::result::Result<T, Error>;
