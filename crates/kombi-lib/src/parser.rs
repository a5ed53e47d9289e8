//! The parser trait and its type-erased handle.

use std::fmt;
use std::rc::Rc;

use kombi_core::{Input, Output};

use crate::cache::{OutputCache, ResetCache, WithCache};
use crate::combinators::precedence::NestedPrecedence;
use crate::combinators::recursion::NonRecursive;
use crate::log::{Logged, ParsingLog};

/// A function from an input cursor to an optional output.
///
/// `None` is an ordinary no-match used for backtracking, never an error.
pub trait Parser<T> {
    fn parse(&self, input: &Input) -> Option<Output<T>>;

    /// True for parsers wrapped in [`nested_precedence`](crate::nested_precedence).
    ///
    /// Transparent wrappers forward this so the flag survives caching, logging
    /// and lazy references.
    fn resets_precedence(&self) -> bool {
        false
    }
}

impl<T, F> Parser<T> for F
where
    F: Fn(&Input) -> Option<Output<T>>,
{
    fn parse(&self, input: &Input) -> Option<Output<T>> {
        self(input)
    }
}

/// Cloneable, type-erased parser. Every combinator returns one.
pub struct BoxedParser<T> {
    parser: Rc<dyn Parser<T>>,
}

impl<T> Clone for BoxedParser<T> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Rc::clone(&self.parser),
        }
    }
}

impl<T> fmt::Debug for BoxedParser<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedParser")
            .field("resets_precedence", &self.parser.resets_precedence())
            .finish_non_exhaustive()
    }
}

impl<T: 'static> BoxedParser<T> {
    pub fn new<P: Parser<T> + 'static>(parser: P) -> Self {
        BoxedParser {
            parser: Rc::new(parser),
        }
    }
}

impl<T> Parser<T> for BoxedParser<T> {
    fn parse(&self, input: &Input) -> Option<Output<T>> {
        self.parser.parse(input)
    }

    fn resets_precedence(&self) -> bool {
        self.parser.resets_precedence()
    }
}

impl<T: 'static> BoxedParser<T> {
    /// Transforms the payload of a successful parse.
    pub fn map<U: 'static, F: Fn(T) -> U + 'static>(self, f: F) -> BoxedParser<U> {
        BoxedParser::new(Mapped { parser: self, f })
    }

    /// Rejects re-entry at an offset this instance is already parsing.
    pub fn non_recursive(self) -> BoxedParser<T> {
        BoxedParser::new(NonRecursive::new(self))
    }

    /// Marks a fully reset precedence context, e.g. a parenthesized group.
    pub fn nested_precedence(self) -> BoxedParser<T> {
        BoxedParser::new(NestedPrecedence::new(self))
    }

    /// Records `Before`/`After` events under `name`.
    pub fn with_log(self, name: &str, log: &ParsingLog) -> BoxedParser<T> {
        BoxedParser::new(Logged::new(name, self, log.clone()))
    }
}

impl<T: Clone + 'static> BoxedParser<T> {
    /// Memoizes results per (parser, offset, left payload) in `cache`.
    pub fn with_cache(self, cache: &OutputCache<T>) -> BoxedParser<T> {
        BoxedParser::new(WithCache::new(self, cache.clone()))
    }
}

impl<T: 'static> BoxedParser<T> {
    /// Clears `cache` when the outermost call through this parser returns.
    pub fn reset_cache<U: 'static>(self, cache: &OutputCache<U>) -> BoxedParser<T> {
        BoxedParser::new(ResetCache::new(self, cache.clone()))
    }
}

struct Mapped<T, F> {
    parser: BoxedParser<T>,
    f: F,
}

impl<T, U, F> Parser<U> for Mapped<T, F>
where
    F: Fn(T) -> U,
{
    fn parse(&self, input: &Input) -> Option<Output<U>> {
        self.parser.parse(input).map(|output| output.map(&self.f))
    }

    fn resets_precedence(&self) -> bool {
        self.parser.resets_precedence()
    }
}
