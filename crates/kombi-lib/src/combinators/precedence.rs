//! Precedence climbing over an ordered list of alternatives.
//!
//! Alternatives are listed from lowest to highest precedence. While an
//! alternative is being tried, its index sits on a stack owned by the
//! combinator; a recursive call into the same combinator only considers
//! alternatives from that index on, so a `*` operand never swallows a `+`.
//!
//! How the left payload on the incoming cursor is treated:
//!
//! - At the active alternative itself the cursor is passed unchanged, so a
//!   left-associative rule can refuse the right-recursion marker or extend a
//!   carried left operand.
//! - A tighter alternative never sees a carried value, since extending a fold
//!   is only ever the active rule's business; the right-recursion marker is
//!   cleared before trying it.
//! - Inside a [`nested_precedence`] group, parsing starts over from the lowest
//!   alternative with a clean cursor.

use std::cell::RefCell;

use kombi_core::{Input, LeftPayload, Output};

use crate::parser::{BoxedParser, Parser};

pub fn one_of_with_precedence<T: 'static>(alternatives: Vec<BoxedParser<T>>) -> BoxedParser<T> {
    BoxedParser::new(Precedence {
        alternatives,
        active: RefCell::new(Vec::new()),
    })
}

/// Marks `parser` as a group that restarts precedence from the lowest level,
/// e.g. a parenthesized expression.
pub fn nested_precedence<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<T> {
    parser.nested_precedence()
}

struct Precedence<T> {
    alternatives: Vec<BoxedParser<T>>,
    /// Indexes of the alternatives currently being tried, innermost last.
    active: RefCell<Vec<usize>>,
}

impl<T> Precedence<T> {
    fn attempt(&self, index: usize, input: &Input) -> Option<Output<T>> {
        let alternative = self.alternatives.get(index)?;
        self.active.borrow_mut().push(index);
        let result = alternative.parse(input);
        self.active.borrow_mut().pop();
        result
    }

    fn attempt_all(&self, input: &Input) -> Option<Output<T>> {
        (0..self.alternatives.len()).find_map(|index| self.attempt(index, input))
    }

    fn resets_at(&self, index: usize) -> bool {
        self.alternatives
            .get(index)
            .is_some_and(|alternative| alternative.resets_precedence())
    }
}

impl<T> Parser<T> for Precedence<T> {
    fn parse(&self, input: &Input) -> Option<Output<T>> {
        let top = self.active.borrow().last().copied();
        let carries_value = input.left().is_value();

        let Some(top) = top else {
            if carries_value {
                return None;
            }
            return self.attempt_all(&input.without_left());
        };

        if self.resets_at(top) {
            if carries_value {
                return self.attempt(top, input);
            }
            return self.attempt_all(&input.without_left());
        }

        for index in top..self.alternatives.len() {
            let candidate = if index == top {
                input.clone()
            } else {
                match input.left() {
                    LeftPayload::Value(_) => continue,
                    LeftPayload::RightRecursion => input.without_left(),
                    LeftPayload::Empty => input.clone(),
                }
            };
            if let Some(output) = self.attempt(index, &candidate) {
                return Some(output);
            }
        }
        None
    }
}

pub(crate) struct NestedPrecedence<T> {
    parser: BoxedParser<T>,
}

impl<T> NestedPrecedence<T> {
    pub(crate) fn new(parser: BoxedParser<T>) -> Self {
        NestedPrecedence { parser }
    }
}

impl<T> Parser<T> for NestedPrecedence<T> {
    fn parse(&self, input: &Input) -> Option<Output<T>> {
        self.parser.parse(input)
    }

    fn resets_precedence(&self) -> bool {
        true
    }
}
