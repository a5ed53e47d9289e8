//! Whitespace-insensitive tokens and separated lists.

use super::primitives::{literal, satisfy};
use super::sequence::in_order;
use super::structural::{optional, zero_or_more};
use crate::parser::BoxedParser;

/// One whitespace character.
pub fn whitespace() -> BoxedParser<char> {
    satisfy(char::is_whitespace)
}

/// `text` with optional whitespace on both sides; the payload is `text`.
pub fn token(text: impl Into<String>) -> BoxedParser<String> {
    in_order((
        zero_or_more(whitespace()),
        literal(text),
        zero_or_more(whitespace()),
    ))
    .skip_wrapper()
}

/// Zero or more `parser` matches separated by `separator`.
///
/// Never fails: no match at all is an empty list. A trailing separator is
/// left unconsumed.
pub fn joined_with<T: 'static, S: 'static>(
    parser: BoxedParser<T>,
    separator: BoxedParser<S>,
) -> BoxedParser<Vec<T>> {
    let tail = zero_or_more(in_order((separator, parser.clone())).skip_first());
    optional(in_order((parser, tail)).boxed()).map(|items| match items {
        Some((first, rest)) => {
            let mut items = Vec::with_capacity(rest.len() + 1);
            items.push(first);
            items.extend(rest);
            items
        }
        None => Vec::new(),
    })
}

pub fn chars_to_string(parser: BoxedParser<Vec<char>>) -> BoxedParser<String> {
    parser.map(|chars| chars.into_iter().collect())
}
