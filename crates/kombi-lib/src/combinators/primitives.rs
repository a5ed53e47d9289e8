//! Literal strings and single-character matchers.
//!
//! None of these panic on out-of-bounds or mid-character offsets: matching is
//! done against [`Input::remaining`], which is empty in both cases.

use std::ops::RangeInclusive;

use kombi_core::{Input, Output};

use crate::parser::{BoxedParser, Parser};

/// Matches `text` exactly; the payload is the literal itself.
pub fn literal(text: impl Into<String>) -> BoxedParser<String> {
    let text: String = text.into();
    BoxedParser::new(move |input: &Input| {
        if !input.starts_with(&text) {
            return None;
        }
        Some(Output::new(text.clone(), input.advance(text.len())))
    })
}

/// One character satisfying `predicate`.
pub fn satisfy<F>(predicate: F) -> BoxedParser<char>
where
    F: Fn(char) -> bool + 'static,
{
    BoxedParser::new(move |input: &Input| {
        let c = input.peek_char()?;
        if !predicate(c) {
            return None;
        }
        Some(Output::new(c, input.advance(c.len_utf8())))
    })
}

pub fn char(expected: char) -> BoxedParser<char> {
    satisfy(move |c| c == expected)
}

/// One character inside an inclusive range, e.g. `'0'..='9'`.
pub fn char_in(range: RangeInclusive<char>) -> BoxedParser<char> {
    satisfy(move |c| range.contains(&c))
}

/// One character from `chars`.
pub fn any_of_chars(chars: &str) -> BoxedParser<char> {
    let set: Vec<char> = chars.chars().collect();
    satisfy(move |c| set.contains(&c))
}

/// The first of several single-character parsers that matches.
pub fn any_of(parsers: Vec<BoxedParser<char>>) -> BoxedParser<char> {
    BoxedParser::new(move |input: &Input| {
        parsers.iter().find_map(|p| p.parse(input))
    })
}

/// Any single character; fails at end of input.
pub fn any_char() -> BoxedParser<char> {
    satisfy(|_| true)
}

/// Any single character not in `excluded`; fails at end of input.
pub fn any_char_except(excluded: &str) -> BoxedParser<char> {
    let set: Vec<char> = excluded.chars().collect();
    satisfy(move |c| !set.contains(&c))
}

/// Runs `parser` unless one of `excluded` matches at the same position.
///
/// Negative lookahead: nothing the excluded parsers match is consumed.
pub fn except<T: 'static, E: 'static>(
    parser: BoxedParser<T>,
    excluded: Vec<BoxedParser<E>>,
) -> BoxedParser<T> {
    BoxedParser::new(move |input: &Input| {
        if excluded.iter().any(|p| p.parse(input).is_some()) {
            return None;
        }
        parser.parse(input)
    })
}

/// Matches the empty string at end of input only.
pub fn end_of_input() -> BoxedParser<()> {
    BoxedParser::new(|input: &Input| {
        if !input.is_at_end() {
            return None;
        }
        Some(Output::new((), input.clone()))
    })
}
