//! Alternation, repetition and mapping.

use kombi_core::{Input, Output};

use crate::parser::{BoxedParser, Parser};

/// First alternative that succeeds, in declaration order.
pub fn one_of<T: 'static>(alternatives: Vec<BoxedParser<T>>) -> BoxedParser<T> {
    BoxedParser::new(move |input: &Input| {
        alternatives.iter().find_map(|p| p.parse(input))
    })
}

/// Tries every alternative and keeps the longest match.
///
/// Ties go to the earliest declared alternative. The whole combinator is
/// guarded by `non_recursive` because overlapping alternatives usually recurse
/// into each other.
pub fn one_of_longest<T: 'static>(alternatives: Vec<BoxedParser<T>>) -> BoxedParser<T> {
    BoxedParser::new(move |input: &Input| {
        alternatives
            .iter()
            .filter_map(|p| p.parse(input))
            .fold(None, |best: Option<Output<T>>, output| match best {
                Some(best) if best.offset() >= output.offset() => Some(best),
                _ => Some(output),
            })
    })
    .non_recursive()
}

/// Greedily applies `parser` at most `at_most` times.
///
/// Succeeds with the collected payloads when at least `at_least` matched.
/// Never backtracks. A match that consumes nothing ends the loop, since
/// repeating it could not make progress.
pub fn repeat<T: 'static>(
    parser: BoxedParser<T>,
    at_least: usize,
    at_most: Option<usize>,
) -> BoxedParser<Vec<T>> {
    BoxedParser::new(move |input: &Input| {
        let mut payloads = Vec::new();
        let mut current = input.clone();
        while at_most.is_none_or(|max| payloads.len() < max) {
            let Some(output) = parser.parse(&current) else {
                break;
            };
            let progressed = output.offset() > current.offset();
            payloads.push(output.payload);
            current = output.next;
            if !progressed {
                break;
            }
        }
        if payloads.len() < at_least {
            return None;
        }
        Some(Output::new(payloads, current))
    })
}

pub fn zero_or_more<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Vec<T>> {
    repeat(parser, 0, None)
}

pub fn one_or_more<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Vec<T>> {
    repeat(parser, 1, None)
}

/// Zero or one match; never fails.
pub fn optional<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<Option<T>> {
    BoxedParser::new(move |input: &Input| {
        Some(match parser.parse(input) {
            Some(output) => output.map(Some),
            None => Output::new(None, input.clone()),
        })
    })
}

/// Free-function form of [`BoxedParser::map`].
pub fn map<T: 'static, U: 'static, F>(parser: BoxedParser<T>, f: F) -> BoxedParser<U>
where
    F: Fn(T) -> U + 'static,
{
    parser.map(f)
}
