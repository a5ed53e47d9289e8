use kombi_core::Input;

use super::primitives::{any_char, char, char_in, literal};
use super::structural::*;
use crate::{BoxedParser, Parser};

fn run<T>(parser: &BoxedParser<T>, text: &str) -> Option<(T, usize)> {
    parser
        .parse(&Input::new(text))
        .map(|output| (output.payload, output.next.offset()))
}

#[test]
fn one_of_takes_first_success() {
    let parser = one_of(vec![literal("a"), literal("ab")]);
    assert_eq!(run(&parser, "ab"), Some(("a".to_owned(), 1)));
    assert_eq!(run(&parser, "b"), None);
}

#[test]
fn one_of_empty_never_matches() {
    let parser: BoxedParser<String> = one_of(Vec::new());
    assert_eq!(run(&parser, "a"), None);
}

#[test]
fn one_of_longest_prefers_longest_match() {
    let parser = one_of_longest(vec![literal("a"), literal("abc"), literal("ab")]);
    assert_eq!(run(&parser, "abcd"), Some(("abc".to_owned(), 3)));
}

#[test]
fn one_of_longest_ties_go_to_first() {
    let parser = one_of_longest(vec![literal("ab").map(|_| 1), literal("ab").map(|_| 2)]);
    assert_eq!(run(&parser, "ab"), Some((1, 2)));
}

#[test]
fn repeat_respects_bounds() {
    let parser = repeat(char('a'), 2, Some(3));
    assert_eq!(run(&parser, "aaaaa"), Some((vec!['a'; 3], 3)));
    assert_eq!(run(&parser, "aa"), Some((vec!['a'; 2], 2)));
    assert_eq!(run(&parser, "a"), None);
    assert_eq!(run(&parser, ""), None);
}

#[test]
fn repeat_is_greedy_without_backtracking() {
    let parser = repeat(char_in('0'..='9'), 1, None);
    assert_eq!(run(&parser, "123x"), Some((vec!['1', '2', '3'], 3)));
}

#[test]
fn repeat_stops_on_zero_width_match() {
    let parser = zero_or_more(optional(char('a')));
    let expected = vec![Some('a'), Some('a'), None];
    assert_eq!(run(&parser, "aab"), Some((expected, 2)));
}

#[test]
fn zero_or_more_and_one_or_more() {
    assert_eq!(run(&zero_or_more(char('x')), "y"), Some((Vec::new(), 0)));
    let many = one_or_more(char('x'));
    assert_eq!(run(&many, "y"), None);
    assert_eq!(run(&many, "xxy"), Some((vec!['x', 'x'], 2)));
}

#[test]
fn optional_never_fails() {
    assert_eq!(run(&optional(char('-')), "-1"), Some((Some('-'), 1)));
    assert_eq!(run(&optional(char('-')), "1"), Some((None, 0)));
}

#[test]
fn map_transforms_payload() {
    let digit = map(char_in('0'..='9'), |c| c.to_digit(10).unwrap_or(0));
    assert_eq!(run(&digit, "7"), Some((7, 1)));
    let alphabetic = any_char().map(|c| c.is_alphabetic());
    assert_eq!(run(&alphabetic, "x"), Some((true, 1)));
}
