use kombi_core::Input;

use super::primitives::*;
use crate::Parser;

fn run<T>(parser: &impl Parser<T>, text: &str) -> Option<(T, usize)> {
    parser
        .parse(&Input::new(text))
        .map(|output| (output.payload, output.next.offset()))
}

#[test]
fn literal_matches_prefix() {
    assert_eq!(run(&literal("let"), "let x"), Some(("let".to_owned(), 3)));
    assert_eq!(run(&literal("let"), "le"), None);
    assert_eq!(run(&literal("let"), ""), None);
}

#[test]
fn literal_at_end_of_text() {
    let input = Input::new("ab").advance(2);
    assert!(literal("a").parse(&input).is_none());
    assert!(literal("").parse(&input).is_some());
}

#[test]
fn char_advances_by_utf8_length() {
    assert_eq!(run(&char('→'), "→x"), Some(('→', 3)));
    assert_eq!(run(&any_char(), "é"), Some(('é', 2)));
}

#[test]
fn char_in_range() {
    let digit = char_in('0'..='9');
    assert_eq!(run(&digit, "7"), Some(('7', 1)));
    assert_eq!(run(&digit, "a"), None);
}

#[test]
fn char_sets() {
    assert_eq!(run(&any_of_chars("+-"), "-1"), Some(('-', 1)));
    assert_eq!(run(&any_of_chars("+-"), "*1"), None);

    let sign = any_of(vec![char('+'), char('-')]);
    assert_eq!(run(&sign, "+"), Some(('+', 1)));
    assert_eq!(run(&sign, ""), None);
}

#[test]
fn any_char_fails_at_end() {
    assert_eq!(run(&any_char(), ""), None);
    assert_eq!(run(&any_char_except("\""), ""), None);
}

#[test]
fn any_char_except_excluded() {
    let unquoted = any_char_except("\",");
    assert_eq!(run(&unquoted, "a"), Some(('a', 1)));
    assert_eq!(run(&unquoted, ","), None);
    assert_eq!(run(&unquoted, "\""), None);
}

#[test]
fn except_is_negative_lookahead() {
    let not_keyword = except(any_char(), vec![literal("if")]);
    assert_eq!(run(&not_keyword, "ix"), Some(('i', 1)));
    assert_eq!(run(&not_keyword, "if"), None);
}

#[test]
fn end_of_input_only_at_end() {
    assert_eq!(run(&end_of_input(), ""), Some(((), 0)));
    assert_eq!(run(&end_of_input(), "x"), None);
}

#[test]
fn primitives_keep_left_payload() {
    let input = Input::new("ab").with_left(kombi_core::LeftPayload::RightRecursion);
    let output = char('a').parse(&input).unwrap();
    assert!(output.next.left().is_right_recursion());
}
