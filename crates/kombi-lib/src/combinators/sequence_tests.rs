use kombi_core::Input;

use super::primitives::{char, char_in, literal};
use super::sequence::in_order;
use crate::{BoxedParser, Parser, Rule};

fn run<T>(parser: &BoxedParser<T>, text: &str) -> Option<(T, usize)> {
    parser
        .parse(&Input::new(text))
        .map(|output| (output.payload, output.next.offset()))
}

#[test]
fn in_order_collects_tuple() {
    let parser = in_order((char('a'), literal("bc"), char('d'))).boxed();
    assert_eq!(
        run(&parser, "abcde"),
        Some((('a', "bc".to_owned(), 'd'), 4))
    );
}

#[test]
fn in_order_fails_fast() {
    let parser = in_order((char('a'), char('b'), char('c'))).boxed();
    assert_eq!(run(&parser, "abx"), None);
    assert_eq!(run(&parser, "xbc"), None);
}

#[test]
fn in_order_arity_eight() {
    let d = || char_in('0'..='9');
    let parser = in_order((d(), d(), d(), d(), d(), d(), d(), d()))
        .map(|(a, b, c, d, e, f, g, h)| [a, b, c, d, e, f, g, h].iter().collect::<String>());
    assert_eq!(run(&parser, "12345678"), Some(("12345678".to_owned(), 8)));
    assert_eq!(run(&parser, "1234567"), None);
}

#[test]
fn skip_helpers() {
    let pair = || in_order((char('<'), char('x')));
    assert_eq!(run(&pair().skip_first(), "<x"), Some(('x', 2)));
    assert_eq!(run(&pair().skip_last(), "<x"), Some(('<', 2)));

    let triple = || in_order((char('('), char('x'), char(')')));
    assert_eq!(run(&triple().skip_wrapper(), "(x)"), Some(('x', 3)));
    assert_eq!(run(&triple().skip_first(), "(x)"), Some((('x', ')'), 3)));
    assert_eq!(run(&triple().skip_last(), "(x)"), Some((('(', 'x'), 3)));
}

#[test]
fn in_order_converts_into_boxed_parser() {
    let parser: BoxedParser<(char, char)> = in_order((char('a'), char('b'))).into();
    assert_eq!(run(&parser, "ab"), Some((('a', 'b'), 2)));
}

#[test]
fn first_element_is_guarded_against_left_recursion() {
    // list := list "," "x" | "x"
    let list: Rule<usize> = Rule::declare();
    let more = in_order((list.reference(), char(','), char('x'))).map(|(n, _, _)| n + 1);
    list.define(super::structural::one_of(vec![more, char('x').map(|_| 1)]));

    assert_eq!(run(&list.parser(), "x"), Some((1, 1)));
    assert_eq!(run(&list.parser(), "x,x"), Some((2, 3)));
    // Without folding, the guarded left operand only ever sees the base case.
    assert_eq!(run(&list.parser(), "x,x,x"), Some((2, 3)));
}
