use indoc::indoc;
use kombi_lib::{Error, ParsingLog};

use crate::{BinaryOp, Expr, ExprLang};

/// One line per input: the parenthesized tree or the error.
fn render(inputs: &[&str]) -> String {
    let lang = ExprLang::new();
    inputs
        .iter()
        .map(|input| match lang.parse(input) {
            Ok(expr) => format!("{input} => {expr}"),
            Err(error) => format!("{input} => error: {error}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn associativity_and_precedence_matrix() {
    insta::assert_snapshot!(render(&[
        "1 + 2 + 3",
        "1 - 2 - 3",
        "1 + 2 * 3",
        "1 * 2 + 3",
        "1 + 2 * 3 - 4",
        "2 ^ 3 ^ 2",
        "2 * 3 ^ 2",
        "a || b && c",
        "a && b || c",
        "a == b != c",
        "a + 1 == b * 2 || !c",
        "8 / 4 % 3",
    ]), @r"
    1 + 2 + 3 => ((1 + 2) + 3)
    1 - 2 - 3 => ((1 - 2) - 3)
    1 + 2 * 3 => (1 + (2 * 3))
    1 * 2 + 3 => ((1 * 2) + 3)
    1 + 2 * 3 - 4 => ((1 + (2 * 3)) - 4)
    2 ^ 3 ^ 2 => (2 ^ (3 ^ 2))
    2 * 3 ^ 2 => (2 * (3 ^ 2))
    a || b && c => (a || (b && c))
    a && b || c => ((a && b) || c)
    a == b != c => ((a == b) != c)
    a + 1 == b * 2 || !c => (((a + 1) == (b * 2)) || (!c))
    8 / 4 % 3 => ((8 / 4) % 3)
    ");
}

#[test]
fn unary_operators() {
    insta::assert_snapshot!(render(&[
        "-a",
        "-a ^ 2",
        "!a && b",
        "a - -b",
        "!!a",
    ]), @r"
    -a => (-a)
    -a ^ 2 => (-(a ^ 2))
    !a && b => ((!a) && b)
    a - -b => (a - (-b))
    !!a => (!(!a))
    ");
}

#[test]
fn nested_contexts() {
    insta::assert_snapshot!(render(&[
        "(1 + 2) * 3",
        "1 * (2 + 3)",
        "max(1, 2 + 3) * 2",
        "f()",
        "[1, [a || b], \"s\"]",
        "g(h(x), [y])",
    ]), @r#"
    (1 + 2) * 3 => ((1 + 2) * 3)
    1 * (2 + 3) => (1 * (2 + 3))
    max(1, 2 + 3) * 2 => (max(1, (2 + 3)) * 2)
    f() => f()
    [1, [a || b], "s"] => [1, [(a || b)], "s"]
    g(h(x), [y]) => g(h(x), [y])
    "#);
}

#[test]
fn errors() {
    insta::assert_snapshot!(render(&[
        "1 +",
        "(1 + 2",
        ")",
        "f(1,)",
    ]), @r"
    1 + => error: input is not consumed at offset 2
    (1 + 2 => error: no matching parsers
    ) => error: no matching parsers
    f(1,) => error: input is not consumed at offset 1
    ");
}

#[test]
fn ast_shape() {
    let expr = ExprLang::new().parse("x * 2").unwrap();
    assert_eq!(
        expr,
        Expr::Binary {
            op: BinaryOp::Mul,
            left: Box::new(Expr::Ident("x".to_owned())),
            right: Box::new(Expr::Int(2)),
        }
    );
}

#[test]
fn multiline_input() {
    let text = indoc! {"
        total(
          price * count,
          tax
        ) == 100
    "};
    insta::assert_snapshot!(
        ExprLang::new().parse(text).unwrap(),
        @"(total((price * count), tax) == 100)"
    );
}

#[test]
fn integer_overflow_is_not_a_number() {
    assert!(matches!(
        ExprLang::new().parse("99999999999999999999"),
        Err(Error::NoMatchingParsers { .. })
    ));
}

#[test]
fn cached_rules_run_once_per_key() {
    let log = ParsingLog::new();
    let lang = ExprLang::traced(&log);
    lang.parse("f(a, b + 1) * -(c || d) ^ 2").unwrap();

    assert!(log.invocations().values().all(|&count| count == 1));
    assert!(lang.cache_stats().hits > 0);
}
