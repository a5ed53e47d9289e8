//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{calc_command, csv_command, json_command, trace_command};
use crate::commands::trace::TraceGrammar;

#[test]
fn calc_extracts_expression_and_flags() {
    let m = calc_command()
        .try_get_matches_from(["calc", "1 + 2", "--stats", "--color", "never"])
        .unwrap();
    let params = CalcParams::from_matches(&m);

    assert_eq!(params.expr, "1 + 2");
    assert!(params.stats);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn calc_accepts_leading_minus() {
    let m = calc_command()
        .try_get_matches_from(["calc", "-3 + 1"])
        .unwrap();
    assert_eq!(CalcParams::from_matches(&m).expr, "-3 + 1");
}

#[test]
fn calc_requires_expression() {
    let result = calc_command().try_get_matches_from(["calc"]);
    assert!(result.is_err());
}

#[test]
fn color_defaults_to_auto() {
    let m = calc_command().try_get_matches_from(["calc", "1"]).unwrap();
    let params = CalcParams::from_matches(&m);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn color_rejects_unknown_value() {
    let result = calc_command().try_get_matches_from(["calc", "1", "--color", "sometimes"]);
    assert!(result.is_err());
}

#[test]
fn json_accepts_path() {
    let m = json_command()
        .try_get_matches_from(["json", "data.json", "--compact"])
        .unwrap();
    let params = JsonParams::from_matches(&m);

    assert_eq!(params.input_path, Some(PathBuf::from("data.json")));
    assert_eq!(params.input_text, None);
    assert!(params.compact);
}

#[test]
fn json_accepts_inline_text() {
    let m = json_command()
        .try_get_matches_from(["json", "-t", "[1, 2]"])
        .unwrap();
    let params = JsonParams::from_matches(&m);

    assert_eq!(params.input_path, None);
    assert_eq!(params.input_text.as_deref(), Some("[1, 2]"));
    assert!(!params.compact);
}

#[test]
fn csv_rejects_path_and_text_together() {
    let result = csv_command().try_get_matches_from(["csv", "table.csv", "-t", "a,b"]);
    assert!(result.is_err());
}

#[test]
fn csv_without_input_reads_stdin() {
    let m = csv_command().try_get_matches_from(["csv"]).unwrap();
    let params = CsvParams::from_matches(&m);

    assert_eq!(params.input_path, None);
    assert_eq!(params.input_text, None);
}

#[test]
fn trace_grammar_defaults_to_calc() {
    let m = trace_command()
        .try_get_matches_from(["trace", "1 + 2"])
        .unwrap();
    let params = TraceParams::from_matches(&m);

    assert_eq!(params.expr, "1 + 2");
    assert_eq!(params.grammar, TraceGrammar::Calc);
}

#[test]
fn trace_selects_expr_grammar() {
    let m = trace_command()
        .try_get_matches_from(["trace", "a && b", "--grammar", "expr", "--color", "always"])
        .unwrap();
    let params = TraceParams::from_matches(&m);

    assert_eq!(params.grammar, TraceGrammar::Expr);
    assert_eq!(params.color, ColorChoice::Always);
}

#[test]
fn trace_rejects_unknown_grammar() {
    let result = trace_command().try_get_matches_from(["trace", "1", "--grammar", "lisp"]);
    assert!(result.is_err());
}

#[test]
fn cli_requires_subcommand() {
    let result = build_cli().try_get_matches_from(["kombi"]);
    assert!(result.is_err());
}

#[test]
fn help_lists_subcommands() {
    let help = build_cli().render_help().to_string();
    for name in ["calc", "expr", "json", "csv", "trace"] {
        assert!(help.contains(name), "missing {name} in help:\n{help}");
    }
}
