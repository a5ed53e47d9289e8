//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("kombi")
        .about("Parse, evaluate and trace inputs with the bundled grammars")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(calc_command())
        .subcommand(expr_command())
        .subcommand(json_command())
        .subcommand(csv_command())
        .subcommand(trace_command())
}

/// Evaluate an arithmetic expression.
pub fn calc_command() -> Command {
    Command::new("calc")
        .about("Evaluate an arithmetic expression")
        .after_help(
            r#"EXAMPLES:
  kombi calc '1 + 2 * 3'          # 7
  kombi calc '2 ^ 3 ^ 2'          # 512
  kombi calc '(1 + 2) * 3' --stats"#,
        )
        .arg(expr_arg())
        .arg(stats_arg())
        .arg(color_arg())
}

/// Parse an expression-language expression and print its tree.
pub fn expr_command() -> Command {
    Command::new("expr")
        .about("Parse an expression and print it fully parenthesized")
        .after_help(
            r#"EXAMPLES:
  kombi expr 'a || b && !c'       # (a || (b && (!c)))
  kombi expr 'max(1, 2 + 3) * 2'"#,
        )
        .arg(expr_arg())
        .arg(stats_arg())
        .arg(color_arg())
}

/// Parse a JSON document and re-emit it.
pub fn json_command() -> Command {
    Command::new("json")
        .about("Parse a JSON document and print it back")
        .override_usage(
            "\
  kombi json [PATH]
  kombi json -t <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  kombi json data.json
  kombi json -t '[1, 2, 3]' --compact
  cat data.json | kombi json"#,
        )
        .arg(input_path_arg())
        .arg(input_text_arg())
        .arg(compact_arg())
        .arg(color_arg())
}

/// Parse CSV records and print them as JSON arrays.
pub fn csv_command() -> Command {
    Command::new("csv")
        .about("Parse CSV records and print them as JSON")
        .override_usage(
            "\
  kombi csv [PATH]
  kombi csv -t <TEXT>",
        )
        .after_help(
            r#"EXAMPLES:
  kombi csv table.csv
  kombi csv -t 'a,"b,c"' --compact"#,
        )
        .arg(input_path_arg())
        .arg(input_text_arg())
        .arg(compact_arg())
        .arg(color_arg())
}

/// Show every rule invocation made while parsing an expression.
pub fn trace_command() -> Command {
    Command::new("trace")
        .about("Show the rule invocations made while parsing an expression")
        .after_help(
            r#"EXAMPLES:
  kombi trace '1 + 2'
  kombi trace 'a && b' --grammar expr"#,
        )
        .arg(expr_arg())
        .arg(grammar_arg())
        .arg(color_arg())
}
