//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that the command builders compose.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Expression text (positional, required).
pub fn expr_arg() -> Arg {
    Arg::new("expr")
        .value_name("EXPR")
        .required(true)
        .allow_hyphen_values(true)
        .help("Expression to parse")
}

/// Input file (positional). `-` or nothing reads stdin.
pub fn input_path_arg() -> Arg {
    Arg::new("input_path")
        .value_name("PATH")
        .value_parser(value_parser!(PathBuf))
        .help("Input file (reads stdin when omitted or '-')")
}

/// Inline input text (-t/--text).
pub fn input_text_arg() -> Arg {
    Arg::new("input_text")
        .short('t')
        .long("text")
        .value_name("TEXT")
        .conflicts_with("input_path")
        .help("Inline input text")
}

/// Grammar to trace (--grammar).
pub fn grammar_arg() -> Arg {
    Arg::new("grammar")
        .long("grammar")
        .value_name("GRAMMAR")
        .default_value("calc")
        .value_parser(["calc", "expr"])
        .help("Grammar to trace")
}

/// Output compact JSON (--compact).
pub fn compact_arg() -> Arg {
    Arg::new("compact")
        .long("compact")
        .action(ArgAction::SetTrue)
        .help("Output compact JSON (default: pretty)")
}

/// Show cache statistics (--stats).
pub fn stats_arg() -> Arg {
    Arg::new("stats")
        .long("stats")
        .action(ArgAction::SetTrue)
        .help("Print cache hits and misses after the result")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
