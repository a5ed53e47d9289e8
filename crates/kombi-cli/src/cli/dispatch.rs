//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! `*Params` structs mirror the command `*Args` but keep the raw
//! [`ColorChoice`]; the `Into<*Args>` impls resolve it against the terminal.

use std::path::PathBuf;

use clap::ArgMatches;

use super::ColorChoice;
use crate::commands::calc::CalcArgs;
use crate::commands::csv::CsvArgs;
use crate::commands::expr::ExprArgs;
use crate::commands::json::JsonArgs;
use crate::commands::trace::{TraceArgs, TraceGrammar};

pub struct CalcParams {
    pub expr: String,
    pub stats: bool,
    pub color: ColorChoice,
}

impl CalcParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            expr: parse_expr(m),
            stats: m.get_flag("stats"),
            color: parse_color(m),
        }
    }
}

impl From<CalcParams> for CalcArgs {
    fn from(p: CalcParams) -> Self {
        Self {
            expr: p.expr,
            stats: p.stats,
            color: p.color.should_colorize(),
        }
    }
}

pub struct ExprParams {
    pub expr: String,
    pub stats: bool,
    pub color: ColorChoice,
}

impl ExprParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            expr: parse_expr(m),
            stats: m.get_flag("stats"),
            color: parse_color(m),
        }
    }
}

impl From<ExprParams> for ExprArgs {
    fn from(p: ExprParams) -> Self {
        Self {
            expr: p.expr,
            stats: p.stats,
            color: p.color.should_colorize(),
        }
    }
}

pub struct JsonParams {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub compact: bool,
    pub color: ColorChoice,
}

impl JsonParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            input_text: m.get_one::<String>("input_text").cloned(),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<JsonParams> for JsonArgs {
    fn from(p: JsonParams) -> Self {
        Self {
            input_path: p.input_path,
            input_text: p.input_text,
            compact: p.compact,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CsvParams {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub compact: bool,
    pub color: ColorChoice,
}

impl CsvParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            input_text: m.get_one::<String>("input_text").cloned(),
            compact: m.get_flag("compact"),
            color: parse_color(m),
        }
    }
}

impl From<CsvParams> for CsvArgs {
    fn from(p: CsvParams) -> Self {
        Self {
            input_path: p.input_path,
            input_text: p.input_text,
            compact: p.compact,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TraceParams {
    pub expr: String,
    pub grammar: TraceGrammar,
    pub color: ColorChoice,
}

impl TraceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let grammar = match m.get_one::<String>("grammar").map(|s| s.as_str()) {
            Some("expr") => TraceGrammar::Expr,
            _ => TraceGrammar::Calc,
        };
        Self {
            expr: parse_expr(m),
            grammar,
            color: parse_color(m),
        }
    }
}

impl From<TraceParams> for TraceArgs {
    fn from(p: TraceParams) -> Self {
        Self {
            expr: p.expr,
            grammar: p.grammar,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_expr(m: &ArgMatches) -> String {
    m.get_one::<String>("expr").cloned().unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
