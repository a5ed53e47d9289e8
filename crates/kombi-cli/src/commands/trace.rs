//! Trace rule invocations for debugging a grammar.

use kombi_grammars::{Calculator, ExprLang};
use kombi_lib::{CacheStats, Colors, ParsingLog, Result};

use super::run_common::{exit_with_parse_error, format_stats};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TraceGrammar {
    Calc,
    Expr,
}

pub struct TraceArgs {
    pub expr: String,
    pub grammar: TraceGrammar,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let colors = Colors::new(args.color);
    let log = ParsingLog::new();
    let (result, stats) = parse_traced(args.grammar, &args.expr, &log);

    print!("{}", log.render(colors));
    println!("{}", format_stats(stats, colors));
    match result {
        Ok(rendered) => println!("{}", rendered),
        Err(error) => exit_with_parse_error(&error, None, args.color),
    }
}

/// Parses `text` with logging on; the result is rendered for display.
fn parse_traced(
    grammar: TraceGrammar,
    text: &str,
    log: &ParsingLog,
) -> (Result<String>, CacheStats) {
    match grammar {
        TraceGrammar::Calc => {
            let calculator = Calculator::traced(log);
            let result = calculator.evaluate(text).map(|value| value.to_string());
            (result, calculator.cache_stats())
        }
        TraceGrammar::Expr => {
            let lang = ExprLang::traced(log);
            let result = lang.parse(text).map(|expr| expr.to_string());
            (result, lang.cache_stats())
        }
    }
}

#[cfg(test)]
mod tests {
    use kombi_lib::{Error, ParsingEvent};

    use super::*;

    #[test]
    fn calc_trace_records_events() {
        let log = ParsingLog::new();
        let (result, stats) = parse_traced(TraceGrammar::Calc, "1 + 2", &log);

        assert_eq!(result.unwrap(), "3");
        assert!(stats.misses > 0);
        assert!(matches!(
            log.events().first(),
            Some(ParsingEvent::Before { offset: 0, .. })
        ));
    }

    #[test]
    fn expr_trace_renders_tree() {
        let log = ParsingLog::new();
        let (result, _) = parse_traced(TraceGrammar::Expr, "a && b", &log);

        assert_eq!(result.unwrap(), "(a && b)");
        assert!(!log.is_empty());
    }

    #[test]
    fn failed_parse_still_logs() {
        let log = ParsingLog::new();
        let (result, _) = parse_traced(TraceGrammar::Calc, "1 +", &log);

        assert!(matches!(result, Err(Error::InputIsNotConsumed { offset: 2, .. })));
        assert!(!log.is_empty());
    }
}
