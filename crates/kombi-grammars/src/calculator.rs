//! Arithmetic over `f64`.
//!
//! Lowest to highest precedence: `+ -`, `* /`, unary `-`, `^`, parentheses,
//! numbers. `^` is right-associative, every other binary operator folds to
//! the left. The exponent may carry its own leading `-`, so `2 ^ -1` is 0.5
//! while `-2 ^ 2` is still -4. All rules share one cache that is cleared
//! after each parse.

use kombi_core::{Input, Output};
use kombi_lib::primitives::{char, char_in};
use kombi_lib::strings::chars_to_string;
use kombi_lib::structural::{one_or_more, optional};
use kombi_lib::{
    BoxedParser, CacheStats, OutputCache, Parser, ParsingLog, Result, Rule, in_order, one_of,
    one_of_with_precedence, parse_with, token,
};

use crate::lexeme::lexeme;

pub struct Calculator {
    _expr: Rule<f64>,
    cache: OutputCache<f64>,
    entry: BoxedParser<f64>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Like [`Calculator::new`], recording every rule invocation in `log`.
    pub fn traced(log: &ParsingLog) -> Self {
        Self::build(Some(log))
    }

    fn build(log: Option<&ParsingLog>) -> Self {
        let expr: Rule<f64> = Rule::declare();
        let cache = OutputCache::new();
        let rule = |name: &str, parser: BoxedParser<f64>| {
            let parser = match log {
                Some(log) => parser.with_log(name, log),
                None => parser,
            };
            parser.with_cache(&cache)
        };

        let binary = |op: &'static str| in_order((expr.reference(), token(op), expr.reference()));
        let plus = rule("plus", binary("+").map_left_assoc(|(l, _, r)| l + r));
        let minus = rule("minus", binary("-").map_left_assoc(|(l, _, r)| l - r));
        let times = rule("times", binary("*").map_left_assoc(|(l, _, r)| l * r));
        let divide = rule("divide", binary("/").map_left_assoc(|(l, _, r)| l / r));
        let negated = || in_order((token("-"), expr.reference())).map(|(_, value)| -value);
        let negate = rule("negate", negated());
        let exponent = one_of(vec![negated(), expr.reference()]);
        let power = in_order((expr.reference(), token("^"), exponent)).map(|(l, _, r)| l.powf(r));
        let power = rule("power", power);
        let group = rule(
            "group",
            in_order((token("("), expr.reference(), token(")")))
                .skip_wrapper()
                .nested_precedence(),
        );
        let number = rule("number", lexeme(number()));

        expr.define(one_of_with_precedence(vec![
            one_of(vec![plus, minus]),
            one_of(vec![times, divide]),
            negate,
            power,
            group,
            number,
        ]));

        let entry = expr.parser().reset_cache(&cache);
        Calculator {
            _expr: expr,
            cache,
            entry,
        }
    }

    pub fn evaluate(&self, text: &str) -> Result<f64> {
        parse_with(text, &self.entry)
    }

    pub fn parser(&self) -> &BoxedParser<f64> {
        &self.entry
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

/// Digits with an optional fractional part.
fn number() -> BoxedParser<f64> {
    let digits = || chars_to_string(one_or_more(char_in('0'..='9')));
    let fraction = in_order((char('.'), digits())).skip_first();
    let text = in_order((digits(), optional(fraction))).map(|(whole, fraction)| match fraction {
        Some(fraction) => format!("{whole}.{fraction}"),
        None => whole,
    });
    BoxedParser::new(move |input: &Input| {
        let output = text.parse(input)?;
        let value = output.payload.parse::<f64>().ok()?;
        Some(Output::new(value, output.next))
    })
}
