//! A small expression language.
//!
//! Lowest to highest precedence:
//!
//! | level          | operators            | associativity |
//! |----------------|----------------------|---------------|
//! | or             | `\|\|`               | left          |
//! | and            | `&&`                 | left          |
//! | equality       | `==` `!=`            | left          |
//! | additive       | `+` `-`              | left          |
//! | multiplicative | `*` `/` `%`          | left          |
//! | unary          | `!` `-`              | prefix        |
//! | power          | `^`                  | right         |
//!
//! Above the operators: calls `f(a, b)`, array literals `[a, b]`,
//! parenthesized groups, integers, strings and identifiers. Calls, arrays and
//! groups start a fresh precedence context for their contents.

use std::fmt;

use kombi_core::{Input, Output};
use kombi_lib::primitives::{any_char_except, char, char_in};
use kombi_lib::strings::chars_to_string;
use kombi_lib::structural::{one_or_more, zero_or_more};
use kombi_lib::{
    BoxedParser, CacheStats, OutputCache, Parser, ParsingLog, Result, Rule, in_order, joined_with,
    one_of, one_of_with_precedence, parse_with, token,
};

use crate::lexeme::lexeme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Or,
    And,
    Eq,
    NotEq,
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Pow,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Or => "||",
            BinaryOp::And => "&&",
            BinaryOp::Eq => "==",
            BinaryOp::NotEq => "!=",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Rem => "%",
            BinaryOp::Pow => "^",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
    Neg,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
            UnaryOp::Neg => "-",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Int(i64),
    Str(String),
    Ident(String),
    Array(Vec<Expr>),
    Call {
        name: String,
        args: Vec<Expr>,
    },
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Fully parenthesized, so the tree shape is visible.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Int(value) => write!(f, "{value}"),
            Expr::Str(value) => write!(f, "{value:?}"),
            Expr::Ident(name) => f.write_str(name),
            Expr::Array(items) => {
                f.write_str("[")?;
                write_list(f, items)?;
                f.write_str("]")
            }
            Expr::Call { name, args } => {
                write!(f, "{name}(")?;
                write_list(f, args)?;
                f.write_str(")")
            }
            Expr::Unary { op, operand } => write!(f, "({}{operand})", op.symbol()),
            Expr::Binary { op, left, right } => write!(f, "({left} {} {right})", op.symbol()),
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[Expr]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

pub struct ExprLang {
    _expr: Rule<Expr>,
    cache: OutputCache<Expr>,
    entry: BoxedParser<Expr>,
}

impl Default for ExprLang {
    fn default() -> Self {
        Self::new()
    }
}

impl ExprLang {
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Like [`ExprLang::new`], recording every rule invocation in `log`.
    pub fn traced(log: &ParsingLog) -> Self {
        Self::build(Some(log))
    }

    fn build(log: Option<&ParsingLog>) -> Self {
        let expr: Rule<Expr> = Rule::declare();
        let cache = OutputCache::new();
        let rule = |name: &str, parser: BoxedParser<Expr>| {
            let parser = match log {
                Some(log) => parser.with_log(name, log),
                None => parser,
            };
            parser.with_cache(&cache)
        };

        let left_assoc = |op: BinaryOp| {
            let parser = in_order((expr.reference(), token(op.symbol()), expr.reference()))
                .map_left_assoc(move |(left, _, right)| Expr::binary(op, left, right));
            rule(op.symbol(), parser)
        };
        let unary = |op: UnaryOp| {
            let parser = in_order((token(op.symbol()), expr.reference()))
                .map(move |(_, operand)| Expr::unary(op, operand));
            rule(&format!("unary {}", op.symbol()), parser)
        };
        let list = |open: &str, close: &str| {
            in_order((
                token(open),
                joined_with(expr.reference(), token(",")),
                token(close),
            ))
            .skip_wrapper()
        };

        let power = in_order((expr.reference(), token("^"), expr.reference()))
            .map(|(left, _, right)| Expr::binary(BinaryOp::Pow, left, right));
        let call = in_order((lexeme(identifier()), list("(", ")")))
            .map(|(name, args)| Expr::Call { name, args })
            .nested_precedence();
        let array = list("[", "]").map(Expr::Array).nested_precedence();
        let group = in_order((token("("), expr.reference(), token(")")))
            .skip_wrapper()
            .nested_precedence();

        expr.define(one_of_with_precedence(vec![
            left_assoc(BinaryOp::Or),
            left_assoc(BinaryOp::And),
            one_of(vec![left_assoc(BinaryOp::Eq), left_assoc(BinaryOp::NotEq)]),
            one_of(vec![left_assoc(BinaryOp::Add), left_assoc(BinaryOp::Sub)]),
            one_of(vec![
                left_assoc(BinaryOp::Mul),
                left_assoc(BinaryOp::Div),
                left_assoc(BinaryOp::Rem),
            ]),
            one_of(vec![unary(UnaryOp::Not), unary(UnaryOp::Neg)]),
            rule("^", power),
            rule("call", call),
            rule("array", array),
            rule("group", group),
            rule("integer", lexeme(integer())),
            rule("string", lexeme(string()).map(Expr::Str)),
            rule("identifier", lexeme(identifier()).map(Expr::Ident)),
        ]));

        let entry = expr.parser().reset_cache(&cache);
        ExprLang {
            _expr: expr,
            cache,
            entry,
        }
    }

    pub fn parse(&self, text: &str) -> Result<Expr> {
        parse_with(text, &self.entry)
    }

    pub fn parser(&self) -> &BoxedParser<Expr> {
        &self.entry
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

fn identifier() -> BoxedParser<String> {
    let start = one_of(vec![char_in('a'..='z'), char_in('A'..='Z'), char('_')]);
    let rest = zero_or_more(one_of(vec![
        char_in('a'..='z'),
        char_in('A'..='Z'),
        char_in('0'..='9'),
        char('_'),
    ]));
    in_order((start, chars_to_string(rest))).map(|(first, rest)| format!("{first}{rest}"))
}

fn integer() -> BoxedParser<Expr> {
    let digits = chars_to_string(one_or_more(char_in('0'..='9')));
    BoxedParser::new(move |input: &Input| {
        let output = digits.parse(input)?;
        let value = output.payload.parse::<i64>().ok()?;
        Some(Output::new(Expr::Int(value), output.next))
    })
}

/// Double-quoted, with `\"` and `\\` escapes.
fn string() -> BoxedParser<String> {
    let escaped = in_order((char('\\'), one_of(vec![char('"'), char('\\')]))).skip_first();
    let content = zero_or_more(one_of(vec![escaped, any_char_except("\"\\")]));
    in_order((char('"'), chars_to_string(content), char('"'))).skip_wrapper()
}
