//! JSON values.

use indexmap::IndexMap;
use kombi_core::{Input, Output};
use kombi_lib::primitives::{any_char_except, any_of_chars, char, char_in, literal};
use kombi_lib::strings::chars_to_string;
use kombi_lib::structural::{one_or_more, optional, repeat, zero_or_more};
use kombi_lib::{
    BoxedParser, Parser, Result, Rule, in_order, joined_with, one_of, parse_with, token,
};
use serde::Serialize;

use crate::lexeme::lexeme;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Json {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Json>),
    Object(IndexMap<String, Json>),
}

/// A piece of string content: a literal char or a UTF-16 unit from `\uXXXX`.
#[derive(Debug, Clone, Copy)]
enum Piece {
    Char(char),
    Unit(u16),
}

pub struct JsonGrammar {
    _value: Rule<Json>,
    entry: BoxedParser<Json>,
}

impl Default for JsonGrammar {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonGrammar {
    pub fn new() -> Self {
        let value: Rule<Json> = Rule::declare();

        let null = literal("null").map(|_| Json::Null);
        let boolean = one_of(vec![
            literal("true").map(|_| Json::Bool(true)),
            literal("false").map(|_| Json::Bool(false)),
        ]);
        let array = in_order((
            token("["),
            joined_with(value.reference(), token(",")),
            token("]"),
        ))
        .skip_wrapper()
        .map(Json::Array);
        let member = in_order((lexeme(string()), token(":"), value.reference()))
            .map(|(key, _, value)| (key, value));
        let object = in_order((token("{"), joined_with(member, token(",")), token("}")))
            .skip_wrapper()
            .map(|members| Json::Object(members.into_iter().collect()));

        value.define(lexeme(one_of(vec![
            null,
            boolean,
            number().map(Json::Number),
            string().map(Json::String),
            array,
            object,
        ])));

        let entry = value.parser();
        JsonGrammar {
            _value: value,
            entry,
        }
    }

    pub fn parse(&self, text: &str) -> Result<Json> {
        parse_with(text, &self.entry)
    }

    pub fn parser(&self) -> &BoxedParser<Json> {
        &self.entry
    }
}

/// `-? int frac? exp?`, where `int` has no leading zeros.
fn number() -> BoxedParser<f64> {
    let digits = || chars_to_string(one_or_more(char_in('0'..='9')));
    let rest = chars_to_string(zero_or_more(char_in('0'..='9')));
    let nonzero = in_order((char_in('1'..='9'), rest)).map(|(c, rest)| format!("{c}{rest}"));
    let integer = one_of(vec![literal("0"), nonzero]);
    let sign = or_empty(char('-').map(String::from));
    let fraction = in_order((char('.'), digits())).map(|(_, d)| format!(".{d}"));
    let exponent_sign = or_empty(any_of_chars("+-").map(String::from));
    let exponent = in_order((any_of_chars("eE"), exponent_sign, digits()))
        .map(|(_, sign, d)| format!("e{sign}{d}"));
    let text = in_order((sign, integer, or_empty(fraction), or_empty(exponent)))
        .map(|(sign, int, frac, exp)| format!("{sign}{int}{frac}{exp}"));

    BoxedParser::new(move |input: &Input| {
        let output = text.parse(input)?;
        let value = output.payload.parse::<f64>().ok()?;
        Some(Output::new(value, output.next))
    })
}

fn or_empty(parser: BoxedParser<String>) -> BoxedParser<String> {
    optional(parser).map(Option::unwrap_or_default)
}

fn string() -> BoxedParser<String> {
    let escaped = in_order((char('\\'), any_of_chars("\"\\/bfnrt")))
        .skip_first()
        .map(|c| {
            Piece::Char(match c {
                'b' => '\u{8}',
                'f' => '\u{c}',
                'n' => '\n',
                'r' => '\r',
                't' => '\t',
                other => other,
            })
        });
    let hex = any_of_chars("0123456789abcdefABCDEF");
    let unicode = in_order((literal("\\u"), repeat(hex, 4, Some(4))))
        .skip_first()
        .map(|digits| {
            let code = digits
                .iter()
                .fold(0u16, |acc, d| acc * 16 + d.to_digit(16).unwrap_or(0) as u16);
            Piece::Unit(code)
        });
    let plain = any_char_except("\"\\").map(Piece::Char);

    in_order((
        char('"'),
        zero_or_more(one_of(vec![unicode, escaped, plain])),
        char('"'),
    ))
    .skip_wrapper()
    .map(|pieces| decode(&pieces))
}

/// Joins pieces, pairing UTF-16 surrogates; lone surrogates become U+FFFD.
fn decode(pieces: &[Piece]) -> String {
    let mut out = String::new();
    let mut units = Vec::new();
    for piece in pieces {
        match piece {
            Piece::Unit(unit) => units.push(*unit),
            Piece::Char(c) => {
                flush_units(&mut units, &mut out);
                out.push(*c);
            }
        }
    }
    flush_units(&mut units, &mut out);
    out
}

fn flush_units(units: &mut Vec<u16>, out: &mut String) {
    let decoded = char::decode_utf16(units.drain(..));
    out.extend(decoded.map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER)));
}
