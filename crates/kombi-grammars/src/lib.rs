#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Grammars built with kombi.
//!
//! - [`calculator`]: floating point arithmetic with the usual precedence
//! - [`json`]: JSON values, objects keep their key order
//! - [`csv`]: comma-separated records with quoted fields
//! - [`expr_lang`]: a small expression language parsed into an AST
//!
//! Each grammar is a struct that owns its rules; build it once and reuse it
//! for any number of parses on the same thread.

pub mod calculator;
pub mod csv;
pub mod expr_lang;
pub mod json;

mod lexeme;

#[cfg(test)]
mod expr_lang_tests;

pub use calculator::Calculator;
pub use csv::Csv;
pub use expr_lang::{BinaryOp, Expr, ExprLang, UnaryOp};
pub use json::{Json, JsonGrammar};
