pub mod calc;
pub mod csv;
pub mod expr;
pub mod input_loader;
pub mod json;
pub mod run_common;
pub mod trace;

#[cfg(test)]
mod run_common_tests;
