//! Caret diagrams for top-level parse errors.

mod printer;

#[cfg(test)]
mod tests;

pub use printer::ErrorPrinter;
