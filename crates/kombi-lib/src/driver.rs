use std::fmt::Debug;

use kombi_core::Input;

use crate::parser::{BoxedParser, Parser};
use crate::{Error, Result};

/// Parses the whole of `text` with `parser`.
///
/// A match that stops before the end is an error: partial parses are never
/// returned as successes.
pub fn parse_with<T: Debug>(text: &str, parser: &BoxedParser<T>) -> Result<T> {
    let input = Input::new(text);
    let Some(output) = parser.parse(&input) else {
        return Err(Error::NoMatchingParsers {
            input: text.to_owned(),
        });
    };

    if output.offset() < text.len() {
        return Err(Error::InputIsNotConsumed {
            input: text.to_owned(),
            offset: output.offset(),
            payload: format!("{:?}", output.payload),
        });
    }

    Ok(output.payload)
}
