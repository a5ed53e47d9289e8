use kombi_lib::strings::whitespace;
use kombi_lib::structural::zero_or_more;
use kombi_lib::{BoxedParser, in_order};

/// `parser` with optional whitespace on both sides.
pub(crate) fn lexeme<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<T> {
    in_order((
        zero_or_more(whitespace()),
        parser,
        zero_or_more(whitespace()),
    ))
    .skip_wrapper()
}
