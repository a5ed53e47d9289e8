//! Comma-separated values.
//!
//! Fields are either quoted, where `""` stands for one quote and commas and
//! line breaks are plain content, or unquoted up to the next comma or line
//! break. Records end with `\n` or `\r\n`; a final line break is optional.

use kombi_lib::primitives::{any_char_except, char, literal};
use kombi_lib::strings::chars_to_string;
use kombi_lib::structural::zero_or_more;
use kombi_lib::{BoxedParser, Result, in_order, joined_with, one_of, parse_with};

pub type Record = Vec<String>;

pub struct Csv {
    entry: BoxedParser<Vec<Record>>,
}

impl Default for Csv {
    fn default() -> Self {
        Self::new()
    }
}

impl Csv {
    pub fn new() -> Self {
        let records = joined_with(record(), one_of(vec![literal("\r\n"), literal("\n")]));
        let entry = records.map(|mut records| {
            // A trailing line break leaves one empty record behind.
            if records.last().is_some_and(|last| is_blank(last)) {
                records.pop();
            }
            records
        });
        Csv { entry }
    }

    pub fn parse(&self, text: &str) -> Result<Vec<Record>> {
        parse_with(text, &self.entry)
    }

    pub fn parser(&self) -> &BoxedParser<Vec<Record>> {
        &self.entry
    }
}

fn is_blank(record: &Record) -> bool {
    matches!(record.as_slice(), [field] if field.is_empty())
}

fn record() -> BoxedParser<Record> {
    let field = one_of(vec![quoted(), unquoted()]);
    let rest = zero_or_more(in_order((char(','), field.clone())).skip_first());
    in_order((field, rest)).map(|(first, rest)| {
        let mut fields = Vec::with_capacity(rest.len() + 1);
        fields.push(first);
        fields.extend(rest);
        fields
    })
}

fn quoted() -> BoxedParser<String> {
    let escaped_quote = literal("\"\"").map(|_| '"');
    let content = zero_or_more(one_of(vec![escaped_quote, any_char_except("\"")]));
    in_order((char('"'), chars_to_string(content), char('"'))).skip_wrapper()
}

fn unquoted() -> BoxedParser<String> {
    chars_to_string(zero_or_more(any_char_except(",\"\r\n")))
}
