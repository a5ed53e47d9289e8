use std::path::PathBuf;

use kombi_grammars::JsonGrammar;

use super::input_loader::load_input;
use super::run_common::{exit_with_message, exit_with_parse_error, to_json};

pub struct JsonArgs {
    pub input_path: Option<PathBuf>,
    pub input_text: Option<String>,
    pub compact: bool,
    pub color: bool,
}

pub fn run(args: JsonArgs) {
    let input = load_input(args.input_path.as_deref(), args.input_text.as_deref())
        .unwrap_or_else(|msg| exit_with_message(&msg));

    let value = match JsonGrammar::new().parse(&input.text) {
        Ok(value) => value,
        Err(error) => exit_with_parse_error(&error, input.path.as_deref(), args.color),
    };

    match to_json(&value, args.compact) {
        Ok(rendered) => println!("{}", rendered),
        Err(msg) => exit_with_message(&msg),
    }
}
