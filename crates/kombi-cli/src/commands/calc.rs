use kombi_grammars::Calculator;
use kombi_lib::Colors;

use super::run_common::{exit_with_parse_error, format_stats};

pub struct CalcArgs {
    pub expr: String,
    pub stats: bool,
    pub color: bool,
}

pub fn run(args: CalcArgs) {
    let calculator = Calculator::new();
    let value = match calculator.evaluate(&args.expr) {
        Ok(value) => value,
        Err(error) => exit_with_parse_error(&error, None, args.color),
    };

    println!("{}", value);
    if args.stats {
        let stats = format_stats(calculator.cache_stats(), Colors::new(args.color));
        println!("{stats}");
    }
}
