use kombi_grammars::ExprLang;
use kombi_lib::Colors;

use super::run_common::{exit_with_parse_error, format_stats};

pub struct ExprArgs {
    pub expr: String,
    pub stats: bool,
    pub color: bool,
}

pub fn run(args: ExprArgs) {
    let lang = ExprLang::new();
    let expr = match lang.parse(&args.expr) {
        Ok(expr) => expr,
        Err(error) => exit_with_parse_error(&error, None, args.color),
    };

    println!("{}", expr);
    if args.stats {
        let stats = format_stats(lang.cache_stats(), Colors::new(args.color));
        println!("{stats}");
    }
}
