mod cli;
mod commands;

use cli::{CalcParams, CsvParams, ExprParams, JsonParams, TraceParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("calc", m)) => {
            let params = CalcParams::from_matches(m);
            commands::calc::run(params.into());
        }
        Some(("expr", m)) => {
            let params = ExprParams::from_matches(m);
            commands::expr::run(params.into());
        }
        Some(("json", m)) => {
            let params = JsonParams::from_matches(m);
            commands::json::run(params.into());
        }
        Some(("csv", m)) => {
            let params = CsvParams::from_matches(m);
            commands::csv::run(params.into());
        }
        Some(("trace", m)) => {
            let params = TraceParams::from_matches(m);
            commands::trace::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
