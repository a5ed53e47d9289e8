//! Output helpers shared by the commands.

use kombi_lib::{CacheStats, Colors, Error};
use serde::Serialize;

/// Prints `error` as a caret diagram on stderr and exits with status 1.
pub fn exit_with_parse_error(error: &Error, path: Option<&str>, color: bool) -> ! {
    let mut printer = error.printer().colored(color);
    if let Some(path) = path {
        printer = printer.path(path);
    }
    eprintln!("{}", printer.render());
    std::process::exit(1);
}

pub fn exit_with_message(message: &str) -> ! {
    eprintln!("error: {}", message);
    std::process::exit(1);
}

pub fn to_json<T: Serialize>(value: &T, compact: bool) -> Result<String, String> {
    let rendered = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    };
    rendered.map_err(|e| format!("failed to serialize output: {}", e))
}

pub fn format_stats(stats: CacheStats, colors: Colors) -> String {
    format!(
        "{}cache: {} hits, {} misses{}",
        colors.dim, stats.hits, stats.misses, colors.reset
    )
}
