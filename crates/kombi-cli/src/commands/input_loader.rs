use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Text to parse, with the path it came from when it came from a file.
#[derive(Debug, PartialEq, Eq)]
pub struct LoadedInput {
    pub text: String,
    pub path: Option<String>,
}

/// Inline text wins, then a file path; `-` or no path reads stdin.
pub fn load_input(path: Option<&Path>, text: Option<&str>) -> Result<LoadedInput, String> {
    if let Some(text) = text {
        return Ok(LoadedInput {
            text: text.to_owned(),
            path: None,
        });
    }

    match path {
        Some(path) if path.as_os_str() != "-" => load_file(path),
        _ => load_stdin(),
    }
}

fn load_stdin() -> Result<LoadedInput, String> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|e| format!("failed to read stdin: {}", e))?;
    Ok(LoadedInput {
        text: buf,
        path: Some("<stdin>".to_owned()),
    })
}

fn load_file(path: &Path) -> Result<LoadedInput, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("failed to read '{}': {}", path.display(), e))?;
    Ok(LoadedInput {
        text,
        path: Some(path.to_string_lossy().into_owned()),
    })
}
