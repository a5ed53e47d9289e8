//! ANSI color codes for parse traces and diagnostics.
//!
//! - Rule: names of traced rules
//! - Matched: successful results and consumed ranges
//! - Failed: no-match results
//! - Dim: offsets, left payload markers, statistics

/// Palette for terminal output. Uses only the standard 16 ANSI colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    pub rule: &'static str,
    pub matched: &'static str,
    pub failed: &'static str,
    pub dim: &'static str,
    pub reset: &'static str,
}

impl Default for Colors {
    fn default() -> Self {
        Self::OFF
    }
}

impl Colors {
    pub const ON: Self = Self {
        rule: "\x1b[34m",
        matched: "\x1b[32m",
        failed: "\x1b[31m",
        dim: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        rule: "",
        matched: "",
        failed: "",
        dim: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }

    pub fn is_enabled(&self) -> bool {
        !self.reset.is_empty()
    }
}
