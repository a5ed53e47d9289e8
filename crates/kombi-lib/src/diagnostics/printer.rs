//! Builder-pattern printer for rendering parse errors.

use std::fmt::Write;
use std::ops::Range;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};

use crate::Error;

/// Builder for rendering an [`Error`] against the text it was raised for.
pub struct ErrorPrinter<'e, 'p> {
    error: &'e Error,
    path: Option<&'p str>,
    colored: bool,
}

impl<'e, 'p> ErrorPrinter<'e, 'p> {
    pub fn new(error: &'e Error) -> Self {
        Self {
            error,
            path: None,
            colored: false,
        }
    }

    pub fn path(mut self, path: &'p str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let source = self.error.input();
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let range = caret_range(source, self.error.offset());
        let label = self.error.label();
        let mut snippet = Snippet::source(source)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(range).label(label));
        if let Some(path) = self.path {
            snippet = snippet.path(path);
        }

        let title = Level::ERROR.primary_title(self.error.title());
        let report = vec![title.element(snippet)];
        write!(w, "{}", renderer.render(&report))
    }
}

/// Span of the character at `offset`, or an empty span at the end of `source`.
fn caret_range(source: &str, offset: usize) -> Range<usize> {
    let start = offset.min(source.len());
    let width = source
        .get(start..)
        .and_then(|rest| rest.chars().next())
        .map_or(0, char::len_utf8);
    start..start + width
}

impl Error {
    pub fn printer(&self) -> ErrorPrinter<'_, '_> {
        ErrorPrinter::new(self)
    }

    /// Plain caret diagram, without a path.
    pub fn render(&self) -> String {
        self.printer().render()
    }

    fn title(&self) -> &'static str {
        match self {
            Error::NoMatchingParsers { .. } => "no matching parsers",
            Error::InputIsNotConsumed { .. } => "input is not consumed",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Error::NoMatchingParsers { .. } => "no parser matches here",
            Error::InputIsNotConsumed { .. } => "unconsumed input",
        }
    }
}
