//! Parse tracing.
//!
//! Wrapping a rule with [`BoxedParser::with_log`] records a `Before` event
//! when the rule is entered and an `After` event when it returns. The log
//! backs the memoization tests (how often did a rule really run?) and the
//! `kombi trace` command.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::{self, Write};
use std::rc::Rc;

use kombi_core::{Colors, Input, LeftPayload, Output};

use crate::parser::{BoxedParser, Parser};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsingEvent {
    Before {
        rule: Rc<str>,
        offset: usize,
        left: LeftPayload,
    },
    After {
        rule: Rc<str>,
        offset: usize,
        /// Offset the rule stopped at, `None` for no-match.
        end: Option<usize>,
    },
}

/// Cloneable handle to a shared event list.
#[derive(Debug, Clone, Default)]
pub struct ParsingLog {
    events: Rc<RefCell<Vec<ParsingEvent>>>,
}

impl ParsingLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: ParsingEvent) {
        self.events.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<ParsingEvent> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }

    /// Number of times each rule was entered per (offset, left payload).
    pub fn invocations(&self) -> HashMap<(Rc<str>, usize, LeftPayload), usize> {
        let mut counts = HashMap::new();
        for event in self.events.borrow().iter() {
            if let ParsingEvent::Before { rule, offset, left } = event {
                *counts
                    .entry((Rc::clone(rule), *offset, left.clone()))
                    .or_insert(0) += 1;
            }
        }
        counts
    }

    /// Indented call tree, one line per event.
    ///
    /// ```text
    /// > sum at 0
    ///   > number at 0
    ///   < number at 0: matched 0..1
    /// < sum at 0: no match
    /// ```
    pub fn render(&self, colors: Colors) -> String {
        let mut out = String::new();
        self.format(colors, &mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, colors: Colors, w: &mut impl Write) -> fmt::Result {
        let mut depth = 0usize;
        for event in self.events.borrow().iter() {
            match event {
                ParsingEvent::Before { rule, offset, left } => {
                    let marker = match left {
                        LeftPayload::Empty => "",
                        LeftPayload::Value(_) => " (extending)",
                        LeftPayload::RightRecursion => " (right operand)",
                    };
                    let indent = "  ".repeat(depth);
                    let rule = paint(rule, colors.rule, colors.reset);
                    let marker = paint(marker, colors.dim, colors.reset);
                    writeln!(w, "{indent}> {rule} at {offset}{marker}")?;
                    depth += 1;
                }
                ParsingEvent::After { rule, offset, end } => {
                    depth = depth.saturating_sub(1);
                    let indent = "  ".repeat(depth);
                    let rule = paint(rule, colors.rule, colors.reset);
                    let (status, color) = match end {
                        Some(end) => (format!("matched {offset}..{end}"), colors.matched),
                        None => ("no match".to_owned(), colors.failed),
                    };
                    let status = paint(&status, color, colors.reset);
                    writeln!(w, "{indent}< {rule} at {offset}: {status}")?;
                }
            }
        }
        Ok(())
    }
}

fn paint(text: &str, color: &str, reset: &str) -> String {
    format!("{color}{text}{reset}")
}

pub(crate) struct Logged<T> {
    name: Rc<str>,
    parser: BoxedParser<T>,
    log: ParsingLog,
}

impl<T> Logged<T> {
    pub(crate) fn new(name: &str, parser: BoxedParser<T>, log: ParsingLog) -> Self {
        Logged {
            name: Rc::from(name),
            parser,
            log,
        }
    }
}

impl<T> Parser<T> for Logged<T> {
    fn parse(&self, input: &Input) -> Option<Output<T>> {
        self.log.push(ParsingEvent::Before {
            rule: Rc::clone(&self.name),
            offset: input.offset(),
            left: input.left().clone(),
        });
        let output = self.parser.parse(input);
        self.log.push(ParsingEvent::After {
            rule: Rc::clone(&self.name),
            offset: input.offset(),
            end: output.as_ref().map(Output::offset),
        });
        output
    }

    fn resets_precedence(&self) -> bool {
        self.parser.resets_precedence()
    }
}
