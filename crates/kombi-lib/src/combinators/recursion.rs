//! Recursive grammars: lazy construction, forward-declared rules and the
//! non-recursion guard.

use std::cell::{OnceCell, RefCell};
use std::collections::HashSet;
use std::rc::{Rc, Weak};

use kombi_core::{Input, Output};

use crate::parser::{BoxedParser, Parser};

/// Defers building a parser until its first use.
///
/// The supplier runs at most once; later calls reuse the built parser.
pub fn lazy<T: 'static, F>(supplier: F) -> BoxedParser<T>
where
    F: Fn() -> BoxedParser<T> + 'static,
{
    BoxedParser::new(Lazy {
        supplier: Box::new(supplier),
        parser: OnceCell::new(),
    })
}

struct Lazy<T> {
    supplier: Box<dyn Fn() -> BoxedParser<T>>,
    parser: OnceCell<BoxedParser<T>>,
}

impl<T> Lazy<T> {
    fn get(&self) -> &BoxedParser<T> {
        self.parser.get_or_init(|| (self.supplier)())
    }
}

impl<T> Parser<T> for Lazy<T> {
    fn parse(&self, input: &Input) -> Option<Output<T>> {
        self.get().parse(input)
    }

    fn resets_precedence(&self) -> bool {
        self.get().resets_precedence()
    }
}

/// A grammar rule that can be referenced before it is defined.
///
/// The rule owns its definition. [`reference`](Rule::reference) hands out
/// weak handles for use inside the grammar, so self-referencing rules do not
/// form `Rc` cycles. Keep every `Rule` alive for as long as its grammar is used;
/// a reference to an undefined or dropped rule never matches.
pub struct Rule<T> {
    pub(crate) definition: Rc<OnceCell<BoxedParser<T>>>,
}

impl<T: 'static> Rule<T> {
    pub fn declare() -> Self {
        Rule {
            definition: Rc::new(OnceCell::new()),
        }
    }

    /// Sets the rule body.
    ///
    /// # Panics
    ///
    /// If the rule is already defined.
    pub fn define(&self, parser: impl Into<BoxedParser<T>>) {
        let defined = self.definition.set(parser.into()).is_ok();
        Self::ensure_defined_once(defined);
    }

    pub fn is_defined(&self) -> bool {
        self.definition.get().is_some()
    }

    /// Weak handle for use inside the grammar, including the rule's own body.
    pub fn reference(&self) -> BoxedParser<T> {
        BoxedParser::new(RuleRef {
            definition: Rc::downgrade(&self.definition),
        })
    }

    /// Strong handle, typically the entry point passed to `parse_with`.
    pub fn parser(&self) -> BoxedParser<T> {
        let definition = Rc::clone(&self.definition);
        BoxedParser::new(RuleHandle { definition })
    }
}

struct RuleRef<T> {
    definition: Weak<OnceCell<BoxedParser<T>>>,
}

impl<T> Parser<T> for RuleRef<T> {
    fn parse(&self, input: &Input) -> Option<Output<T>> {
        let definition = self.definition.upgrade()?;
        definition.get()?.parse(input)
    }

    fn resets_precedence(&self) -> bool {
        self.definition
            .upgrade()
            .and_then(|definition| definition.get().map(|p| p.resets_precedence()))
            .unwrap_or(false)
    }
}

struct RuleHandle<T> {
    definition: Rc<OnceCell<BoxedParser<T>>>,
}

impl<T> Parser<T> for RuleHandle<T> {
    fn parse(&self, input: &Input) -> Option<Output<T>> {
        self.definition.get()?.parse(input)
    }

    fn resets_precedence(&self) -> bool {
        self.definition.get().is_some_and(|p| p.resets_precedence())
    }
}

/// Fails immediately when re-entered at an offset it is already parsing.
///
/// The set of active offsets belongs to this instance, so two separately
/// built grammars never block each other.
pub fn non_recursive<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<T> {
    parser.non_recursive()
}

pub(crate) struct NonRecursive<T> {
    parser: BoxedParser<T>,
    active: RefCell<HashSet<usize>>,
}

impl<T> NonRecursive<T> {
    pub(crate) fn new(parser: BoxedParser<T>) -> Self {
        NonRecursive {
            parser,
            active: RefCell::new(HashSet::new()),
        }
    }
}

impl<T> Parser<T> for NonRecursive<T> {
    fn parse(&self, input: &Input) -> Option<Output<T>> {
        let offset = input.offset();
        if !self.active.borrow_mut().insert(offset) {
            return None;
        }
        let result = self.parser.parse(input);
        self.active.borrow_mut().remove(&offset);
        result
    }

    fn resets_precedence(&self) -> bool {
        self.parser.resets_precedence()
    }
}
