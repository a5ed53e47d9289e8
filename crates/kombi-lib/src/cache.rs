//! Packrat-style memoization.
//!
//! A cache is shared by every rule of a grammar that produces the same
//! payload type. Entries are keyed by the wrapping parser's [`ParserId`], the
//! offset and the left payload, so a rule extending a fold (a `Value` on the
//! cursor) never sees the result of a fresh parse at the same offset.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use kombi_core::{Input, LeftPayload, Output, ParserId};

use crate::parser::{BoxedParser, Parser};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    parser: ParserId,
    offset: usize,
    left: LeftPayload,
}

/// Lookup counters. They survive [`OutputCache::clear`] so a finished
/// top-level parse can still be inspected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: usize,
    pub misses: usize,
}

struct CacheState<T> {
    entries: HashMap<CacheKey, Option<Output<T>>>,
    stats: CacheStats,
}

/// Cloneable handle to a shared result table.
pub struct OutputCache<T> {
    state: Rc<RefCell<CacheState<T>>>,
}

impl<T> Clone for OutputCache<T> {
    fn clone(&self) -> Self {
        OutputCache {
            state: Rc::clone(&self.state),
        }
    }
}

impl<T> Default for OutputCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OutputCache<T> {
    pub fn new() -> Self {
        OutputCache {
            state: Rc::new(RefCell::new(CacheState {
                entries: HashMap::new(),
                stats: CacheStats::default(),
            })),
        }
    }

    pub fn len(&self) -> usize {
        self.state.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.borrow().entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        self.state.borrow().stats
    }

    /// Drops every entry.
    pub fn clear(&self) {
        self.state.borrow_mut().entries.clear();
    }

    pub fn reset_stats(&self) {
        self.state.borrow_mut().stats = CacheStats::default();
    }
}

impl<T: Clone> OutputCache<T> {
    fn lookup(&self, key: &CacheKey) -> Option<Option<Output<T>>> {
        let mut state = self.state.borrow_mut();
        let cached = state.entries.get(key).cloned();
        match cached {
            Some(_) => state.stats.hits += 1,
            None => state.stats.misses += 1,
        }
        cached
    }

    fn store(&self, key: CacheKey, output: Option<Output<T>>) {
        self.state.borrow_mut().entries.insert(key, output);
    }
}

pub(crate) struct WithCache<T> {
    id: ParserId,
    parser: BoxedParser<T>,
    cache: OutputCache<T>,
}

impl<T> WithCache<T> {
    pub(crate) fn new(parser: BoxedParser<T>, cache: OutputCache<T>) -> Self {
        WithCache {
            id: ParserId::fresh(),
            parser,
            cache,
        }
    }
}

impl<T: Clone> Parser<T> for WithCache<T> {
    fn parse(&self, input: &Input) -> Option<Output<T>> {
        let key = CacheKey {
            parser: self.id,
            offset: input.offset(),
            left: input.left().clone(),
        };
        if let Some(cached) = self.cache.lookup(&key) {
            return cached;
        }
        // A re-entrant call at the same key sees a no-match.
        self.cache.store(key.clone(), None);
        let output = self.parser.parse(input);
        self.cache.store(key, output.clone());
        output
    }

    fn resets_precedence(&self) -> bool {
        self.parser.resets_precedence()
    }
}

pub(crate) struct ResetCache<T, U> {
    parser: BoxedParser<T>,
    cache: OutputCache<U>,
    depth: Cell<usize>,
}

impl<T, U> ResetCache<T, U> {
    pub(crate) fn new(parser: BoxedParser<T>, cache: OutputCache<U>) -> Self {
        ResetCache {
            parser,
            cache,
            depth: Cell::new(0),
        }
    }
}

impl<T, U> Parser<T> for ResetCache<T, U> {
    fn parse(&self, input: &Input) -> Option<Output<T>> {
        self.depth.set(self.depth.get() + 1);
        let output = self.parser.parse(input);
        self.depth.set(self.depth.get() - 1);
        if self.depth.get() == 0 {
            self.cache.clear();
        }
        output
    }

    fn resets_precedence(&self) -> bool {
        self.parser.resets_precedence()
    }
}
