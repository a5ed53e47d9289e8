//! `in_order`: run parsers one after another and collect a tuple.
//!
//! Sequences are tuples of [`BoxedParser`]s of arity 2 to 8. The first element
//! is the only position direct left recursion can come from, so it is always
//! wrapped in the non-recursion guard.

use kombi_core::{Input, Output};

use crate::parser::{BoxedParser, Parser};

/// A tuple of parsers that can run in order.
pub trait Sequence {
    type Payload;

    /// Wraps the first element in the non-recursion guard.
    fn guard_first(self) -> Self;

    /// Runs every element, failing fast on the first no-match.
    fn parse_all(&self, input: &Input) -> Option<Output<Self::Payload>>;
}

macro_rules! impl_sequence {
    ($first:ident: $first_ty:ident $(, $rest:ident: $rest_ty:ident)+) => {
        impl<$first_ty: 'static $(, $rest_ty: 'static)+> Sequence
            for (BoxedParser<$first_ty>, $(BoxedParser<$rest_ty>,)+)
        {
            type Payload = ($first_ty, $($rest_ty,)+);

            fn guard_first(self) -> Self {
                let ($first, $($rest,)+) = self;
                ($first.non_recursive(), $($rest,)+)
            }

            fn parse_all(&self, input: &Input) -> Option<Output<Self::Payload>> {
                let ($first, $($rest,)+) = self;
                let Output { payload: $first, next } = $first.parse(input)?;
                let mut current = next;
                $(
                    let $rest = {
                        let output = $rest.parse(&current)?;
                        current = output.next;
                        output.payload
                    };
                )+
                Some(Output::new(($first, $($rest,)+), current))
            }
        }
    };
}

impl_sequence!(a: A, b: B);
impl_sequence!(a: A, b: B, c: C);
impl_sequence!(a: A, b: B, c: C, d: D);
impl_sequence!(a: A, b: B, c: C, d: D, e: E);
impl_sequence!(a: A, b: B, c: C, d: D, e: E, f: F);
impl_sequence!(a: A, b: B, c: C, d: D, e: E, f: F, g: G);
impl_sequence!(a: A, b: B, c: C, d: D, e: E, f: F, g: G, h: H);

/// Parsers applied in order. Itself a parser of the payload tuple.
#[derive(Clone)]
pub struct InOrder<S> {
    pub(crate) parsers: S,
}

pub fn in_order<S: Sequence>(parsers: S) -> InOrder<S> {
    InOrder {
        parsers: parsers.guard_first(),
    }
}

impl<S: Sequence> Parser<S::Payload> for InOrder<S> {
    fn parse(&self, input: &Input) -> Option<Output<S::Payload>> {
        self.parsers.parse_all(input)
    }
}

impl<S: Sequence + 'static> InOrder<S> {
    pub fn boxed(self) -> BoxedParser<S::Payload> {
        BoxedParser::new(self)
    }

    pub fn map<U: 'static, F>(self, f: F) -> BoxedParser<U>
    where
        F: Fn(S::Payload) -> U + 'static,
    {
        self.boxed().map(f)
    }
}

impl<S: Sequence + 'static> From<InOrder<S>> for BoxedParser<S::Payload> {
    fn from(in_order: InOrder<S>) -> Self {
        in_order.boxed()
    }
}

impl<A: 'static, B: 'static> InOrder<(BoxedParser<A>, BoxedParser<B>)> {
    pub fn skip_first(self) -> BoxedParser<B> {
        self.map(|(_, b)| b)
    }

    pub fn skip_last(self) -> BoxedParser<A> {
        self.map(|(a, _)| a)
    }
}

impl<A, B, C> InOrder<(BoxedParser<A>, BoxedParser<B>, BoxedParser<C>)>
where
    A: 'static,
    B: 'static,
    C: 'static,
{
    pub fn skip_first(self) -> BoxedParser<(B, C)> {
        self.map(|(_, b, c)| (b, c))
    }

    pub fn skip_last(self) -> BoxedParser<(A, B)> {
        self.map(|(a, b, _)| (a, b))
    }

    /// Keeps only the middle payload, e.g. the expression inside parentheses.
    pub fn skip_wrapper(self) -> BoxedParser<B> {
        self.map(|(_, b, _)| b)
    }
}
