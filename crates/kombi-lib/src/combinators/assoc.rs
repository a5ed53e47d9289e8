//! Left-associative folding of syntactically left-recursive rules.
//!
//! A rule like `expr - expr` is written as
//! `in_order((expr.reference(), token("-"), expr.reference())).map_left_assoc(..)`.
//! Parsing it goes as follows:
//!
//! 1. The left operand is parsed fresh, or taken from a [`LeftPayload::Value`]
//!    a previous fold step left on the cursor.
//! 2. The middle elements are parsed as usual.
//! 3. The right operand is parsed with a [`LeftPayload::RightRecursion`] marker,
//!    so a rule of the same level refuses to take over the right-hand side.
//! 4. The combined payload is offered back to the left operand's parser as a
//!    `Value`. If that extends the fold, its result wins; otherwise the fold
//!    stops here.
//!
//! The result is `((a - b) - c) - d` for chains of any length.

use kombi_core::{Input, LeftPayload, Output};

use super::sequence::InOrder;
use crate::parser::{BoxedParser, Parser};

/// Parses `parser` with the right-recursion marker set and strips the
/// marker from the resulting cursor.
fn right_operand<T: 'static>(parser: BoxedParser<T>) -> BoxedParser<T> {
    BoxedParser::new(move |input: &Input| {
        let output = parser.parse(&input.with_left(LeftPayload::RightRecursion))?;
        let next = output.next.without_left();
        Some(Output::new(output.payload, next))
    })
}

macro_rules! impl_map_left_assoc {
    ($first_ty:ident; [$($mid_idx:tt => $mid:ident: $mid_ty:ident),*]; $last_idx:tt => $last_ty:ident) => {
        impl<$first_ty: Clone + 'static, $($mid_ty: 'static,)* $last_ty: 'static>
            InOrder<(BoxedParser<$first_ty>, $(BoxedParser<$mid_ty>,)* BoxedParser<$last_ty>)>
        {
            /// Folds repeated matches into a left-associated payload.
            ///
            /// `transform` combines one step; its result has the type of the
            /// left operand so it can be fed back as the next step's left side.
            #[allow(unused_mut)]
            pub fn map_left_assoc<Fold>(self, transform: Fold) -> BoxedParser<$first_ty>
            where
                Fold: Fn(($first_ty, $($mid_ty,)* $last_ty)) -> $first_ty + 'static,
            {
                let parsers = self.parsers;
                let left = parsers.0.clone();
                let right = right_operand(parsers.$last_idx.clone());
                BoxedParser::new(move |input: &Input| {
                    let Output { payload: first, next } = match input.left() {
                        LeftPayload::RightRecursion => return None,
                        LeftPayload::Empty => left.parse(input)?,
                        LeftPayload::Value(_) => {
                            let first = input.left().downcast::<$first_ty>()?;
                            Output::new(first, input.without_left())
                        }
                    };

                    let mut current = next;
                    $(
                        let $mid = {
                            let output = parsers.$mid_idx.parse(&current)?;
                            current = output.next;
                            output.payload
                        };
                    )*
                    let Output { payload: last, next } = right.parse(&current)?;

                    let payload = transform((first, $($mid,)* last));
                    let extended = left.parse(&next.with_left(LeftPayload::value(payload.clone())));
                    match extended {
                        Some(output) if output.next.left().is_empty() => Some(output),
                        _ => Some(Output::new(payload, next)),
                    }
                })
            }
        }
    };
}

impl_map_left_assoc!(A; []; 1 => B);
impl_map_left_assoc!(A; [1 => b: B]; 2 => C);
impl_map_left_assoc!(A; [1 => b: B, 2 => c: C]; 3 => D);
impl_map_left_assoc!(A; [1 => b: B, 2 => c: C, 3 => d: D]; 4 => E);
impl_map_left_assoc!(A; [1 => b: B, 2 => c: C, 3 => d: D, 4 => e: E]; 5 => F);
impl_map_left_assoc!(A; [1 => b: B, 2 => c: C, 3 => d: D, 4 => e: E, 5 => f: F]; 6 => G);
impl_map_left_assoc!(A; [1 => b: B, 2 => c: C, 3 => d: D, 4 => e: E, 5 => f: F, 6 => g: G]; 7 => H);
