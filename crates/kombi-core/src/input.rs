use std::any::Any;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

/// Ambient value threaded through [`Input`] to resolve left recursion.
///
/// - `Empty`: nothing pending, the usual state
/// - `Value`: an already-folded left operand a left-associative rule may extend
/// - `RightRecursion`: the cursor is descending into the right operand of a
///   left-associative rule, which must not re-enter a rule of the same level
///
/// Values compare by identity of the shared allocation, so every variant has
/// well-defined `Eq`/`Hash` and can be part of a cache key whatever the
/// payload type is.
#[derive(Clone, Default)]
pub enum LeftPayload {
    #[default]
    Empty,
    Value(Rc<dyn Any>),
    RightRecursion,
}

impl LeftPayload {
    pub fn value<T: 'static>(value: T) -> Self {
        Self::Value(Rc::new(value))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    pub fn is_right_recursion(&self) -> bool {
        matches!(self, Self::RightRecursion)
    }

    /// Clones the carried value out if it has type `T`.
    pub fn downcast<T: Clone + 'static>(&self) -> Option<T> {
        match self {
            Self::Value(value) => value.downcast_ref::<T>().cloned(),
            _ => None,
        }
    }
}

impl PartialEq for LeftPayload {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Empty, Self::Empty) | (Self::RightRecursion, Self::RightRecursion) => true,
            (Self::Value(a), Self::Value(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for LeftPayload {}

impl Hash for LeftPayload {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        if let Self::Value(value) = self {
            (Rc::as_ptr(value) as *const ()).hash(state);
        }
    }
}

impl fmt::Debug for LeftPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("Empty"),
            Self::Value(value) => write!(f, "Value({:p})", Rc::as_ptr(value) as *const ()),
            Self::RightRecursion => f.write_str("RightRecursion"),
        }
    }
}

/// Immutable cursor over source text.
///
/// Cloning is cheap: the text is shared and only the offset and the left
/// payload are per-cursor. Every combinator that advances returns a new `Input`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Input {
    text: Rc<str>,
    offset: usize,
    left: LeftPayload,
}

impl Input {
    pub fn new(text: impl AsRef<str>) -> Self {
        Self::from_rc(Rc::from(text.as_ref()))
    }

    pub fn from_rc(text: Rc<str>) -> Self {
        Self {
            text,
            offset: 0,
            left: LeftPayload::Empty,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn left(&self) -> &LeftPayload {
        &self.left
    }

    /// Text from the offset to the end; empty if the offset is not on a char boundary.
    pub fn remaining(&self) -> &str {
        self.text.get(self.offset..).unwrap_or_default()
    }

    pub fn is_at_end(&self) -> bool {
        self.offset >= self.text.len()
    }

    pub fn peek_char(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Moves forward by `bytes`, keeping the left payload.
    pub fn advance(&self, bytes: usize) -> Self {
        self.with_offset(self.offset + bytes)
    }

    pub fn with_offset(&self, offset: usize) -> Self {
        Self::ensure_offset(&self.text, offset);
        Self {
            text: Rc::clone(&self.text),
            offset,
            left: self.left.clone(),
        }
    }

    pub fn with_left(&self, left: LeftPayload) -> Self {
        Self {
            text: Rc::clone(&self.text),
            offset: self.offset,
            left,
        }
    }

    pub fn without_left(&self) -> Self {
        self.with_left(LeftPayload::Empty)
    }
}

impl fmt::Debug for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Input")
            .field("offset", &self.offset)
            .field("left", &self.left)
            .field("remaining", &self.remaining())
            .finish()
    }
}

/// Successful parse: the produced payload and where to resume.
#[derive(Clone, Debug, PartialEq)]
pub struct Output<T> {
    pub payload: T,
    pub next: Input,
}

impl<T> Output<T> {
    pub fn new(payload: T, next: Input) -> Self {
        Self { payload, next }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Output<U> {
        Output {
            payload: f(self.payload),
            next: self.next,
        }
    }

    /// Offset the parse stopped at.
    pub fn offset(&self) -> usize {
        self.next.offset
    }
}
