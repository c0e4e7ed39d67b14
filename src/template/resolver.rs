//! Tag resolution - binds placeholder tags to arguments or context entries

use super::context::Lookup;

/// Cursor for tag-less placeholders (`{}`, `{:x}`).
///
/// Starts at 0 and advances once per tag-less placeholder until every
/// positional argument has been handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoIndex {
    next: usize,
    limit: usize,
}

impl AutoIndex {
    pub fn new(limit: usize) -> Self {
        Self { next: 0, limit }
    }

    /// Hand out the next index, or `None` once the arguments are exhausted
    pub fn advance(&mut self) -> Option<usize> {
        if self.next < self.limit {
            self.next += 1;
            Some(self.next - 1)
        } else {
            None
        }
    }

    pub fn position(&self) -> usize {
        self.next
    }
}

/// Where a placeholder's value comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'c> {
    /// Index into the positional arguments
    Positional(usize),
    /// Value taken from the context
    Named(&'c str),
    /// Nothing to bind; the placeholder is emitted as written
    Unresolved(Unresolved),
}

/// Why a tag could not be bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unresolved {
    /// Tag-less placeholder after every argument was used
    ArgumentsExhausted,
    /// Digit tag naming an argument that was not supplied
    MissingArgument(usize),
    /// Named tag but no context was supplied
    NoContext,
    /// Named tag missing from the context
    UnknownKey,
}

/// Per-render tag resolver
pub struct Resolver<'c> {
    arity: usize,
    context: Option<&'c dyn Lookup>,
    counter: AutoIndex,
}

impl<'c> Resolver<'c> {
    pub fn new(arity: usize, context: Option<&'c dyn Lookup>) -> Self {
        Self {
            arity,
            context,
            counter: AutoIndex::new(arity),
        }
    }

    /// Bind a tag.
    ///
    /// Empty tags take the next automatic index, a single ASCII digit names a
    /// positional argument directly, and anything else is a context key.
    pub fn resolve(&mut self, tag: &str) -> Resolution<'c> {
        if tag.is_empty() {
            return match self.counter.advance() {
                Some(index) => Resolution::Positional(index),
                None => Resolution::Unresolved(Unresolved::ArgumentsExhausted),
            };
        }

        if let [digit @ b'0'..=b'9'] = tag.as_bytes() {
            let index = usize::from(digit - b'0');
            return if index < self.arity {
                Resolution::Positional(index)
            } else {
                Resolution::Unresolved(Unresolved::MissingArgument(index))
            };
        }

        let Some(context) = self.context else {
            return Resolution::Unresolved(Unresolved::NoContext);
        };
        match context.lookup(tag) {
            Some(value) => Resolution::Named(value),
            None => Resolution::Unresolved(Unresolved::UnknownKey),
        }
    }

    pub fn counter(&self) -> AutoIndex {
        self.counter
    }
}
