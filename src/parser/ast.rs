//! Syntax types produced by the placeholder scanner

/// Byte range in template text
pub type Span = std::ops::Range<usize>;

/// A fully bracketed placeholder such as `{1:x}` or `{{name}:*>10}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression<'a> {
    /// Number of leading `{` (1 for positional style, 2 for mustache style)
    pub depth: usize,
    /// Identifier before the `:`; empty for `{}` and `{:fmt}`
    pub tag: String,
    /// Format directives after the `:`; empty when there is none
    pub fmt: String,
    /// The placeholder exactly as written in the template
    pub raw: &'a str,
}

impl Expression<'_> {
    /// Length of the placeholder in bytes, braces included
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Whether this placeholder was written in `{{mustache}}` style
    pub fn is_mustache(&self) -> bool {
        self.depth >= 2
    }
}

/// One piece of a scanned template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text copied verbatim to the output
    Literal { text: &'a str, span: Span },
    /// A well-formed placeholder awaiting resolution
    Placeholder { expr: Expression<'a>, span: Span },
    /// A `{` that does not start a well-formed placeholder; emitted literally
    Stray { span: Span },
}

impl Segment<'_> {
    pub fn span(&self) -> &Span {
        match self {
            Segment::Literal { span, .. }
            | Segment::Placeholder { span, .. }
            | Segment::Stray { span } => span,
        }
    }
}
