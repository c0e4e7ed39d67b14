//! Single-pass placeholder scanner

use super::ast::Segment;
use super::expression::parse_expression;

/// Splits a template into literal text, placeholders and stray braces.
///
/// The scanner never fails: a `{` that does not open a well-formed placeholder
/// comes out as [`Segment::Stray`] and scanning resumes right after it.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.source.get(self.pos..).filter(|rest| !rest.is_empty())?;
        let start = self.pos;

        if !rest.starts_with('{') {
            let len = rest.find('{').unwrap_or(rest.len());
            self.pos += len;
            return Some(Segment::Literal {
                text: &rest[..len],
                span: start..self.pos,
            });
        }

        match parse_expression(rest) {
            Some(expr) => {
                self.pos += expr.len();
                Some(Segment::Placeholder {
                    expr,
                    span: start..self.pos,
                })
            }
            None => {
                self.pos += 1;
                Some(Segment::Stray {
                    span: start..self.pos,
                })
            }
        }
    }
}

/// Scan a template into segments
pub fn scan(source: &str) -> Scanner<'_> {
    Scanner::new(source)
}
