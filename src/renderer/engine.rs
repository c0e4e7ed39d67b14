//! Render loop: scan, interpret, resolve, pad

use crate::error::Fallback;
use crate::parser::{scan, Expression, Segment, Span};
use crate::style::{FormatSpec, Value};
use crate::template::{Lookup, Resolution, Resolver, Unresolved};

/// Output of a render together with every placeholder left unresolved
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Rendered {
    pub output: String,
    pub fallbacks: Vec<Fallback>,
}

impl Rendered {
    /// Whether every placeholder was substituted
    pub fn is_complete(&self) -> bool {
        self.fallbacks.is_empty()
    }
}

/// State of one render call.
///
/// Holds the auto-index counter (inside the resolver) and the stream state the
/// format directives accumulate into. Create one per render.
pub struct Renderer<'a, 'c> {
    args: &'a [Value<'a>],
    resolver: Resolver<'c>,
    spec: FormatSpec,
    collect_fallbacks: bool,
    fallbacks: Vec<Fallback>,
}

impl<'a, 'c> Renderer<'a, 'c> {
    pub fn new(args: &'a [Value<'a>], context: Option<&'c dyn Lookup>) -> Self {
        Self {
            args,
            resolver: Resolver::new(args.len(), context),
            spec: FormatSpec::default(),
            collect_fallbacks: true,
            fallbacks: Vec::new(),
        }
    }

    /// Skip recording fallbacks when only the output is needed
    pub fn without_fallbacks(mut self) -> Self {
        self.collect_fallbacks = false;
        self
    }

    /// Render a template, consuming the renderer
    pub fn render(mut self, template: &str) -> Rendered {
        let mut output = String::with_capacity(template.len());

        for segment in scan(template) {
            match segment {
                Segment::Literal { text, .. } => output.push_str(text),
                Segment::Stray { span } => {
                    output.push('{');
                    log::debug!("stray brace at {:?}", span);
                    self.record(Fallback::Malformed { span });
                }
                Segment::Placeholder { expr, span } => {
                    self.placeholder(&expr, span, &mut output);
                }
            }
        }

        Rendered {
            output,
            fallbacks: self.fallbacks,
        }
    }

    fn placeholder(&mut self, expr: &Expression<'_>, span: Span, output: &mut String) {
        self.spec.apply(&expr.fmt);
        let width = self.spec.take_width();
        log::trace!(
            "placeholder {} (tag {:?}, fmt {:?}, width {})",
            expr.raw,
            expr.tag,
            expr.fmt,
            width
        );

        match self.resolver.resolve(&expr.tag) {
            Resolution::Positional(index) => match self.args.get(index) {
                Some(value) => {
                    let text = value.to_text(&self.spec);
                    output.push_str(&self.spec.pad(&text, width));
                }
                None => {
                    output.push_str(expr.raw);
                    self.unresolved(expr, span, Unresolved::MissingArgument(index));
                }
            },
            Resolution::Named(value) => output.push_str(&self.spec.pad(value, width)),
            Resolution::Unresolved(reason) => {
                output.push_str(expr.raw);
                self.unresolved(expr, span, reason);
            }
        }
    }

    fn unresolved(&mut self, expr: &Expression<'_>, span: Span, reason: Unresolved) {
        log::debug!("leaving {} unresolved: {:?}", expr.raw, reason);
        let raw = expr.raw.to_string();
        let supplied = self.args.len();
        let fallback = match reason {
            Unresolved::ArgumentsExhausted => Fallback::ArgumentsExhausted {
                span,
                raw,
                supplied,
            },
            Unresolved::MissingArgument(index) => Fallback::MissingArgument {
                span,
                raw,
                index,
                supplied,
            },
            Unresolved::NoContext => Fallback::NoContext { span, raw },
            Unresolved::UnknownKey => Fallback::UnknownKey {
                span,
                raw,
                key: expr.tag.clone(),
            },
        };
        self.record(fallback);
    }

    fn record(&mut self, fallback: Fallback) {
        if self.collect_fallbacks {
            self.fallbacks.push(fallback);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(template: &str, args: &[Value<'_>]) -> Rendered {
        Renderer::new(args, None).render(template)
    }

    #[test]
    fn test_literal_only() {
        let rendered = render("no placeholders here", &[]);
        assert_eq!(rendered.output, "no placeholders here");
        assert!(rendered.is_complete());
    }

    #[test]
    fn test_fill_persists_across_placeholders() {
        let args = [Value::from("a"), Value::from("b")];
        assert_eq!(render("{:*>3}|{:3}", &args).output, "**a|**b");
    }

    #[test]
    fn test_width_is_single_use() {
        let args = [Value::from("a"), Value::from("b")];
        assert_eq!(render("{:3}|{}", &args).output, "  a|b");
    }

    #[test]
    fn test_base_persists_across_placeholders() {
        let args = [Value::from(255), Value::from(255)];
        assert_eq!(render("{:x} {}", &args).output, "ff ff");
    }

    #[test]
    fn test_fixed_precision_persists() {
        let args = [Value::from(3.14159), Value::from(2.5)];
        assert_eq!(render("{:8} {}", &args).output, "       3 2");
    }

    #[test]
    fn test_unresolved_ignores_width() {
        let rendered = render("{:10}", &[]);
        assert_eq!(rendered.output, "{:10}");
        assert_eq!(
            rendered.fallbacks,
            vec![Fallback::ArgumentsExhausted {
                span: 0..5,
                raw: "{:10}".to_string(),
                supplied: 0,
            }]
        );
    }

    #[test]
    fn test_unresolved_consumes_width() {
        let args = [Value::from("x")];
        assert_eq!(render("{5:6}{0}", &args).output, "{5:6}x");
    }

    #[test]
    fn test_stray_recorded() {
        let rendered = render("a{b", &[]);
        assert_eq!(rendered.output, "a{b");
        assert_eq!(rendered.fallbacks, vec![Fallback::Malformed { span: 1..2 }]);
    }

    #[test]
    fn test_without_fallbacks() {
        let rendered = Renderer::new(&[], None).without_fallbacks().render("{}{");
        assert_eq!(rendered.output, "{}{");
        assert!(rendered.fallbacks.is_empty());
    }
}
