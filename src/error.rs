//! Fallback diagnostics
//!
//! Rendering never fails. Every placeholder that cannot be substituted is
//! written out as-is and recorded as a [`Fallback`] so callers can report it.

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::parser::Span;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Fallback {
    /// A `{` that does not open a well-formed placeholder
    #[error("malformed placeholder: unbalanced braces, invalid identifier or too long")]
    Malformed { span: Span },

    /// `{}` with every positional argument already used
    #[error("no positional argument left for '{raw}' ({supplied} supplied)")]
    ArgumentsExhausted {
        span: Span,
        raw: String,
        supplied: usize,
    },

    /// `{N}` naming an argument that was not supplied
    #[error("positional argument {index} is missing for '{raw}' ({supplied} supplied)")]
    MissingArgument {
        span: Span,
        raw: String,
        index: usize,
        supplied: usize,
    },

    /// Named tag rendered without any context
    #[error("no context to resolve '{raw}'")]
    NoContext { span: Span, raw: String },

    /// Named tag not present in the context
    #[error("unknown key '{key}' in '{raw}'")]
    UnknownKey {
        span: Span,
        raw: String,
        key: String,
    },
}

impl Fallback {
    /// Byte range of the offending text in the template
    pub fn span(&self) -> &Span {
        match self {
            Self::Malformed { span }
            | Self::ArgumentsExhausted { span, .. }
            | Self::MissingArgument { span, .. }
            | Self::NoContext { span, .. }
            | Self::UnknownKey { span, .. } => span,
        }
    }

    /// Short label for the span
    fn label(&self) -> &'static str {
        match self {
            Self::Malformed { .. } => "emitted as a literal brace",
            Self::ArgumentsExhausted { .. } | Self::MissingArgument { .. } => {
                "not enough arguments"
            }
            Self::NoContext { .. } | Self::UnknownKey { .. } => "left unresolved",
        }
    }

    /// Format the fallback with template context using ariadne
    pub fn report(&self, source: &str, filename: &str, color: bool) -> String {
        let span = char_span(source, self.span());
        let mut buf = Vec::new();

        let written = Report::build(ReportKind::Warning, filename, span.start)
            .with_config(Config::default().with_color(color))
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, span))
                    .with_message(self.label())
                    .with_color(Color::Yellow),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

/// ariadne counts characters, spans count bytes
fn char_span(source: &str, span: &Span) -> Span {
    let to_chars = |byte: usize| {
        source
            .get(..byte)
            .map_or(byte, |prefix| prefix.chars().count())
    };
    to_chars(span.start)..to_chars(span.end)
}
