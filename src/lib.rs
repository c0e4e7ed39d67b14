//! bracefmt - Tiny format/mustache templating
//!
//! Substitutes placeholders in a template with positional arguments and values
//! from an optional context:
//!
//! - `{}`, `{0}`, `{1:#x}`: positional arguments with format directives
//! - `{{key}}`, `{{key}:*>10}`: named values from a context
//!
//! Rendering never fails. Placeholders that cannot be substituted (malformed,
//! not enough arguments, unknown keys) are copied to the output unchanged.
//!
//! # Example
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use bracefmt::{bracefmt, bracefmt_with};
//!
//! assert_eq!(bracefmt!("{1} {0}", 123, "world"), "world 123");
//! assert_eq!(bracefmt!("{:#x} {:#o}", 42, 42), "0x2a 052");
//!
//! let ctx = HashMap::from([("player1", "John"), ("player2", "Doe")]);
//! assert_eq!(
//!     bracefmt_with!(ctx, "Hello {{player1}} & {{player2}}!! {0} {} {1}!!", 123, 456),
//!     "Hello John & Doe!! 123 123 456!!"
//! );
//! ```

pub mod error;
pub mod parser;
pub mod renderer;
pub mod style;
pub mod template;

pub use error::Fallback;
pub use renderer::{Rendered, Renderer};
pub use style::{FormatSpec, Value};
pub use template::{Context, ContextError, Lookup};

/// Render a template without arguments.
///
/// Nothing can be bound, so every placeholder is left as written. An absent
/// template renders as the empty string.
pub fn format<'t>(template: impl Into<Option<&'t str>>) -> String {
    format_with(template, &[])
}

/// Render a template with positional arguments
///
/// # Example
///
/// ```rust
/// use bracefmt::{format_with, Value};
///
/// let out = format_with("{:.>10}|{:!<10}", &[Value::from("Doc"), Value::from("Brown")]);
/// assert_eq!(out, ".......Doc|Brown!!!!!");
/// ```
pub fn format_with<'t>(template: impl Into<Option<&'t str>>, args: &[Value<'_>]) -> String {
    render_output(template.into(), args, None)
}

/// Render a template with a context for named placeholders and positional
/// arguments for the rest
pub fn format_with_context<'t, C>(
    context: &C,
    template: impl Into<Option<&'t str>>,
    args: &[Value<'_>],
) -> String
where
    C: Lookup + ?Sized,
{
    let context: &dyn Lookup = &context;
    render_output(template.into(), args, Some(context))
}

/// Render a template and report every placeholder that fell back to literal
/// text
///
/// # Example
///
/// ```rust
/// use bracefmt::{render, Fallback, Value};
///
/// let rendered = render("{}{}{}", &[Value::from(1), Value::from(2)], None);
/// assert_eq!(rendered.output, "12{}");
/// assert!(matches!(rendered.fallbacks[0], Fallback::ArgumentsExhausted { .. }));
/// ```
pub fn render<'t>(
    template: impl Into<Option<&'t str>>,
    args: &[Value<'_>],
    context: Option<&dyn Lookup>,
) -> Rendered {
    match template.into() {
        Some(template) => Renderer::new(args, context).render(template),
        None => Rendered::default(),
    }
}

fn render_output(template: Option<&str>, args: &[Value<'_>], context: Option<&dyn Lookup>) -> String {
    match template {
        Some(template) => {
            Renderer::new(args, context)
                .without_fallbacks()
                .render(template)
                .output
        }
        None => String::new(),
    }
}

/// Render a template with positional arguments of any supported type
///
/// ```rust
/// assert_eq!(bracefmt::bracefmt!("{0}{1}{0}", "abra", "cad"), "abracadabra");
/// assert_eq!(bracefmt::bracefmt!("{}{}{}"), "{}{}{}");
/// ```
#[macro_export]
macro_rules! bracefmt {
    ($template:expr $(,)?) => {
        $crate::format($template)
    };
    ($template:expr, $($arg:expr),+ $(,)?) => {
        $crate::format_with($template, &[$($crate::Value::from($arg)),+])
    };
}

/// Render a template against a context, with optional positional arguments
#[macro_export]
macro_rules! bracefmt_with {
    ($context:expr, $template:expr $(,)?) => {
        $crate::format_with_context(&$context, $template, &[])
    };
    ($context:expr, $template:expr, $($arg:expr),+ $(,)?) => {
        $crate::format_with_context(&$context, $template, &[$($crate::Value::from($arg)),+])
    };
}
