//! Format-spec mini-language and value rendering
//!
//! A format spec is the part of a placeholder after the `:`. It is a sequence of
//! single-character directives applied left to right:
//!
//! | Directive | Effect |
//! |-----------|--------|
//! | `8`, `8.2` | width, precision, fixed-point floats |
//! | `#` | base prefix (`0x`, `0`) |
//! | `b` | booleans as `true`/`false` |
//! | `d` `x` `o` | decimal, hex, octal |
//! | `D` `X` `O` | same, uppercase |
//! | `f` | fixed-point floats |
//! | `<` `>` | left / right alignment |
//! | anything else | fill character |

mod lexer;
mod number;
mod spec;
mod value;

pub use lexer::{lex, Directive, Numeric, MAX_NUMERIC};
pub use spec::{Alignment, Base, FormatSpec, DEFAULT_PRECISION};
pub use value::Value;
