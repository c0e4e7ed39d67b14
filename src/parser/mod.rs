//! Placeholder scanner and expression parser

pub mod ast;
mod expression;
mod scanner;

pub use ast::*;
pub use expression::{parse_expression, MAX_FMT_LEN, MAX_RAW_LEN, MAX_TAG_LEN};
pub use scanner::{scan, Scanner};
