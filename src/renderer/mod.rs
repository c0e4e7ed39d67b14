//! Template renderer
//!
//! Drives one pass over a template, substituting placeholders and recording
//! the ones that fall back to literal text.

mod engine;

pub use engine::{Renderer, Rendered};
