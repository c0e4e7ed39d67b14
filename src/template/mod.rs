//! Binding of placeholder tags to values
//!
//! Tags resolve against two sources: the positional arguments of a render and
//! an optional context of named values.
//!
//! ```text
//! {}          next positional argument
//! {1}         positional argument 1
//! {{player}}  context entry "player"
//! ```

mod context;
mod resolver;

pub use context::{Context, ContextError, Lookup};
pub use resolver::{AutoIndex, Resolution, Resolver, Unresolved};
