//! arbiter-format — deterministic diagnostic rendering of
//! [`arbiter_value::Value`] trees.
//!
//! Provides [`format`], the renderer behind assertion failure messages:
//! single-line, total over finite value graphs, with object keys sorted so a
//! given value tree always renders to the same text.

mod format;

pub use format::format;
