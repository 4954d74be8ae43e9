//! arbiter-value — dynamic value model and comparison-kind classification.
//!
//! The [`Value`] variant models the full range of runtime values the
//! assertion layer can receive: JSON-style primitives and containers plus
//! boxed primitives, timestamps, pattern objects, callables, and the
//! argument-pack objects produced by variadic call capture. [`kind_of`]
//! classifies any value into one of the closed comparison [`Kind`]s.

mod kind;
mod value;

pub use kind::{is_list_like, kind_of, list_length, Kind};
pub use value::{DateValue, FunctionValue, ObjectValue, RegexpValue, Value};
