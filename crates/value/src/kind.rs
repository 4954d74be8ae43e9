//! Comparison-kind classification.

use crate::value::{ObjectValue, Value};

/// The closed set of comparison kinds.
///
/// Every [`Value`] classifies into exactly one kind; the comparator's
/// fast-fail rule declares values of different kinds unequal before any
/// content is inspected. `ListLike` and `PlainObject` both come from
/// [`Value::Object`]; the split is decided by the [`is_list_like`] shape
/// predicate, not by a distinct nominal type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Undefined,
    Boolean,
    Number,
    Str,
    BoxedNumber,
    BoxedStr,
    BoxedBoolean,
    Date,
    Regexp,
    Function,
    Array,
    ListLike,
    PlainObject,
}

/// Classifies a value by its runtime representation. Total and pure; never
/// coerces.
pub fn kind_of(value: &Value) -> Kind {
    match value {
        Value::Null => Kind::Null,
        Value::Undefined => Kind::Undefined,
        Value::Bool(_) => Kind::Boolean,
        Value::Number(_) => Kind::Number,
        Value::Str(_) => Kind::Str,
        Value::BoxedNumber(_) => Kind::BoxedNumber,
        Value::BoxedStr(_) => Kind::BoxedStr,
        Value::BoxedBool(_) => Kind::BoxedBoolean,
        Value::Date(_) => Kind::Date,
        Value::Regexp(_) => Kind::Regexp,
        Value::Function(_) => Kind::Function,
        Value::Array(_) => Kind::Array,
        Value::Object(object) => {
            if is_list_like(object) {
                Kind::ListLike
            } else {
                Kind::PlainObject
            }
        }
    }
}

/// The observable list length of an object: the non-enumerable argument-pack
/// length when present, otherwise an enumerable `length` entry holding a
/// non-negative integral number.
pub fn list_length(object: &ObjectValue) -> Option<usize> {
    if let Some(n) = object.hidden_length {
        return Some(n);
    }
    match object.entries.get("length") {
        Some(Value::Number(n))
            if n.is_finite() && *n >= 0.0 && n.fract() == 0.0 && *n <= usize::MAX as f64 =>
        {
            Some(*n as usize)
        }
        _ => None,
    }
}

/// Shape predicate for the `ListLike` kind: the object exposes a list length
/// (see [`list_length`]) and enumerable integer-indexed entries for every
/// index `0..length-1`.
pub fn is_list_like(object: &ObjectValue) -> bool {
    let Some(length) = list_length(object) else {
        return false;
    };
    if length > object.entries.len() {
        return false;
    }
    (0..length).all(|index| object.entries.contains_key(index.to_string().as_str()))
}
