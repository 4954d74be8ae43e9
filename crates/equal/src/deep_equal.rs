use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use indexmap::IndexMap;

use arbiter_value::{kind_of, list_length, Kind, Value};

/// Recursively checks two values for strict structural equality.
///
/// Dispatch is kind-directed: values of different kinds are never equal, with
/// one deliberate exception. An object-shaped LEFT operand is compared
/// structurally against any object- or array-shaped right operand by its
/// observable key set, while a true array on the left only ever equals
/// another true array, so list-shaped equality is intentionally not
/// symmetric.
///
/// Numbers follow same-value semantics: NaN equals NaN, and `-0` does not
/// equal `+0`. Functions are equal only through shared identity. Neither
/// operand is ever mutated.
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    // Same instance covers self-comparison for every kind.
    if std::ptr::eq(a, b) {
        return true;
    }
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Undefined, Value::Undefined) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => same_value_number(*x, *y),
        (Value::Str(x), Value::Str(y)) => x == y,
        // Boxed primitives compare by unwrapped value, within their own kind.
        (Value::BoxedBool(x), Value::BoxedBool(y)) => x == y,
        (Value::BoxedNumber(x), Value::BoxedNumber(y)) => same_value_number(*x, *y),
        (Value::BoxedStr(x), Value::BoxedStr(y)) => x == y,
        // Timestamp-only; extra properties on a date never participate.
        (Value::Date(x), Value::Date(y)) => x.epoch_ms == y.epoch_ms,
        (Value::Regexp(x), Value::Regexp(y)) => {
            x.source == y.source && x.flags == y.flags && props_equal(&x.props, &y.props)
        }
        (Value::Function(x), Value::Function(y)) => Rc::ptr_eq(x, y),
        (Value::Array(x), Value::Array(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(ea, eb)| deep_equal(ea, eb))
        }
        // Object-shaped left operand: structural key-set comparison. The
        // right side may be an object, a list-shaped object, or an array.
        (Value::Object(_), _) => structural_equal(a, b),
        _ => false,
    }
}

/// Same-value numeric rule: NaN equals NaN; zeros must agree in sign.
fn same_value_number(a: f64, b: f64) -> bool {
    if a.is_nan() || b.is_nan() {
        return a.is_nan() && b.is_nan();
    }
    a == b && a.is_sign_positive() == b.is_sign_positive()
}

fn props_equal(a: &IndexMap<String, Value>, b: &IndexMap<String, Value>) -> bool {
    if a.len() != b.len() {
        return false;
    }
    for (key, value_a) in a {
        match b.get(key) {
            Some(value_b) => {
                if !deep_equal(value_a, value_b) {
                    return false;
                }
            }
            None => return false,
        }
    }
    true
}

/// The key-addressable view a value presents to structural comparison: its
/// enumerable entries, plus a synthetic `length` for array and list-shaped
/// values.
struct StructuralView<'a> {
    entries: BTreeMap<String, &'a Value>,
    length: Option<Value>,
}

impl<'a> StructuralView<'a> {
    /// `None` when the value has no key-addressable shape (primitives,
    /// boxed primitives, dates, regexps, functions).
    fn of(value: &'a Value) -> Option<Self> {
        match value {
            Value::Array(items) => {
                let entries = items
                    .iter()
                    .enumerate()
                    .map(|(index, item)| (index.to_string(), item))
                    .collect();
                Some(Self {
                    entries,
                    length: Some(Value::Number(items.len() as f64)),
                })
            }
            Value::Object(object) => {
                let entries = object
                    .entries
                    .iter()
                    .map(|(key, value)| (key.clone(), value))
                    .collect();
                let length = match kind_of(value) {
                    Kind::ListLike => list_length(object).map(|n| Value::Number(n as f64)),
                    _ => None,
                };
                Some(Self { entries, length })
            }
            _ => None,
        }
    }

    fn keys(&self) -> BTreeSet<&str> {
        let mut keys: BTreeSet<&str> = self.entries.keys().map(String::as_str).collect();
        if self.length.is_some() {
            keys.insert("length");
        }
        keys
    }

    fn get(&self, key: &str) -> Option<&Value> {
        match self.entries.get(key) {
            Some(value) => Some(*value),
            None if key == "length" => self.length.as_ref(),
            None => None,
        }
    }
}

fn structural_equal(a: &Value, b: &Value) -> bool {
    let Some(view_a) = StructuralView::of(a) else {
        return false;
    };
    let Some(view_b) = StructuralView::of(b) else {
        return false;
    };
    let keys = view_a.keys();
    if keys != view_b.keys() {
        return false;
    }
    let result = keys.into_iter()
        .all(|key| match (view_a.get(key), view_b.get(key)) {
            (Some(value_a), Some(value_b)) => deep_equal(value_a, value_b),
            _ => false,
        });
    result
}
