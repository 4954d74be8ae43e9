//! The [`Value`] variant and its construction helpers.

use std::rc::Rc;

use indexmap::IndexMap;

use crate::kind::{kind_of, Kind};

/// A dynamically-typed runtime value.
///
/// `Value` is the closed set of shapes the comparator and formatter operate
/// on. It intentionally does NOT implement `PartialEq`: value equality is
/// kind-directed (NaN, signed zeros, function identity) and owned by the
/// comparator crate.
#[derive(Debug, Clone)]
pub enum Value {
    Null,
    /// The absent/uninitialized sentinel. Legal inside containers; rejected
    /// as a top-level assertion operand.
    Undefined,
    Bool(bool),
    Number(f64),
    Str(String),
    /// Object wrapper around a number; never equal to the bare primitive.
    BoxedNumber(f64),
    /// Object wrapper around a string; never equal to the bare primitive.
    BoxedStr(String),
    /// Object wrapper around a boolean; never equal to the bare primitive.
    BoxedBool(bool),
    Date(DateValue),
    Regexp(RegexpValue),
    /// A callable reference. Clones share identity; see [`Value::function`].
    Function(Rc<FunctionValue>),
    Array(Vec<Value>),
    Object(ObjectValue),
}

/// A timestamp value: milliseconds since the Unix epoch, plus any extra
/// properties attached to the object. Equality is timestamp-only; the extra
/// properties never participate.
#[derive(Debug, Clone)]
pub struct DateValue {
    pub epoch_ms: i64,
    pub props: IndexMap<String, Value>,
}

impl DateValue {
    pub fn new(epoch_ms: i64) -> Self {
        Self {
            epoch_ms,
            props: IndexMap::new(),
        }
    }
}

/// A pattern value: source text and flags, plus any extra properties attached
/// to the object. Unlike [`DateValue`], the extra properties DO participate
/// in equality.
#[derive(Debug, Clone)]
pub struct RegexpValue {
    pub source: String,
    pub flags: String,
    pub props: IndexMap<String, Value>,
}

impl RegexpValue {
    pub fn new(source: impl Into<String>, flags: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            flags: flags.into(),
            props: IndexMap::new(),
        }
    }
}

/// A callable value. Carries no behavior, only an identity (the `Rc`
/// allocation) and an optional name used when rendering.
#[derive(Debug)]
pub struct FunctionValue {
    pub name: Option<String>,
}

/// An object value: insertion-ordered enumerable entries, plus an optional
/// non-enumerable `length` set by [`Value::args`].
///
/// The non-enumerable `length` participates in list-shape detection and in
/// structural comparison, but is never listed among the enumerable entries
/// and never rendered.
#[derive(Debug, Clone, Default)]
pub struct ObjectValue {
    pub entries: IndexMap<String, Value>,
    pub hidden_length: Option<usize>,
}

impl ObjectValue {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Value {
    /// The comparison kind of this value. See [`kind_of`].
    pub fn kind(&self) -> Kind {
        kind_of(self)
    }

    /// Builds a plain object from `(key, value)` entries, preserving
    /// insertion order. A duplicate key overwrites the earlier entry.
    pub fn object<K, I>(entries: I) -> Value
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        let mut object = ObjectValue::new();
        for (key, value) in entries {
            object.entries.insert(key.into(), value);
        }
        Value::Object(object)
    }

    /// Builds an argument-pack object: enumerable integer-indexed entries
    /// `0..n-1` holding `values` in order, and a non-enumerable `length`
    /// equal to `n`.
    pub fn args<I>(values: I) -> Value
    where
        I: IntoIterator<Item = Value>,
    {
        let mut object = ObjectValue::new();
        for (index, value) in values.into_iter().enumerate() {
            object.entries.insert(index.to_string(), value);
        }
        object.hidden_length = Some(object.entries.len());
        Value::Object(object)
    }

    /// Builds a timestamp value from milliseconds since the Unix epoch.
    pub fn date(epoch_ms: i64) -> Value {
        Value::Date(DateValue::new(epoch_ms))
    }

    /// Builds a pattern value from source text and flags.
    pub fn regexp(source: impl Into<String>, flags: impl Into<String>) -> Value {
        Value::Regexp(RegexpValue::new(source, flags))
    }

    /// Builds an anonymous callable with a fresh identity. Two calls produce
    /// values that are never equal to each other; cloning the returned value
    /// shares the identity.
    pub fn function() -> Value {
        Value::Function(Rc::new(FunctionValue { name: None }))
    }

    /// Builds a named callable with a fresh identity.
    pub fn named_function(name: impl Into<String>) -> Value {
        Value::Function(Rc::new(FunctionValue {
            name: Some(name.into()),
        }))
    }

    pub fn boxed_number(value: f64) -> Value {
        Value::BoxedNumber(value)
    }

    pub fn boxed_string(value: impl Into<String>) -> Value {
        Value::BoxedStr(value.into())
    }

    pub fn boxed_bool(value: bool) -> Value {
        Value::BoxedBool(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(values: Vec<Value>) -> Self {
        Value::Array(values)
    }
}

/// Maps a JSON tree onto the `Null`/`Bool`/`Number`/`Str`/`Array`/`Object`
/// subset of [`Value`]. Object entry order is preserved as the JSON map
/// yields it.
impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::object(map.into_iter().map(|(k, v)| (k, Value::from(v))))
            }
        }
    }
}
